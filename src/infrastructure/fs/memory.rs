//! In-memory tree source
//!
//! Holds directory listings in a map instead of on disk. Used as the
//! presentation adapter's store of materialized rows and as a stand-in file
//! hierarchy in tests. A tree built with `recording()` logs every `list_dir`
//! call so callers can check which directories were actually opened.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use crate::domain::ports::file_system::{FsError, FsResult, TreeSource};
use crate::domain::value_objects::{PathSyntax, TreeEntry};

/// Directory listings keyed by normalized root-relative path.
#[derive(Debug, Clone)]
pub struct MemoryTree {
    syntax: PathSyntax,
    dirs: BTreeMap<String, Vec<TreeEntry>>,
    denied: BTreeSet<String>,
    reads: Option<RefCell<Vec<String>>>,
}

impl Default for MemoryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTree {
    /// Tree holding only an empty root directory.
    pub fn new() -> Self {
        Self::with_syntax(PathSyntax::default())
    }

    pub fn with_syntax(syntax: PathSyntax) -> Self {
        let mut dirs = BTreeMap::new();
        dirs.insert(String::new(), Vec::new());
        Self {
            syntax,
            dirs,
            denied: BTreeSet::new(),
            reads: None,
        }
    }

    /// Tree containing `files` and every directory leading to them.
    pub fn from_files<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::new();
        for file in files {
            tree.add_file(file.as_ref());
        }
        tree
    }

    /// Start logging `list_dir` calls.
    pub fn recording(mut self) -> Self {
        self.reads = Some(RefCell::new(Vec::new()));
        self
    }

    /// Add a file, creating missing parent directories.
    pub fn add_file(&mut self, path: &str) -> &mut Self {
        if let Some((parent, name)) = self.split(path) {
            self.add_dir(&parent);
            self.push_child(&parent, TreeEntry::file(name));
        }
        self
    }

    /// Add an (empty) directory, creating missing parents.
    pub fn add_dir(&mut self, path: &str) -> &mut Self {
        let mut parent = String::new();
        for segment in self.syntax.segments(path).map(str::to_string).collect::<Vec<_>>() {
            let dir = self.syntax.join(&parent, &segment);
            self.push_child(&parent, TreeEntry::dir(segment));
            self.dirs.entry(dir.clone()).or_default();
            parent = dir;
        }
        self
    }

    /// Replace the listing of `dir` wholesale.
    ///
    /// Child directories are not listed until they get their own call.
    pub fn set_children(&mut self, dir: &str, children: Vec<TreeEntry>) {
        let dir = self.syntax.normalize(dir);
        self.denied.remove(&dir);
        self.dirs.insert(dir, children);
    }

    /// Known children of `dir`, if it has been listed.
    pub fn children(&self, dir: &str) -> Option<&[TreeEntry]> {
        self.dirs
            .get(&self.syntax.normalize(dir))
            .map(Vec::as_slice)
    }

    pub fn is_listed(&self, dir: &str) -> bool {
        self.dirs.contains_key(&self.syntax.normalize(dir))
    }

    /// Make `dir` fail with a permission error when listed.
    pub fn deny(&mut self, dir: &str) -> &mut Self {
        self.denied.insert(self.syntax.normalize(dir));
        self
    }

    /// Directories listed so far, in call order. Empty unless recording.
    pub fn reads(&self) -> Vec<String> {
        self.reads
            .as_ref()
            .map(|reads| reads.borrow().clone())
            .unwrap_or_default()
    }

    pub fn was_read(&self, dir: &str) -> bool {
        let dir = self.syntax.normalize(dir);
        self.reads
            .as_ref()
            .is_some_and(|reads| reads.borrow().iter().any(|read| *read == dir))
    }

    fn split(&self, path: &str) -> Option<(String, String)> {
        let segments: Vec<&str> = self.syntax.segments(path).collect();
        let (name, parents) = segments.split_last()?;
        let separator = self.syntax.separator().to_string();
        Some((parents.join(&separator), name.to_string()))
    }

    fn push_child(&mut self, parent: &str, entry: TreeEntry) {
        let children = self.dirs.entry(parent.to_string()).or_default();
        if !children.iter().any(|child| child.name == entry.name) {
            children.push(entry);
        }
    }
}

impl TreeSource for MemoryTree {
    fn list_dir(&self, dir: &str) -> FsResult<Vec<TreeEntry>> {
        let dir = self.syntax.normalize(dir);
        if let Some(reads) = &self.reads {
            reads.borrow_mut().push(dir.clone());
        }
        if self.denied.contains(&dir) {
            return Err(FsError::PermissionDenied(PathBuf::from(dir)));
        }
        self.dirs
            .get(&dir)
            .cloned()
            .ok_or_else(|| FsError::NotFound(PathBuf::from(dir)))
    }
}
