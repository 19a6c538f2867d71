//! Exclusion-aware enumeration
//!
//! Walks a `TreeSource` depth-first and yields the root-relative path of every
//! file that is not covered by the exclusion set. A covered directory is
//! skipped before it is listed, so its contents are never read and a failure
//! to read it is never reported.
//!
//! Entries of each directory are visited in name order, which makes the output
//! stable for a given tree. The walk is lazy: dropping the `Enumeration`
//! abandons it, and it can only be restarted from the root.

use std::fmt;

use crate::domain::entities::ExclusionSet;
use crate::domain::ports::file_system::{FsError, TreeSource};
use crate::domain::value_objects::TreeEntry;
use crate::error::{PackError, PackResult};

/// A directory that could not be listed during enumeration.
///
/// Its subtree contributed no files; the walk carried on.
#[derive(Debug)]
pub struct Diagnostic {
    /// Root-relative path of the directory
    pub path: String,
    pub error: FsError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skipped '{}': {}", self.path, self.error)
    }
}

/// Files to archive plus the directories that could not be read.
#[derive(Debug, Default)]
pub struct Manifest {
    pub files: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Manifest {
    pub fn is_complete(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

struct Frame {
    dir: String,
    entries: std::vec::IntoIter<TreeEntry>,
}

impl Frame {
    fn new(dir: String, mut entries: Vec<TreeEntry>) -> Self {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            dir,
            entries: entries.into_iter(),
        }
    }
}

/// Start enumerating `source`.
///
/// The root is listed immediately; if that fails nothing is yielded and the
/// error is returned.
pub fn enumerate<S: TreeSource>(source: S, set: &ExclusionSet) -> PackResult<Enumeration<'_, S>> {
    let root = source.list_dir("").map_err(PackError::RootUnreadable)?;
    Ok(Enumeration {
        source,
        set,
        stack: vec![Frame::new(String::new(), root)],
        diagnostics: Vec::new(),
        pruned: 0,
    })
}

/// Lazy iterator over the included files of a tree.
pub struct Enumeration<'a, S> {
    source: S,
    set: &'a ExclusionSet,
    stack: Vec<Frame>,
    diagnostics: Vec<Diagnostic>,
    pruned: usize,
}

impl<S: TreeSource> Enumeration<'_, S> {
    /// Directories that failed to list so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of covered directories skipped so far.
    pub fn pruned(&self) -> usize {
        self.pruned
    }

    /// Run the walk to completion.
    pub fn finish(mut self) -> Manifest {
        let files: Vec<String> = self.by_ref().collect();
        tracing::debug!(
            files = files.len(),
            pruned = self.pruned,
            failed = self.diagnostics.len(),
            "enumeration finished"
        );
        Manifest {
            files,
            diagnostics: self.diagnostics,
        }
    }
}

impl<S: TreeSource> Iterator for Enumeration<'_, S> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let frame = self.stack.last_mut()?;
            let Some(entry) = frame.entries.next() else {
                self.stack.pop();
                continue;
            };
            let path = self.set.syntax().join(&frame.dir, &entry.name);

            if self.set.covers(&path) {
                if entry.is_dir() {
                    tracing::debug!(dir = %path, "pruned excluded directory");
                    self.pruned += 1;
                }
                continue;
            }
            if !entry.is_dir() {
                return Some(path);
            }

            match self.source.list_dir(&path) {
                Ok(children) => self.stack.push(Frame::new(path, children)),
                Err(error) => {
                    tracing::warn!(dir = %path, %error, "cannot read directory, skipping");
                    self.diagnostics.push(Diagnostic { path, error });
                }
            }
        }
    }
}
