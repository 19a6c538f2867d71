//! Tree view model
//!
//! Backs a checkbox tree of a directory: rows are materialized one directory
//! at a time, every row's checkbox is derived from the exclusion set, and
//! directories whose state is `Mixed` are expanded automatically.
//!
//! A checked box means "included". Unchecking inserts the row's path into the
//! exclusion set; checking an excluded or mixed row removes the path and
//! every exclusion recorded below it.

use crate::domain::entities::ExclusionSet;
use crate::domain::ports::{FsResult, TreeSource};
use crate::domain::services::derive_state;
use crate::domain::value_objects::{EntryKind, TreeEntry, TriState};
use crate::infrastructure::fs::MemoryTree;

/// Exclusion state of a lazily materialized tree.
pub struct TreeModel<S> {
    source: S,
    exclusions: ExclusionSet,
    rows: MemoryTree,
    dirty: bool,
}

impl<S: TreeSource> TreeModel<S> {
    pub fn new(source: S, exclusions: ExclusionSet) -> Self {
        let rows = MemoryTree::with_syntax(exclusions.syntax());
        Self {
            source,
            exclusions,
            rows,
            dirty: false,
        }
    }

    pub fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }

    pub fn into_exclusions(self) -> ExclusionSet {
        self.exclusions
    }

    /// True once any edit changed the exclusion set.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Visible children of `dir`, sorted by name.
    pub fn children(&self, dir: &str) -> &[TreeEntry] {
        self.rows.children(dir).unwrap_or(&[])
    }

    /// Record `children` as the rows of `dir`.
    ///
    /// Returns the paths of the new rows whose state is `Mixed`, which the
    /// view should expand.
    pub fn materialize(&mut self, dir: &str, mut children: Vec<TreeEntry>) -> Vec<String> {
        let syntax = self.exclusions.syntax();
        let dir = syntax.normalize(dir);
        children.sort_by(|a, b| a.name.cmp(&b.name));

        let dirs: Vec<String> = children
            .iter()
            .filter(|child| child.is_dir())
            .map(|child| syntax.join(&dir, &child.name))
            .collect();
        self.rows.set_children(&dir, children);

        dirs.into_iter()
            .filter(|path| self.state(path, EntryKind::Directory).is_mixed())
            .collect()
    }

    /// List `dir` from the source and materialize it.
    ///
    /// Child directories with exclusions recorded below them are read ahead,
    /// since only those can be `Mixed`.
    pub fn expand(&mut self, dir: &str) -> FsResult<Vec<String>> {
        let dir = self.exclusions.syntax().normalize(dir);
        let children = self.source.list_dir(&dir)?;
        for child in &children {
            self.read_ahead(&dir, child);
        }
        Ok(self.materialize(&dir, children))
    }

    /// Expand `dir` and, recursively, every `Mixed` row that shows up.
    ///
    /// Directories that fail to list stay collapsed. Only a failure on an
    /// uncovered `dir` itself is an error.
    pub fn expand_mixed(&mut self, dir: &str) -> FsResult<()> {
        let mut pending = match self.expand(dir) {
            Ok(mixed) => mixed,
            Err(err) if self.exclusions.covers(dir) => {
                tracing::debug!(dir = %dir, "excluded directory stays collapsed: {err}");
                return Ok(());
            }
            Err(err) => return Err(err),
        };
        while let Some(next) = pending.pop() {
            match self.expand(&next) {
                Ok(mixed) => pending.extend(mixed),
                Err(err) => tracing::warn!(dir = %next, "cannot expand: {err}"),
            }
        }
        Ok(())
    }

    fn read_ahead(&mut self, parent: &str, child: &TreeEntry) {
        let path = self.exclusions.syntax().join(parent, &child.name);
        if !child.is_dir()
            || self.rows.is_listed(&path)
            || self.exclusions.covers(&path)
            || !self.exclusions.has_exclusions_under(&path)
        {
            return;
        }

        match self.source.list_dir(&path) {
            Ok(children) => {
                for grandchild in &children {
                    self.read_ahead(&path, grandchild);
                }
                self.rows.set_children(&path, children);
            }
            Err(err) => tracing::debug!(dir = %path, "read-ahead failed: {err}"),
        }
    }

    /// Checkbox state of the row at `path`.
    pub fn state(&self, path: &str, kind: EntryKind) -> TriState {
        derive_state(&self.exclusions, &self.rows, path, kind)
    }

    /// Kind of a materialized row; unknown rows are treated as files.
    pub fn kind_of(&self, path: &str) -> EntryKind {
        let syntax = self.exclusions.syntax();
        let Some(name) = syntax.file_name(path) else {
            return EntryKind::Directory;
        };
        let key = syntax.key(name);
        self.children(&syntax.parent(path))
            .iter()
            .find(|entry| syntax.key(&entry.name) == key)
            .map(|entry| entry.kind)
            .unwrap_or(EntryKind::File)
    }

    /// Exclude or include the row at `path`. Returns whether the exclusion
    /// set changed.
    pub fn set_excluded(&mut self, path: &str, excluded: bool) -> bool {
        let changed = if excluded {
            self.exclusions.insert(path)
        } else {
            match self.state(path, self.kind_of(path)) {
                TriState::Excluded | TriState::Mixed => self.exclusions.remove(path),
                TriState::Included => false,
            }
        };
        self.dirty |= changed;
        changed
    }

    /// Flip the checkbox of the row at `path`.
    pub fn toggle(&mut self, path: &str) -> bool {
        let excluded = self.state(path, self.kind_of(path)) == TriState::Included;
        self.set_excluded(path, excluded)
    }

    /// The excluded ancestor that still covers `path`, if any.
    pub fn still_covered_by(&self, path: &str) -> Option<String> {
        self.exclusions.cover(path)
    }
}
