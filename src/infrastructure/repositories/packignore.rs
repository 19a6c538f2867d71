//! `.packignore` Repository
//!
//! Implements the ExclusionRepository port using the line format:
//! one excluded path per line, every line newline-terminated. On read, empty
//! lines are ignored and trailing `\r`s are dropped.

use std::path::Path;

use crate::domain::entities::ExclusionSet;
use crate::domain::ports::exclusion_repository::{
    ExclusionRepository, RepositoryError, RepositoryResult,
};
use crate::domain::ports::file_system::FileSystem;
use crate::domain::value_objects::PathSyntax;
use crate::infrastructure::fs::LocalFs;

/// Default name of the exclusion file inside the enumeration root.
pub const DEFAULT_IGNORE_FILE: &str = ".packignore";

/// Line-based exclusion file repository
pub struct PackIgnoreRepository<FS = LocalFs> {
    fs: FS,
}

impl PackIgnoreRepository<LocalFs> {
    /// Create a new repository with the default file system
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl Default for PackIgnoreRepository<LocalFs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<FS: FileSystem> PackIgnoreRepository<FS> {
    /// Create with a custom file system (for testing)
    pub fn with_fs(fs: FS) -> Self {
        Self { fs }
    }
}

/// Paths listed in `content`, in file order.
pub fn parse_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
}

/// Serialize `set` in the `.packignore` format.
pub fn render(set: &ExclusionSet) -> String {
    let mut out = String::new();
    for path in set.to_flat_list() {
        out.push_str(&path);
        out.push('\n');
    }
    out
}

impl<FS: FileSystem> ExclusionRepository for PackIgnoreRepository<FS> {
    fn load(&self, path: &Path, syntax: PathSyntax) -> RepositoryResult<ExclusionSet> {
        if !self.fs.exists(path) {
            tracing::debug!(path = %path.display(), "no exclusion file");
            return Ok(ExclusionSet::with_syntax(syntax));
        }

        let content = match self.fs.read(path) {
            Ok(content) => content,
            Err(err) if err.is_not_found() => return Ok(ExclusionSet::with_syntax(syntax)),
            Err(source) => {
                return Err(RepositoryError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let set = ExclusionSet::from_paths(syntax, parse_lines(&content));
        tracing::debug!(path = %path.display(), exclusions = set.len(), "loaded exclusions");
        Ok(set)
    }

    fn save(&self, set: &ExclusionSet, path: &Path) -> RepositoryResult<()> {
        self.fs
            .write(path, &render(set))
            .map_err(|source| RepositoryError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), exclusions = set.len(), "saved exclusions");
        Ok(())
    }
}
