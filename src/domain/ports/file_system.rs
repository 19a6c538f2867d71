//! File system ports - abstraction over directory listing and text file I/O
//!
//! `TreeSource` is what the enumerator and the tri-state deriver walk.
//! `FileSystem` is what the `.packignore` repository reads and writes through.
//! Both allow the domain layer to run against the local disk or an in-memory
//! tree without knowing which.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::value_objects::TreeEntry;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, Error)]
pub enum FsError {
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Classify an `io::Error` raised while accessing `path`.
    pub fn from_io(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(path),
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path),
            io::ErrorKind::NotADirectory => FsError::NotADirectory(path),
            _ => FsError::Io { path, source: err },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_))
    }
}

/// A hierarchy of directories that can be listed one level at a time.
///
/// Directories are addressed by their root-relative path, segments joined
/// with the exclusion set's separator; the empty string is the root itself.
pub trait TreeSource {
    /// List the direct children of `dir`, in no particular order.
    fn list_dir(&self, dir: &str) -> FsResult<Vec<TreeEntry>>;
}

impl<T: TreeSource + ?Sized> TreeSource for &T {
    fn list_dir(&self, dir: &str) -> FsResult<Vec<TreeEntry>> {
        (**self).list_dir(dir)
    }
}

/// Abstract text file interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
/// - `MockFileSystem` - in-memory for tests
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Replace file content atomically, creating parent directories
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Check if file exists
    fn exists(&self, path: &Path) -> bool;
}
