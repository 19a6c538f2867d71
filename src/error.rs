//! Error types for packignore
//!
//! Uses `thiserror` for library errors. Conditions the caller is expected to
//! recover from (unreadable subdirectories, failed saves) are reported as
//! values, not through this type.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{FsError, RepositoryError};

/// Result type alias for packignore operations
pub type PackResult<T> = Result<T, PackError>;

/// Main error type for packignore operations
#[derive(Error, Debug)]
pub enum PackError {
    /// The enumeration root could not be listed; no manifest can be produced
    #[error("cannot read enumeration root: {0}")]
    RootUnreadable(#[source] FsError),

    /// The root given to a command is not a directory
    #[error("directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    /// Invalid configuration file
    #[error("invalid config in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// Exclusion file persistence failed
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
