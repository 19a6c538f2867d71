//! ExclusionRepository port - abstraction for exclusion set persistence
//!
//! The domain only needs "give me the saved exclusions" and "store these";
//! the line format lives in the infrastructure layer.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::ExclusionSet;
use crate::domain::ports::file_system::FsError;
use crate::domain::value_objects::PathSyntax;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Persistence errors
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The exclusion file exists but could not be read
    #[error("failed to read exclusions from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// The exclusion file could not be written
    #[error("failed to save exclusions to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: FsError,
    },
}

/// Abstract repository for exclusion sets
pub trait ExclusionRepository {
    /// Load the set stored at `path`. A missing file is an empty set.
    fn load(&self, path: &Path, syntax: PathSyntax) -> RepositoryResult<ExclusionSet>;

    /// Store `set` at `path`, replacing previous content.
    fn save(&self, set: &ExclusionSet, path: &Path) -> RepositoryResult<()>;

    /// Load the set, treating any read failure as "no exclusions".
    fn load_or_empty(&self, path: &Path, syntax: PathSyntax) -> ExclusionSet {
        self.load(path, syntax).unwrap_or_else(|err| {
            tracing::warn!("{err}; continuing without exclusions");
            ExclusionSet::with_syntax(syntax)
        })
    }
}
