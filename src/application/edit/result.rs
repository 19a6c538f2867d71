//! Edit result types

use std::fmt;

use crate::domain::ports::RepositoryError;

/// The exclusion file could not be written; the edit only lives in memory
#[derive(Debug)]
pub struct SaveWarning {
    pub error: RepositoryError,
}

impl fmt::Display for SaveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; changes were not persisted", self.error)
    }
}

impl From<RepositoryError> for SaveWarning {
    fn from(error: RepositoryError) -> Self {
        Self { error }
    }
}

/// A path that was included but is still excluded through an ancestor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StillCovered {
    pub path: String,
    /// The excluded ancestor
    pub cover: String,
}

/// Result of an exclude or include operation
#[derive(Debug, Default)]
pub struct EditResult {
    /// Paths that changed the exclusion set
    pub changed: Vec<String>,
    /// Paths that were already in the requested state
    pub unchanged: Vec<String>,
    /// Paths with no segments
    pub malformed: Vec<String>,
    /// Included paths an ancestor exclusion still covers
    pub still_covered: Vec<StillCovered>,
    /// Exclusions after the edit
    pub exclusions: Vec<String>,
    /// Whether the exclusion file was written
    pub saved: bool,
    pub save_warning: Option<SaveWarning>,
}

impl EditResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_changes(&self) -> bool {
        !self.changed.is_empty()
    }
}
