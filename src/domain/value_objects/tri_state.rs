//! Tri-state value object - exclusion status of a tree row
//!
//! - `Included`: nothing at or below the entry is excluded
//! - `Excluded`: the entry is covered by the exclusion set
//! - `Mixed`: the entry is not covered but some descendants are

use serde::{Deserialize, Serialize};

/// Derived exclusion status of a file system entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriState {
    Included,
    Excluded,
    Mixed,
}

impl TriState {
    /// Checkbox marker used by the text tree view.
    pub fn marker(&self) -> &'static str {
        match self {
            TriState::Included => "[x]",
            TriState::Excluded => "[ ]",
            TriState::Mixed => "[-]",
        }
    }

    pub fn is_excluded(&self) -> bool {
        matches!(self, TriState::Excluded)
    }

    pub fn is_mixed(&self) -> bool {
        matches!(self, TriState::Mixed)
    }
}

impl std::fmt::Display for TriState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TriState::Included => write!(f, "included"),
            TriState::Excluded => write!(f, "excluded"),
            TriState::Mixed => write!(f, "mixed"),
        }
    }
}
