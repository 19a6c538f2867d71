//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod entry;
mod path;
mod tri_state;

pub use config_warning::ConfigWarning;
pub use entry::{EntryKind, TreeEntry};
pub use path::{PathSyntax, DEFAULT_SEPARATOR};
pub use tri_state::TriState;
