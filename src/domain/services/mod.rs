//! Domain Services
//!
//! Stateless algorithms over the exclusion set.
//!
//! - `tri_state` - derive Included / Excluded / Mixed for a tree row
//! - `enumerator` - pruned walk producing the archive manifest

pub mod enumerator;
pub mod tri_state;

pub use enumerator::{enumerate, Diagnostic, Enumeration, Manifest};
pub use tri_state::{derive_state, TriStateDeriver};
