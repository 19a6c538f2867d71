//! Domain Entities
//!
//! Core domain types with identity and state.

mod exclusion_set;

pub use exclusion_set::ExclusionSet;
