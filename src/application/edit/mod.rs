//! Edit Use Case
//!
//! Adds or removes paths from the saved exclusions.
//!
//! A failed save never fails the edit: the result carries a `SaveWarning`
//! and the in-memory change is still reported.

mod result;
mod use_case;

pub use result::{EditResult, SaveWarning, StillCovered};
pub use use_case::{EditAction, EditUseCase};
