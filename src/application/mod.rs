//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ExportUseCase` - Load exclusions and produce the archive manifest
//! - `EditUseCase` - Exclude or include paths and persist the result
//!
//! ## Models
//!
//! - `TreeModel` - Checkbox tree state for a view of the directory

pub mod edit;
pub mod export;
pub mod tree_model;

pub use edit::{EditAction, EditResult, EditUseCase, SaveWarning, StillCovered};
pub use export::{ExportOptions, ExportResult, ExportUseCase};
pub use tree_model::TreeModel;
