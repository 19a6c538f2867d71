//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Renders manifests, status trees and edit results
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//! use packignore::application::ExportOptions;
//! use packignore::presentation::factory;
//!
//! let use_case = factory::create_export_use_case();
//! let tree = factory::create_tree_source(Path::new("."), Default::default());
//! let result = use_case.execute(tree, &ExportOptions::new(".packignore"))?;
//! # Ok::<(), packignore::PackError>(())
//! ```

pub mod factory;
pub mod output;

pub use factory::{create_edit_use_case, create_export_use_case, create_tree_model};
pub use output::OutputFormat;
