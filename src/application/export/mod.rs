//! Export Use Case
//!
//! Produces the archive manifest of a directory tree.
//!
//! This module handles:
//! - Loading the saved exclusions (a missing or unreadable file means none)
//! - Walking the tree with pruning at excluded directories
//! - Reporting the files to archive and the directories that could not be read

mod options;
mod result;
mod use_case;

pub use options::ExportOptions;
pub use result::ExportResult;
pub use use_case::ExportUseCase;
