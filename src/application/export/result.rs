//! Export result types

use crate::domain::services::{Diagnostic, Manifest};

/// Result of an export run
#[derive(Debug, Default)]
pub struct ExportResult {
    /// Root-relative files to archive, in traversal order
    pub files: Vec<String>,
    /// Directories that could not be listed; their contents are missing
    pub diagnostics: Vec<Diagnostic>,
    /// Number of explicit exclusions that were in effect
    pub exclusion_count: usize,
}

impl ExportResult {
    pub fn from_manifest(manifest: Manifest, exclusion_count: usize) -> Self {
        Self {
            files: manifest.files,
            diagnostics: manifest.diagnostics,
            exclusion_count,
        }
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// True when every directory that had to be read was read
    pub fn is_complete(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
