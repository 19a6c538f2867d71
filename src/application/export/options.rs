//! Export options

use std::path::PathBuf;

use crate::domain::value_objects::PathSyntax;

/// Options for the export flow
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Location of the exclusion file
    pub ignore_file: PathBuf,
    /// Syntax of the paths in the exclusion file
    pub syntax: PathSyntax,
}

impl ExportOptions {
    pub fn new(ignore_file: impl Into<PathBuf>) -> Self {
        Self {
            ignore_file: ignore_file.into(),
            syntax: PathSyntax::default(),
        }
    }

    /// Set path syntax
    pub fn with_syntax(mut self, syntax: PathSyntax) -> Self {
        self.syntax = syntax;
        self
    }
}
