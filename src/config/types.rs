//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{PathSyntax, DEFAULT_SEPARATOR};
use crate::infrastructure::repositories::DEFAULT_IGNORE_FILE;

/// How exclusions are stored and compared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionsConfig {
    /// Exclusion file name, relative to the enumeration root
    #[serde(default = "default_file")]
    pub file: String,

    #[serde(default = "default_separator")]
    pub separator: char,

    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,
}

impl Default for ExclusionsConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
            separator: default_separator(),
            case_sensitive: default_case_sensitive(),
        }
    }
}

fn default_file() -> String {
    DEFAULT_IGNORE_FILE.to_string()
}

fn default_separator() -> char {
    DEFAULT_SEPARATOR
}

fn default_case_sensitive() -> bool {
    true
}

impl ExclusionsConfig {
    pub fn syntax(&self) -> PathSyntax {
        PathSyntax::new(self.separator, self.case_sensitive)
    }
}

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub exclusions: ExclusionsConfig,
}

impl Config {
    /// Path syntax used for every exclusion path
    pub fn syntax(&self) -> PathSyntax {
        self.exclusions.syntax()
    }

    /// Location of the exclusion file for `root`
    pub fn ignore_file(&self, root: &Path) -> PathBuf {
        root.join(&self.exclusions.file)
    }
}
