//! Configuration warning value object.

use std::fmt;
use std::path::PathBuf;

/// Unknown key found while loading a `.packignore.toml`.
///
/// Loading never fails because of an unknown key; the CLI prints these and
/// carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted key path as reported by the deserializer (`exclusions.sep`)
    pub key: String,
    pub file: PathBuf,
    /// 1-indexed line of the first occurrence, if it could be located
    pub line: Option<usize>,
    /// Closest known key
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(
                f,
                "unknown config key '{}' in {}:{}",
                self.key,
                self.file.display(),
                line
            )?,
            None => write!(
                f,
                "unknown config key '{}' in {}",
                self.key,
                self.file.display()
            )?,
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}
