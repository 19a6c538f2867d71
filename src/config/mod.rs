//! Configuration module for packignore
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PACKIGNORE_*)
//! 3. Project config (`<root>/.packignore.toml`)
//! 4. User config (`<config dir>/packignore/config.toml`)
//! 5. Built-in defaults (lowest priority)
//!
//! Only the first config file found is used; files are not merged.

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{
    apply_overrides, candidate_paths, load_layered, ENV_CASE_SENSITIVE, ENV_IGNORE_FILE,
    ENV_SEPARATOR, PROJECT_CONFIG_FILE, USER_CONFIG_FILE,
};
pub use types::{Config, ExclusionsConfig};
