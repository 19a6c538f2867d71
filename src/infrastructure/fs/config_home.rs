//! User configuration directory resolution with test isolation support.
//!
//! `dirs::config_dir()` consults platform APIs that ignore environment
//! variables on some systems, so tests cannot redirect it. This module checks
//! `PACKIGNORE_CONFIG_HOME` first and only then falls back to the platform
//! directory.

use std::path::PathBuf;

/// Environment variable overriding the user configuration directory.
pub const CONFIG_HOME_VAR: &str = "PACKIGNORE_CONFIG_HOME";

/// Directory holding the user-level `config.toml`.
///
/// - `$PACKIGNORE_CONFIG_HOME` when set
/// - `<platform config dir>/packignore` otherwise
/// - `None` if neither can be resolved
///
/// ```
/// use packignore::infrastructure::fs::user_config_dir;
///
/// if let Some(dir) = user_config_dir() {
///     let config = dir.join("config.toml");
///     assert!(config.ends_with("config.toml"));
/// }
/// ```
pub fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os(CONFIG_HOME_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|dir| dir.join("packignore")))
}
