//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ConfigWarning;
use crate::error::{PackError, PackResult};

use super::types::Config;

/// Project-level config file, looked up in the enumeration root
pub const PROJECT_CONFIG_FILE: &str = ".packignore.toml";

/// User-level config file inside `user_config_dir()`
pub const USER_CONFIG_FILE: &str = "config.toml";

pub const ENV_IGNORE_FILE: &str = "PACKIGNORE_IGNORE_FILE";
pub const ENV_SEPARATOR: &str = "PACKIGNORE_SEPARATOR";
pub const ENV_CASE_SENSITIVE: &str = "PACKIGNORE_CASE_SENSITIVE";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PackResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PackError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key: path_str,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Config files consulted for `project_root`, highest priority first.
pub fn candidate_paths(project_root: Option<&Path>, user_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(root) = project_root {
        candidates.push(root.join(PROJECT_CONFIG_FILE));
    }
    if let Some(dir) = user_dir {
        candidates.push(dir.join(USER_CONFIG_FILE));
    }
    candidates
}

/// Load the first existing config among the candidates.
///
/// An unparsable file is logged and skipped; defaults are used when nothing
/// loads.
pub fn load_layered(
    project_root: Option<&Path>,
    user_dir: Option<&Path>,
) -> (Config, Vec<ConfigWarning>) {
    for candidate in candidate_paths(project_root, user_dir) {
        if !candidate.exists() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok(loaded) => {
                tracing::debug!(path = %candidate.display(), "loaded config");
                return loaded;
            }
            Err(err) => tracing::warn!("ignoring config: {err}"),
        }
    }
    (Config::default(), Vec::new())
}

/// Apply environment variable overrides (PACKIGNORE_* prefix).
///
/// `lookup` maps a variable name to its value, normally `std::env::var`.
pub fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(file) = lookup(ENV_IGNORE_FILE).filter(|f| !f.trim().is_empty()) {
        config.exclusions.file = file;
    }

    if let Some(value) = lookup(ENV_SEPARATOR) {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(separator), None) => config.exclusions.separator = separator,
            _ => tracing::warn!(
                "{ENV_SEPARATOR} must be a single character, got '{value}'; ignoring"
            ),
        }
    }

    if let Some(value) = lookup(ENV_CASE_SENSITIVE) {
        config.exclusions.case_sensitive =
            !matches!(value.to_lowercase().as_str(), "false" | "0" | "no");
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["exclusions", "file", "separator", "case_sensitive"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 3 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
