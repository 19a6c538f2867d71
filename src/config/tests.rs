//! Tests for the config module

use super::loader::{apply_overrides, load_layered, load_with_warnings, PROJECT_CONFIG_FILE};
use super::types::*;
use crate::domain::value_objects::PathSyntax;
use crate::error::PackError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.exclusions.file, ".packignore");
    assert_eq!(config.exclusions.separator, '/');
    assert!(config.exclusions.case_sensitive);
    assert_eq!(config.syntax(), PathSyntax::default());
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[exclusions]
file = ".exportignore"
separator = "\\"
case_sensitive = false
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.exclusions.file, ".exportignore");
    assert_eq!(config.exclusions.separator, '\\');
    assert!(!config.exclusions.case_sensitive);
    assert_eq!(config.syntax(), PathSyntax::new('\\', false));
}

#[test]
fn test_config_partial_section_uses_defaults() {
    let config: Config = toml::from_str("[exclusions]\ncase_sensitive = false\n").unwrap();
    assert_eq!(config.exclusions.file, ".packignore");
    assert_eq!(config.exclusions.separator, '/');
}

#[test]
fn test_ignore_file_is_relative_to_root() {
    let config = Config::default();
    assert_eq!(
        config.ignore_file(Path::new("/instances/modded")),
        Path::new("/instances/modded/.packignore")
    );
}

#[test]
fn test_unknown_keys_are_warnings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(PROJECT_CONFIG_FILE);
    fs::write(&path, "[exclusions]\nseperator = \"/\"\n").unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "exclusions.seperator");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("separator"));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(PROJECT_CONFIG_FILE);
    fs::write(&path, "[exclusions]\nseparator = \"//\"\n").unwrap();

    let result = load_with_warnings(&path);
    assert!(matches!(result, Err(PackError::InvalidConfig { .. })));
}

#[test]
fn test_project_config_wins_over_user_config() {
    let project = tempdir().unwrap();
    let user = tempdir().unwrap();
    fs::write(
        project.path().join(PROJECT_CONFIG_FILE),
        "[exclusions]\nfile = \"project.ignore\"\n",
    )
    .unwrap();
    fs::write(
        user.path().join("config.toml"),
        "[exclusions]\nfile = \"user.ignore\"\n",
    )
    .unwrap();

    let (config, _) = load_layered(Some(project.path()), Some(user.path()));
    assert_eq!(config.exclusions.file, "project.ignore");
}

#[test]
fn test_user_config_used_without_project_config() {
    let project = tempdir().unwrap();
    let user = tempdir().unwrap();
    fs::write(
        user.path().join("config.toml"),
        "[exclusions]\ncase_sensitive = false\n",
    )
    .unwrap();

    let (config, _) = load_layered(Some(project.path()), Some(user.path()));
    assert!(!config.exclusions.case_sensitive);
}

#[test]
fn test_broken_project_config_falls_through() {
    let project = tempdir().unwrap();
    let user = tempdir().unwrap();
    fs::write(project.path().join(PROJECT_CONFIG_FILE), "not = [valid").unwrap();
    fs::write(
        user.path().join("config.toml"),
        "[exclusions]\nfile = \"user.ignore\"\n",
    )
    .unwrap();

    let (config, _) = load_layered(Some(project.path()), Some(user.path()));
    assert_eq!(config.exclusions.file, "user.ignore");
}

#[test]
fn test_no_config_files_gives_defaults() {
    let project = tempdir().unwrap();
    let (config, warnings) = load_layered(Some(project.path()), None);
    assert_eq!(config, Config::default());
    assert!(warnings.is_empty());
}

#[test]
fn test_env_overrides() {
    let config = apply_overrides(
        Config::default(),
        env(&[
            ("PACKIGNORE_IGNORE_FILE", ".exportignore"),
            ("PACKIGNORE_SEPARATOR", "\\"),
            ("PACKIGNORE_CASE_SENSITIVE", "false"),
        ]),
    );

    assert_eq!(config.exclusions.file, ".exportignore");
    assert_eq!(config.exclusions.separator, '\\');
    assert!(!config.exclusions.case_sensitive);
}

#[test]
fn test_env_separator_must_be_single_char() {
    let config = apply_overrides(Config::default(), env(&[("PACKIGNORE_SEPARATOR", "::")]));
    assert_eq!(config.exclusions.separator, '/');
}

#[test]
fn test_env_empty_file_is_ignored() {
    let config = apply_overrides(Config::default(), env(&[("PACKIGNORE_IGNORE_FILE", " ")]));
    assert_eq!(config.exclusions.file, ".packignore");
}
