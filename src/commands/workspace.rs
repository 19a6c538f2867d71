use std::path::{Path, PathBuf};

use anyhow::Result;

use packignore::config::{self, Config};
use packignore::domain::value_objects::PathSyntax;
use packignore::infrastructure::fs::user_config_dir;
use packignore::PackError;

/// Resolved root, configuration and exclusion file of an invocation.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
    pub config: Config,
    pub ignore_file: PathBuf,
}

impl Workspace {
    /// Resolve the workspace for `root` from the process environment.
    pub fn resolve(root: &Path, ignore_file: Option<&Path>) -> Result<Self> {
        let user_dir = user_config_dir();
        Self::resolve_with(root, ignore_file, user_dir.as_deref(), |key| {
            std::env::var(key).ok()
        })
    }

    /// Resolve against an explicit user config dir and variable lookup.
    ///
    /// Config warnings are printed to stderr; `ignore_file` wins over every
    /// configured location.
    pub fn resolve_with(
        root: &Path,
        ignore_file: Option<&Path>,
        user_dir: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        if !root.is_dir() {
            return Err(PackError::DirectoryNotFound {
                path: root.to_path_buf(),
            }
            .into());
        }

        let (config, warnings) = config::load_layered(Some(root), user_dir);
        for warning in &warnings {
            eprintln!("Warning: {warning}");
        }
        let config = config::apply_overrides(config, env);

        let ignore_file = match ignore_file {
            Some(path) => path.to_path_buf(),
            None => config.ignore_file(root),
        };
        tracing::debug!(
            root = %root.display(),
            ignore_file = %ignore_file.display(),
            syntax = %config.syntax(),
            "resolved workspace"
        );

        Ok(Self {
            root: root.to_path_buf(),
            config,
            ignore_file,
        })
    }

    pub fn syntax(&self) -> PathSyntax {
        self.config.syntax()
    }
}
