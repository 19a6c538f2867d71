//! Test environment builder for isolated packignore testing.
//!
//! Provides `TestEnv` - a temp directory to archive, a separate temp config
//! home, and helpers to run the packignore binary against them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a packignore CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Non-empty stdout lines
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().filter(|l| !l.is_empty()).collect()
    }
}

/// Isolated test environment.
///
/// The binary never sees the developer's real config: `PACKIGNORE_CONFIG_HOME`
/// points at a temp dir and the other `PACKIGNORE_*` variables are cleared.
pub struct TestEnv {
    /// Directory being archived (and the working directory of every run)
    pub root: TempDir,
    /// User config directory
    pub config_home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Empty root
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create root dir"),
            config_home: TempDir::new().expect("Failed to create config home"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_packignore")),
        }
    }

    /// Root populated with `files` (empty content)
    pub fn with_files(files: &[&str]) -> Self {
        let env = Self::new();
        for file in files {
            env.write_file(file, "");
        }
        env
    }

    /// Get path relative to the root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.root.path(), args, env_vars)
    }

    /// Run from `cwd` with extra env vars
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("PACKIGNORE_CONFIG_HOME", self.config_home.path())
            .env("NO_COLOR", "1")
            .env_remove("PACKIGNORE_IGNORE_FILE")
            .env_remove("PACKIGNORE_SEPARATOR")
            .env_remove("PACKIGNORE_CASE_SENSITIVE")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute packignore");
        output_to_result(output)
    }

    /// Write a file below the root, creating parent directories
    pub fn write_file(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn mkdir(&self, relative: &str) {
        std::fs::create_dir_all(self.path(relative)).expect("Failed to create directory");
    }

    /// Write `<root>/.packignore`
    pub fn write_ignore_file(&self, content: &str) {
        self.write_file(".packignore", content);
    }

    /// Content of `<root>/.packignore`, empty if missing
    pub fn read_ignore_file(&self) -> String {
        std::fs::read_to_string(self.path(".packignore")).unwrap_or_default()
    }

    /// Write the user-level config.toml
    pub fn write_user_config(&self, toml: &str) {
        std::fs::write(self.config_home.path().join("config.toml"), toml)
            .expect("Failed to write user config");
    }

    /// Write `<root>/.packignore.toml`
    pub fn write_project_config(&self, toml: &str) {
        self.write_file(".packignore.toml", toml);
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
