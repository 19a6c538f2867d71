//! Custom assertion macros for CLI and scenario tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

use std::path::Path;

/// List all files below `dir` relative to it (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    fn walk(base: &Path, dir: &Path, out: &mut Vec<String>) {
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    walk(base, &path, out);
                } else if let Ok(rel) = path.strip_prefix(base) {
                    out.push(rel.display().to_string());
                }
            }
        }
    }
    let mut files = Vec::new();
    walk(dir, dir, &mut files);
    files.sort();
    files
}

/// Assert that a command exited successfully.
///
/// # Example
/// ```ignore
/// assert_success!(env.run(&["list"]));
/// ```
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {{
        let result = $result;
        assert!(
            result.success,
            "Command failed with exit code {}.\nstdout:\n{}\nstderr:\n{}",
            result.exit_code, result.stdout, result.stderr
        );
        result
    }};
}

/// Assert that stdout or stderr contains the expected text.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "still excluded");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $expected:expr) => {
        let output = $result.combined_output();
        assert!(
            output.contains($expected),
            "Expected output to contain '{}', got:\n{}",
            $expected,
            output
        );
    };
}
