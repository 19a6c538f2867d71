//! Exclude / include command handler

use std::path::Path;

use anyhow::Result;

use packignore::application::EditAction;
use packignore::presentation::factory::create_edit_use_case;
use packignore::presentation::output::{render_edit_json, render_edit_text};
use packignore::presentation::OutputFormat;

use super::workspace::Workspace;

/// Apply `action` to `paths`.
///
/// A failed save is logged by the use case and does not change the exit code.
pub fn cmd_edit(
    root: &Path,
    ignore_file: Option<&Path>,
    paths: &[String],
    action: EditAction,
    format: OutputFormat,
) -> Result<()> {
    let workspace = Workspace::resolve(root, ignore_file)?;
    let result =
        create_edit_use_case().execute(&workspace.ignore_file, workspace.syntax(), paths, action);

    match format {
        OutputFormat::Json => println!("{}", render_edit_json(&result)?),
        OutputFormat::Text => {
            print!("{}", render_edit_text(&result, action));
            for path in &result.malformed {
                eprintln!("Warning: ignoring empty path '{path}'");
            }
            for covered in &result.still_covered {
                eprintln!(
                    "Warning: '{}' is still excluded by '{}'",
                    covered.path, covered.cover
                );
            }
        }
    }
    Ok(())
}
