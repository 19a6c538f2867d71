//! List command handler
//!
//! Prints the archive manifest of the root.

use std::path::Path;

use anyhow::{Context, Result};

use packignore::application::ExportOptions;
use packignore::presentation::factory::{create_export_use_case, create_tree_source};
use packignore::presentation::output::{render_manifest_json, render_manifest_text};
use packignore::presentation::OutputFormat;

use super::workspace::Workspace;

pub fn cmd_list(root: &Path, ignore_file: Option<&Path>, format: OutputFormat) -> Result<()> {
    let workspace = Workspace::resolve(root, ignore_file)?;
    let options = ExportOptions::new(&workspace.ignore_file).with_syntax(workspace.syntax());

    let source = create_tree_source(&workspace.root, workspace.syntax());
    let result = create_export_use_case()
        .execute(source, &options)
        .with_context(|| format!("cannot list {}", workspace.root.display()))?;

    match format {
        OutputFormat::Json => println!("{}", render_manifest_json(&result, &workspace.root)?),
        OutputFormat::Text => print!("{}", render_manifest_text(&result)),
    }
    Ok(())
}
