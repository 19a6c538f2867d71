//! Status command handler
//!
//! Renders the checkbox tree of the root or of one path below it.

use std::path::Path;

use anyhow::{Context, Result};

use packignore::domain::value_objects::EntryKind;
use packignore::presentation::factory::{create_edit_use_case, create_tree_model};
use packignore::presentation::output::{render_status_json, render_status_text, status_rows};
use packignore::presentation::OutputFormat;

use super::workspace::Workspace;

pub fn cmd_status(
    root: &Path,
    ignore_file: Option<&Path>,
    path: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let workspace = Workspace::resolve(root, ignore_file)?;
    let syntax = workspace.syntax();
    let exclusions = create_edit_use_case().load(&workspace.ignore_file, syntax);
    let mut model = create_tree_model(&workspace.root, exclusions);

    let start = syntax.normalize(path.unwrap_or_default());
    let kind = if start.is_empty() {
        EntryKind::Directory
    } else {
        // Rows are addressed through their parent, so open the chain down to `start`.
        let mut dir = String::new();
        for segment in syntax.segments(&start) {
            model
                .expand(&dir)
                .with_context(|| format!("cannot read '{}'", display_path(&dir)))?;
            let found = model
                .children(&dir)
                .iter()
                .any(|entry| syntax.key(&entry.name) == syntax.key(segment));
            if !found {
                anyhow::bail!("no such path: {start}");
            }
            dir = syntax.join(&dir, segment);
        }
        model.kind_of(&start)
    };

    if kind.is_dir() {
        model
            .expand_mixed(&start)
            .with_context(|| format!("cannot read '{}'", display_path(&start)))?;
    }

    let rows = status_rows(&model, &start, kind);
    match format {
        OutputFormat::Json => println!("{}", render_status_json(&rows)?),
        OutputFormat::Text => print!("{}", render_status_text(&rows, syntax.separator())),
    }
    Ok(())
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "."
    } else {
        path
    }
}
