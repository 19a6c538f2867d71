//! Show command handler

use std::path::Path;

use anyhow::Result;

use packignore::presentation::factory::create_edit_use_case;
use packignore::presentation::output::{render_exclusions_json, render_exclusions_text};
use packignore::presentation::OutputFormat;

use super::workspace::Workspace;

pub fn cmd_show(root: &Path, ignore_file: Option<&Path>, format: OutputFormat) -> Result<()> {
    let workspace = Workspace::resolve(root, ignore_file)?;
    let exclusions = create_edit_use_case()
        .load(&workspace.ignore_file, workspace.syntax())
        .to_flat_list();

    match format {
        OutputFormat::Json => println!("{}", render_exclusions_json(&exclusions)?),
        OutputFormat::Text => print!("{}", render_exclusions_text(&exclusions)),
    }
    Ok(())
}
