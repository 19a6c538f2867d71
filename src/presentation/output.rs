//! Output Rendering
//!
//! Text and JSON renderings of command results. Renderers return strings;
//! printing is left to the commands.

use std::path::Path;

use serde::Serialize;

use crate::application::{EditAction, EditResult, ExportResult, TreeModel};
use crate::domain::ports::TreeSource;
use crate::domain::value_objects::{EntryKind, TriState};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Debug, Serialize)]
struct ManifestReport<'a> {
    root: String,
    files: &'a [String],
    diagnostics: Vec<DiagnosticReport>,
}

#[derive(Debug, Serialize)]
struct DiagnosticReport {
    path: String,
    error: String,
}

/// One manifest entry per line
pub fn render_manifest_text(result: &ExportResult) -> String {
    let mut out = String::new();
    for file in &result.files {
        out.push_str(file);
        out.push('\n');
    }
    out
}

/// `{"root", "files", "diagnostics"}`
pub fn render_manifest_json(result: &ExportResult, root: &Path) -> serde_json::Result<String> {
    let report = ManifestReport {
        root: root.display().to_string(),
        files: &result.files,
        diagnostics: result
            .diagnostics
            .iter()
            .map(|d| DiagnosticReport {
                path: d.path.clone(),
                error: d.error.to_string(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&report)
}

/// A visible row of the status tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusRow {
    /// Root-relative path; empty for the root
    pub path: String,
    #[serde(skip)]
    pub name: String,
    pub kind: EntryKind,
    pub state: TriState,
    #[serde(skip)]
    pub depth: usize,
}

/// Rows shown for `start`: every child of an expanded directory, where the
/// start and every `Mixed` directory are expanded.
pub fn status_rows<S: TreeSource>(
    model: &TreeModel<S>,
    start: &str,
    kind: EntryKind,
) -> Vec<StatusRow> {
    let syntax = model.exclusions().syntax();
    let start = syntax.normalize(start);
    let name = syntax
        .file_name(&start)
        .map(str::to_string)
        .unwrap_or_else(|| ".".to_string());

    let mut rows = vec![StatusRow {
        path: start.clone(),
        name,
        kind,
        state: model.state(&start, kind),
        depth: 0,
    }];
    if kind.is_dir() {
        push_children(model, &start, 1, &mut rows);
    }
    rows
}

fn push_children<S: TreeSource>(
    model: &TreeModel<S>,
    dir: &str,
    depth: usize,
    rows: &mut Vec<StatusRow>,
) {
    let syntax = model.exclusions().syntax();
    for child in model.children(dir) {
        let path = syntax.join(dir, &child.name);
        let state = model.state(&path, child.kind);
        rows.push(StatusRow {
            path: path.clone(),
            name: child.name.clone(),
            kind: child.kind,
            state,
            depth,
        });
        if child.is_dir() && state.is_mixed() {
            push_children(model, &path, depth + 1, rows);
        }
    }
}

/// Indented checkbox tree; directories end with the separator.
pub fn render_status_text(rows: &[StatusRow], separator: char) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(&"  ".repeat(row.depth));
        out.push_str(row.state.marker());
        out.push(' ');
        out.push_str(&row.name);
        if row.kind.is_dir() && row.depth > 0 {
            out.push(separator);
        }
        out.push('\n');
    }
    out
}

pub fn render_status_json(rows: &[StatusRow]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}

/// Flat exclusion list, one path per line
pub fn render_exclusions_text(exclusions: &[String]) -> String {
    let mut out = String::new();
    for path in exclusions {
        out.push_str(path);
        out.push('\n');
    }
    out
}

pub fn render_exclusions_json(exclusions: &[String]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&serde_json::json!({ "exclusions": exclusions }))
}

pub fn render_edit_text(result: &EditResult, action: EditAction) -> String {
    let (done, already) = match action {
        EditAction::Exclude => ("excluded", "already excluded"),
        EditAction::Include => ("included", "not excluded"),
    };

    let mut out = String::new();
    for path in &result.changed {
        out.push_str(&format!("{done} {path}\n"));
    }
    for path in &result.unchanged {
        out.push_str(&format!("{already}: {path}\n"));
    }
    out
}

pub fn render_edit_json(result: &EditResult) -> serde_json::Result<String> {
    let still_covered: Vec<_> = result
        .still_covered
        .iter()
        .map(|s| serde_json::json!({ "path": s.path, "cover": s.cover }))
        .collect();

    serde_json::to_string_pretty(&serde_json::json!({
        "changed": result.changed,
        "unchanged": result.unchanged,
        "malformed": result.malformed,
        "still_covered": still_covered,
        "exclusions": result.exclusions,
        "saved": result.saved,
        "warning": result.save_warning.as_ref().map(ToString::to_string),
    }))
}
