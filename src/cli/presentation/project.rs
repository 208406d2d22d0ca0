//! Project command presentation: list tables, preview, and prompt labels.

use crate::error::ApiError;
use crate::types::Project;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

fn format_status(project: &Project, color: bool) -> String {
    match (project.closed, color) {
        (true, true) => project.status().red().to_string(),
        (false, true) => project.status().green().to_string(),
        (_, false) => project.status().to_string(),
    }
}

fn to_json(value: &impl serde::Serialize) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::RuntimeError(format!("Failed to serialize output: {}", e)))
}

pub fn format_project_list_text(projects: &[Project], color: bool) -> String {
    if projects.is_empty() {
        return "No projects found".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Number", "Title", "Status"]);
    for project in projects {
        table.add_row(vec![
            project.number.to_string(),
            project.title.clone(),
            format_status(project, color),
        ]);
    }
    table.to_string()
}

pub fn format_project_list_json(projects: &[Project]) -> Result<String, ApiError> {
    to_json(&serde_json::json!({
        "projects": projects,
        "total": projects.len(),
    }))
}

pub fn format_project_preview_text(project: &Project, color: bool) -> String {
    let closed_at = project
        .closed_at
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| "-".to_string());

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec![
        "Number",
        "Title",
        "Status",
        "Closed At",
        "Public",
        "Description",
        "Resource Path",
        "URL",
    ]);
    table.add_row(vec![
        project.number.to_string(),
        project.title.clone(),
        format_status(project, color),
        closed_at,
        project.public.to_string(),
        project.short_description.clone().unwrap_or_default(),
        project.resource_path.clone(),
        project.url.clone(),
    ]);
    table.to_string()
}

pub fn format_project_preview_json(project: &Project) -> Result<String, ApiError> {
    to_json(project)
}

/// Prompt item for interactive selection, e.g. `Roadmap (Open)`.
pub fn selection_label(project: &Project, color: bool) -> String {
    format!("{} ({})", project.title, format_status(project, color))
}
