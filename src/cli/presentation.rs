//! CLI presentation: text and json formatters per command family.

mod project;

pub use project::{
    format_project_list_json, format_project_list_text, format_project_preview_json,
    format_project_preview_text, selection_label,
};
