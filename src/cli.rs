//! CLI domain: parse, route, output, presentation, and the interactive
//! collaborators (prompt, browser). No resolution logic lives here.

mod browser;
mod output;
mod parse;
mod presentation;
mod prompt;
mod route;

pub use browser::{Browser, SystemBrowser};
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_project_list_json, format_project_list_text, format_project_preview_json,
    format_project_preview_text, selection_label,
};
pub use prompt::{DialoguerPicker, ProjectPicker};
pub use route::RunContext;
