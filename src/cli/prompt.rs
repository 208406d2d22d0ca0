//! Interactive project selection.

use crate::error::ApiError;
use crate::types::Project;

/// Picks one project out of a listing.
pub trait ProjectPicker {
    /// Return the index into `items` of the chosen entry.
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize, ApiError>;
}

/// Terminal selection via dialoguer.
pub struct DialoguerPicker;

impl ProjectPicker for DialoguerPicker {
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize, ApiError> {
        use dialoguer::Select;

        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .map_err(|e| ApiError::PromptFailed(format!("Failed to get user input: {}", e)))
    }
}

/// Prompt for a project and return its number.
pub(crate) fn pick_project(
    picker: &dyn ProjectPicker,
    projects: &[Project],
    labels: Vec<String>,
) -> Result<u32, ApiError> {
    let index = picker.select("Select project", &labels)?;
    projects
        .get(index)
        .map(|p| p.number)
        .ok_or_else(|| ApiError::PromptFailed(format!("Selection {} is out of range", index)))
}
