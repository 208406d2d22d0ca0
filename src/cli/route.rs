//! CLI route: single route table and run context. Dispatches to the projects
//! facade and presentation.

use crate::cli::browser::{Browser, SystemBrowser};
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_project_list_json, format_project_list_text, format_project_preview_json,
    format_project_preview_text, selection_label,
};
use crate::cli::prompt::{pick_project, DialoguerPicker, ProjectPicker};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::projects::ProjectsApi;
use crate::repo::RepoRef;
use crate::transport::HttpTransport;
use crate::types::ProjectState;
use std::future::Future;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Runtime context for CLI execution: resolved repository, projects facade,
/// and the interactive collaborators.
pub struct RunContext {
    api: ProjectsApi,
    repo: RepoRef,
    default_org: Option<String>,
    picker: Box<dyn ProjectPicker>,
    browser: Box<dyn Browser>,
    runtime: tokio::runtime::Runtime,
    interactive: bool,
    stdout_terminal: bool,
    color: bool,
}

impl RunContext {
    /// Build the production context: HTTP transport from config, repository
    /// from `--repo`/`GH_REPO`/git remote, terminal prompt and system browser.
    pub fn new(repo: Option<&str>, config: &AppConfig, workdir: &Path) -> Result<Self, ApiError> {
        let transport = HttpTransport::new(config.github.transport_config())?;
        let api = ProjectsApi::new(Arc::new(transport)).with_page_size(config.github.page_size);
        let repo = RepoRef::resolve(repo, workdir)?;
        debug!(repo = %repo, "Resolved base repository");

        let stdout_terminal = std::io::stdout().is_terminal();
        Ok(
            Self::from_parts(api, repo, Box::new(DialoguerPicker), Box::new(SystemBrowser))?
                .with_default_org(config.github.default_org.clone())
                .with_interactive(std::io::stdin().is_terminal() && stdout_terminal)
                .with_stdout_terminal(stdout_terminal)
                .with_color(stdout_terminal),
        )
    }

    /// Assemble a context from explicit collaborators. Non-interactive and
    /// uncolored until configured otherwise.
    pub fn from_parts(
        api: ProjectsApi,
        repo: RepoRef,
        picker: Box<dyn ProjectPicker>,
        browser: Box<dyn Browser>,
    ) -> Result<Self, ApiError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ApiError::RuntimeError(format!("Failed to create runtime: {}", e)))?;

        Ok(Self {
            api,
            repo,
            default_org: None,
            picker,
            browser,
            runtime,
            interactive: false,
            stdout_terminal: false,
            color: false,
        })
    }

    pub fn with_default_org(mut self, org: Option<String>) -> Self {
        self.default_org = org;
        self
    }

    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Whether stdout is a terminal; gates status lines meant for people.
    pub fn with_stdout_terminal(mut self, stdout_terminal: bool) -> Self {
        self.stdout_terminal = stdout_terminal;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn repo(&self) -> &RepoRef {
        &self.repo
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::List { org, state, format } => {
                self.handle_list(self.org(org.as_deref()), *state, format)
            }
            Commands::View {
                number,
                org,
                web,
                format,
            } => self.handle_view(*number, self.org(org.as_deref()), *web, format),
        }
    }

    fn org<'a>(&'a self, flag: Option<&'a str>) -> Option<&'a str> {
        flag.or(self.default_org.as_deref())
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    fn handle_list(
        &self,
        org: Option<&str>,
        state: ProjectState,
        format: &str,
    ) -> Result<String, ApiError> {
        check_format(format)?;
        info!(org = ?org, state = %state, "Listing projects");
        let projects = self.block_on(self.api.list_for_scope(&self.repo, org, state))?;

        match format {
            "json" => format_project_list_json(&projects),
            _ => Ok(format_project_list_text(&projects, self.color)),
        }
    }

    fn handle_view(
        &self,
        number: Option<u32>,
        org: Option<&str>,
        web: bool,
        format: &str,
    ) -> Result<String, ApiError> {
        check_format(format)?;

        let number = match number {
            Some(number) => number,
            None => self.select_project(org)?,
        };

        info!(number, org = ?org, "Viewing project");
        let project = self.block_on(self.api.locate(&self.repo, org, number))?;

        if web {
            let notice = if self.stdout_terminal {
                format!("Opening {} in your browser.", display_url(&project.url))
            } else {
                String::new()
            };
            self.browser.browse(&project.url)?;
            return Ok(notice);
        }

        match format {
            "json" => format_project_preview_json(&project),
            _ => Ok(format_project_preview_text(&project, self.color)),
        }
    }

    fn select_project(&self, org: Option<&str>) -> Result<u32, ApiError> {
        if !self.interactive {
            return Err(ApiError::InvalidArgument(
                "must provide `project-number` when not running interactively".to_string(),
            ));
        }

        let projects = self.block_on(self.api.list_all(&self.repo, org))?;
        if projects.is_empty() {
            return Err(ApiError::NoProjects);
        }

        let labels = projects
            .iter()
            .map(|p| selection_label(p, self.color))
            .collect();
        pick_project(self.picker.as_ref(), &projects, labels)
    }
}

fn check_format(format: &str) -> Result<(), ApiError> {
    match format {
        "text" | "json" => Ok(()),
        other => Err(ApiError::InvalidArgument(format!(
            "Invalid format '{}' (must be 'text' or 'json')",
            other
        ))),
    }
}

/// URL without its scheme, for display.
fn display_url(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}
