//! Configuration System
//!
//! Layered configuration for the GitHub connection and logging. Sources, lowest
//! precedence first: built-in defaults, the global config file, the workspace
//! config file, then `GHPROJ_*` environment variables.

use crate::logging::LoggingConfig;
use crate::scope::MAX_PAGE_SIZE;
use crate::transport::HttpTransportConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::workspace_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// GitHub connection settings
    #[serde(default)]
    pub github: GithubConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// GitHub connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    /// API token; falls back to GH_TOKEN then GITHUB_TOKEN
    #[serde(default)]
    pub token: Option<String>,

    /// Fixed GraphQL endpoint (overrides the per-host default)
    #[serde(default)]
    pub api_url: Option<String>,

    /// Organization used when `--org` is not given
    #[serde(default)]
    pub default_org: Option<String>,

    #[serde(default = "default_page_size")]
    pub page_size: u32,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_page_size() -> u32 {
    MAX_PAGE_SIZE
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_request_timeout_secs() -> u64 {
    60
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_url: None,
            default_org: None,
            page_size: default_page_size(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl GithubConfig {
    /// Validate connection settings
    pub fn validate(&self) -> Result<(), String> {
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(format!(
                "page_size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, self.page_size
            ));
        }
        if self.connect_timeout_secs == 0 || self.request_timeout_secs == 0 {
            return Err("timeouts must be greater than zero".to_string());
        }
        if let Some(url) = &self.api_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(format!("api_url must be an http(s) URL, got '{}'", url));
            }
        }
        Ok(())
    }

    /// Token from config, then GH_TOKEN, then GITHUB_TOKEN.
    pub fn resolve_token(&self) -> Option<String> {
        non_blank(self.token.clone())
            .or_else(|| non_blank(std::env::var("GH_TOKEN").ok()))
            .or_else(|| non_blank(std::env::var("GITHUB_TOKEN").ok()))
    }

    pub fn transport_config(&self) -> HttpTransportConfig {
        HttpTransportConfig {
            token: self.resolve_token(),
            api_url: self.api_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

fn non_blank(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.trim().is_empty())
}

impl AppConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        if let Err(e) = self.github.validate() {
            errors.push(format!("github: {}", e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(format!("logging: {}", e));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
