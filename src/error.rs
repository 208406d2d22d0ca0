//! Error types for project resolution and the CLI around it.

use crate::scope::Scope;
use crate::types::Project;
use std::fmt;
use thiserror::Error;

/// Failure of a single query against the GraphQL endpoint.
///
/// Always fatal to the attempt that produced it; nothing in this crate retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Authentication failed for {host}: {message}")]
    Unauthorized { host: String, message: String },

    #[error("Access denied by {host}: {message}")]
    Forbidden { host: String, message: String },

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Request to {host} failed with status {status}: {message}")]
    Status {
        host: String,
        status: u16,
        message: String,
    },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timeout: {0}")]
    Timeout(String),

    #[error("Query {query} failed: {}", .messages.join("; "))]
    Query {
        query: String,
        messages: Vec<String>,
    },

    #[error("Failed to decode {query} response: {message}")]
    Decode { query: String, message: String },
}

/// A transport failure tagged with the scope it happened in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{scope}: {source}")]
pub struct ScopeError {
    pub scope: Scope,
    #[source]
    pub source: TransportError,
}

/// Every lookup tier was exhausted without finding the project.
///
/// Only tiers that failed with a transport error contribute to `failures`;
/// a tier that answered "no such project" is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectNotFound {
    pub number: u32,
    pub failures: Vec<ScopeError>,
}

impl ProjectNotFound {
    pub fn transport_errors(&self) -> impl Iterator<Item = &TransportError> {
        self.failures.iter().map(|f| &f.source)
    }
}

impl fmt::Display for ProjectNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("project not found")?;
        for failure in &self.failures {
            write!(f, "; {}", failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProjectNotFound {}

/// A scope failed part way through an aggregated listing.
///
/// `partial` holds everything gathered from the scopes that completed before
/// the failing one; callers decide whether it is still useful.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Listing {scope} projects failed: {source}")]
pub struct ListAllError {
    pub scope: Scope,
    pub partial: Vec<Project>,
    #[source]
    pub source: TransportError,
}

/// Repository context resolution errors
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Invalid repository reference: {0}")]
    InvalidReference(String),

    #[error("No git remote found: {0}")]
    NoRemote(String),

    #[error("Git I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Top-level errors surfaced by the CLI
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("failed to get project: {0}")]
    NotFound(#[from] ProjectNotFound),

    #[error(transparent)]
    Listing(#[from] ListAllError),

    #[error(transparent)]
    Repository(#[from] RepoError),

    #[error("no projects found")]
    NoProjects,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Prompt failed: {0}")]
    PromptFailed(String),

    #[error("Failed to open browser: {0}")]
    BrowserFailed(String),

    #[error("Runtime error: {0}")]
    RuntimeError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
