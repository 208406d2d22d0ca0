//! Repository context: which host, owner, and repository a command runs against.

use crate::error::RepoError;
use std::fmt;
use std::path::Path;
use std::process::Command;
use tracing::debug;

pub const DEFAULT_HOST: &str = "github.com";

/// Supplies the scope-qualifying coordinates of the current repository.
pub trait RepositoryContext: Send + Sync {
    fn repo_host(&self) -> &str;
    fn repo_owner(&self) -> &str;
    fn repo_name(&self) -> &str;
}

/// A concrete `host/owner/name` repository reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    host: String,
    owner: String,
    name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_host(DEFAULT_HOST, owner, name)
    }

    pub fn with_host(
        host: impl Into<String>,
        owner: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into().to_ascii_lowercase(),
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse `OWNER/NAME`, `HOST/OWNER/NAME`, or a git remote URL.
    pub fn parse(input: &str) -> Result<Self, RepoError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(RepoError::InvalidReference("empty reference".to_string()));
        }

        if let Some(rest) = trimmed.strip_prefix("git@") {
            // scp-like syntax: git@HOST:OWNER/NAME.git
            let (host, path) = rest
                .split_once(':')
                .ok_or_else(|| RepoError::InvalidReference(input.to_string()))?;
            return Self::from_host_and_path(host, path, input);
        }

        if let Some((scheme, rest)) = trimmed.split_once("://") {
            if !matches!(scheme, "https" | "http" | "ssh" | "git") {
                return Err(RepoError::InvalidReference(input.to_string()));
            }
            let rest = rest.rsplit_once('@').map_or(rest, |(_, r)| r);
            let (host, path) = rest
                .split_once('/')
                .ok_or_else(|| RepoError::InvalidReference(input.to_string()))?;
            // Drop an explicit port; the API host never carries one.
            let host = host.split(':').next().unwrap_or(host);
            return Self::from_host_and_path(host, path, input);
        }

        let parts: Vec<&str> = trimmed.split('/').collect();
        match parts.as_slice() {
            [owner, name] => Self::validated(DEFAULT_HOST, owner, name, input),
            [host, owner, name] => Self::validated(host, owner, name, input),
            _ => Err(RepoError::InvalidReference(input.to_string())),
        }
    }

    fn from_host_and_path(host: &str, path: &str, input: &str) -> Result<Self, RepoError> {
        let path = path.trim_end_matches('/');
        let path = path.strip_suffix(".git").unwrap_or(path);
        match path.split('/').collect::<Vec<_>>().as_slice() {
            [owner, name] => Self::validated(host, owner, name, input),
            _ => Err(RepoError::InvalidReference(input.to_string())),
        }
    }

    fn validated(host: &str, owner: &str, name: &str, input: &str) -> Result<Self, RepoError> {
        if host.is_empty() || owner.is_empty() || name.is_empty() {
            return Err(RepoError::InvalidReference(input.to_string()));
        }
        Ok(Self::with_host(host, owner, name))
    }

    /// Read the `origin` remote of the git checkout at `workdir`.
    pub fn from_git_remote(workdir: &Path) -> Result<Self, RepoError> {
        let output = Command::new("git")
            .args(["remote", "get-url", "origin"])
            .current_dir(workdir)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RepoError::NoRemote(stderr.trim().to_string()));
        }

        let url = String::from_utf8_lossy(&output.stdout);
        debug!(remote = %url.trim(), "Resolved origin remote");
        Self::parse(url.trim())
    }

    /// Resolve the base repository.
    ///
    /// Priority order: explicit reference, `GH_REPO`, then the git remote.
    pub fn resolve(explicit: Option<&str>, workdir: &Path) -> Result<Self, RepoError> {
        if let Some(reference) = explicit {
            return Self::parse(reference);
        }
        if let Ok(reference) = std::env::var("GH_REPO") {
            if !reference.trim().is_empty() {
                return Self::parse(&reference);
            }
        }
        Self::from_git_remote(workdir)
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl RepositoryContext for RepoRef {
    fn repo_host(&self) -> &str {
        &self.host
    }

    fn repo_owner(&self) -> &str {
        &self.owner
    }

    fn repo_name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host == DEFAULT_HOST {
            write!(f, "{}/{}", self.owner, self.name)
        } else {
            write!(f, "{}/{}/{}", self.host, self.owner, self.name)
        }
    }
}
