//! Core value types: projects, pages, and listing filters.
//!
//! All types here are read-only projections of remote state. They are decoded
//! straight from the GraphQL node shapes, so field names follow the remote
//! camelCase convention on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// GraphQL variable bag sent alongside a named query.
pub type Variables = serde_json::Map<String, serde_json::Value>;

/// A single Projects (v2) board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Opaque node identifier.
    pub id: String,
    pub title: String,
    /// Sequential number; unique within its owning scope only.
    pub number: u32,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub resource_path: String,
    #[serde(default)]
    pub url: String,
}

impl Project {
    /// Human-readable status label.
    pub fn status(&self) -> &'static str {
        if self.closed {
            "Closed"
        } else {
            "Open"
        }
    }
}

/// Pagination info for cursor-based pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    #[serde(default)]
    pub end_cursor: Option<String>,
}

/// One bounded batch of projects returned by a single listing query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(default)]
    pub nodes: Vec<Project>,
    pub page_info: PageInfo,
}

/// Open/closed filter applied to listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectState {
    Open,
    Closed,
    #[default]
    All,
}

impl ProjectState {
    /// Search query passed as the `query` variable; `None` lists everything.
    pub fn search_query(self) -> Option<&'static str> {
        match self {
            ProjectState::Open => Some("is:open"),
            ProjectState::Closed => Some("is:closed"),
            ProjectState::All => None,
        }
    }
}

impl fmt::Display for ProjectState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProjectState::Open => "open",
            ProjectState::Closed => "closed",
            ProjectState::All => "all",
        };
        f.write_str(s)
    }
}

impl FromStr for ProjectState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "open" => Ok(ProjectState::Open),
            "closed" => Ok(ProjectState::Closed),
            "all" => Ok(ProjectState::All),
            other => Err(format!(
                "invalid state '{}' (must be 'open', 'closed', or 'all')",
                other
            )),
        }
    }
}
