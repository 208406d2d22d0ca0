//! ghproj: GitHub Projects resolution across scopes
//!
//! Lists and locates GitHub Projects (v2) owned by the current user, a
//! repository, or an organization. Listing walks cursor-paginated GraphQL
//! connections; lookup of a single project by number falls back across scopes
//! and reports every scope's failure when nothing matches.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod projects;
pub mod repo;
pub mod scope;
pub mod transport;
pub mod types;
