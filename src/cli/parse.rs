//! CLI parse: clap types for ghproj. No behavior; definitions only.

use crate::types::ProjectState;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ghproj CLI - work with GitHub Projects boards
#[derive(Parser)]
#[command(name = "ghproj")]
#[command(about = "List and view GitHub Projects across user, repository, and organization scopes")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Repository as [HOST/]OWNER/NAME (default: GH_REPO, then the origin remote)
    #[arg(long, short = 'R', global = true)]
    pub repo: Option<String>,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List projects for the current user or an organization
    List {
        /// List projects for an organization
        #[arg(long, short = 'o')]
        org: Option<String>,
        /// Filter by state (open, closed, all)
        #[arg(long, default_value = "all")]
        state: ProjectState,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// View a summary of a project
    View {
        /// Project number (prompted for when omitted on a terminal)
        number: Option<u32>,
        /// Organization to search after the user and repository
        #[arg(long, short = 'o')]
        org: Option<String>,
        /// Open the project in the browser
        #[arg(long, short = 'w')]
        web: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
