//! ghproj CLI Binary
//!
//! Command-line interface for listing and viewing GitHub Projects.

use clap::Parser;
use ghproj::cli::{map_error, Cli, RunContext};
use ghproj::config::{AppConfig, ConfigLoader};
use ghproj::error::ApiError;
use ghproj::logging::{init_logging, LoggingConfig};
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let workdir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = load_config(&cli, &workdir);

    // Logging comes up before config errors are reported so they get logged too
    let logging_config = build_logging_config(&cli, config.as_ref().ok());
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("ghproj starting");

    let config = match config {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    let context = match RunContext::new(cli.repo.as_deref(), &config, &workdir) {
        Ok(ctx) => {
            info!(repo = %ctx.repo(), "CLI context initialized");
            ctx
        }
        Err(e) => fail(&e),
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => fail(&e),
    }
}

fn fail(e: &ApiError) -> ! {
    error!("Command failed: {}", e);
    eprintln!("{}", map_error(e));
    process::exit(1);
}

fn load_config(cli: &Cli, workdir: &std::path::Path) -> Result<AppConfig, ApiError> {
    match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(workdir),
    }
}

/// Build logging configuration from CLI args and the loaded config.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, config: Option<&AppConfig>) -> LoggingConfig {
    let mut logging = config.map(|c| c.logging.clone()).unwrap_or_default();

    if cli.quiet {
        logging.level = "off".to_string();
    }
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        logging.file = Some(file.clone());
    }

    logging
}
