//! Config loading facade: assembles sources in precedence order.

use super::merge::merge_policy::builder_with_defaults;
use super::sources::{env, global_file, workspace_file};
use super::AppConfig;
use crate::error::ApiError;
use config::File;
use std::path::{Path, PathBuf};

/// Loads [`AppConfig`] from defaults, files, and the environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a working directory.
    ///
    /// Precedence (lowest to highest): defaults, global file, workspace file,
    /// environment.
    pub fn load(workdir: &Path) -> Result<AppConfig, ApiError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workdir)?;
        let builder = env::add_to_builder(builder);
        Self::finish(builder.build()?.try_deserialize()?)
    }

    /// Load from an explicit file; replaces the file layers but keeps
    /// defaults and environment overrides.
    pub fn load_from_file(path: &Path) -> Result<AppConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder = builder_with_defaults()?.add_source(File::from(path));
        let builder = env::add_to_builder(builder);
        Self::finish(builder.build()?.try_deserialize()?)
    }

    /// Path of the global config file, when a home directory is known.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }

    fn finish(config: AppConfig) -> Result<AppConfig, ApiError> {
        config.validate().map_err(|errors| {
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                errors.join("\n")
            ))
        })?;
        Ok(config)
    }
}
