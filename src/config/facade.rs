//! Config loader: assembles sources, deserializes, and validates.

use super::merge::merge_policy;
use super::sources::{environment, global_file, workspace_file};
use super::BuilderConfig;
use crate::error::ApiError;
use config::builder::DefaultState;
use config::{ConfigBuilder, File};
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace: defaults, global file, workspace files, env.
    pub fn load(workspace_root: &Path) -> Result<BuilderConfig, ApiError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        Self::finish(builder)
    }

    /// Load configuration from an explicit file, bypassing global and workspace files.
    pub fn load_from_file(path: &Path) -> Result<BuilderConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder =
            merge_policy::builder_with_defaults()?.add_source(File::from(path).required(true));
        Self::finish(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<BuilderConfig, ApiError> {
        let builder = environment::add_to_builder(builder);
        let config: BuilderConfig = builder.build()?.try_deserialize()?;

        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        Ok(config)
    }
}
