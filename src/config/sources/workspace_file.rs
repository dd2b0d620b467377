//! Workspace config files, relative to the workspace root.
//!
//! `config/config.toml` is the shared base; `config/<env>.toml` layers on top of it, where
//! `<env>` comes from `MCP_BUILDER_ENV` and falls back to `development`.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use std::path::{Path, PathBuf};

const ENV_VAR: &str = "MCP_BUILDER_ENV";
const DEFAULT_ENV: &str = "development";

/// Existing workspace config files, lowest precedence first.
pub fn workspace_config_files(workspace_root: &Path, env_name: &str) -> Vec<PathBuf> {
    let dir = workspace_root.join("config");
    [dir.join("config.toml"), dir.join(format!("{}.toml", env_name))]
        .into_iter()
        .filter(|path| path.is_file())
        .collect()
}

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let env_name = std::env::var(ENV_VAR).unwrap_or_else(|_| DEFAULT_ENV.to_string());

    Ok(workspace_config_files(workspace_root, &env_name)
        .into_iter()
        .fold(builder, |builder, path| {
            tracing::debug!(path = %path.display(), "Adding workspace config file");
            builder.add_source(File::from(path).required(false))
        }))
}
