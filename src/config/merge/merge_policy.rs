//! Merge rules: defaults, override order, conflict handling.

use crate::config::{
    default_base_url, default_connect_timeout_secs, default_generate_path, default_health_path,
    default_services_path, default_use_system_proxy,
};
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
/// Later sources override earlier ones key by key; tables are merged, not replaced.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("backend.base_url", default_base_url())?
        .set_default("backend.generate_path", default_generate_path())?
        .set_default("backend.health_path", default_health_path())?
        .set_default("backend.services_path", default_services_path())?
        .set_default("backend.connect_timeout_secs", default_connect_timeout_secs())?
        .set_default("backend.use_system_proxy", default_use_system_proxy())
}
