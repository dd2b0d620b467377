//! Configuration System
//!
//! Layered configuration for the generation backend connection and logging. Sources are
//! merged in order: built-in defaults, the global config file, workspace config files,
//! then `MCP_BUILDER__SECTION__KEY` environment variables.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Generation backend connection
    #[serde(default)]
    pub backend: BackendConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Generation backend connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Scheme, host and port of the backend (e.g. http://localhost:8000)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Fixed path of the generation route
    #[serde(default = "default_generate_path")]
    pub generate_path: String,

    #[serde(default = "default_health_path")]
    pub health_path: String,

    /// Listing of previously generated services
    #[serde(default = "default_services_path")]
    pub services_path: String,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Total request timeout. Unset means a submission runs until the backend answers.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Route requests through `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` from the environment
    #[serde(default = "default_use_system_proxy")]
    pub use_system_proxy: bool,
}

pub(crate) fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

pub(crate) fn default_generate_path() -> String {
    "/api/generate-mcp".to_string()
}

pub(crate) fn default_health_path() -> String {
    "/health".to_string()
}

pub(crate) fn default_services_path() -> String {
    "/api/mcps".to_string()
}

pub(crate) fn default_connect_timeout_secs() -> u64 {
    10
}

pub(crate) fn default_use_system_proxy() -> bool {
    true
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            generate_path: default_generate_path(),
            health_path: default_health_path(),
            services_path: default_services_path(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: None,
            use_system_proxy: default_use_system_proxy(),
        }
    }
}

impl BackendConfig {
    /// Validate backend configuration
    pub fn validate(&self) -> Result<(), String> {
        let url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid base_url '{}': {}", self.base_url, e))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(format!(
                "Invalid base_url '{}': scheme must be http or https",
                self.base_url
            ));
        }

        for (name, path) in [
            ("generate_path", &self.generate_path),
            ("health_path", &self.health_path),
            ("services_path", &self.services_path),
        ] {
            if !path.starts_with('/') {
                return Err(format!("{} must start with '/': {}", name, path));
            }
        }

        if self.connect_timeout_secs == 0 {
            return Err("connect_timeout_secs must be greater than zero".to_string());
        }
        if self.request_timeout_secs == Some(0) {
            return Err("request_timeout_secs must be greater than zero when set".to_string());
        }

        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Backend(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Backend(msg) => write!(f, "Backend: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl BuilderConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.backend.validate() {
            errors.push(ValidationError::Backend(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
