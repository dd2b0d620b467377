//! Generation Backend
//!
//! The only outbound collaborator. The workflow controller talks to it through the
//! [`GenerationBackend`] trait; [`HttpGenerationBackend`] is the `reqwest` implementation
//! used by the CLI.

use crate::config::BackendConfig;
use crate::error::ApiError;
use crate::generation::{parse_generation_body, GenerationRequest, GenerationResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Generation backend trait
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Submit requirement text and wait for the artifact summary
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult, ApiError>;

    /// Full URL the generation request is sent to
    fn generate_url(&self) -> &str;
}

/// `GET /health` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub connections: Option<u64>,
}

/// One previously generated service, as listed by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    #[serde(default)]
    pub mcp_id: Option<String>,
    #[serde(default)]
    pub mcp_name: Option<String>,
    #[serde(default)]
    pub mcp_type: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Deserialize)]
struct ServiceListResponse {
    #[serde(default)]
    mcps: Vec<ServiceRecord>,
}

fn map_http_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Transport(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        ApiError::Transport(format!("Connection error: {}", error))
    } else {
        ApiError::Transport(format!("HTTP error: {}", error))
    }
}

fn build_backend_http_client(config: &BackendConfig) -> Result<Client, ApiError> {
    let mut builder =
        Client::builder().connect_timeout(Duration::from_secs(config.connect_timeout_secs));
    if !config.use_system_proxy {
        builder = builder.no_proxy();
    }
    if let Some(secs) = config.request_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder
        .build()
        .map_err(|e| ApiError::ConfigError(format!("Failed to create HTTP client: {}", e)))
}

fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// HTTP client for the generation backend
pub struct HttpGenerationBackend {
    client: Client,
    generate_url: String,
    health_url: String,
    services_url: String,
}

impl HttpGenerationBackend {
    pub fn new(config: &BackendConfig) -> Result<Self, ApiError> {
        let client = build_backend_http_client(config)?;
        Ok(Self {
            client,
            generate_url: join_url(&config.base_url, &config.generate_path),
            health_url: join_url(&config.base_url, &config.health_path),
            services_url: join_url(&config.base_url, &config.services_path),
        })
    }

    /// Probe the backend's health route
    pub async fn health(&self) -> Result<HealthReport, ApiError> {
        let response = self
            .client
            .get(&self.health_url)
            .send()
            .await
            .map_err(map_http_error)?;

        if !response.status().is_success() {
            return Err(ApiError::Transport(format!(
                "Health check failed with status {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::MalformedResponse(format!("Failed to parse health response: {}", e)))
    }

    /// List services the backend has generated so far
    pub async fn list_services(&self) -> Result<Vec<ServiceRecord>, ApiError> {
        let response = self
            .client
            .get(&self.services_url)
            .send()
            .await
            .map_err(map_http_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Transport(format!(
                "Failed to list services: status {} - {}",
                status, error_text
            )));
        }

        let listing: ServiceListResponse = response.json().await.map_err(|e| {
            ApiError::MalformedResponse(format!("Failed to parse services response: {}", e))
        })?;
        Ok(listing.mcps)
    }
}

#[async_trait]
impl GenerationBackend for HttpGenerationBackend {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult, ApiError> {
        debug!(url = %self.generate_url, "Sending generation request");

        let response = self
            .client
            .post(&self.generate_url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(map_http_error)?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to read response body: {}", e)))?;

        // Status is informational only; the body decides the outcome.
        if !status.is_success() {
            warn!(status = %status, "Generation backend answered with a non-success status");
        }

        parse_generation_body(&body)
    }

    fn generate_url(&self) -> &str {
        &self.generate_url
    }
}
