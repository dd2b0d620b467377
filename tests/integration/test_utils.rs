//! Shared test utilities for integration tests
//!
//! In-memory generation backends and environment isolation helpers.

use async_trait::async_trait;
use mcp_builder::backend::GenerationBackend;
use mcp_builder::error::ApiError;
use mcp_builder::generation::{
    parse_generation_body, GeneratedFile, GenerationRequest, GenerationResult,
};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Notify;

/// Global mutex to serialize environment variable access across all tests
static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Run `f` with the given environment variables set, restoring them afterwards
pub fn with_env<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let saved: Vec<(String, Option<String>)> = vars
        .iter()
        .map(|(key, _)| (key.to_string(), std::env::var(key).ok()))
        .collect();
    for (key, value) in vars {
        std::env::set_var(key, value);
    }

    let out = f();

    for (key, original) in saved {
        match original {
            Some(value) => std::env::set_var(&key, value),
            None => std::env::remove_var(&key),
        }
    }
    out
}

pub fn sample_result(name: &str) -> GenerationResult {
    GenerationResult {
        files: vec![GeneratedFile {
            name: name.to_string(),
            path: format!("src/{}.ts", name),
        }],
        endpoint: format!("/mcp/{}", name),
    }
}

/// Backend that answers each call with the next queued body, parsed exactly as the
/// HTTP backend parses a real response body
pub struct RawBodyBackend {
    bodies: Mutex<VecDeque<Result<Vec<u8>, ApiError>>>,
    pub requests: Mutex<Vec<GenerationRequest>>,
}

impl RawBodyBackend {
    pub fn new(bodies: Vec<Result<&str, ApiError>>) -> Arc<Self> {
        Arc::new(Self {
            bodies: Mutex::new(
                bodies
                    .into_iter()
                    .map(|b| b.map(|s| s.as_bytes().to_vec()))
                    .collect(),
            ),
            requests: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl GenerationBackend for RawBodyBackend {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult, ApiError> {
        self.requests.lock().push(request.clone());
        let next = self
            .bodies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("connection refused".to_string())));
        parse_generation_body(&next?)
    }

    fn generate_url(&self) -> &str {
        "memory://raw"
    }
}

/// Backend that holds every request until the gate is opened
pub struct GatedBackend {
    pub gate: Arc<Notify>,
    pub requests: Mutex<Vec<GenerationRequest>>,
    result: GenerationResult,
}

impl GatedBackend {
    pub fn new(result: GenerationResult) -> Arc<Self> {
        Arc::new(Self {
            gate: Arc::new(Notify::new()),
            requests: Mutex::new(Vec::new()),
            result,
        })
    }
}

#[async_trait]
impl GenerationBackend for GatedBackend {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult, ApiError> {
        self.requests.lock().push(request.clone());
        self.gate.notified().await;
        Ok(self.result.clone())
    }

    fn generate_url(&self) -> &str {
        "memory://gated"
    }
}

/// Backend whose response never arrives
pub struct SilentBackend;

#[async_trait]
impl GenerationBackend for SilentBackend {
    async fn generate(&self, _request: &GenerationRequest) -> Result<GenerationResult, ApiError> {
        futures::future::pending().await
    }

    fn generate_url(&self) -> &str {
        "memory://silent"
    }
}
