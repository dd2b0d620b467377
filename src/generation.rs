//! Generation Contract
//!
//! Request and response shapes exchanged with the generation backend, plus the
//! schema check applied to every response body before it reaches the workflow.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outbound request body: `{ "requirements": "<text>" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub requirements: String,
}

impl GenerationRequest {
    pub fn new(requirements: impl Into<String>) -> Self {
        Self {
            requirements: requirements.into(),
        }
    }
}

/// One file produced by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    pub name: String,
    pub path: String,
}

/// Artifact summary returned by a successful generation.
///
/// Fields other than `files` and `endpoint` are ignored on parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub files: Vec<GeneratedFile>,
    pub endpoint: String,
}

impl GenerationResult {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Parse and validate a response body.
///
/// The HTTP status is not consulted; callers pass the body whatever the status was.
pub fn parse_generation_body(body: &[u8]) -> Result<GenerationResult, ApiError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        ApiError::MalformedResponse(format!("response body is not JSON: {}", e))
    })?;
    parse_generation_value(value)
}

/// Validate an already-decoded JSON value against the result schema.
pub fn parse_generation_value(value: Value) -> Result<GenerationResult, ApiError> {
    if let Some(reason) = rejection_reason(&value) {
        return Err(ApiError::BackendRejected(reason));
    }

    if !value.is_object() {
        return Err(ApiError::MalformedResponse(
            "response body is not a JSON object".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|e| ApiError::MalformedResponse(e.to_string()))
}

// The backend reports failed generations as `{"status": "failed", "error": ...}`
fn rejection_reason(value: &Value) -> Option<String> {
    if value.get("status").and_then(Value::as_str) != Some("failed") {
        return None;
    }
    let reason = value
        .get("error")
        .and_then(Value::as_str)
        .filter(|e| !e.is_empty())
        .unwrap_or("generation failed without a reason");
    Some(reason.to_string())
}
