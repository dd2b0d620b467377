//! Session state: explicit phase, settle outcomes, and the read-only snapshot.

use crate::error::ApiError;
use crate::generation::GenerationResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Why a settled submission failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Network unreachable, connection refused, or body not received
    Transport,
    /// Body received but not JSON, or missing `files` / `endpoint`
    MalformedResponse,
    /// Backend answered with an explicit failure status
    Rejected,
    /// Submission dropped before the response arrived
    Interrupted,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Transport => "transport",
            FailureKind::MalformedResponse => "malformed_response",
            FailureKind::Rejected => "rejected",
            FailureKind::Interrupted => "interrupted",
        }
    }
}

/// Failure recorded on the session when a submission settles unsuccessfully
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl GenerationFailure {
    pub fn interrupted() -> Self {
        Self {
            kind: FailureKind::Interrupted,
            message: "Submission was dropped before the backend responded".to_string(),
        }
    }

    pub fn from_error(error: &ApiError) -> Self {
        let (kind, message) = match error {
            ApiError::Transport(msg) => (FailureKind::Transport, msg.clone()),
            ApiError::MalformedResponse(msg) => (FailureKind::MalformedResponse, msg.clone()),
            ApiError::BackendRejected(msg) => (FailureKind::Rejected, msg.clone()),
            other => (FailureKind::Transport, other.to_string()),
        };
        Self { kind, message }
    }
}

impl From<&GenerationFailure> for ApiError {
    fn from(failure: &GenerationFailure) -> Self {
        ApiError::GenerationFailed(format!("{} ({})", failure.message, failure.kind.as_str()))
    }
}

/// Outcome of one settled submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Failure(GenerationFailure),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    pub fn failure(&self) -> Option<&GenerationFailure> {
        match self {
            Outcome::Success => None,
            Outcome::Failure(failure) => Some(failure),
        }
    }
}

/// Workflow phase.
///
/// `Settled` accepts a new submission exactly like `Idle`; it only remembers how the
/// last cycle ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Pending,
    Settled {
        outcome: Outcome,
        settled_at: DateTime<Utc>,
    },
}

impl Phase {
    pub fn is_pending(&self) -> bool {
        matches!(self, Phase::Pending)
    }

    /// Failure from the most recent settle, if it failed
    pub fn last_failure(&self) -> Option<&GenerationFailure> {
        match self {
            Phase::Settled { outcome, .. } => outcome.failure(),
            _ => None,
        }
    }
}

/// Owned copy of the controller state handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub requirement: String,
    pub phase: Phase,
    pub result: Option<GenerationResult>,
}

impl SessionSnapshot {
    pub fn in_flight(&self) -> bool {
        self.phase.is_pending()
    }

    pub fn can_submit(&self) -> bool {
        !self.in_flight() && !self.requirement.is_empty()
    }
}

/// Mutable state owned by the controller
#[derive(Debug, Clone)]
pub(crate) struct SessionState {
    pub(crate) requirement: String,
    pub(crate) phase: Phase,
    pub(crate) result: Option<GenerationResult>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            requirement: String::new(),
            phase: Phase::Idle,
            result: None,
        }
    }
}

impl SessionState {
    pub(crate) fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            requirement: self.requirement.clone(),
            phase: self.phase.clone(),
            result: self.result.clone(),
        }
    }
}
