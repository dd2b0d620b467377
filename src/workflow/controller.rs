//! Workflow controller: owns the session state and drives submit → await → settle.

use crate::backend::GenerationBackend;
use crate::error::ApiError;
use crate::generation::{GenerationRequest, GenerationResult};
use crate::workflow::state::{
    GenerationFailure, Outcome, Phase, SessionSnapshot, SessionState,
};
use chrono::Utc;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Callback invoked with a fresh snapshot after every state transition
pub type StateObserver = Box<dyn Fn(&SessionSnapshot) + Send + Sync>;

/// Single-session workflow controller.
///
/// At most one submission is in flight at a time; [`WorkflowController::begin_submit`]
/// rejects a second one with [`ApiError::Busy`].
pub struct WorkflowController {
    backend: Arc<dyn GenerationBackend>,
    state: Mutex<SessionState>,
    observer: Option<StateObserver>,
}

impl WorkflowController {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self {
            backend,
            state: Mutex::new(SessionState::default()),
            observer: None,
        }
    }

    /// Register a re-render hook
    pub fn with_observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(&SessionSnapshot) + Send + Sync + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Replace the requirement text verbatim
    pub fn update_requirement(&self, text: impl Into<String>) {
        self.state.lock().requirement = text.into();
        self.notify();
    }

    pub fn requirement(&self) -> String {
        self.state.lock().requirement.clone()
    }

    pub fn phase(&self) -> Phase {
        self.state.lock().phase.clone()
    }

    pub fn result(&self) -> Option<GenerationResult> {
        self.state.lock().result.clone()
    }

    pub fn in_flight(&self) -> bool {
        self.state.lock().phase.is_pending()
    }

    pub fn can_submit(&self) -> bool {
        self.snapshot().can_submit()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.lock().snapshot()
    }

    /// Start a submission.
    ///
    /// Synchronously moves the session to `Pending` and captures the requirement text.
    /// The returned handle must be settled (or dropped) to leave `Pending`.
    pub fn begin_submit(&self) -> Result<PendingSubmission<'_>, ApiError> {
        let request = {
            let mut state = self.state.lock();
            if state.phase.is_pending() {
                return Err(ApiError::Busy);
            }
            if state.requirement.is_empty() {
                return Err(ApiError::EmptyRequirement);
            }
            state.phase = Phase::Pending;
            GenerationRequest::new(state.requirement.clone())
        };

        info!(
            requirement_len = request.requirements.len(),
            url = %self.backend.generate_url(),
            "Generation submitted"
        );
        self.notify();

        Ok(PendingSubmission {
            controller: self,
            request,
            settled: false,
        })
    }

    /// Submit the current requirement and wait for it to settle
    pub async fn submit(&self) -> Result<Outcome, ApiError> {
        let pending = self.begin_submit()?;
        Ok(pending.settle().await)
    }

    fn finish(&self, outcome: Outcome, result: Option<GenerationResult>) {
        {
            let mut state = self.state.lock();
            if let Some(result) = result {
                state.result = Some(result);
            }
            state.phase = Phase::Settled {
                outcome,
                settled_at: Utc::now(),
            };
        }
        self.notify();
    }

    fn notify(&self) {
        if let Some(observer) = &self.observer {
            let snapshot = self.snapshot();
            observer(&snapshot);
        }
    }
}

/// Handle for a submission that has left `Idle` but not yet settled.
///
/// Dropping it unsettled records an `Interrupted` failure so the session never stays
/// `Pending`.
pub struct PendingSubmission<'a> {
    controller: &'a WorkflowController,
    request: GenerationRequest,
    settled: bool,
}

impl PendingSubmission<'_> {
    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }

    /// Await the backend and record the outcome
    pub async fn settle(mut self) -> Outcome {
        let response = self.controller.backend.generate(&self.request).await;
        self.settled = true;

        match response {
            Ok(result) => {
                info!(
                    files = result.file_count(),
                    endpoint = %result.endpoint,
                    "Generation settled"
                );
                self.controller.finish(Outcome::Success, Some(result));
                Outcome::Success
            }
            Err(err) => {
                let failure = GenerationFailure::from_error(&err);
                warn!(kind = failure.kind.as_str(), error = %err, "Generation failed");
                let outcome = Outcome::Failure(failure);
                self.controller.finish(outcome.clone(), None);
                outcome
            }
        }
    }
}

impl Drop for PendingSubmission<'_> {
    fn drop(&mut self) {
        if !self.settled {
            debug!("Pending submission dropped before settling");
            self.controller
                .finish(Outcome::Failure(GenerationFailure::interrupted()), None);
        }
    }
}
