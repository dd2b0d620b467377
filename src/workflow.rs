//! Generation workflow: session state and the controller that drives it.

pub mod controller;
pub mod state;

pub use controller::{PendingSubmission, StateObserver, WorkflowController};
pub use state::{FailureKind, GenerationFailure, Outcome, Phase, SessionSnapshot};
