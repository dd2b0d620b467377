//! Integration tests for the submit → await → settle cycle

use futures::FutureExt;
use mcp_builder::error::ApiError;
use mcp_builder::presentation::{format_view_text, render, SUBMIT_LABEL_PENDING};
use mcp_builder::workflow::{FailureKind, Outcome, Phase, WorkflowController};
use std::sync::Arc;

use crate::integration::{sample_result, GatedBackend, RawBodyBackend, SilentBackend};

const ONE_FILE_BODY: &str =
    r#"{ "files": [{"name":"a","path":"src/a.ts"}], "endpoint": "/mcp/a" }"#;

fn file_lines(text: &str) -> usize {
    text.lines().filter(|l| l.starts_with("  - ")).count()
}

fn endpoint_lines(text: &str) -> usize {
    text.lines().filter(|l| l.starts_with("Endpoint: ")).count()
}

#[tokio::test]
async fn test_successful_response_populates_result_and_result_pane() {
    let backend = RawBodyBackend::new(vec![Ok(ONE_FILE_BODY)]);
    let controller = WorkflowController::new(backend.clone());
    controller.update_requirement("expose my orders table");

    let outcome = controller.submit().await.unwrap();
    assert_eq!(outcome, Outcome::Success);
    assert!(!controller.in_flight());

    let result = controller.result().unwrap();
    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].path, "src/a.ts");
    assert_eq!(result.endpoint, "/mcp/a");

    let text = format_view_text(&render(&controller.snapshot()), false);
    assert_eq!(file_lines(&text), 1);
    assert_eq!(endpoint_lines(&text), 1);

    let requests = backend.requests.lock();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].requirements, "expose my orders table");
}

#[tokio::test]
async fn test_missing_files_settles_as_malformed_without_result_pane() {
    let backend = RawBodyBackend::new(vec![Ok(r#"{ "endpoint": "/mcp/a" }"#)]);
    let controller = WorkflowController::new(backend);
    controller.update_requirement("anything");

    let outcome = controller.submit().await.unwrap();
    assert_eq!(
        outcome.failure().map(|f| f.kind),
        Some(FailureKind::MalformedResponse)
    );
    assert!(!controller.in_flight());
    assert!(controller.result().is_none());

    let view = render(&controller.snapshot());
    assert!(view.result.is_none());
    let text = format_view_text(&view, false);
    assert_eq!(file_lines(&text), 0);
    assert!(text.contains("Generation failed (malformed_response)"));
}

#[tokio::test]
async fn test_non_json_body_settles_as_malformed() {
    let backend = RawBodyBackend::new(vec![Ok("Internal Server Error")]);
    let controller = WorkflowController::new(backend);
    controller.update_requirement("anything");

    let outcome = controller.submit().await.unwrap();
    assert_eq!(
        outcome.failure().map(|f| f.kind),
        Some(FailureKind::MalformedResponse)
    );
    assert!(!controller.in_flight());
}

#[tokio::test]
async fn test_backend_reported_failure_settles_as_rejected() {
    let backend = RawBodyBackend::new(vec![Ok(
        r#"{"status":"failed","task_id":"t-9","error":"template not found"}"#,
    )]);
    let controller = WorkflowController::new(backend);
    controller.update_requirement("anything");

    let outcome = controller.submit().await.unwrap();
    let failure = outcome.failure().unwrap();
    assert_eq!(failure.kind, FailureKind::Rejected);
    assert_eq!(failure.message, "template not found");
}

#[tokio::test]
async fn test_transport_failure_leaves_absent_result_absent() {
    let backend = RawBodyBackend::new(vec![Err(ApiError::Transport(
        "connection refused".to_string(),
    ))]);
    let controller = WorkflowController::new(backend);
    controller.update_requirement("anything");

    let outcome = controller.submit().await.unwrap();
    assert_eq!(outcome.failure().map(|f| f.kind), Some(FailureKind::Transport));
    assert!(!controller.in_flight());
    assert!(controller.result().is_none());
    assert!(controller.can_submit(), "a failed cycle returns to a submittable state");
}

#[tokio::test]
async fn test_transport_failure_keeps_previous_result() {
    let backend = RawBodyBackend::new(vec![
        Ok(ONE_FILE_BODY),
        Err(ApiError::Transport("connection reset".to_string())),
    ]);
    let controller = WorkflowController::new(backend);
    controller.update_requirement("first");
    controller.submit().await.unwrap();
    let first = controller.result();

    controller.update_requirement("second");
    controller.submit().await.unwrap();
    assert!(!controller.in_flight());
    assert_eq!(controller.result(), first);
    assert!(controller.phase().last_failure().is_some());
}

#[tokio::test]
async fn test_sequential_submissions_replace_result() {
    let backend = RawBodyBackend::new(vec![
        Ok(ONE_FILE_BODY),
        Ok(r#"{"files":[{"name":"b","path":"src/b.ts"},{"name":"c","path":"src/c.ts"}],"endpoint":"/mcp/b"}"#),
    ]);
    let controller = WorkflowController::new(backend);

    controller.update_requirement("first");
    controller.submit().await.unwrap();
    assert_eq!(controller.result().unwrap().endpoint, "/mcp/a");

    controller.update_requirement("second");
    controller.submit().await.unwrap();
    let result = controller.result().unwrap();
    assert_eq!(result.endpoint, "/mcp/b");
    let paths: Vec<_> = result.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["src/b.ts", "src/c.ts"]);
}

#[tokio::test]
async fn test_editing_requirement_does_not_clear_result() {
    let backend = RawBodyBackend::new(vec![Ok(ONE_FILE_BODY)]);
    let controller = WorkflowController::new(backend);
    controller.update_requirement("first");
    controller.submit().await.unwrap();

    controller.update_requirement("");
    assert!(controller.result().is_some());
    assert!(!controller.can_submit());
}

#[tokio::test]
async fn test_pending_state_is_observable_and_single_flight() {
    let backend = GatedBackend::new(sample_result("gated"));
    let gate = Arc::clone(&backend.gate);
    let controller = WorkflowController::new(backend.clone());
    controller.update_requirement("hold me");

    let pending = controller.begin_submit().unwrap();
    let check = async {
        let snapshot = controller.snapshot();
        assert!(snapshot.in_flight());
        let view = render(&snapshot);
        assert!(!view.input.submit.enabled);
        assert_eq!(view.input.submit.label, SUBMIT_LABEL_PENDING);

        controller.update_requirement("changed while pending");
        assert!(!controller.can_submit());
        assert!(matches!(controller.begin_submit().err(), Some(ApiError::Busy)));

        gate.notify_one();
    };

    let (outcome, ()) = tokio::join!(pending.settle(), check);
    assert_eq!(outcome, Outcome::Success);
    assert!(!controller.in_flight());
    assert_eq!(controller.result().unwrap().endpoint, "/mcp/gated");
    assert_eq!(controller.requirement(), "changed while pending");

    // The request carried the text captured at submission time.
    let requests = backend.requests.lock();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].requirements, "hold me");
}

#[test]
fn test_abandoned_submission_never_leaves_session_pending() {
    let controller = WorkflowController::new(Arc::new(SilentBackend));
    controller.update_requirement("never answered");

    let settled = controller.submit().now_or_never();
    assert!(settled.is_none(), "backend never answers");

    assert!(!controller.in_flight());
    match controller.phase() {
        Phase::Settled {
            outcome: Outcome::Failure(failure),
            ..
        } => assert_eq!(failure.kind, FailureKind::Interrupted),
        other => panic!("unexpected phase: {:?}", other),
    }
}

#[test]
fn test_empty_requirement_cannot_be_submitted() {
    let controller = WorkflowController::new(Arc::new(SilentBackend));
    assert!(matches!(
        controller.begin_submit().err(),
        Some(ApiError::EmptyRequirement)
    ));
    assert_eq!(controller.phase(), Phase::Idle);
}
