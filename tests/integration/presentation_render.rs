//! Integration tests for rendering controller state

use mcp_builder::presentation::{
    format_view_json, format_view_text, render, SUBMIT_LABEL_IDLE, SUCCESS_BANNER,
};
use mcp_builder::workflow::WorkflowController;

use crate::integration::RawBodyBackend;

#[tokio::test]
async fn test_rendering_same_state_twice_is_identical() {
    let backend = RawBodyBackend::new(vec![Ok(
        r#"{"files":[{"name":"a","path":"src/a.ts"},{"name":"b","path":"src/b.ts"}],"endpoint":"/mcp/ab"}"#,
    )]);
    let controller = WorkflowController::new(backend);
    controller.update_requirement("two files please");
    controller.submit().await.unwrap();

    let first = render(&controller.snapshot());
    let second = render(&controller.snapshot());
    assert_eq!(first, second);
    assert_eq!(format_view_text(&first, false), format_view_text(&second, false));
    assert_eq!(format_view_json(&first), format_view_json(&second));
}

#[tokio::test]
async fn test_text_view_after_success() {
    let backend = RawBodyBackend::new(vec![Ok(
        r#"{"files":[{"name":"a","path":"src/a.ts"}],"endpoint":"/mcp/a"}"#,
    )]);
    let controller = WorkflowController::new(backend);
    controller.update_requirement("watch logs\nand alert");
    controller.submit().await.unwrap();

    let text = format_view_text(&render(&controller.snapshot()), false);
    let expected = format!(
        "Requirement:\n  watch logs\n  and alert\n[{}]\n\n{}\nFiles:\n  - src/a.ts\nEndpoint: /mcp/a\n",
        SUBMIT_LABEL_IDLE, SUCCESS_BANNER
    );
    assert_eq!(text, expected);
}

#[test]
fn test_initial_view() {
    let controller = WorkflowController::new(RawBodyBackend::new(vec![]));
    let view = render(&controller.snapshot());
    assert!(!view.input.submit.enabled);
    assert_eq!(view.input.submit.label, SUBMIT_LABEL_IDLE);
    assert!(view.notice.is_none());
    assert!(view.result.is_none());

    let text = format_view_text(&view, false);
    assert!(text.contains("(empty)"));
    assert!(text.contains("[Generate] (disabled)"));
}
