//! Integration tests for response schema validation at the request boundary

use mcp_builder::error::ApiError;
use mcp_builder::generation::{parse_generation_body, GenerationRequest};

#[test]
fn test_request_body_shape() {
    let body = serde_json::to_value(GenerationRequest::new("line one\nline two")).unwrap();
    assert_eq!(body, serde_json::json!({ "requirements": "line one\nline two" }));
}

#[test]
fn test_files_preserve_backend_order() {
    let body = br#"{
        "files": [
            {"name": "server", "path": "server.py"},
            {"name": "dockerfile", "path": "Dockerfile"},
            {"name": "requirements", "path": "requirements.txt"}
        ],
        "endpoint": "http://localhost:9003/mcp"
    }"#;
    let result = parse_generation_body(body).unwrap();
    let names: Vec<_> = result.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["server", "dockerfile", "requirements"]);
}

#[test]
fn test_null_fields_are_malformed() {
    for body in [
        r#"{"files": null, "endpoint": "/mcp/a"}"#,
        r#"{"files": [], "endpoint": null}"#,
        r#"{"files": [], "endpoint": 42}"#,
        r#"{}"#,
        r#""just a string""#,
    ] {
        let err = parse_generation_body(body.as_bytes()).unwrap_err();
        assert!(
            matches!(err, ApiError::MalformedResponse(_)),
            "expected malformed response for {}, got {:?}",
            body,
            err
        );
    }
}

#[test]
fn test_success_status_is_not_a_rejection() {
    let body = br#"{"status": "success", "files": [], "endpoint": "/mcp/x"}"#;
    assert!(parse_generation_body(body).is_ok());
}

#[test]
fn test_empty_body_is_malformed() {
    assert!(matches!(
        parse_generation_body(b"").unwrap_err(),
        ApiError::MalformedResponse(_)
    ));
}
