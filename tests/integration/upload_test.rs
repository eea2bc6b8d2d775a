//! Integration tests for multipart upload binding.

use http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, multipart_body};

const BOUNDARY: &str = "test-boundary";

#[tokio::test]
async fn upload_file_echoes_metadata_only() {
    let app = TestApp::new();
    let body = multipart_body(
        BOUNDARY,
        &[("file", Some("test.txt"), Some("text/plain"), "hello world")],
    );

    let response = app
        .post_multipart("/api/v1/upload_file", BOUNDARY, body)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"filename": "test.txt", "file_content_type": "text/plain"})
    );
}

#[tokio::test]
async fn upload_file_rejects_missing_file_part() {
    let app = TestApp::new();
    let body = multipart_body(BOUNDARY, &[("other", None, None, "value")]);

    let response = app
        .post_multipart("/api/v1/upload_file", BOUNDARY, body)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body.get("error").unwrap(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn upload_file_tolerates_missing_content_type() {
    let app = TestApp::new();
    let body = multipart_body(BOUNDARY, &[("file", Some("data.bin"), None, "bytes")]);

    let response = app
        .post_multipart("/api/v1/upload_file", BOUNDARY, body)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"filename": "data.bin", "file_content_type": null})
    );
}

#[tokio::test]
async fn form_and_upload_file_echoes_all_parts() {
    let app = TestApp::new();
    let body = multipart_body(
        BOUNDARY,
        &[
            ("username", None, None, "a"),
            ("password", None, None, "b"),
            ("file", Some("test.txt"), Some("text/plain"), "content"),
        ],
    );

    let response = app
        .post_multipart("/api/v1/form_and_upload_file", BOUNDARY, body)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "username": "a",
            "pwd": "b",
            "filename": "test.txt",
            "content_type": "text/plain",
        })
    );
}

#[tokio::test]
async fn form_and_upload_file_rejects_missing_file() {
    let app = TestApp::new();
    let body = multipart_body(
        BOUNDARY,
        &[("username", None, None, "a"), ("password", None, None, "b")],
    );

    let response = app
        .post_multipart("/api/v1/form_and_upload_file", BOUNDARY, body)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn form_and_upload_file_rejects_missing_username() {
    let app = TestApp::new();
    let body = multipart_body(
        BOUNDARY,
        &[
            ("password", None, None, "b"),
            ("file", Some("test.txt"), Some("text/plain"), "content"),
        ],
    );

    let response = app
        .post_multipart("/api/v1/form_and_upload_file", BOUNDARY, body)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let message = response.body.get("message").unwrap().as_str().unwrap();
    assert!(message.contains("username"));
}
