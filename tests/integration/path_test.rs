//! Integration tests for path parameter binding.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn path_param_echoes_integer() {
    let app = TestApp::new();

    let response = app.get("/api/v1/path_param/42").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"foo": "bar", "custom_int": 42}));
}

#[tokio::test]
async fn path_param_accepts_negative_integer() {
    let app = TestApp::new();

    let response = app.get("/api/v1/path_param/-7").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"foo": "bar", "custom_int": -7}));
}

#[tokio::test]
async fn path_param_rejects_non_integer_segment() {
    let app = TestApp::new();

    let response = app.get("/api/v1/path_param/abc").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body.get("error").unwrap(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn path_and_body_merges_exactly_three_keys() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/v1/path_and_body/7", json!({"foo": "hello", "bar": 3}))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"foo": "hello", "path_int": 7, "bar": 3})
    );
}

#[tokio::test]
async fn path_and_body_rejects_missing_body_field() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/v1/path_and_body/7", json!({"foo": "hello"}))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let message = response.body.get("message").unwrap().as_str().unwrap();
    assert!(message.contains("bar"), "message should name the field: {message}");
}

#[tokio::test]
async fn path_and_body_rejects_non_integer_segment() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/v1/path_and_body/not-a-number",
            json!({"foo": "hello", "bar": 3}),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
