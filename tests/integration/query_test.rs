//! Integration tests for query parameter binding.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn query_echoes_both_parameters() {
    let app = TestApp::new();

    let response = app.get("/api/v1/query?query_int=3&query_str=hi").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"query_int": 3, "query_str": "hi"}));
}

#[tokio::test]
async fn query_rejects_missing_int_parameter() {
    let app = TestApp::new();

    let response = app.get("/api/v1/query?query_str=hi").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let message = response.body.get("message").unwrap().as_str().unwrap();
    assert!(
        message.contains("query_int"),
        "message should name the field: {message}"
    );
}

#[tokio::test]
async fn query_rejects_non_integer_parameter() {
    let app = TestApp::new();

    let response = app.get("/api/v1/query?query_int=abc&query_str=hi").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body.get("error").unwrap(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn query_and_body_merges_query_and_body_fields() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/v1/query_and_body?query_int=1&query_str=s",
            json!({"example_int": 5, "example_str": "x"}),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "query_int": 1,
            "query_str": "s",
            "example_int": 5,
            "example_str": "x",
        })
    );
}

#[tokio::test]
async fn query_and_body_rejects_missing_query_parameter() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/v1/query_and_body?query_str=s",
            json!({"example_int": 5, "example_str": "x"}),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn query_and_body_rejects_missing_body_field() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/v1/query_and_body?query_int=1&query_str=s",
            json!({"example_int": 5}),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let message = response.body.get("message").unwrap().as_str().unwrap();
    assert!(message.contains("example_str"));
}

#[tokio::test]
async fn query_and_body_path_merges_all_five_keys() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/v1/query_and_body_path/9?query_int=1&query_str=s",
            json!({"foo": "f", "bar": 2}),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "query_int": 1,
            "query_str": "s",
            "path": 9,
            "foo": "f",
            "bar": 2,
        })
    );
}

#[tokio::test]
async fn query_and_body_path_rejects_non_integer_segment() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/v1/query_and_body_path/nope?query_int=1&query_str=s",
            json!({"foo": "f", "bar": 2}),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
