//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use gatekit_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// Create a new test application from the default configuration
    pub fn new() -> Self {
        let config = AppConfig::default();
        Self {
            router: gatekit_api::build_app(&config),
        }
    }

    /// GET request with no extra headers
    pub async fn get(&self, path: &str) -> TestResponse {
        let req = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(req).await
    }

    /// GET request with one extra header
    pub async fn get_with_header(&self, path: &str, name: &str, value: &str) -> TestResponse {
        let req = Request::builder()
            .method("GET")
            .uri(path)
            .header(name, value)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(req).await
    }

    /// POST request with a JSON body
    pub async fn post_json(&self, path: &str, body: Value) -> TestResponse {
        let req = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");
        self.send(req).await
    }

    /// POST request with an URL-encoded form body
    pub async fn post_form(&self, path: &str, body: &str) -> TestResponse {
        let req = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");
        self.send(req).await
    }

    /// POST request with a multipart body
    pub async fn post_multipart(&self, path: &str, boundary: &str, body: String) -> TestResponse {
        let req = Request::builder()
            .method("POST")
            .uri(path)
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .expect("Failed to build request");
        self.send(req).await
    }

    /// CORS preflight request
    pub async fn preflight(&self, path: &str, origin: &str, method: &str) -> TestResponse {
        let req = Request::builder()
            .method("OPTIONS")
            .uri(path)
            .header("Origin", origin)
            .header("Access-Control-Request-Method", method)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body (null when the body is not JSON)
    pub body: Value,
}

/// Builds a multipart body from `(name, filename, content_type, value)` parts
pub fn multipart_body(
    boundary: &str,
    parts: &[(&str, Option<&str>, Option<&str>, &str)],
) -> String {
    let mut body = String::new();
    for (name, filename, content_type, value) in parts {
        body.push_str(&format!("--{boundary}\r\n"));
        body.push_str(&format!("Content-Disposition: form-data; name=\"{name}\""));
        if let Some(filename) = filename {
            body.push_str(&format!("; filename=\"{filename}\""));
        }
        body.push_str("\r\n");
        if let Some(content_type) = content_type {
            body.push_str(&format!("Content-Type: {content_type}\r\n"));
        }
        body.push_str("\r\n");
        body.push_str(value);
        body.push_str("\r\n");
    }
    body.push_str(&format!("--{boundary}--\r\n"));
    body
}
