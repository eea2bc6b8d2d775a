//! Route definitions for the GateKit HTTP API.
//!
//! All binding endpoints are organized by family and mounted under
//! `/api/v1`. Handlers are stateless, so every route group is a plain
//! `Router` with no shared state.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use gatekit_core::config::AppConfig;

use crate::docs;
use crate::handlers;

/// Build the complete Axum router with all routes.
///
/// Pure assembly: calling this twice with the same configuration yields
/// two equivalent, independent routers.
pub fn build_router(config: &AppConfig) -> Router {
    let api_routes = Router::new()
        .merge(path_routes())
        .merge(query_routes())
        .merge(body_routes())
        .merge(form_routes())
        .merge(upload_routes())
        .merge(header_routes())
        .merge(health_routes());

    let mut router = Router::new()
        .nest("/api/v1", api_routes)
        .layer(DefaultBodyLimit::max(config.server.max_body_size_bytes as usize));

    if config.docs.enabled {
        router = router.merge(docs::build_docs_router(&config.docs));
    }

    router
}

/// Path parameter binding endpoints
fn path_routes() -> Router {
    Router::new()
        .route(
            "/path_param/{random_int}",
            get(handlers::path::echo_path_param),
        )
        .route(
            "/path_and_body/{path_int}",
            post(handlers::path::echo_path_and_body),
        )
}

/// Query parameter binding endpoints
fn query_routes() -> Router {
    Router::new()
        .route("/query", get(handlers::query::echo_query))
        .route(
            "/query_and_body",
            post(handlers::query::echo_query_and_body),
        )
        .route(
            "/query_and_body_path/{path}",
            post(handlers::query::echo_query_and_body_path),
        )
}

/// JSON body endpoints
fn body_routes() -> Router {
    Router::new()
        .route("/body", post(handlers::body::echo_body))
        .route("/list_model", get(handlers::body::list_model))
}

/// URL-encoded form endpoints
fn form_routes() -> Router {
    Router::new().route("/form_data", post(handlers::form::echo_form))
}

/// Multipart upload endpoints
fn upload_routes() -> Router {
    Router::new()
        .route("/upload_file", post(handlers::upload::upload_file))
        .route(
            "/form_and_upload_file",
            post(handlers::upload::form_and_upload_file),
        )
}

/// Header echo endpoints (GET and POST share one path)
fn header_routes() -> Router {
    Router::new().route(
        "/check_dependency_header",
        get(handlers::header::echo_api_key_header).post(handlers::header::echo_form_credentials),
    )
}

/// Health check endpoint
fn health_routes() -> Router {
    Router::new().route("/health", get(handlers::health::health_check))
}
