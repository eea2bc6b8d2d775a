//! Query parameter binding handlers.

use crate::dto::request::{BindingQuery, ExamplePayload, FooPayload};
use crate::dto::response::{QueryAndBodyResponse, QueryBodyPathResponse, QueryEchoResponse};
use crate::error::ApiErrorResponse;
use crate::extractors::{Json, Path, Query};

/// GET /api/v1/query
#[utoipa::path(
    get,
    path = "/api/v1/query",
    tag = "query",
    params(BindingQuery),
    responses(
        (status = 200, description = "Echoed query parameters", body = QueryEchoResponse),
        (status = 400, description = "Missing or mistyped parameter", body = ApiErrorResponse),
    )
)]
pub async fn echo_query(Query(params): Query<BindingQuery>) -> Json<QueryEchoResponse> {
    Json(QueryEchoResponse {
        query_int: params.query_int,
        query_str: params.query_str,
    })
}

/// POST /api/v1/query_and_body
#[utoipa::path(
    post,
    path = "/api/v1/query_and_body",
    tag = "query",
    params(BindingQuery),
    request_body = ExamplePayload,
    responses(
        (status = 200, description = "Merged query and body fields", body = QueryAndBodyResponse),
        (status = 400, description = "Missing parameter or body field", body = ApiErrorResponse),
    )
)]
pub async fn echo_query_and_body(
    Query(params): Query<BindingQuery>,
    Json(payload): Json<ExamplePayload>,
) -> Json<QueryAndBodyResponse> {
    Json(QueryAndBodyResponse {
        query_int: params.query_int,
        query_str: params.query_str,
        example_int: payload.example_int,
        example_str: payload.example_str,
    })
}

/// POST /api/v1/query_and_body_path/{path}
#[utoipa::path(
    post,
    path = "/api/v1/query_and_body_path/{path}",
    tag = "query",
    params(
        ("path" = i64, Path, description = "Integer segment echoed back"),
        BindingQuery,
    ),
    request_body = FooPayload,
    responses(
        (status = 200, description = "Merged path, query, and body fields", body = QueryBodyPathResponse),
        (status = 400, description = "Missing or mistyped input", body = ApiErrorResponse),
    )
)]
pub async fn echo_query_and_body_path(
    Path(path): Path<i64>,
    Query(params): Query<BindingQuery>,
    Json(payload): Json<FooPayload>,
) -> Json<QueryBodyPathResponse> {
    Json(QueryBodyPathResponse {
        query_int: params.query_int,
        query_str: params.query_str,
        path,
        foo: payload.foo,
        bar: payload.bar,
    })
}
