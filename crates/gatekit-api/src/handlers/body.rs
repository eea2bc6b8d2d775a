//! JSON body binding handlers.

use crate::dto::request::ExamplePayload;
use crate::dto::response::{ListItem, QueryEchoResponse};
use crate::error::ApiErrorResponse;
use crate::extractors::Json;

/// POST /api/v1/body
///
/// Maps `example_int`/`example_str` onto the `query_int`/`query_str` echo
/// shape.
#[utoipa::path(
    post,
    path = "/api/v1/body",
    tag = "body",
    request_body = ExamplePayload,
    responses(
        (status = 200, description = "Echoed body fields", body = QueryEchoResponse),
        (status = 400, description = "Missing or mistyped body field", body = ApiErrorResponse),
    )
)]
pub async fn echo_body(Json(payload): Json<ExamplePayload>) -> Json<QueryEchoResponse> {
    Json(QueryEchoResponse {
        query_int: payload.example_int,
        query_str: payload.example_str,
    })
}

/// GET /api/v1/list_model
#[utoipa::path(
    get,
    path = "/api/v1/list_model",
    tag = "body",
    responses(
        (status = 200, description = "Fixed two-element sequence", body = [ListItem]),
    )
)]
pub async fn list_model() -> Json<Vec<ListItem>> {
    Json(vec![
        ListItem {
            foo_key: "foo".to_string(),
        },
        ListItem {
            foo_key: "bar".to_string(),
        },
    ])
}
