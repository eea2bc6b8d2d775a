//! Path parameter binding handlers.

use crate::dto::request::FooPayload;
use crate::dto::response::{PathAndBodyResponse, PathParamResponse};
use crate::error::ApiErrorResponse;
use crate::extractors::{Json, Path};

/// GET /api/v1/path_param/{random_int}
#[utoipa::path(
    get,
    path = "/api/v1/path_param/{random_int}",
    tag = "path",
    params(("random_int" = i64, Path, description = "Integer segment echoed back")),
    responses(
        (status = 200, description = "Echoed path parameter", body = PathParamResponse),
        (status = 400, description = "Segment is not an integer", body = ApiErrorResponse),
    )
)]
pub async fn echo_path_param(Path(random_int): Path<i64>) -> Json<PathParamResponse> {
    Json(PathParamResponse {
        foo: "bar".to_string(),
        custom_int: random_int,
    })
}

/// POST /api/v1/path_and_body/{path_int}
///
/// The body's `foo` replaces the fixed marker in the merged response, so
/// the result carries exactly three keys.
#[utoipa::path(
    post,
    path = "/api/v1/path_and_body/{path_int}",
    tag = "path",
    params(("path_int" = i64, Path, description = "Integer segment echoed back")),
    request_body = FooPayload,
    responses(
        (status = 200, description = "Merged path and body fields", body = PathAndBodyResponse),
        (status = 400, description = "Invalid segment or body", body = ApiErrorResponse),
    )
)]
pub async fn echo_path_and_body(
    Path(path_int): Path<i64>,
    Json(payload): Json<FooPayload>,
) -> Json<PathAndBodyResponse> {
    Json(PathAndBodyResponse {
        foo: payload.foo,
        path_int,
        bar: payload.bar,
    })
}
