//! Header echo handlers.

use axum::http::HeaderMap;

use crate::dto::request::LoginForm;
use crate::dto::response::{CredentialsResponse, HeaderEchoResponse};
use crate::error::ApiErrorResponse;
use crate::extractors::{Form, Json};

/// GET /api/v1/check_dependency_header
///
/// A missing `x-api-key` header is tolerated and echoed as `null`.
#[utoipa::path(
    get,
    path = "/api/v1/check_dependency_header",
    tag = "header",
    responses(
        (status = 200, description = "Echoed header value or null", body = HeaderEchoResponse),
    )
)]
pub async fn echo_api_key_header(headers: HeaderMap) -> Json<HeaderEchoResponse> {
    let header = headers
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    Json(HeaderEchoResponse {
        header,
        foo: "bar".to_string(),
    })
}

/// POST /api/v1/check_dependency_header
#[utoipa::path(
    post,
    path = "/api/v1/check_dependency_header",
    tag = "header",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Echoed credentials", body = CredentialsResponse),
        (status = 400, description = "Missing form field", body = ApiErrorResponse),
    )
)]
pub async fn echo_form_credentials(Form(form): Form<LoginForm>) -> Json<CredentialsResponse> {
    Json(CredentialsResponse {
        username: form.username,
        password: form.password,
    })
}
