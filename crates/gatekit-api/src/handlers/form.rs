//! URL-encoded form binding handlers.

use crate::dto::request::LoginForm;
use crate::dto::response::FormEchoResponse;
use crate::error::ApiErrorResponse;
use crate::extractors::{Form, Json};

/// POST /api/v1/form_data
#[utoipa::path(
    post,
    path = "/api/v1/form_data",
    tag = "form",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Echoed form fields", body = FormEchoResponse),
        (status = 400, description = "Missing form field", body = ApiErrorResponse),
    )
)]
pub async fn echo_form(Form(form): Form<LoginForm>) -> Json<FormEchoResponse> {
    Json(FormEchoResponse {
        foo: "bar".to_string(),
        username: form.username,
        password: form.password,
    })
}
