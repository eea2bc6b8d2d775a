//! Multipart upload handlers.
//!
//! Only part metadata is echoed. File bytes are left unread in the
//! multipart stream and are never buffered or persisted.

use axum::extract::Multipart;

use gatekit_core::error::AppError;

use crate::dto::request::{FileUploadForm, FormWithUploadForm};
use crate::dto::response::{FormUploadResponse, UploadResponse};
use crate::error::ApiErrorResponse;
use crate::extractors::Json;

/// POST /api/v1/upload_file
#[utoipa::path(
    post,
    path = "/api/v1/upload_file",
    tag = "upload",
    request_body(content = FileUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Uploaded file metadata", body = UploadResponse),
        (status = 400, description = "Missing file part", body = ApiErrorResponse),
    )
)]
pub async fn upload_file(mut multipart: Multipart) -> Result<Json<UploadResponse>, AppError> {
    let mut filename: Option<String> = None;
    let mut content_type: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        if field.name() == Some("file") {
            filename = field.file_name().map(String::from);
            content_type = field.content_type().map(String::from);
        }
    }

    let filename = filename.ok_or_else(|| AppError::validation("file part is required"))?;

    Ok(Json(UploadResponse {
        filename,
        file_content_type: content_type,
    }))
}

/// POST /api/v1/form_and_upload_file
#[utoipa::path(
    post,
    path = "/api/v1/form_and_upload_file",
    tag = "upload",
    request_body(content = FormWithUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Form fields and file metadata", body = FormUploadResponse),
        (status = 400, description = "Missing form or file part", body = ApiErrorResponse),
    )
)]
pub async fn form_and_upload_file(
    mut multipart: Multipart,
) -> Result<Json<FormUploadResponse>, AppError> {
    let mut username: Option<String> = None;
    let mut password: Option<String> = None;
    let mut filename: Option<String> = None;
    let mut content_type: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "username" => {
                username = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::validation(format!("Read error: {e}")))?,
                );
            }
            "password" => {
                password = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::validation(format!("Read error: {e}")))?,
                );
            }
            "file" => {
                filename = field.file_name().map(String::from);
                content_type = field.content_type().map(String::from);
            }
            _ => {}
        }
    }

    let username = username.ok_or_else(|| AppError::validation("username part is required"))?;
    let password = password.ok_or_else(|| AppError::validation("password part is required"))?;
    let filename = filename.ok_or_else(|| AppError::validation("file part is required"))?;

    Ok(Json(FormUploadResponse {
        username,
        pwd: password,
        filename,
        content_type,
    }))
}
