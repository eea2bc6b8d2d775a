//! Request DTOs.
//!
//! Each struct is a deserialization target for exactly one request
//! encoding; required fields are enforced by serde at the binding layer,
//! so handlers never re-check them.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// JSON body with one required integer and one required string field.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExamplePayload {
    /// Required integer field.
    pub example_int: i64,
    /// Required string field.
    pub example_str: String,
}

/// JSON body used by the path-and-body endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FooPayload {
    /// Required string field.
    pub foo: String,
    /// Required integer field.
    pub bar: i64,
}

/// URL-encoded credential pair.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginForm {
    /// Required username field.
    pub username: String,
    /// Required password field.
    pub password: String,
}

/// Required query-string pair shared by the query endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, IntoParams, ToSchema)]
pub struct BindingQuery {
    /// Must parse as an integer.
    pub query_int: i64,
    /// Arbitrary string value.
    pub query_str: String,
}

/// Multipart shape for the single-file upload endpoint.
///
/// Documentation only: the handler reads the parts directly from the
/// multipart stream and never buffers the file into this struct.
#[derive(Debug, ToSchema)]
pub struct FileUploadForm {
    /// The uploaded file part.
    #[schema(value_type = String, format = Binary)]
    pub file: String,
}

/// Multipart shape mixing scalar fields with one file part.
///
/// Documentation only, as with [`FileUploadForm`].
#[derive(Debug, ToSchema)]
pub struct FormWithUploadForm {
    /// Required username part.
    pub username: String,
    /// Required password part.
    pub password: String,
    /// The uploaded file part.
    #[schema(value_type = String, format = Binary)]
    pub file: String,
}
