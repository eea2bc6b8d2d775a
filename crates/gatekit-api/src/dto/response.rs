//! Response DTOs.
//!
//! Every endpoint returns one of these structs verbatim; the key set of
//! each struct is the endpoint's full contract. Merged responses carry the
//! body's own key names, and `PathAndBodyResponse.foo` comes from the body
//! (the merge overwrites the `"bar"` literal).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Echo of a single integer path segment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PathParamResponse {
    /// Fixed marker value, always `"bar"`.
    pub foo: String,
    /// The bound path segment.
    pub custom_int: i64,
}

/// Merge of a path segment and a [`FooPayload`](crate::dto::request::FooPayload) body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PathAndBodyResponse {
    /// The body's `foo` field.
    pub foo: String,
    /// The bound path segment.
    pub path_int: i64,
    /// The body's `bar` field.
    pub bar: i64,
}

/// Element of the fixed list returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListItem {
    /// The element value.
    pub foo_key: String,
}

/// Echo of an integer/string pair, used for both the query endpoint and the
/// JSON-body endpoint (which maps `example_int`/`example_str` onto it).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QueryEchoResponse {
    /// The integer value.
    pub query_int: i64,
    /// The string value.
    pub query_str: String,
}

/// Merge of query parameters with an `ExamplePayload` body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QueryAndBodyResponse {
    /// The bound `query_int` parameter.
    pub query_int: i64,
    /// The bound `query_str` parameter.
    pub query_str: String,
    /// The body's `example_int` field.
    pub example_int: i64,
    /// The body's `example_str` field.
    pub example_str: String,
}

/// Merge of a path segment, query parameters, and a `FooPayload` body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QueryBodyPathResponse {
    /// The bound `query_int` parameter.
    pub query_int: i64,
    /// The bound `query_str` parameter.
    pub query_str: String,
    /// The bound path segment.
    pub path: i64,
    /// The body's `foo` field.
    pub foo: String,
    /// The body's `bar` field.
    pub bar: i64,
}

/// Echo of an URL-encoded credential form.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FormEchoResponse {
    /// Fixed marker value, always `"bar"`.
    pub foo: String,
    /// The form's `username` field.
    pub username: String,
    /// The form's `password` field.
    pub password: String,
}

/// Metadata of an uploaded file part. The file content is never echoed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    /// Client-supplied filename.
    pub filename: String,
    /// Client-supplied content type, `null` when the part carried none.
    pub file_content_type: Option<String>,
}

/// Metadata of a mixed multipart form: scalar fields plus one file part.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FormUploadResponse {
    /// The form's `username` part.
    pub username: String,
    /// The form's `password` part.
    pub pwd: String,
    /// Client-supplied filename.
    pub filename: String,
    /// Client-supplied content type, `null` when the part carried none.
    pub content_type: Option<String>,
}

/// Echo of an optional request header. Absence is not an error.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HeaderEchoResponse {
    /// The `x-api-key` header value, `null` when the header is absent.
    pub header: Option<String>,
    /// Fixed marker value, always `"bar"`.
    pub foo: String,
}

/// Echo of an URL-encoded credential pair.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CredentialsResponse {
    /// The form's `username` field.
    pub username: String,
    /// The form's `password` field.
    pub password: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status, `"ok"` when serving.
    pub status: String,
    /// Crate version.
    pub version: String,
}
