//! HTTP error mapping.
//!
//! The `AppError → (StatusCode, Json<ApiErrorResponse>)` mapping and the
//! [`ApiErrorResponse`] body live in `gatekit-core` alongside `AppError`
//! (the `IntoResponse` impl must be defined in the crate that owns the
//! error type). They are re-exported here so the API crate's public
//! `error` path and the `crate::error::ApiErrorResponse` references in
//! handlers and docs continue to resolve.

pub use gatekit_core::error::ApiErrorResponse;
