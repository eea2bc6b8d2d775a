//! Custom Axum extractors.
//!
//! Thin wrappers around the framework extractors that convert every binding
//! rejection into an [`AppError`](gatekit_core::error::AppError), so a
//! missing or mistyped field produces the same structured error body as any
//! other client error. The framework's rejection message already names the
//! offending field and is carried through unchanged.

pub mod form;
pub mod json;
pub mod path;
pub mod query;

pub use form::Form;
pub use json::Json;
pub use path::Path;
pub use query::Query;
