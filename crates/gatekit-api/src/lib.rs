//! # gatekit-api
//!
//! HTTP API layer for GateKit built on Axum.
//!
//! Provides the endpoint registry, binding extractors with structured
//! rejections, DTOs, middleware (CORS, logging), OpenAPI document assembly,
//! and error mapping.

pub mod app;
pub mod docs;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use app::build_app;
