//! API documentation configuration.

use serde::{Deserialize, Serialize};

/// OpenAPI document and Swagger UI configuration.
///
/// The bearer security scheme declared in the generated document is
/// documentation-only; no endpoint enforces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Whether the documentation routes are mounted.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Document title.
    #[serde(default = "default_title")]
    pub title: String,
    /// Document version.
    #[serde(default = "default_version")]
    pub version: String,
    /// Mount path for the Swagger UI.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            title: default_title(),
            version: default_version(),
            path: default_path(),
        }
    }
}

impl DocsConfig {
    /// URL at which the raw OpenAPI JSON document is served.
    pub fn spec_url(&self) -> String {
        format!("{}/openapi.json", self.path.trim_end_matches('/'))
    }
}

fn default_enabled() -> bool {
    true
}

fn default_title() -> String {
    "API Gateway".to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_path() -> String {
    "/docs".to_string()
}
