//! OpenAPI document assembly and Swagger UI mounting.

use axum::Router;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use gatekit_core::config::docs::DocsConfig;

use crate::dto::request::{
    BindingQuery, ExamplePayload, FileUploadForm, FooPayload, FormWithUploadForm, LoginForm,
};
use crate::dto::response::{
    CredentialsResponse, FormEchoResponse, FormUploadResponse, HeaderEchoResponse, HealthResponse,
    ListItem, PathAndBodyResponse, PathParamResponse, QueryAndBodyResponse, QueryBodyPathResponse,
    QueryEchoResponse, UploadResponse,
};
use crate::error::ApiErrorResponse;
use crate::handlers;

/// OpenAPI document covering the full endpoint registry.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "API Gateway",
        version = "1.0.0",
        description = "Request-binding demonstration endpoints"
    ),
    paths(
        handlers::path::echo_path_param,
        handlers::path::echo_path_and_body,
        handlers::query::echo_query,
        handlers::query::echo_query_and_body,
        handlers::query::echo_query_and_body_path,
        handlers::body::echo_body,
        handlers::body::list_model,
        handlers::form::echo_form,
        handlers::upload::upload_file,
        handlers::upload::form_and_upload_file,
        handlers::header::echo_api_key_header,
        handlers::header::echo_form_credentials,
        handlers::health::health_check,
    ),
    components(schemas(
        ExamplePayload,
        FooPayload,
        LoginForm,
        BindingQuery,
        FileUploadForm,
        FormWithUploadForm,
        PathParamResponse,
        PathAndBodyResponse,
        ListItem,
        QueryEchoResponse,
        QueryAndBodyResponse,
        QueryBodyPathResponse,
        FormEchoResponse,
        UploadResponse,
        FormUploadResponse,
        HeaderEchoResponse,
        CredentialsResponse,
        HealthResponse,
        ApiErrorResponse,
    )),
    modifiers(&SecurityAddon),
    security(("bearerAuth" = [])),
    tags(
        (name = "path", description = "Path parameter binding"),
        (name = "query", description = "Query parameter binding"),
        (name = "body", description = "JSON body binding"),
        (name = "form", description = "URL-encoded form binding"),
        (name = "upload", description = "Multipart file uploads"),
        (name = "header", description = "Header echo"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Declares the `bearerAuth` scheme in the document.
///
/// No route enforces the scheme; it is documentation only.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert(utoipa::openapi::Components::new());
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Paste your JWT here"))
                    .build(),
            ),
        );
    }
}

/// Builds the documentation router at the configured mount path.
///
/// The raw document is served at `{path}/openapi.json`; title and version
/// come from configuration rather than the compile-time defaults.
pub fn build_docs_router(config: &DocsConfig) -> Router {
    let mut openapi = ApiDoc::openapi();
    openapi.info.title = config.title.clone();
    openapi.info.version = config.version.clone();

    Router::new().merge(SwaggerUi::new(config.path.clone()).url(config.spec_url(), openapi))
}
