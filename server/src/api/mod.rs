pub mod account;
pub mod discover;
pub mod favorites;
pub mod profile;
pub mod public;
pub mod recipes;
pub mod testing;
pub mod vocab;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use foodiefinds_core::ApiError;
use serde::Serialize;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{OpenApi, ToSchema};

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Convert a recipe-API failure into a user-visible response.
///
/// Upstream trouble never crashes a handler; each failure class keeps its
/// own message so an outage reads differently from a bad payload.
pub fn upstream_error_response(err: &ApiError) -> Response {
    tracing::error!("Recipe API call failed: {}", err);

    let message = match err {
        ApiError::UpstreamStatus(status) => format!("Recipe service returned HTTP {}", status),
        ApiError::MalformedPayload(_) => {
            "Recipe service returned an unexpected payload".to_string()
        }
        ApiError::Request(_) => "Recipe service is unreachable".to_string(),
    };

    (StatusCode::BAD_GATEWAY, Json(ErrorResponse { error: message })).into_response()
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    // Base spec with shared components and security
    #[derive(OpenApi)]
    #[openapi(components(schemas(ErrorResponse)))]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    // Add security scheme
    if let Some(components) = spec.components.as_mut() {
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }

    // Merge in each module's spec
    let modules: Vec<utoipa::openapi::OpenApi> = vec![
        public::ApiDoc::openapi(),
        vocab::ApiDoc::openapi(),
        discover::ApiDoc::openapi(),
        favorites::ApiDoc::openapi(),
        recipes::ApiDoc::openapi(),
        profile::ApiDoc::openapi(),
        account::ApiDoc::openapi(),
        testing::ApiDoc::openapi(),
    ];

    for module_spec in modules {
        // Merge paths
        spec.paths.paths.extend(module_spec.paths.paths);

        // Merge components (schemas)
        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}
