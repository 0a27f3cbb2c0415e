pub mod delete;

use crate::AppState;
use axum::routing::delete as method_delete;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/account endpoints (mounted at /api/account)
pub fn router() -> Router<AppState> {
    Router::new().route("/", method_delete(delete::delete_account))
}

#[derive(OpenApi)]
#[openapi(paths(delete::delete_account))]
pub struct ApiDoc;
