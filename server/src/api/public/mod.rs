pub mod auth;

use crate::api::{discover, vocab};
use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for public endpoints (no auth required)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/signup", post(auth::signup::signup))
        .route("/api/auth/login", post(auth::login::login))
        .route("/api/allergies", get(vocab::list_allergies))
        .route("/api/diets", get(vocab::list_diets))
        .route("/api/discover/random", get(discover::random::random_feed))
        .route("/api/discover/{id}", get(discover::get::recipe_detail))
}

#[derive(OpenApi)]
#[openapi(
    paths(auth::login::login, auth::logout::logout, auth::signup::signup),
    components(schemas(
        auth::login::LoginRequest,
        auth::login::LoginResponse,
        auth::signup::SignupRequest,
        auth::signup::SignupResponse,
    ))
)]
pub struct ApiDoc;
