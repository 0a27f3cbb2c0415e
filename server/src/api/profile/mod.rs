//! The signed-in user's profile: identity fields plus allergy/diet
//! associations.

pub mod allergies;
pub mod diets;
pub mod get;
pub mod update;

use crate::AppState;
use axum::routing::{delete, get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/profile endpoints (mounted at /api/profile)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get::get_profile).put(update::update_profile))
        .route("/allergies", post(allergies::add_allergy))
        .route("/allergies/{id}", delete(allergies::remove_allergy))
        .route("/diets", post(diets::add_diet))
        .route("/diets/{id}", delete(diets::remove_diet))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        get::get_profile,
        update::update_profile,
        allergies::add_allergy,
        allergies::remove_allergy,
        diets::add_diet,
        diets::remove_diet,
    ),
    components(schemas(
        get::ProfileResponse,
        update::UpdateProfileRequest,
        allergies::AddAllergyRequest,
        allergies::AllergyAddedResponse,
        diets::AddDietRequest,
        diets::DietAddedResponse,
    ))
)]
pub struct ApiDoc;
