use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::prefs;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    /// Allergy labels currently associated; empty when none.
    pub allergies: Vec<String>,
    /// Diet labels currently associated; empty when none.
    pub diets: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "profile",
    responses(
        (status = 200, description = "The signed-in user's profile", body = ProfileResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_profile(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let preferences = match prefs::load_preferences(&mut conn, user.id) {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("Failed to load preferences: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to load preferences".to_string(),
                }),
            )
                .into_response();
        }
    };

    Json(ProfileResponse {
        user_id: user.id,
        username: user.username,
        email: user.email,
        allergies: preferences.allergies,
        diets: preferences.diets,
    })
    .into_response()
}
