use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::NewFavorite;
use crate::schema::fav_recipes;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use foodiefinds_core::SpoonacularClient;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AddFavoriteRequest {
    pub recipe_id: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AddFavoriteResponse {
    pub recipe_id: i64,
    /// Missing when the upstream detail fetch failed.
    pub title: Option<String>,
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/api/favorites",
    tag = "favorites",
    request_body = AddFavoriteRequest,
    responses(
        (status = 201, description = "Recipe favorited (idempotent)", body = AddFavoriteResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn add_favorite(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    State(recipes): State<Arc<SpoonacularClient>>,
    Json(request): Json<AddFavoriteRequest>,
) -> impl IntoResponse {
    if request.recipe_id <= 0 {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid recipe id".to_string(),
            }),
        )
            .into_response();
    }

    {
        let mut conn = get_conn!(pool);

        let row = NewFavorite {
            user_id: user.id,
            recipe_id: request.recipe_id,
        };

        // The composite key makes this idempotent: favoriting twice leaves
        // one row.
        if let Err(e) = diesel::insert_into(fav_recipes::table)
            .values(&row)
            .on_conflict_do_nothing()
            .execute(&mut conn)
        {
            tracing::error!("Failed to save favorite: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to save favorite".to_string(),
                }),
            )
                .into_response();
        }
    }

    // Title lookup is feedback only; a failed fetch does not undo the save.
    let (title, message) = match recipes.detail(request.recipe_id).await {
        Ok(detail) => {
            let message = format!("Added {} to your favorites", detail.title);
            (Some(detail.title), message)
        }
        Err(e) => {
            tracing::warn!(recipe_id = request.recipe_id, "Failed to fetch favorite title: {}", e);
            (
                None,
                "Recipe saved to favorites, but its details are currently unavailable".to_string(),
            )
        }
    };

    (
        StatusCode::CREATED,
        Json(AddFavoriteResponse {
            recipe_id: request.recipe_id,
            title,
            message,
        }),
    )
        .into_response()
}
