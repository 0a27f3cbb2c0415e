use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::schema::fav_recipes;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use foodiefinds_core::SpoonacularClient;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FavoriteItem {
    pub recipe_id: i64,
    /// Missing when the upstream detail fetch failed for this recipe.
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListFavoritesResponse {
    pub favorites: Vec<FavoriteItem>,
}

#[utoipa::path(
    get,
    path = "/api/favorites",
    tag = "favorites",
    responses(
        (status = 200, description = "The user's favorites, newest first", body = ListFavoritesResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_favorites(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    State(recipes): State<Arc<SpoonacularClient>>,
) -> impl IntoResponse {
    let ids: Vec<i64> = {
        let mut conn = get_conn!(pool);
        match fav_recipes::table
            .filter(fav_recipes::user_id.eq(user.id))
            .order(fav_recipes::created_at.desc())
            .select(fav_recipes::recipe_id)
            .load(&mut conn)
        {
            Ok(ids) => ids,
            Err(e) => {
                tracing::error!("Failed to fetch favorites: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Failed to fetch favorites".to_string(),
                    }),
                )
                    .into_response();
            }
        }
    };

    // One detail call per favorite. A failed call marks that row
    // unavailable instead of failing the whole page.
    let mut favorites = Vec::with_capacity(ids.len());
    for recipe_id in ids {
        let title = match recipes.detail(recipe_id).await {
            Ok(detail) => Some(detail.title),
            Err(e) => {
                tracing::warn!(recipe_id, "Failed to resolve favorite title: {}", e);
                None
            }
        };
        favorites.push(FavoriteItem { recipe_id, title });
    }

    Json(ListFavoritesResponse { favorites }).into_response()
}
