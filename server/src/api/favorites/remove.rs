use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::schema::fav_recipes;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use std::sync::Arc;

#[utoipa::path(
    delete,
    path = "/api/favorites/{recipe_id}",
    tag = "favorites",
    params(
        ("recipe_id" = i64, Path, description = "External recipe ID")
    ),
    responses(
        (status = 204, description = "Favorite removed (or was already absent)"),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn remove_favorite(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(recipe_id): Path<i64>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    // Removing a favorite that does not exist is a no-op, not an error.
    match diesel::delete(
        fav_recipes::table
            .filter(fav_recipes::user_id.eq(user.id))
            .filter(fav_recipes::recipe_id.eq(recipe_id)),
    )
    .execute(&mut conn)
    {
        Ok(removed) => {
            if removed == 0 {
                tracing::debug!(recipe_id, "favorite already absent");
            }
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            tracing::error!("Failed to remove favorite: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to remove favorite".to_string(),
                }),
            )
                .into_response()
        }
    }
}
