use crate::api::{upstream_error_response, ErrorResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use foodiefinds_core::{ApiError, SpoonacularClient};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeDetailResponse {
    pub id: i64,
    pub title: String,
    /// Empty when the upstream payload carries no image.
    pub image_url: String,
    pub ingredients: Vec<String>,
    /// Plain text, one step per line.
    pub instructions: String,
}

#[utoipa::path(
    get,
    path = "/api/discover/{id}",
    tag = "discover",
    params(
        ("id" = i64, Path, description = "External recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe detail", body = RecipeDetailResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 502, description = "Recipe service failure", body = ErrorResponse)
    )
)]
pub async fn recipe_detail(
    State(recipes): State<Arc<SpoonacularClient>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match recipes.detail(id).await {
        Ok(detail) => Json(RecipeDetailResponse {
            id: detail.id,
            title: detail.title,
            image_url: detail.image_url,
            ingredients: detail.ingredients,
            instructions: detail.instructions,
        })
        .into_response(),
        // An unknown id upstream is a 404 here, not a gateway error.
        Err(ApiError::UpstreamStatus(404)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Recipe not found".to_string(),
            }),
        )
            .into_response(),
        Err(e) => upstream_error_response(&e),
    }
}
