use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::NewUserRecipe;
use crate::schema::user_recipes;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateRecipeRequest {
    pub title: String,
    /// Optional; must be a well-formed URL when present.
    pub photo_url: Option<String>,
    pub ingredients: String,
    pub instructions: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreateRecipeResponse {
    pub id: Uuid,
}

#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe created successfully", body = CreateRecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_recipe(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Json(request): Json<CreateRecipeRequest>,
) -> impl IntoResponse {
    if request.title.trim().is_empty() {
        return bad_request("Title cannot be empty");
    }
    if request.ingredients.trim().is_empty() {
        return bad_request("Ingredients cannot be empty");
    }
    if request.instructions.trim().is_empty() {
        return bad_request("Instructions cannot be empty");
    }

    // Blank photo URLs from empty form fields are treated as absent.
    let photo_url = request
        .photo_url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty());
    if let Some(raw) = photo_url {
        if url::Url::parse(raw).is_err() {
            return bad_request("Photo URL is not a valid URL");
        }
    }

    let mut conn = get_conn!(pool);

    let new_recipe = NewUserRecipe {
        user_id: user.id,
        title: &request.title,
        photo_url,
        ingredients: &request.ingredients,
        instructions: &request.instructions,
    };

    match diesel::insert_into(user_recipes::table)
        .values(&new_recipe)
        .returning(user_recipes::id)
        .get_result::<Uuid>(&mut conn)
    {
        Ok(id) => (StatusCode::CREATED, Json(CreateRecipeResponse { id })).into_response(),
        Err(e) => {
            tracing::error!("Failed to create recipe: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn bad_request(message: &str) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}
