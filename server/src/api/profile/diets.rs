use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{DietPref, NewUserDietPref};
use crate::schema::{diet_prefs, user_diet_prefs};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AddDietRequest {
    pub diet_id: Uuid,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DietAddedResponse {
    pub diet_id: Uuid,
    pub name: String,
}

#[utoipa::path(
    post,
    path = "/api/profile/diets",
    tag = "profile",
    request_body = AddDietRequest,
    responses(
        (status = 201, description = "Diet associated (idempotent)", body = DietAddedResponse),
        (status = 404, description = "Unknown diet id", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn add_diet(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Json(request): Json<AddDietRequest>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let diet: Option<DietPref> = match diet_prefs::table
        .find(request.diet_id)
        .select(DietPref::as_select())
        .first(&mut conn)
        .optional()
    {
        Ok(d) => d,
        Err(e) => {
            tracing::error!("Failed to look up diet: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to add diet".to_string(),
                }),
            )
                .into_response();
        }
    };

    let Some(diet) = diet else {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Unknown diet".to_string(),
            }),
        )
            .into_response();
    };

    let row = NewUserDietPref {
        user_id: user.id,
        diet_pref_id: diet.id,
    };
    if let Err(e) = diesel::insert_into(user_diet_prefs::table)
        .values(&row)
        .on_conflict_do_nothing()
        .execute(&mut conn)
    {
        tracing::error!("Failed to add diet: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to add diet".to_string(),
            }),
        )
            .into_response();
    }

    (
        StatusCode::CREATED,
        Json(DietAddedResponse {
            diet_id: diet.id,
            name: diet.name,
        }),
    )
        .into_response()
}

#[utoipa::path(
    delete,
    path = "/api/profile/diets/{id}",
    tag = "profile",
    params(
        ("id" = Uuid, Path, description = "Diet ID")
    ),
    responses(
        (status = 204, description = "Association removed (or was already absent)"),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn remove_diet(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    match diesel::delete(
        user_diet_prefs::table
            .filter(user_diet_prefs::user_id.eq(user.id))
            .filter(user_diet_prefs::diet_pref_id.eq(id)),
    )
    .execute(&mut conn)
    {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!("Failed to remove diet: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to remove diet".to_string(),
                }),
            )
                .into_response()
        }
    }
}
