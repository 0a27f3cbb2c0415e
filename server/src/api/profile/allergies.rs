use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{Allergy, NewUserAllergy};
use crate::schema::{allergies, user_allergies};
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
pub struct AddAllergyRequest {
    pub allergy_id: Uuid,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AllergyAddedResponse {
    pub allergy_id: Uuid,
    pub name: String,
}

#[utoipa::path(
    post,
    path = "/api/profile/allergies",
    tag = "profile",
    request_body = AddAllergyRequest,
    responses(
        (status = 201, description = "Allergy associated (idempotent)", body = AllergyAddedResponse),
        (status = 404, description = "Unknown allergy id", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn add_allergy(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Json(request): Json<AddAllergyRequest>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    // Only seeded vocabulary ids can be associated.
    let allergy: Option<Allergy> = match allergies::table
        .find(request.allergy_id)
        .select(Allergy::as_select())
        .first(&mut conn)
        .optional()
    {
        Ok(a) => a,
        Err(e) => {
            tracing::error!("Failed to look up allergy: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to add allergy".to_string(),
                }),
            )
                .into_response();
        }
    };

    let Some(allergy) = allergy else {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Unknown allergy".to_string(),
            }),
        )
            .into_response();
    };

    // Adding the same allergy twice leaves exactly one association row.
    let row = NewUserAllergy {
        user_id: user.id,
        allergy_id: allergy.id,
    };
    if let Err(e) = diesel::insert_into(user_allergies::table)
        .values(&row)
        .on_conflict_do_nothing()
        .execute(&mut conn)
    {
        tracing::error!("Failed to add allergy: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to add allergy".to_string(),
            }),
        )
            .into_response();
    }

    (
        StatusCode::CREATED,
        Json(AllergyAddedResponse {
            allergy_id: allergy.id,
            name: allergy.name,
        }),
    )
        .into_response()
}

#[utoipa::path(
    delete,
    path = "/api/profile/allergies/{id}",
    tag = "profile",
    params(
        ("id" = Uuid, Path, description = "Allergy ID")
    ),
    responses(
        (status = 204, description = "Association removed (or was already absent)"),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn remove_allergy(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    match diesel::delete(
        user_allergies::table
            .filter(user_allergies::user_id.eq(user.id))
            .filter(user_allergies::allergy_id.eq(id)),
    )
    .execute(&mut conn)
    {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!("Failed to remove allergy: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to remove allergy".to_string(),
                }),
            )
                .into_response()
        }
    }
}
