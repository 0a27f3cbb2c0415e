//! The fixed allergy/diet vocabulary, exposed for populating the profile
//! edit form.

use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{Allergy, DietPref};
use crate::schema::{allergies, diet_prefs};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VocabItem {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VocabResponse {
    pub items: Vec<VocabItem>,
}

#[utoipa::path(
    get,
    path = "/api/allergies",
    tag = "vocab",
    responses(
        (status = 200, description = "Allergy vocabulary", body = VocabResponse)
    )
)]
pub async fn list_allergies(State(pool): State<Arc<DbPool>>) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    match allergies::table
        .order(allergies::name.asc())
        .select(Allergy::as_select())
        .load(&mut conn)
    {
        Ok(rows) => Json(VocabResponse {
            items: rows
                .into_iter()
                .map(|a| VocabItem {
                    id: a.id,
                    name: a.name,
                })
                .collect(),
        })
        .into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch allergies: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch allergies".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/diets",
    tag = "vocab",
    responses(
        (status = 200, description = "Diet vocabulary", body = VocabResponse)
    )
)]
pub async fn list_diets(State(pool): State<Arc<DbPool>>) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    match diet_prefs::table
        .order(diet_prefs::name.asc())
        .select(DietPref::as_select())
        .load(&mut conn)
    {
        Ok(rows) => Json(VocabResponse {
            items: rows
                .into_iter()
                .map(|d| VocabItem {
                    id: d.id,
                    name: d.name,
                })
                .collect(),
        })
        .into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch diets: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch diets".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(list_allergies, list_diets),
    components(schemas(VocabItem, VocabResponse))
)]
pub struct ApiDoc;
