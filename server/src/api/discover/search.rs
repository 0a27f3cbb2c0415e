use crate::api::{upstream_error_response, ErrorResponse};
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::prefs;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use foodiefinds_core::{ResultOrder, SearchOutcome, SpoonacularClient};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Free-text search terms
    pub q: Option<String>,
    /// Comma-separated ingredients the results must include
    pub ingredients: Option<String>,
    /// Result-count cap (default: 10, max: 100)
    pub limit: Option<u32>,
    /// Return results in random order instead of relevance order
    pub shuffle: Option<bool>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchResult {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

#[utoipa::path(
    get,
    path = "/api/discover/search",
    tag = "discover",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching recipes", body = SearchResponse),
        (status = 404, description = "No recipes matched", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 502, description = "Recipe service failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn search_recipes(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    State(recipes): State<Arc<SpoonacularClient>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    // Resolve preferences first and release the connection before the
    // outbound call.
    let preferences = {
        let mut conn = get_conn!(pool);
        match prefs::load_preferences(&mut conn, user.id) {
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
        }
    };

    let include_ingredients = params
        .ingredients
        .as_deref()
        .map(split_labels)
        .unwrap_or_default();
    let mut query = preferences.into_query(params.q, include_ingredients);
    query.number = params.limit;
    if params.shuffle.unwrap_or(false) {
        query.order = ResultOrder::Random;
    }

    match recipes.search(&query).await {
        Ok(SearchOutcome::Matches(hits)) => Json(SearchResponse {
            results: hits
                .into_iter()
                .map(|hit| SearchResult {
                    id: hit.id,
                    title: hit.title,
                })
                .collect(),
        })
        .into_response(),
        Ok(SearchOutcome::NoMatches) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "No recipes matched your search".to_string(),
            }),
        )
            .into_response(),
        Err(e) => upstream_error_response(&e),
    }
}

fn split_labels(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_labels_trims_and_drops_empties() {
        assert_eq!(
            split_labels("tomato, basil , ,olive oil"),
            vec!["tomato", "basil", "olive oil"]
        );
        assert!(split_labels("").is_empty());
        assert!(split_labels(" , ").is_empty());
    }
}
