use crate::api::upstream_error_response;
use crate::api::ErrorResponse;
use axum::{extract::State, response::IntoResponse, Json};
use foodiefinds_core::SpoonacularClient;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// Number of recipes on the discovery feed.
const FEED_SIZE: u32 = 10;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FeedResponse {
    pub results: Vec<super::search::SearchResult>,
}

#[utoipa::path(
    get,
    path = "/api/discover/random",
    tag = "discover",
    responses(
        (status = 200, description = "Random recipe feed", body = FeedResponse),
        (status = 502, description = "Recipe service failure", body = ErrorResponse)
    )
)]
pub async fn random_feed(State(recipes): State<Arc<SpoonacularClient>>) -> impl IntoResponse {
    match recipes.random_feed(FEED_SIZE).await {
        Ok(hits) => Json(FeedResponse {
            results: hits
                .into_iter()
                .map(|hit| super::search::SearchResult {
                    id: hit.id,
                    title: hit.title,
                })
                .collect(),
        })
        .into_response(),
        Err(e) => upstream_error_response(&e),
    }
}
