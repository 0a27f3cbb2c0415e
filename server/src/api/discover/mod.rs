//! Discovery routes backed by the external recipe API: random home feed,
//! preference-filtered search, and recipe detail.

pub mod get;
pub mod random;
pub mod search;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(random::random_feed, search::search_recipes, get::recipe_detail),
    components(schemas(
        random::FeedResponse,
        search::SearchResponse,
        search::SearchResult,
        get::RecipeDetailResponse,
    ))
)]
pub struct ApiDoc;
