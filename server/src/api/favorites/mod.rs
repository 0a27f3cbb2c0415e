pub mod add;
pub mod list;
pub mod remove;

use crate::AppState;
use axum::routing::{delete, get};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/favorites endpoints (mounted at /api/favorites)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_favorites).post(add::add_favorite))
        .route("/{recipe_id}", delete(remove::remove_favorite))
}

#[derive(OpenApi)]
#[openapi(
    paths(add::add_favorite, list::list_favorites, remove::remove_favorite),
    components(schemas(
        add::AddFavoriteRequest,
        add::AddFavoriteResponse,
        list::FavoriteItem,
        list::ListFavoritesResponse,
    ))
)]
pub struct ApiDoc;
