//! The recipe API façade.

use reqwest::Url;
use std::sync::Arc;

use crate::error::{ApiError, FetchError};
use crate::extract;
use crate::http::{HttpClient, ReqwestClient};
use crate::query::{SearchQuery, MAX_RESULT_COUNT};
use crate::types::{RecipeDetail, RecipeHit, SearchOutcome};

pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";

/// Client for the Spoonacular recipe API.
///
/// Generic over [`HttpClient`] so tests can drive it with canned responses.
pub struct SpoonacularClient {
    http: Arc<dyn HttpClient>,
    base_url: Url,
    api_key: String,
}

impl SpoonacularClient {
    /// Create a client against the production API.
    pub fn new(api_key: impl Into<String>) -> Result<Self, FetchError> {
        let http = ReqwestClient::new()?;
        let base_url = Url::parse(DEFAULT_BASE_URL).expect("Invalid default base URL");
        Ok(Self::with_http(Arc::new(http), base_url, api_key))
    }

    /// Create a client with an explicit transport and base URL.
    pub fn with_http(
        http: Arc<dyn HttpClient>,
        base_url: Url,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Search for recipes matching the query's terms and filters.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchOutcome, ApiError> {
        let mut url = self.endpoint(&["recipes", "complexSearch"]);
        query.apply_to(&mut url);
        url.query_pairs_mut().append_pair("apiKey", &self.api_key);

        tracing::debug!(count = query.result_count(), "searching recipes");
        let json = self.get_json(&url).await?;
        extract::extract_search_results(&json)
    }

    /// Fetch a feed of random recipes for the discovery page.
    pub async fn random_feed(&self, number: u32) -> Result<Vec<RecipeHit>, ApiError> {
        let mut url = self.endpoint(&["recipes", "random"]);
        url.query_pairs_mut()
            .append_pair("limitLicense", "true")
            .append_pair("number", &number.clamp(1, MAX_RESULT_COUNT).to_string())
            .append_pair("apiKey", &self.api_key);

        tracing::debug!(number, "fetching random feed");
        let json = self.get_json(&url).await?;
        extract::extract_random_feed(&json)
    }

    /// Fetch full detail for one recipe.
    pub async fn detail(&self, recipe_id: i64) -> Result<RecipeDetail, ApiError> {
        let mut url = self.endpoint(&["recipes", &recipe_id.to_string(), "information"]);
        url.query_pairs_mut()
            .append_pair("includeNutrition", "false")
            .append_pair("apiKey", &self.api_key);

        tracing::debug!(recipe_id, "fetching recipe detail");
        let json = self.get_json(&url).await?;
        extract::extract_detail(recipe_id, &json)
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .expect("Base URL cannot be a base")
            .extend(segments);
        url
    }

    async fn get_json(&self, url: &Url) -> Result<serde_json::Value, ApiError> {
        // Don't log the URL itself: the query string carries the API key.
        let response = self.http.get(url).await?;
        if response.status != 200 {
            return Err(ApiError::UpstreamStatus(response.status));
        }
        extract::parse_json(&response.body)
    }
}
