use serde::{Deserialize, Serialize};

/// A single search or feed result: just enough to render a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeHit {
    pub id: i64,
    pub title: String,
}

/// Outcome of a search against the recipe API.
///
/// An empty result list is its own variant so callers render a "no matches"
/// notice instead of an empty success page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Matches(Vec<RecipeHit>),
    NoMatches,
}

/// Full recipe detail as displayed to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDetail {
    pub id: i64,
    pub title: String,
    /// Empty string when the upstream payload has no image.
    pub image_url: String,
    /// Flattened display strings, one per ingredient.
    pub ingredients: Vec<String>,
    /// Plain text, markup stripped, one step per line.
    pub instructions: String,
}
