//! Client library for the external recipe API.
//!
//! The server composes three pieces from here: [`SearchQuery`] (translating a
//! user's preference labels into request parameters), [`SpoonacularClient`]
//! (the outbound façade), and the extraction layer that maps upstream JSON
//! and HTML-bearing instruction fields into plain display records.

pub mod client;
pub mod error;
pub mod extract;
pub mod http;
pub mod query;
pub mod types;

pub use client::{SpoonacularClient, DEFAULT_BASE_URL};
pub use error::{ApiError, FetchError};
pub use extract::instructions_to_text;
pub use http::{HttpClient, HttpResponse, MockClient, MockResponse, ReqwestClient};
pub use query::{ResultOrder, SearchQuery, DEFAULT_RESULT_COUNT, MAX_RESULT_COUNT};
pub use types::{RecipeDetail, RecipeHit, SearchOutcome};
