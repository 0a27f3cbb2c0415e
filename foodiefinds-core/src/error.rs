use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid response encoding: {0}")]
    InvalidEncoding(String),
}

/// Errors surfaced by the recipe API façade.
///
/// `UpstreamStatus` and `MalformedPayload` are distinct conditions so callers
/// can show the status code for the former and a "bad payload" notice for the
/// latter instead of treating every failure the same way.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] FetchError),

    #[error("Recipe API returned HTTP {0}")]
    UpstreamStatus(u16),

    #[error("Malformed upstream payload: {0}")]
    MalformedPayload(String),
}
