//! HTTP client trait and implementations.

use async_trait::async_trait;
use reqwest::Url;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::FetchError;

/// A raw HTTP response: status code plus decoded body text.
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Trait for HTTP clients, enabling mockability in tests.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issue a GET request and return the response regardless of status code.
    async fn get(&self, url: &Url) -> Result<HttpResponse, FetchError>;
}

/// Production HTTP client backed by reqwest.
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        let inner = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (compatible; FoodieFinds/1.0)")
            .build()?;
        Ok(Self { inner })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &Url) -> Result<HttpResponse, FetchError> {
        let response = self.inner.get(url.clone()).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}

/// Mock response for testing.
#[derive(Clone)]
pub enum MockResponse {
    /// A body returned with the given status code.
    Body(u16, String),
    /// A transport-level failure.
    Error(String),
}

/// Mock HTTP client for testing.
///
/// Responses are keyed by the exact request URL, so tests exercise the full
/// query serialization, not just the response handling.
#[derive(Default)]
pub struct MockClient {
    responses: HashMap<String, MockResponse>,
}

impl MockClient {
    /// Create a new empty mock client.
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
        }
    }

    /// Add a response for a URL.
    pub fn with_response(mut self, url: &str, response: MockResponse) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    /// Add a 200 response with the given body for a URL.
    pub fn with_body(self, url: &str, body: &str) -> Self {
        self.with_response(url, MockResponse::Body(200, body.to_string()))
    }

    /// Add a non-200 response for a URL.
    pub fn with_status(self, url: &str, status: u16, body: &str) -> Self {
        self.with_response(url, MockResponse::Body(status, body.to_string()))
    }

    /// Add a transport error for a URL.
    pub fn with_error(self, url: &str, error: &str) -> Self {
        self.with_response(url, MockResponse::Error(error.to_string()))
    }
}

#[async_trait]
impl HttpClient for MockClient {
    async fn get(&self, url: &Url) -> Result<HttpResponse, FetchError> {
        match self.responses.get(url.as_str()) {
            Some(MockResponse::Body(status, body)) => Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            }),
            Some(MockResponse::Error(e)) => Err(FetchError::InvalidUrl(e.clone())),
            None => Err(FetchError::InvalidUrl(format!(
                "No mock response for URL: {}",
                url
            ))),
        }
    }
}
