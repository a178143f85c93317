//! HTTP page fetching with timeouts
//!
//! Fetches result pages and flattens them to text. Failures never escape:
//! they become a placeholder string plus a classified [`FetchError`].

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, error, info, warn};

use super::config::{ContentFetchConfig, DEFAULT_MAX_CHARS_PER_PAGE};
use super::extractor::extract_text_with_limit;

/// A fetched page: always displayable, optionally carrying the failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchedPage {
    pub url: String,
    /// Extracted text, or the failure placeholder
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FetchError>,
}

impl FetchedPage {
    pub fn success(url: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content: content.into(),
            error: None,
        }
    }

    /// Placeholder page whose content is the error's description
    pub fn failure(error: FetchError) -> Self {
        Self {
            url: error.url().to_string(),
            content: error.to_string(),
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }
}

/// Content fetch error types
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FetchError {
    /// Request timed out
    Timeout { url: String },
    /// HTTP non-success status
    HttpStatus { url: String, status: u16 },
    /// Connection, protocol or body errors
    Request { url: String, message: String },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            Self::Timeout { url } | Self::HttpStatus { url, .. } | Self::Request { url, .. } => url,
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout { url } => write!(f, "Timeout error fetching {}", url),
            Self::HttpStatus { url, status } => write!(f, "HTTP error fetching {}: {}", url, status),
            Self::Request { url, message } => write!(f, "Error fetching {}: {}", url, message),
        }
    }
}

impl std::error::Error for FetchError {}

/// Anything that can turn a URL into a [`FetchedPage`]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch a page. Must not fail; failures are folded into the page.
    async fn fetch(&self, url: &str) -> FetchedPage;
}

/// reqwest-backed page fetcher
pub struct ContentFetcher {
    client: Client,
    config: ContentFetchConfig,
}

impl ContentFetcher {
    /// Create a new content fetcher
    pub fn new(config: ContentFetchConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, config })
    }

    /// Fetch and extract a single URL, reporting failures as errors
    pub async fn fetch_content(&self, url: &str) -> Result<String, FetchError> {
        let classify = |e: reqwest::Error| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Request {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            }
        };

        debug!(url, "Fetching content from: {}", url);

        let response = self.client.get(url).send().await.map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // Body is treated as HTML whatever the declared content type
        let html = response.text().await.map_err(classify)?;

        let limit = self.config.max_chars_per_page.min(DEFAULT_MAX_CHARS_PER_PAGE);
        Ok(extract_text_with_limit(&html, limit))
    }

    /// Get the configuration
    pub fn config(&self) -> &ContentFetchConfig {
        &self.config
    }
}

#[async_trait]
impl PageFetcher for ContentFetcher {
    async fn fetch(&self, url: &str) -> FetchedPage {
        let start = Instant::now();
        match self.fetch_content(url).await {
            Ok(text) => {
                info!(
                    url,
                    chars = text.chars().count(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Extracted {} characters from {}",
                    text.chars().count(),
                    url
                );
                FetchedPage::success(url, text)
            }
            Err(e) => {
                match &e {
                    FetchError::Timeout { .. } => warn!(url, "Timeout fetching {}", url),
                    FetchError::HttpStatus { status, .. } => {
                        warn!(url, status, "HTTP error fetching {}: {}", url, status)
                    }
                    FetchError::Request { message, .. } => {
                        error!(url, "Unexpected error fetching {}: {}", url, message)
                    }
                }
                FetchedPage::failure(e)
            }
        }
    }
}
