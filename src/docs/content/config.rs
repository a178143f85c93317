//! Configuration for page fetching
//!
//! Defines timeouts, text limits and fetch concurrency.

use std::env;
use std::time::Duration;

use crate::docs::config::USER_AGENT;

/// Maximum characters of extracted text kept per page
pub const DEFAULT_MAX_CHARS_PER_PAGE: usize = 10_000;

/// Configuration for page fetching
#[derive(Debug, Clone)]
pub struct ContentFetchConfig {
    /// Timeout per page fetch in seconds (default: 30)
    pub timeout_per_page_secs: u64,
    /// Maximum characters per page (default: 10000)
    pub max_chars_per_page: usize,
    /// Pages fetched at once during a lookup (default: 1, i.e. sequential)
    pub max_concurrent_fetches: usize,
    /// User-Agent header value
    pub user_agent: String,
}

impl ContentFetchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            timeout_per_page_secs: env::var("DOCS_FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            max_chars_per_page: env::var("DOCS_FETCH_MAX_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_CHARS_PER_PAGE)
                .min(DEFAULT_MAX_CHARS_PER_PAGE), // Can only lower the cap
            max_concurrent_fetches: env::var("DOCS_FETCH_MAX_CONCURRENT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1)
                .clamp(1, 5), // Cap at 5
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Timeout per page as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_per_page_secs)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_per_page_secs == 0 {
            return Err("timeout_per_page_secs must be at least 1".to_string());
        }
        if self.max_chars_per_page == 0 {
            return Err("max_chars_per_page must be at least 1".to_string());
        }
        if self.max_chars_per_page > DEFAULT_MAX_CHARS_PER_PAGE {
            return Err(format!(
                "max_chars_per_page must not exceed {}",
                DEFAULT_MAX_CHARS_PER_PAGE
            ));
        }
        if self.max_concurrent_fetches == 0 {
            return Err("max_concurrent_fetches must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for ContentFetchConfig {
    fn default() -> Self {
        Self {
            timeout_per_page_secs: 30,
            max_chars_per_page: DEFAULT_MAX_CHARS_PER_PAGE,
            max_concurrent_fetches: 1,
            user_agent: USER_AGENT.to_string(),
        }
    }
}
