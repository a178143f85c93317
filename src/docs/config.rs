// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for documentation search

use std::env;
use std::time::Duration;

/// Default Serper endpoint
pub const SERPER_URL: &str = "https://google.serper.dev/search";

/// Environment variable holding the Serper credential
pub const SERPER_API_KEY_ENV: &str = "SERPER_API_KEY";

/// Client signature sent with every outbound request
pub const USER_AGENT: &str = "docs-app/1.0";

/// Where the search credential comes from
///
/// The environment variant is resolved on every call, so rotating or
/// exporting the key does not require a restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeySource {
    /// Read from the named environment variable at call time
    Env(String),
    /// Fixed value supplied by the embedding program
    Static(String),
}

impl ApiKeySource {
    /// Resolve the current key. Blank values count as missing.
    pub fn resolve(&self) -> Option<String> {
        let raw = match self {
            Self::Env(var) => env::var(var).ok()?,
            Self::Static(value) => value.clone(),
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Human-readable origin, used in error messages
    pub fn describe(&self) -> &str {
        match self {
            Self::Env(var) => var,
            Self::Static(_) => "<static>",
        }
    }
}

impl Default for ApiKeySource {
    fn default() -> Self {
        Self::Env(SERPER_API_KEY_ENV.to_string())
    }
}

/// Configuration for the search client
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Provider endpoint
    pub endpoint: String,
    /// Credential source
    pub api_key: ApiKeySource,
    /// Number of results requested from the provider
    pub num_results: usize,
    /// Total request timeout in seconds
    pub request_timeout_secs: u64,
    /// User-Agent header value
    pub user_agent: String,
}

impl SearchConfig {
    /// Load configuration from environment variables
    ///
    /// The API key itself is not read here; see [`ApiKeySource::Env`].
    pub fn from_env() -> Self {
        Self {
            endpoint: env::var("DOCS_SEARCH_ENDPOINT").unwrap_or_else(|_| SERPER_URL.to_string()),
            api_key: ApiKeySource::default(),
            num_results: env::var("DOCS_SEARCH_NUM_RESULTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3)
                .min(10), // Cap at 10
            request_timeout_secs: env::var("DOCS_SEARCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Use a fixed API key instead of the environment
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = ApiKeySource::Static(key.into());
        self
    }

    /// Point the client at another endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("endpoint must not be empty".to_string());
        }
        if self.num_results == 0 {
            return Err("num_results must be at least 1".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: SERPER_URL.to_string(),
            api_key: ApiKeySource::default(),
            num_results: 3,
            request_timeout_secs: 30,
            user_agent: USER_AGENT.to_string(),
        }
    }
}
