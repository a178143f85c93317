// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for documentation search

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single ranked hit returned by a search provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Title of the result, if the provider reported one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Link to the result page (required to fetch it)
    pub link: String,
    /// Snippet/description of the result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    /// 1-based rank in the provider response
    pub position: usize,
}

impl SearchResult {
    /// Create a result with only a link
    pub fn new(link: impl Into<String>, position: usize) -> Self {
        Self {
            title: None,
            link: link.into(),
            snippet: None,
            position,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the snippet
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }
}

/// Response from a search operation
///
/// `results` is empty both when nothing matched and when the search failed.
/// Use [`SearchResponse::failure`] to tell the two apart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// The scoped query that was sent
    pub query: String,
    /// Results in provider order
    pub results: Vec<SearchResult>,
    /// Time taken for the search in milliseconds
    pub search_time_ms: u64,
    /// Provider that served (or failed) the request
    pub provider: String,
    /// Why the search produced nothing, if it failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<SearchError>,
}

impl SearchResponse {
    /// Successful response with the given results
    pub fn found(
        query: impl Into<String>,
        provider: impl Into<String>,
        results: Vec<SearchResult>,
        search_time_ms: u64,
    ) -> Self {
        Self {
            query: query.into(),
            results,
            search_time_ms,
            provider: provider.into(),
            failure: None,
        }
    }

    /// Empty response standing in for a failed search
    pub fn failed(
        query: impl Into<String>,
        provider: impl Into<String>,
        error: SearchError,
        search_time_ms: u64,
    ) -> Self {
        Self {
            query: query.into(),
            results: Vec::new(),
            search_time_ms,
            provider: provider.into(),
            failure: Some(error),
        }
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// The classified failure, `None` when the provider answered
    pub fn failure(&self) -> Option<&SearchError> {
        self.failure.as_ref()
    }
}

/// Errors that can occur during a search call
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchError {
    /// No API key configured for the provider
    #[error("No API key configured for {provider} (set {env_var})")]
    NoApiKey {
        /// Name of the provider missing an API key
        provider: String,
        /// Environment variable the key is read from
        env_var: String,
    },

    /// Search request timed out
    #[error("Search timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// Non-success HTTP status from the provider
    #[error("Search API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message or body snippet
        message: String,
    },

    /// Connection or protocol failure before a status was received
    #[error("Search request failed: {message}")]
    Request {
        /// Underlying error description
        message: String,
    },

    /// The provider answered with a body we could not decode
    #[error("Search response decode error: {message}")]
    Decode {
        /// Decoder error description
        message: String,
    },
}
