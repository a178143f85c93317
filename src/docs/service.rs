// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search service
//!
//! Wraps a [`SearchProvider`] and turns every failure into an empty
//! [`SearchResponse`] that still carries the classified error.

use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

use super::config::SearchConfig;
use super::provider::SearchProvider;
use super::serper::SerperSearchProvider;
use super::types::{SearchError, SearchResponse};

/// Search client with a uniform "never fails" contract
#[derive(Clone)]
pub struct SearchService {
    provider: Arc<dyn SearchProvider>,
    num_results: usize,
}

impl SearchService {
    /// Create a search service backed by Serper
    pub fn new(config: &SearchConfig) -> Result<Self, reqwest::Error> {
        let provider = SerperSearchProvider::new(config)?;
        Ok(Self::with_provider(Arc::new(provider), config.num_results))
    }

    /// Create a search service around any provider
    pub fn with_provider(provider: Arc<dyn SearchProvider>, num_results: usize) -> Self {
        Self {
            provider,
            num_results,
        }
    }

    /// Perform a single search attempt
    ///
    /// Never returns an error. A failed call yields an empty response whose
    /// [`SearchResponse::failure`] explains why.
    pub async fn search(&self, query: &str) -> SearchResponse {
        let provider = self.provider.name();
        let start = Instant::now();

        info!(provider, query, "Searching for: {}", query);

        match self.provider.search(query, self.num_results).await {
            Ok(results) => {
                let elapsed_ms = start.elapsed().as_millis() as u64;
                info!(
                    provider,
                    result_count = results.len(),
                    elapsed_ms,
                    "Found {} results",
                    results.len()
                );
                SearchResponse::found(query, provider, results, elapsed_ms)
            }
            Err(e) => {
                let elapsed_ms = start.elapsed().as_millis() as u64;
                match &e {
                    SearchError::Timeout { .. } => {
                        warn!(provider, elapsed_ms, "Search request timed out")
                    }
                    SearchError::NoApiKey { env_var, .. } => {
                        error!(provider, "{} not found in environment variables", env_var)
                    }
                    SearchError::ApiError { status, .. } => {
                        error!(provider, status, "HTTP error during search: {}", e)
                    }
                    SearchError::Request { .. } | SearchError::Decode { .. } => {
                        error!(provider, "Unexpected error during search: {}", e)
                    }
                }
                SearchResponse::failed(query, provider, e, elapsed_ms)
            }
        }
    }

    /// Number of results requested per search
    pub fn num_results(&self) -> usize {
        self.num_results
    }

    /// Name of the backing provider
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Whether the backing provider currently has a credential
    pub fn is_available(&self) -> bool {
        self.provider.is_available()
    }
}
