// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search provider trait definition

use async_trait::async_trait;

use super::types::{SearchError, SearchResult};

/// Trait for implementing search providers
///
/// Providers report failures as typed errors. Collapsing them into the
/// "always returns a response" contract is the job of
/// [`SearchService`](super::service::SearchService).
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Perform a web search
    ///
    /// # Arguments
    /// * `query` - The (already scoped) search query string
    /// * `num_results` - Maximum number of results to request
    ///
    /// # Returns
    /// Results in provider rank order, or an error
    async fn search(
        &self,
        query: &str,
        num_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError>;

    /// Get the provider name for logging
    fn name(&self) -> &'static str;

    /// Check if the provider currently has what it needs (API key, etc.)
    fn is_available(&self) -> bool;
}
