// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Documentation lookup orchestration
//!
//! Validate library → scope query → search → fetch each result → report.
//! Every stage degrades to a renderable [`DocReport`]; nothing here fails.

use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::config::SearchConfig;
use super::content::{ContentFetchConfig, ContentFetcher, PageFetcher};
use super::registry::LibraryRegistry;
use super::report::{DocReport, ReportEntry};
use super::service::SearchService;

/// Build the domain-restricted query sent to the search provider
pub fn scoped_query(domain: &str, query: &str) -> String {
    format!("site:{} {}", domain, query)
}

/// Documentation lookup pipeline
#[derive(Clone)]
pub struct DocsLookup {
    registry: LibraryRegistry,
    search: SearchService,
    fetcher: Arc<dyn PageFetcher>,
    max_concurrent_fetches: usize,
}

impl DocsLookup {
    /// Wire the Serper search client and the HTTP page fetcher
    pub fn new(
        search_config: &SearchConfig,
        content_config: ContentFetchConfig,
    ) -> Result<Self, reqwest::Error> {
        let search = SearchService::new(search_config)?;
        let max_concurrent = content_config.max_concurrent_fetches;
        let fetcher = ContentFetcher::new(content_config)?;

        Ok(Self::with_components(search, Arc::new(fetcher))
            .with_max_concurrent_fetches(max_concurrent))
    }

    /// Assemble a pipeline from explicit components (sequential fetching)
    pub fn with_components(search: SearchService, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            registry: LibraryRegistry,
            search,
            fetcher,
            max_concurrent_fetches: 1,
        }
    }

    /// Allow up to `n` page fetches in flight. Report order is unaffected.
    pub fn with_max_concurrent_fetches(mut self, n: usize) -> Self {
        self.max_concurrent_fetches = n.max(1);
        self
    }

    pub fn registry(&self) -> &LibraryRegistry {
        &self.registry
    }

    /// Search `library`'s documentation for `query` and fetch every hit
    pub async fn lookup(&self, query: &str, library: &str) -> DocReport {
        let Some(domain) = self.registry.resolve(library) else {
            let available = self.registry.identifiers();
            // Caller input error, not an operational one
            info!(
                library,
                "Library '{}' not supported. Available libraries: {}",
                library,
                available.join(", ")
            );
            return DocReport::unsupported(query, library, &available);
        };

        let start = Instant::now();
        let scoped = scoped_query(domain, query);
        info!(library, query = %scoped, "Invoking documentation search");

        if !self.search.is_available() {
            warn!(
                library,
                provider = self.search.provider_name(),
                "Search credential missing; lookup will report no results"
            );
        }

        let response = self.search.search(&scoped).await;
        if response.is_empty() {
            warn!(
                library,
                query,
                search_failed = response.failure().is_some(),
                search_time_ms = response.search_time_ms,
                "No results found for query: {} in library: {}",
                query,
                library
            );
            return DocReport::empty(query, library, response.failure);
        }

        let total = response.result_count();
        info!(
            library,
            result_count = total,
            search_time_ms = response.search_time_ms,
            "Fetching {} result pages",
            total
        );

        let fetcher = &self.fetcher;
        let entries: Vec<ReportEntry> = stream::iter(response.results.into_iter().enumerate())
            .map(|(i, result)| async move {
                debug!(index = i + 1, total, url = %result.link, "Fetching result page");
                let page = fetcher.fetch(&result.link).await;
                debug!(
                    index = i + 1,
                    url = %result.link,
                    ok = page.is_success(),
                    "Result page done"
                );
                ReportEntry::new(i + 1, result, page)
            })
            .buffered(self.max_concurrent_fetches)
            .collect()
            .await;

        let report = DocReport::completed(query, library, entries);
        info!(
            library,
            status = ?report.status(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Successfully retrieved docs for {} in {}",
            query,
            library
        );
        report
    }

    /// Listing of every supported library and its documentation URL
    pub fn list_supported_libraries(&self) -> String {
        self.registry.render_listing()
    }
}
