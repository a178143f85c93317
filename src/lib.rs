// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod cli;
pub mod config;
pub mod docs;

// Re-export main types
pub use config::DocsConfig;
pub use docs::{
    DocReport, DocsLookup, FetchedPage, LibraryRegistry, LookupStatus, PageFetcher,
    SearchProvider, SearchResponse, SearchResult, SearchService,
};
