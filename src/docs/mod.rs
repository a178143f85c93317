// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Documentation lookup module
//!
//! Answers "how do I X in library Y" by searching Y's documentation site and
//! returning the text of the top pages:
//! - Static registry of supported libraries and their doc domains
//! - Domain-scoped search via the Serper API
//! - Page fetching with HTML to text flattening
//! - A single text report that is produced even when every stage fails

pub mod config;
pub mod content;
pub mod lookup;
pub mod provider;
pub mod registry;
pub mod report;
pub mod serper;
pub mod service;
pub mod types;

// Re-export commonly used types
pub use config::{ApiKeySource, SearchConfig};
pub use lookup::{scoped_query, DocsLookup};
pub use provider::SearchProvider;
pub use registry::{LibraryEntry, LibraryRegistry, LIBRARIES};
pub use report::{DocReport, LookupStatus, ReportEntry};
pub use serper::SerperSearchProvider;
pub use service::SearchService;
pub use types::{SearchError, SearchResponse, SearchResult};

// Re-export page fetching types
pub use content::{
    extract_text, ContentFetchConfig, ContentFetcher, FetchError, FetchedPage, PageFetcher,
};
