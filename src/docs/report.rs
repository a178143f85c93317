// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Lookup report
//!
//! A [`DocReport`] is the structured result of a lookup. Its `Display`
//! output is the plain-text report handed to callers.

use serde::Serialize;
use std::fmt;

use super::content::FetchedPage;
use super::types::{SearchError, SearchResult};

/// How a lookup ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LookupStatus {
    /// The library is not in the registry; nothing was searched
    UnsupportedLibrary { available: Vec<String> },
    /// The provider answered with zero results
    NoResults,
    /// The search failed; renders exactly like `NoResults`
    SearchUnavailable { error: SearchError },
    /// Results were found and every page was attempted
    Completed { fetched: usize, failed: usize },
}

/// One search result paired with its fetched page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    /// 1-based position in the report
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    pub page: FetchedPage,
}

impl ReportEntry {
    pub fn new(index: usize, result: SearchResult, page: FetchedPage) -> Self {
        Self {
            index,
            title: result.title,
            link: result.link,
            snippet: result.snippet,
            page,
        }
    }
}

/// Final output of a documentation lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocReport {
    pub query: String,
    pub library: String,
    pub status: LookupStatus,
    pub entries: Vec<ReportEntry>,
}

impl DocReport {
    pub fn unsupported(query: &str, library: &str, available: &[&str]) -> Self {
        Self {
            query: query.to_string(),
            library: library.to_string(),
            status: LookupStatus::UnsupportedLibrary {
                available: available.iter().map(|s| s.to_string()).collect(),
            },
            entries: Vec::new(),
        }
    }

    /// Empty report; `error` tells a failed search from a genuine miss
    pub fn empty(query: &str, library: &str, error: Option<SearchError>) -> Self {
        let status = match error {
            Some(error) => LookupStatus::SearchUnavailable { error },
            None => LookupStatus::NoResults,
        };
        Self {
            query: query.to_string(),
            library: library.to_string(),
            status,
            entries: Vec::new(),
        }
    }

    pub fn completed(query: &str, library: &str, entries: Vec<ReportEntry>) -> Self {
        let failed = entries.iter().filter(|e| !e.page.is_success()).count();
        Self {
            query: query.to_string(),
            library: library.to_string(),
            status: LookupStatus::Completed {
                fetched: entries.len() - failed,
                failed,
            },
            entries,
        }
    }

    pub fn status(&self) -> &LookupStatus {
        &self.status
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// The search failure behind an empty report, if any
    pub fn search_failure(&self) -> Option<&SearchError> {
        match &self.status {
            LookupStatus::SearchUnavailable { error } => Some(error),
            _ => None,
        }
    }

    /// Plain-text rendering
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DocReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            LookupStatus::UnsupportedLibrary { available } => write!(
                f,
                "Library '{}' not supported. Available libraries: {}",
                self.library,
                available.join(", ")
            ),
            LookupStatus::NoResults | LookupStatus::SearchUnavailable { .. } => write!(
                f,
                "No results found for '{}' in {} documentation",
                self.query, self.library
            ),
            LookupStatus::Completed { .. } => {
                write!(
                    f,
                    "Documentation search results for '{}' in {}:\n\n",
                    self.query, self.library
                )?;
                for entry in &self.entries {
                    writeln!(
                        f,
                        "--- Result {}: {} ---",
                        entry.index,
                        entry.title.as_deref().unwrap_or("No title")
                    )?;
                    writeln!(f, "URL: {}", entry.link)?;
                    if let Some(snippet) = &entry.snippet {
                        writeln!(f, "Snippet: {}", snippet)?;
                    }
                    write!(f, "\nContent:\n{}\n\n", entry.page.content)?;
                }
                Ok(())
            }
        }
    }
}
