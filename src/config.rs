// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Top-level configuration
//!
//! Groups the search and fetch settings so binaries load everything with a
//! single `DocsConfig::from_env()` call.

use crate::docs::{ContentFetchConfig, DocsLookup, SearchConfig};

/// Configuration for the documentation lookup pipeline
#[derive(Debug, Clone, Default)]
pub struct DocsConfig {
    /// Search client settings
    pub search: SearchConfig,
    /// Page fetcher settings
    pub content: ContentFetchConfig,
}

impl DocsConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            search: SearchConfig::from_env(),
            content: ContentFetchConfig::from_env(),
        }
    }

    /// Validate both sections
    pub fn validate(&self) -> Result<(), String> {
        self.search
            .validate()
            .map_err(|e| format!("search: {}", e))?;
        self.content
            .validate()
            .map_err(|e| format!("content: {}", e))?;
        Ok(())
    }

    /// Build the lookup pipeline described by this configuration
    pub fn build_lookup(&self) -> anyhow::Result<DocsLookup> {
        self.validate().map_err(anyhow::Error::msg)?;
        Ok(DocsLookup::new(&self.search, self.content.clone())?)
    }
}
