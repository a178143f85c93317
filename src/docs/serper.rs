// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Serper (Google) search API provider
//!
//! Sends `{"q": ..., "num": ...}` as a JSON POST with the key in the
//! `X-API-KEY` header and maps the `organic` section to [`SearchResult`]s.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::{ApiKeySource, SearchConfig};
use super::provider::SearchProvider;
use super::types::{SearchError, SearchResult};

const PROVIDER_NAME: &str = "serper";

/// Serper search provider
pub struct SerperSearchProvider {
    endpoint: String,
    api_key: ApiKeySource,
    timeout_ms: u64,
    client: Client,
}

impl SerperSearchProvider {
    /// Create a new Serper provider from configuration
    pub fn new(config: &SearchConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            timeout_ms: config.timeout().as_millis() as u64,
            client,
        })
    }

    fn classify(&self, e: reqwest::Error) -> SearchError {
        if e.is_timeout() {
            SearchError::Timeout {
                timeout_ms: self.timeout_ms,
            }
        } else {
            SearchError::Request {
                message: e.to_string(),
            }
        }
    }
}

#[async_trait]
impl SearchProvider for SerperSearchProvider {
    async fn search(
        &self,
        query: &str,
        num_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let api_key = self.api_key.resolve().ok_or_else(|| SearchError::NoApiKey {
            provider: PROVIDER_NAME.to_string(),
            env_var: self.api_key.describe().to_string(),
        })?;

        let body = SerperRequest {
            q: query,
            num: num_results,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-API-KEY", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SearchError::ApiError {
                status: status.as_u16(),
                message: snip(&message),
            });
        }

        let bytes = response.bytes().await.map_err(|e| self.classify(e))?;
        let data: SerperResponse =
            serde_json::from_slice(&bytes).map_err(|e| SearchError::Decode {
                message: e.to_string(),
            })?;

        Ok(data.into_results())
    }

    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn is_available(&self) -> bool {
        self.api_key.resolve().is_some()
    }
}

fn snip(body: &str) -> String {
    const MAX: usize = 500;
    if body.chars().count() <= MAX {
        return body.to_string();
    }
    let mut out: String = body.chars().take(MAX).collect();
    out.push_str("...");
    out
}

#[derive(Debug, Serialize)]
struct SerperRequest<'a> {
    q: &'a str,
    num: usize,
}

#[derive(Debug, Deserialize)]
struct SerperResponse {
    #[serde(default)]
    organic: Vec<SerperOrganic>,
}

#[derive(Debug, Deserialize)]
struct SerperOrganic {
    title: Option<String>,
    link: Option<String>,
    snippet: Option<String>,
}

impl SerperResponse {
    /// Keep provider order; items without a link cannot be fetched and are dropped.
    fn into_results(self) -> Vec<SearchResult> {
        self.organic
            .into_iter()
            .filter_map(|item| match item.link {
                Some(link) if !link.trim().is_empty() => Some((link, item.title, item.snippet)),
                _ => {
                    debug!("Dropping search hit without a link: {:?}", item.title);
                    None
                }
            })
            .enumerate()
            .map(|(i, (link, title, snippet))| SearchResult {
                title,
                link,
                snippet,
                position: i + 1,
            })
            .collect()
    }
}
