// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::config::DocsConfig;
use crate::docs::{DocReport, LibraryRegistry};

/// Arguments for get-docs command
#[derive(Args, Debug)]
pub struct GetDocsArgs {
    /// What to search for (e.g. "Chroma DB", "authentication")
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Library whose documentation to search (e.g. langchain, openai)
    #[arg(long, short, env = "DOCS_LIBRARY")]
    pub library: String,

    /// Fetch up to this many result pages at once, 1-5 (report order is kept)
    #[arg(long)]
    pub max_concurrent: Option<usize>,

    /// Print the structured report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Arguments for list-libraries command
#[derive(Args, Debug)]
pub struct ListLibrariesArgs {
    /// Print entries as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl GetDocsArgs {
    /// Query words joined back into one string
    pub fn query_text(&self) -> String {
        self.query.join(" ")
    }
}

/// Run a documentation lookup and render its output
pub async fn get_docs(args: GetDocsArgs, mut config: DocsConfig) -> Result<String> {
    if let Some(n) = args.max_concurrent {
        config.content.max_concurrent_fetches = n.clamp(1, 5);
    }
    let lookup = config.build_lookup()?;
    let query = args.query_text();

    info!(library = %args.library, query = %query, "get-docs");
    let report = lookup.lookup(&query, &args.library).await;

    render_report(&report, args.json)
}

/// Render the supported library listing
pub fn list_libraries(args: ListLibrariesArgs) -> Result<String> {
    let registry = LibraryRegistry;
    if args.json {
        Ok(serde_json::to_string_pretty(registry.list())?)
    } else {
        Ok(registry.render_listing())
    }
}

fn render_report(report: &DocReport, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(report.render())
    }
}
