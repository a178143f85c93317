pub mod docs;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::DocsConfig;

/// Documentation lookup CLI
#[derive(Parser, Debug)]
#[command(name = "docs-lookup")]
#[command(version)]
#[command(about = "Search a library's documentation site and print the pages as text", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the latest docs for a query in one library
    GetDocs(docs::GetDocsArgs),

    /// List supported documentation libraries
    ListLibraries(docs::ListLibrariesArgs),
}

/// Execute CLI command, returning what should be printed
pub async fn execute(cli: Cli) -> Result<String> {
    match cli.command {
        Commands::GetDocs(args) => docs::get_docs(args, DocsConfig::from_env()).await,
        Commands::ListLibraries(args) => docs::list_libraries(args),
    }
}
