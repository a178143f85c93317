//! Page fetching for documentation lookups
//!
//! Fetches the pages behind search results and flattens them to text.
//!
//! ## Architecture
//!
//! ```text
//! Search Results (links) → ContentFetcher → HTML → extract_text → Plain Text
//!                                 ↓ (timeout / status / other)
//!                           FetchedPage with placeholder text
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let fetcher = ContentFetcher::new(ContentFetchConfig::from_env())?;
//! let page = fetcher.fetch("https://fastapi.tiangolo.com/tutorial/").await;
//! println!("{}", page.content);
//! ```

pub mod config;
pub mod extractor;
pub mod fetcher;

pub use config::{ContentFetchConfig, DEFAULT_MAX_CHARS_PER_PAGE};
pub use extractor::{extract_text, extract_text_with_limit};
pub use fetcher::{ContentFetcher, FetchError, FetchedPage, PageFetcher};
