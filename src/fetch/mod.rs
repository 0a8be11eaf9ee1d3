/*!
 * Retrieval boundary for page documents and transcript payloads.
 *
 * The caption pipeline only ever needs "GET this URL as text". Keeping that
 * behind a trait lets the pipeline run against a real HTTP client or against
 * canned pages:
 * - `http`: reqwest-backed client used by the command-line tool
 * - `mock`: in-memory fetcher serving fixed bodies
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::FetchError;

/// Common trait for all text retrieval backends
#[async_trait]
pub trait PageFetcher: Send + Sync + Debug {
    /// Fetch a URL and return its body as text
    ///
    /// # Arguments
    /// * `url` - The URL to fetch
    /// * `lang` - Optional language preference, sent as `Accept-Language`
    ///
    /// # Returns
    /// * `Result<String, FetchError>` - The response body or a transport error
    async fn fetch_text(&self, url: &str, lang: Option<&str>) -> Result<String, FetchError>;
}

pub mod http;
pub mod mock;
