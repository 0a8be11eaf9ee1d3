/*!
 * In-memory fetcher for tests and offline runs.
 *
 * Bodies are registered against URL prefixes; the first registered prefix
 * that matches a request wins. Every request is recorded so tests can check
 * which URLs were fetched, in which order and with which language.
 */

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::errors::FetchError;
use crate::fetch::PageFetcher;

/// A request seen by the static fetcher
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub url: String,
    pub lang: Option<String>,
}

/// What a registered route answers with
#[derive(Debug, Clone)]
enum Route {
    Body(String),
    Status(u16),
}

/// Fetcher serving canned bodies by URL prefix
#[derive(Debug, Default, Clone)]
pub struct StaticFetcher {
    routes: Vec<(String, Route)>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for every URL starting with `prefix`
    pub fn with_page(mut self, prefix: impl Into<String>, body: impl Into<String>) -> Self {
        self.routes.push((prefix.into(), Route::Body(body.into())));
        self
    }

    /// Answer URLs starting with `prefix` with a non-success status
    pub fn with_status(mut self, prefix: impl Into<String>, status_code: u16) -> Self {
        self.routes.push((prefix.into(), Route::Status(status_code)));
        self
    }

    /// Requests made so far, in order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch_text(&self, url: &str, lang: Option<&str>) -> Result<String, FetchError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(RecordedRequest {
                url: url.to_string(),
                lang: lang.map(str::to_string),
            });
        }

        let route = self
            .routes
            .iter()
            .find(|(prefix, _)| url.starts_with(prefix.as_str()))
            .map(|(_, route)| route);

        match route {
            Some(Route::Body(body)) => Ok(body.clone()),
            Some(Route::Status(status_code)) => Err(FetchError::HttpStatus {
                status_code: *status_code,
                url: url.to_string(),
            }),
            None => Err(FetchError::ConnectionError(format!("No route for {}", url))),
        }
    }
}
