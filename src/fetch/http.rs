use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use reqwest::header::{ACCEPT_LANGUAGE, USER_AGENT};
use std::time::Duration;

use crate::app_config::RetrievalConfig;
use crate::errors::FetchError;
use crate::fetch::PageFetcher;

/// HTTP fetcher sending a fixed identification string with every request
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    /// HTTP client for making requests
    client: Client,
    /// Value of the `User-Agent` header
    user_agent: String,
}

impl HttpFetcher {
    /// Create a fetcher with the given identification string and timeout
    pub fn new(user_agent: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            user_agent: user_agent.into(),
        }
    }

    /// Create a fetcher from retrieval settings
    pub fn from_config(config: &RetrievalConfig) -> Self {
        Self::new(config.user_agent.clone(), Duration::from_secs(config.timeout_secs))
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str, lang: Option<&str>) -> Result<String, FetchError> {
        let url = reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;

        let mut request = self.client.get(url.clone()).header(USER_AGENT, &self.user_agent);
        if let Some(lang) = lang {
            request = request.header(ACCEPT_LANGUAGE, lang);
        }

        debug!("GET {} (lang: {})", url, lang.unwrap_or("-"));
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status_code: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        debug!("Received {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
