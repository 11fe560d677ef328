//! HTTP fetcher backed by a blocking reqwest client.

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;

use crate::config::FetchConfig;
use crate::error::{FolioError, Result};
use crate::fetch::{DocumentFetcher, FetchResponse};

/// Fetches documents over HTTP(S) with a per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a fetcher from `config`.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        config.validate()?;
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| FolioError::fetch(format!("Failed to build HTTP client: {e}")))?;

        Ok(HttpFetcher { client, timeout })
    }

    /// The per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl DocumentFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<FetchResponse> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FolioError::fetch(format!("Request to {url} failed: {e}")))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| FolioError::fetch(format!("Failed to read body of {url}: {e}")))?;

        FetchResponse::new(status, body).error_for_status(url)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
