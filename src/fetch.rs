//! Document retrieval.
//!
//! A [`DocumentFetcher`] turns a URL into a response body or an error; it
//! has no other behavior. [`HttpFetcher`] talks HTTP, [`StaticFetcher`]
//! serves canned pages from memory. [`fetch_batch`] fetches many URLs and
//! skips the ones that fail.

pub mod batch;
pub mod html;
pub mod http;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

pub use batch::{BatchReport, FetchFailure, FetchedDocument, fetch_batch};
pub use html::extract_paragraph_text;
pub use http::HttpFetcher;

/// A successful response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl FetchResponse {
    pub fn new<S: Into<String>>(status: u16, body: S) -> Self {
        FetchResponse {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// `self` if the status is 2xx, otherwise a `Fetch` error.
    pub fn error_for_status(self, url: &str) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(FolioError::fetch(format!(
                "{url} returned status {}",
                self.status
            )))
        }
    }
}

/// Retrieves the body of a URL.
pub trait DocumentFetcher: Send + Sync {
    /// Fetch `url`. Transport failures and non-2xx statuses are `Fetch` errors.
    fn fetch(&self, url: &str) -> Result<FetchResponse>;

    /// Get the name of this fetcher.
    fn name(&self) -> &'static str;
}

/// A fetcher serving fixed responses from memory.
///
/// URLs without a registered page fail with a `Fetch` error, as an
/// unreachable host would.
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
    pages: HashMap<String, FetchResponse>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with status 200 for `url`.
    pub fn with_page<U: Into<String>, B: Into<String>>(mut self, url: U, body: B) -> Self {
        self.pages.insert(url.into(), FetchResponse::new(200, body));
        self
    }

    /// Serve an arbitrary status and body for `url`.
    pub fn with_response<U: Into<String>>(mut self, url: U, response: FetchResponse) -> Self {
        self.pages.insert(url.into(), response);
        self
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl DocumentFetcher for StaticFetcher {
    fn fetch(&self, url: &str) -> Result<FetchResponse> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FolioError::fetch(format!("no route to {url}")))?
            .error_for_status(url)
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_fetcher() {
        let fetcher = StaticFetcher::new()
            .with_page("https://example.org/a", "<p>a</p>")
            .with_response("https://example.org/gone", FetchResponse::new(404, "missing"));

        let response = fetcher.fetch("https://example.org/a").unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, "<p>a</p>");

        let err = fetcher.fetch("https://example.org/gone").unwrap_err();
        assert!(err.is_fetch());
        assert!(err.to_string().contains("404"));

        assert!(fetcher.fetch("https://example.org/b").unwrap_err().is_fetch());
        assert_eq!(fetcher.len(), 2);
        assert_eq!(fetcher.name(), "static");
    }

    #[test]
    fn test_status_ranges() {
        assert!(FetchResponse::new(204, "").is_success());
        assert!(!FetchResponse::new(301, "").is_success());
        assert!(!FetchResponse::new(500, "").is_success());
    }
}
