//! Fail-soft batch retrieval.
//!
//! Every URL is tried once, in order. Failures are logged and recorded,
//! never raised, so one dead link cannot sink a batch.

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::fetch::DocumentFetcher;
use crate::fetch::html::extract_paragraph_text;

/// A retrieved document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchedDocument {
    pub url: String,
    pub status: u16,
    /// Raw response body.
    pub body: String,
    pub fetched_at: DateTime<Utc>,
}

impl FetchedDocument {
    /// Paragraph text of the body; see [`extract_paragraph_text`].
    pub fn paragraph_text(&self) -> String {
        extract_paragraph_text(&self.body)
    }
}

/// A URL that could not be retrieved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFailure {
    pub url: String,
    pub reason: String,
}

/// Outcome of [`fetch_batch`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Successful retrievals, in input order.
    pub documents: Vec<FetchedDocument>,
    /// Failed URLs, in input order.
    pub failures: Vec<FetchFailure>,
}

impl BatchReport {
    /// Number of URLs attempted.
    pub fn requested(&self) -> usize {
        self.documents.len() + self.failures.len()
    }

    /// Number of documents retrieved.
    pub fn retrieved(&self) -> usize {
        self.documents.len()
    }
}

/// Fetch every URL, keeping successes and recording failures.
pub fn fetch_batch<F, S>(fetcher: &F, urls: &[S]) -> BatchReport
where
    F: DocumentFetcher + ?Sized,
    S: AsRef<str>,
{
    let mut report = BatchReport::default();

    for url in urls {
        let url = url.as_ref();
        match fetcher.fetch(url) {
            Ok(response) => {
                info!("Fetched {url} ({} bytes)", response.body.len());
                report.documents.push(FetchedDocument {
                    url: url.to_string(),
                    status: response.status,
                    body: response.body,
                    fetched_at: Utc::now(),
                });
            }
            Err(e) => {
                warn!("Skipping {url}: {e}");
                report.failures.push(FetchFailure {
                    url: url.to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    info!(
        "Number of articles retrieved: {} of {}",
        report.retrieved(),
        report.requested()
    );
    report
}
