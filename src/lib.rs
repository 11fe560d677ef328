//! # Folio
//!
//! Text cleaning, lemmatization and bag-of-words corpus building.
//!
//! ## Features
//!
//! - A configurable cleaning pipeline: stage-direction stripping,
//!   lowercasing, alphabetic filtering, stop word removal and noun
//!   lemmatization
//! - Token frequency tables with stable top-k ranking
//! - A corpus builder with a shared vocabulary and per-document bags of words
//! - Fail-soft batch retrieval of HTML pages and paragraph extraction
//! - Regex inspection helpers and per-line word count histograms
//!
//! ## Example
//!
//! ```
//! use folio::cleaner::TextCleaner;
//! use folio::config::CleanConfig;
//! use folio::frequency::top_k;
//!
//! let cleaner = TextCleaner::new(CleanConfig::default()).unwrap();
//! let tokens = cleaner
//!     .clean("The cats sat with the other cats near two dogs.")
//!     .unwrap();
//!
//! assert_eq!(tokens, vec!["cat", "sat", "cat", "near", "two", "dog"]);
//! assert_eq!(top_k(&tokens, 1), vec![("cat".to_string(), 2)]);
//! ```

pub mod analysis;
pub mod cleaner;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod fetch;
pub mod frequency;
pub mod inspect;

pub mod prelude {
    pub use crate::cleaner::{TextCleaner, clean};
    pub use crate::config::{CleanConfig, FetchConfig, FolioConfig};
    pub use crate::corpus::{BagOfWords, Corpus, Dictionary, TokenId};
    pub use crate::error::{FolioError, Result};
    pub use crate::fetch::{DocumentFetcher, HttpFetcher, StaticFetcher, fetch_batch};
    pub use crate::frequency::{FrequencyTable, top_k};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
