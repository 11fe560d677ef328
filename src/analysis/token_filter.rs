//! Token filter implementations for token transformation.
//!
//! Filters receive the stream produced by a tokenizer and return a new
//! stream: they rewrite token text, or drop them.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`alphabetic::AlphabeticFilter`] - Drops tokens containing non-letters
//! - [`stop::StopFilter`] - Removes stop words
//! - [`lemma::LemmaFilter`] - Maps tokens to their dictionary base form
//! - [`min_length::MinLengthFilter`] - Drops tokens shorter than a minimum
//!
//! # Filter Chaining
//!
//! The cleaning analyzer chains them in a fixed order:
//!
//! ```text
//! Tokenizer → Lowercase → Alphabetic → Stop Words → Lemma → Min Length
//! ```
//!
//! # Examples
//!
//! ```
//! use folio::analysis::token_filter::Filter;
//! use folio::analysis::token_filter::lowercase::LowercaseFilter;
//! use folio::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hector", 0), Token::new("TROY", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hector");
//! assert_eq!(filtered[1].text, "troy");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// Filters must keep the relative order of the tokens they let through.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod alphabetic;
pub mod lemma;
pub mod lowercase;
pub mod min_length;
pub mod stop;

pub use alphabetic::AlphabeticFilter;
pub use lemma::{IdentityLemmatizer, LemmaFilter, Lemmatizer, NounLemmatizer};
pub use lowercase::LowercaseFilter;
pub use min_length::MinLengthFilter;
pub use stop::StopFilter;
