//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first token-level step of the analysis pipeline: they
//! split (already char-filtered) text into [`Token`](crate::analysis::token::Token)s.
//!
//! # Available Tokenizers
//!
//! - [`word::WordTokenizer`] - Unicode word boundaries, splitting off
//!   contraction and possessive clitics and keeping hyphenated compounds whole
//! - [`regex::RegexTokenizer`] - Tokens are the matches of a pattern
//! - [`sentence::SentenceTokenizer`] - One token per sentence
//!
//! # Examples
//!
//! ```
//! use folio::analysis::tokenizer::Tokenizer;
//! use folio::analysis::tokenizer::word::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Sweet Pandarus-").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[1].text, "Pandarus");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so analyzers can be shared across the
/// threads that clean documents in parallel.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use folio::analysis::token::{Token, TokenStream};
/// use folio::analysis::tokenizer::Tokenizer;
/// use folio::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod regex;
pub mod sentence;
pub mod word;

pub use self::regex::RegexTokenizer;
pub use sentence::SentenceTokenizer;
pub use word::WordTokenizer;
