//! Stop filter implementation.
//!
//! Removes high-frequency function words. The base list is the common
//! English list (pronouns, auxiliaries, articles, prepositions and the
//! fragments left behind by split contractions). A second list of
//! early-modern English function words (`thee`, `thou`, `hath`, ...) is
//! provided for play scripts and is meant to be passed as extra stop words.
//!
//! Comparison is exact, so stop words must be lowercase and tokens must be
//! lowercased before this filter runs.
//!
//! # Examples
//!
//! ```
//! use folio::analysis::token_filter::Filter;
//! use folio::analysis::token_filter::stop::StopFilter;
//! use folio::analysis::token::Token;
//!
//! let filter = StopFilter::new();
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("quantum", 1),
//!     Token::new("processor", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "quantum");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default English stop words.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for",
    "with", "about", "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not",
    "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will", "just", "don",
    "should", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "couldn", "didn",
    "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn", "mustn", "needn", "shan",
    "shouldn", "wasn", "weren", "won",
];

/// Early-modern English function words common in Elizabethan play scripts.
///
/// Entries with apostrophes never survive the alphabetic filter and are
/// listed for completeness only.
pub const EARLY_MODERN_STOP_WORDS: &[&str] = &[
    "art", "doth", "dost", "'ere", "hast", "hath", "hence", "hither", "nigh", "oft",
    "should'st", "thither", "tither", "thee", "thou", "thine", "thy", "'tis", "'twas", "wast",
    "whence", "wherefore", "whereto", "withal", "would'st", "ye", "yon", "yonder",
];

/// Default English stop words as a HashSet.
pub static ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    ENGLISH_STOP_WORDS.iter().map(|&s| s.to_string()).collect()
});

/// Named base stop word lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopWordList {
    /// [`ENGLISH_STOP_WORDS`]
    #[default]
    English,
    /// No base list; only explicitly supplied words are stopped.
    None,
}

impl StopWordList {
    /// The words in this list.
    pub fn words(&self) -> &'static [&'static str] {
        match self {
            StopWordList::English => ENGLISH_STOP_WORDS,
            StopWordList::None => &[],
        }
    }
}

/// A filter that removes stop words from the token stream.
///
/// Matching is exact, so it belongs after lowercasing in a pipeline.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the default English stop words.
    pub fn new() -> Self {
        Self::with_stop_words(ENGLISH_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with a custom stop word set.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Create a stop filter from a base list extended with extra words.
    pub fn from_list_with_extra<I, S>(list: StopWordList, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut stop_words: HashSet<String> =
            list.words().iter().map(|&s| s.to_string()).collect();
        stop_words.extend(extra.into_iter().map(Into::into));
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Iterate over the stop words (in no particular order).
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.stop_words.iter().map(String::as_str)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
