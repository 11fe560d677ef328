//! Regex-based tokenizer implementation.
//!
//! Every match of the pattern becomes a token. Besides the default `\w+`
//! pattern (used to count words per line of a script), presets cover the
//! capitalized-word and emoji extractions used when exploring a text.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{FolioError, Result};

/// Pattern matching runs of word characters.
pub const WORD_PATTERN: &str = r"\w+";

/// Pattern matching words that start with an uppercase letter.
pub const CAPITALIZED_PATTERN: &str = r"[A-ZÜ]\w+";

/// Pattern matching single pictographs from the common emoji blocks.
pub const EMOJI_PATTERN: &str =
    "[\u{1F300}-\u{1F5FF}\u{1F600}-\u{1F64F}\u{1F680}-\u{1F6FF}\u{2600}-\u{26FF}\u{2700}-\u{27BF}]";

/// A tokenizer that extracts the matches of a regular expression.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a regex tokenizer with the default `\w+` pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(WORD_PATTERN)
    }

    /// Create a regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| FolioError::invalid_argument(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Tokenizer for capitalized words.
    pub fn capitalized() -> Result<Self> {
        Self::with_pattern(CAPITALIZED_PATTERN)
    }

    /// Tokenizer for emoji.
    pub fn emoji() -> Result<Self> {
        Self::with_pattern(EMOJI_PATTERN)
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Number of tokens in `text`, without materializing them.
    pub fn count(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| Token::with_offsets(mat.as_str(), position, mat.start(), mat.end()))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_tokenizer() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("hello world").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 5);

        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 6);
        assert_eq!(tokens[1].end_offset, 11);
    }

    #[test]
    fn test_word_pattern_splits_on_punctuation() {
        let tokenizer = RegexTokenizer::new().unwrap();
        // "I'll" splits into "I" and "ll".
        assert_eq!(tokenizer.count("Sweet Pandarus- I'll be gone."), 6);
    }

    #[test]
    fn test_capitalized_and_emoji_presets() {
        let text = "Tu viens me chercher STP 😀🙏";

        let capitals: Vec<String> = RegexTokenizer::capitalized()
            .unwrap()
            .tokenize(text)
            .unwrap()
            .map(|t| t.text)
            .collect();
        assert_eq!(capitals, vec!["Tu", "STP"]);

        let emoji: Vec<String> = RegexTokenizer::emoji()
            .unwrap()
            .tokenize(text)
            .unwrap()
            .map(|t| t.text)
            .collect();
        assert_eq!(emoji, vec!["😀", "🙏"]);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = RegexTokenizer::with_pattern("(unclosed").unwrap_err();
        assert!(matches!(err, FolioError::InvalidArgument(_)));
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(RegexTokenizer::new().unwrap().name(), "regex");
    }
}
