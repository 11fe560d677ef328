//! Alphabetic filter implementation.
//!
//! Drops every token that contains a character that is not a letter:
//! numbers, punctuation, and mixed tokens such as `h2o`. Split-off clitics
//! (`n't`, `'s`) and hyphenated compounds (`high-fidelity`) are dropped whole.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that keeps only purely alphabetic tokens.
#[derive(Clone, Debug, Default)]
pub struct AlphabeticFilter;

impl AlphabeticFilter {
    /// Create a new alphabetic filter.
    pub fn new() -> Self {
        AlphabeticFilter
    }

    /// Whether `text` is non-empty and made only of letters.
    pub fn is_alphabetic(text: &str) -> bool {
        !text.is_empty() && text.chars().all(char::is_alphabetic)
    }
}

impl Filter for AlphabeticFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| Self::is_alphabetic(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "alphabetic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabetic_filter() {
        let filter = AlphabeticFilter::new();
        let tokens = vec![
            Token::new("qubits", 0),
            Token::new("53", 1),
            Token::new("high-fidelity", 2),
            Token::new("don't", 3),
            Token::new("h2o", 4),
            Token::new("café", 5),
        ];

        let result: Vec<String> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(result, vec!["qubits", "café"]);
    }

    #[test]
    fn test_is_alphabetic() {
        assert!(AlphabeticFilter::is_alphabetic("troy"));
        assert!(!AlphabeticFilter::is_alphabetic(""));
        assert!(!AlphabeticFilter::is_alphabetic("1602"));
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(AlphabeticFilter::new().name(), "alphabetic");
    }
}
