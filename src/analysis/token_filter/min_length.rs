//! Minimum length filter implementation.

use super::Filter;

use crate::analysis::token::{Token, TokenStream};
use crate::error::{FolioError, Result};

/// A filter that drops tokens shorter than a minimum number of characters.
#[derive(Clone, Debug)]
pub struct MinLengthFilter {
    min_length: usize,
}

impl MinLengthFilter {
    /// Create a new filter. `min_length` counts characters, not bytes, and must be at least 1.
    pub fn new(min_length: usize) -> Result<Self> {
        if min_length == 0 {
            return Err(FolioError::invalid_argument(
                "minimum token length must be at least 1",
            ));
        }
        Ok(MinLengthFilter { min_length })
    }

    /// Get the minimum length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Default for MinLengthFilter {
    fn default() -> Self {
        MinLengthFilter { min_length: 1 }
    }
}

impl Filter for MinLengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| token.char_len() >= self.min_length)
            .collect();
        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "min_length"
    }
}
