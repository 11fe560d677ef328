//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows through the analysis pipeline: it is
//! produced by a tokenizer and transformed (or removed) by filters.
//!
//! # Examples
//!
//! ```
//! use folio::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("Troilus", 0, 4, 11).with_token_type(TokenType::Word);
//! assert_eq!(token.text, "Troilus");
//! assert_eq!(token.start_offset, 4);
//! assert_eq!(token.token_type(), Some(TokenType::Word));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
///
/// Offsets are byte offsets into the text handed to the analyzer, corrected
/// back through any char filters that ran before tokenization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Additional metadata attached by tokenizers and filters
    pub metadata: Option<TokenMetadata>,
}

/// Classification of token content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Letters only
    Word,
    /// Digits only
    Num,
    /// Letters joined by apostrophes or hyphens ("ne'er", "high-fidelity")
    Compound,
    /// Mixed letters and digits ("h2o", "53rd")
    Alphanum,
    /// Other/unknown token types
    Other,
}

/// Metadata that can be attached to tokens.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// The surface form before any filter rewrote the token
    pub original_text: Option<String>,

    /// Token type classification
    pub token_type: Option<TokenType>,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            metadata: None,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            start_offset,
            end_offset,
            ..Token::new(text, position)
        }
    }

    /// Get the length of the token text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Set the token type in metadata.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        let metadata = self.metadata.get_or_insert_with(TokenMetadata::default);
        metadata.token_type = Some(token_type);
        self
    }

    /// Get the token type, if a tokenizer classified it.
    pub fn token_type(&self) -> Option<TokenType> {
        self.metadata.as_ref().and_then(|m| m.token_type)
    }

    /// Get the surface form recorded before the first rewrite, if any.
    pub fn original_text(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.original_text.as_deref())
    }

    /// Replace the token text, remembering the first surface form.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        let text = text.into();
        if text != self.text {
            let metadata = self.metadata.get_or_insert_with(TokenMetadata::default);
            if metadata.original_text.is_none() {
                metadata.original_text = Some(std::mem::take(&mut self.text));
            }
        }
        self.text = text;
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
