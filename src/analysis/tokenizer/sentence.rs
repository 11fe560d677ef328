//! Sentence tokenizer implementation.
//!
//! Uses Unicode sentence boundaries (UAX #29). Each sentence becomes one
//! token with surrounding whitespace trimmed; blank segments are skipped.

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that emits one token per sentence.
#[derive(Clone, Debug, Default)]
pub struct SentenceTokenizer;

impl SentenceTokenizer {
    /// Create a new sentence tokenizer.
    pub fn new() -> Self {
        SentenceTokenizer
    }

    /// Split `text` into trimmed, non-empty sentences.
    pub fn split_sentences(&self, text: &str) -> Vec<String> {
        self.sentences(text).map(|t| t.text).collect()
    }

    fn sentences<'a>(&self, text: &'a str) -> impl Iterator<Item = Token> + 'a {
        text.split_sentence_bound_indices()
            .filter_map(|(offset, sentence)| {
                let trimmed = sentence.trim();
                if trimmed.is_empty() {
                    return None;
                }
                let lead = sentence.len() - sentence.trim_start().len();
                let start = offset + lead;
                Some((start, trimmed))
            })
            .enumerate()
            .map(|(position, (start, trimmed))| {
                Token::with_offsets(trimmed, position, start, start + trimmed.len())
            })
    }
}

impl Tokenizer for SentenceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self.sentences(text).collect();
        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "sentence"
    }
}
