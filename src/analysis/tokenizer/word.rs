//! Word tokenizer implementation.
//!
//! Splits text on Unicode word boundaries (UAX #29) and drops segments that
//! contain no letters or digits, so punctuation and whitespace never become
//! tokens. UAX #29 keeps contractions and possessives such as `don't` and
//! `Hector's` in one segment, so this tokenizer splits the trailing clitic
//! into its own token (`do` + `n't`, `Hector` + `'s`) and breaks `cannot`
//! into `can` + `not`. It also rejoins hyphenated compounds (`high-fidelity`,
//! `state-space`) that the boundary rules split apart.
//!
//! # Examples
//!
//! ```
//! use folio::analysis::tokenizer::Tokenizer;
//! use folio::analysis::tokenizer::word::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new();
//! let texts: Vec<String> = tokenizer
//!     .tokenize("A high-fidelity processor, isn't it?")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(texts, vec!["A", "high-fidelity", "processor", "is", "n't", "it"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// Trailing contraction and possessive endings, matched case-insensitively.
const CLITICS: &[&str] = &[
    "n't", "n\u{2019}t", "'s", "\u{2019}s", "'ll", "\u{2019}ll", "'re", "\u{2019}re", "'ve",
    "\u{2019}ve", "'d", "\u{2019}d", "'m", "\u{2019}m",
];

/// A tokenizer that splits text into words.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    join_hyphenated: bool,
    split_clitics: bool,
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl WordTokenizer {
    /// Create a word tokenizer that rejoins hyphenated compounds.
    pub fn new() -> Self {
        WordTokenizer {
            join_hyphenated: true,
            split_clitics: true,
        }
    }

    /// Choose whether `a-b` is one token (`true`) or two (`false`).
    pub fn with_hyphen_joining(mut self, join: bool) -> Self {
        self.join_hyphenated = join;
        self
    }

    /// Choose whether `don't` is two tokens (`true`) or one (`false`).
    pub fn with_clitic_splitting(mut self, split: bool) -> Self {
        self.split_clitics = split;
        self
    }

    /// Byte ranges of the pieces a word breaks into.
    fn clitic_pieces(word: &str) -> Vec<(usize, usize)> {
        let len = word.len();
        if word.eq_ignore_ascii_case("cannot") {
            return vec![(0, 3), (3, len)];
        }
        // "can't" keeps its stem readable instead of becoming "ca" + "n't".
        if word.eq_ignore_ascii_case("can't") || word.eq_ignore_ascii_case("can\u{2019}t") {
            return vec![(0, 3), (3, len)];
        }

        for clitic in CLITICS {
            let Some(split) = len.checked_sub(clitic.len()) else {
                continue;
            };
            if split > 0 && word.is_char_boundary(split) && word[split..].eq_ignore_ascii_case(clitic) {
                return vec![(0, split), (split, len)];
            }
        }

        vec![(0, len)]
    }

    fn is_word(segment: &str) -> bool {
        segment.chars().any(|c| c.is_alphanumeric())
    }

    fn is_hyphen(segment: &str) -> bool {
        matches!(segment, "-" | "\u{2010}" | "\u{2011}")
    }

    /// Classify a word segment by its characters.
    fn detect_token_type(word: &str) -> TokenType {
        if word.chars().all(char::is_alphabetic) {
            TokenType::Word
        } else if word.chars().all(char::is_numeric) {
            TokenType::Num
        } else if word.chars().any(char::is_alphabetic)
            && word
                .chars()
                .all(|c| c.is_alphabetic() || matches!(c, '\'' | '\u{2019}' | '-' | '\u{2010}' | '\u{2011}'))
        {
            TokenType::Compound
        } else if word.chars().all(char::is_alphanumeric) {
            TokenType::Alphanum
        } else {
            TokenType::Other
        }
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens: Vec<Token> = Vec::new();
        // Byte offset of a hyphen that directly follows the last token.
        let mut pending_hyphen: Option<usize> = None;

        for (offset, segment) in text.split_word_bound_indices() {
            if Self::is_word(segment) {
                let joined = match (pending_hyphen.take(), tokens.last_mut()) {
                    (Some(hyphen), Some(last)) if self.join_hyphenated && hyphen < offset => {
                        let end = offset + segment.len();
                        last.text = text[last.start_offset..end].to_string();
                        last.end_offset = end;
                        true
                    }
                    _ => false,
                };

                if !joined {
                    let position = tokens.len();
                    tokens.push(Token::with_offsets(
                        segment,
                        position,
                        offset,
                        offset + segment.len(),
                    ));
                }
            } else if Self::is_hyphen(segment)
                && tokens.last().is_some_and(|t| t.end_offset == offset)
            {
                pending_hyphen = Some(offset);
            } else {
                pending_hyphen = None;
            }
        }

        let mut split: Vec<Token> = Vec::with_capacity(tokens.len());
        for token in tokens {
            let pieces = if self.split_clitics {
                Self::clitic_pieces(&token.text)
            } else {
                vec![(0, token.text.len())]
            };
            for (start, end) in pieces {
                let token_type = Self::detect_token_type(&token.text[start..end]);
                split.push(
                    Token::with_offsets(
                        &token.text[start..end],
                        split.len(),
                        token.start_offset + start,
                        token.start_offset + end,
                    )
                    .with_token_type(token_type),
                );
            }
        }
        let tokens = split;

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}
