//! Lemmatizing token filter and lemmatizer implementations.

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for lemmatization algorithms.
///
/// Implementations must be pure and deterministic: the same word always maps
/// to the same lemma, with no state carried between calls.
pub trait Lemmatizer: Send + Sync {
    /// Map a lowercase word to its dictionary base form.
    fn lemmatize(&self, word: &str) -> String;

    /// Get the name of this lemmatizer.
    fn name(&self) -> &'static str;
}

pub mod identity;
pub mod noun;

pub use identity::IdentityLemmatizer;
pub use noun::NounLemmatizer;

/// Filter that replaces each token with its lemma.
pub struct LemmaFilter {
    lemmatizer: Box<dyn Lemmatizer>,
}

impl std::fmt::Debug for LemmaFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LemmaFilter")
            .field("lemmatizer", &self.lemmatizer.name())
            .finish()
    }
}

impl LemmaFilter {
    /// Create a lemma filter using noun lemmatization.
    pub fn new() -> Self {
        LemmaFilter {
            lemmatizer: Box::new(NounLemmatizer::new()),
        }
    }

    /// Create a lemma filter with a custom lemmatizer.
    pub fn with_lemmatizer(lemmatizer: Box<dyn Lemmatizer>) -> Self {
        LemmaFilter { lemmatizer }
    }

    /// Name of the wrapped lemmatizer.
    pub fn lemmatizer_name(&self) -> &'static str {
        self.lemmatizer.name()
    }
}

impl Default for LemmaFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for LemmaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                let lemma = self.lemmatizer.lemmatize(&token.text);
                token.with_text(lemma)
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_lemma_filter() {
        let filter = LemmaFilter::new();
        let tokens = vec![
            Token::new("companies", 0),
            Token::new("customers", 1),
            Token::new("armies", 2),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "company");
        assert_eq!(result[1].text, "customer");
        assert_eq!(result[2].text, "army");
    }

    #[test]
    fn test_identity_lemma_filter() {
        let filter = LemmaFilter::with_lemmatizer(Box::new(IdentityLemmatizer::new()));
        let tokens = vec![Token::new("companies", 0)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result[0].text, "companies");
        assert_eq!(filter.lemmatizer_name(), "identity");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LemmaFilter::new().name(), "lemma");
    }
}
