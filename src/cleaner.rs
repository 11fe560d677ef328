//! The text cleaner: raw text in, ordered list of cleaned tokens out.
//!
//! # Examples
//!
//! ```
//! use folio::cleaner::TextCleaner;
//! use folio::config::CleanConfig;
//!
//! let cleaner = TextCleaner::new(CleanConfig::default()).unwrap();
//! let tokens = cleaner
//!     .clean("Google's processor Sycamore performed the computation in 200 seconds.")
//!     .unwrap();
//!
//! assert_eq!(tokens, vec!["google", "processor", "sycamore", "performed", "computation", "second"]);
//! ```

use log::debug;
use rayon::prelude::*;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::cleaning::CleaningAnalyzer;
use crate::config::CleanConfig;
use crate::error::{FolioError, Result};

/// Cleans raw text with a fixed, validated configuration.
///
/// `TextCleaner` is `Send + Sync`; one instance can clean many documents
/// from several threads.
#[derive(Clone, Debug)]
pub struct TextCleaner {
    config: CleanConfig,
    analyzer: CleaningAnalyzer,
}

impl TextCleaner {
    /// Validate `config` and build the cleaning pipeline.
    pub fn new(mut config: CleanConfig) -> Result<Self> {
        config.normalize();
        let analyzer = CleaningAnalyzer::new(&config)?;
        Ok(TextCleaner { config, analyzer })
    }

    /// The configuration this cleaner was built with.
    pub fn config(&self) -> &CleanConfig {
        &self.config
    }

    /// The analyzer running the pipeline.
    pub fn analyzer(&self) -> &CleaningAnalyzer {
        &self.analyzer
    }

    /// Clean `text` into tokens in occurrence order. Empty input gives an
    /// empty vector.
    pub fn clean(&self, text: &str) -> Result<Vec<String>> {
        let tokens: Vec<String> = self.analyzer.analyze(text)?.map(|t| t.text).collect();
        debug!(
            "cleaned {} byte(s) into {} token(s)",
            text.len(),
            tokens.len()
        );
        Ok(tokens)
    }

    /// Like [`clean`](Self::clean), but fails with `EmptyInput` when nothing
    /// survives cleaning.
    pub fn clean_non_empty(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self.clean(text)?;
        if tokens.is_empty() {
            return Err(FolioError::empty_input(
                "no tokens left after cleaning",
            ));
        }
        Ok(tokens)
    }

    /// Clean several documents in parallel. Results keep the input order.
    pub fn clean_all<S>(&self, texts: &[S]) -> Result<Vec<Vec<String>>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.clean(text.as_ref()))
            .collect()
    }

    /// The text after stage-direction stripping, before tokenization.
    pub fn clean_lines(&self, text: &str) -> String {
        self.analyzer.pipeline().apply_char_filters(text)
    }
}

/// Clean `text` with `config`. Builds a throwaway [`TextCleaner`].
pub fn clean(text: &str, config: &CleanConfig) -> Result<Vec<String>> {
    TextCleaner::new(config.clone())?.clean(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE: &str = "Google's quantum processor, Sycamore, performed a \
        calculation in 200 seconds. The companies said classical computers \
        would need 10,000 years.";

    #[test]
    fn test_clean_article() {
        let tokens = clean(ARTICLE, &CleanConfig::default()).unwrap();
        assert_eq!(
            tokens,
            vec![
                "google",
                "quantum",
                "processor",
                "sycamore",
                "performed",
                "calculation",
                "second",
                "company",
                "said",
                "classical",
                "computer",
                "would",
                "need",
                "year",
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let cleaner = TextCleaner::new(CleanConfig::default()).unwrap();
        assert!(cleaner.clean("").unwrap().is_empty());
        assert!(cleaner.clean("  \n\t").unwrap().is_empty());

        let err = cleaner.clean_non_empty("the 1602 and").unwrap_err();
        assert!(matches!(err, FolioError::EmptyInput(_)));
    }

    #[test]
    fn test_clean_all_keeps_order() {
        let cleaner = TextCleaner::new(CleanConfig::default()).unwrap();
        let texts: Vec<String> = (0..32).map(|i| format!("doc{i} troy")).collect();
        let texts = [texts, vec!["Hector".to_string(), "".to_string()]].concat();

        let cleaned = cleaner.clean_all(&texts).unwrap();
        assert_eq!(cleaned.len(), 34);
        // "doc0" etc. are not alphabetic.
        assert_eq!(cleaned[0], vec!["troy"]);
        assert_eq!(cleaned[32], vec!["hector"]);
        assert!(cleaned[33].is_empty());
    }

    #[test]
    fn test_clean_lines() {
        let config = CleanConfig {
            strip_stage_directions: true,
            ..Default::default()
        };
        let cleaner = TextCleaner::new(config).unwrap();

        assert_eq!(
            cleaner.clean_lines("Enter PANDARUS and TROILUS\nSweet Pandarus-\r\n"),
            "\nSweet Pandarus-\r\n"
        );
    }

    #[test]
    fn test_new_lowercases_extra_stopwords() {
        let mut config = CleanConfig::default();
        config.extra_stopwords.insert("Troy".to_string());
        let cleaner = TextCleaner::new(config).unwrap();

        assert!(cleaner.config().extra_stopwords.contains("troy"));
        assert_eq!(cleaner.clean("Troy burns").unwrap(), vec!["burn"]);
    }
}
