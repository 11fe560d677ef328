//! Configuration for cleaning and fetching.
//!
//! Every option has a default, so a configuration file only needs to name
//! what it changes. Files are JSON:
//!
//! ```json
//! {
//!   "clean": {
//!     "strip_stage_directions": true,
//!     "extra_stopwords": ["thou", "thee"],
//!     "min_token_length": 3
//!   },
//!   "fetch": { "timeout_secs": 10 }
//! }
//! ```
//!
//! # Examples
//!
//! ```
//! use folio::config::CleanConfig;
//!
//! let mut config = CleanConfig::default();
//! assert!(config.lemmatize);
//! assert_eq!(config.min_token_length, 1);
//!
//! config.strip_stage_directions = true;
//! config.min_token_length = 3;
//! assert!(config.validate().is_ok());
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::stage_direction::DEFAULT_DIRECTION_MARKER;
use crate::analysis::token_filter::stop::StopWordList;
use crate::error::{FolioError, Result};

/// Options of the text cleaning pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    /// Blank out stage-direction lines before tokenizing.
    pub strip_stage_directions: bool,
    /// Keyword that introduces an entrance line (`Enter HECTOR`).
    pub direction_marker: String,
    /// Stop words added to the base list.
    pub extra_stopwords: BTreeSet<String>,
    /// The base stop word list.
    pub base_stopwords: StopWordList,
    /// Minimum token length in characters, applied after lemmatization.
    pub min_token_length: usize,
    /// Reduce tokens to their noun lemma.
    pub lemmatize: bool,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            strip_stage_directions: false,
            direction_marker: DEFAULT_DIRECTION_MARKER.to_string(),
            extra_stopwords: BTreeSet::new(),
            base_stopwords: StopWordList::English,
            min_token_length: 1,
            lemmatize: true,
        }
    }
}

impl CleanConfig {
    /// Add extra stop words, lowercased.
    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra_stopwords
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Lowercase the extra stop words so they compare against lowercased tokens.
    pub fn normalize(&mut self) {
        if self
            .extra_stopwords
            .iter()
            .any(|w| w.chars().any(char::is_uppercase))
        {
            self.extra_stopwords = self
                .extra_stopwords
                .iter()
                .map(|w| w.to_lowercase())
                .collect();
        }
    }

    /// Check every option, returning the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.min_token_length == 0 {
            return Err(FolioError::invalid_argument(
                "min_token_length must be at least 1",
            ));
        }
        if self.direction_marker.is_empty()
            || self.direction_marker.chars().any(char::is_whitespace)
        {
            return Err(FolioError::invalid_argument(format!(
                "direction_marker must be a single non-empty word, got {:?}",
                self.direction_marker
            )));
        }
        if let Some(word) = self.extra_stopwords.iter().find(|w| w.trim().is_empty()) {
            return Err(FolioError::invalid_argument(format!(
                "extra stop words must be non-empty, got {word:?}"
            )));
        }
        Ok(())
    }
}

/// Options for retrieving documents over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: format!("folio/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl FetchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(FolioError::invalid_argument(
                "timeout_secs must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub clean: CleanConfig,
    pub fetch: FetchConfig,
}

impl FolioConfig {
    /// Parse, normalize and validate a JSON configuration.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let mut config: FolioConfig = serde_json::from_str(content)
            .map_err(|e| FolioError::invalid_config(format!("Failed to parse config: {e}")))?;
        config.clean.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        log::debug!("Loaded configuration from {}", path.display());
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        self.clean.validate()?;
        self.fetch.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FolioConfig::default();
        assert!(!config.clean.strip_stage_directions);
        assert_eq!(config.clean.direction_marker, "Enter");
        assert!(config.clean.extra_stopwords.is_empty());
        assert_eq!(config.clean.base_stopwords, StopWordList::English);
        assert_eq!(config.clean.min_token_length, 1);
        assert!(config.clean.lemmatize);
        assert_eq!(config.fetch.timeout_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = FolioConfig::from_json_str(
            r#"{"clean": {"extra_stopwords": ["Thou", "thee"], "base_stopwords": "none"}}"#,
        )
        .unwrap();

        assert!(config.clean.extra_stopwords.contains("thou"));
        assert!(config.clean.extra_stopwords.contains("thee"));
        assert_eq!(config.clean.base_stopwords, StopWordList::None);
        assert!(config.clean.lemmatize);
        assert_eq!(config.fetch, FetchConfig::default());
    }

    #[test]
    fn test_invalid_options() {
        let config = CleanConfig {
            min_token_length: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(FolioError::InvalidArgument(_))
        ));

        let config = CleanConfig {
            direction_marker: "Enter here".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = CleanConfig::default().with_extra_stopwords([" "]);
        assert!(config.validate().is_err());

        let result = FolioConfig::from_json_str(r#"{"fetch": {"timeout_secs": 0}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_json() {
        let result = FolioConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(FolioError::Config(_))));
    }

    #[test]
    fn test_with_extra_stopwords_lowercases() {
        let config = CleanConfig::default().with_extra_stopwords(["Lord", "TROY"]);
        let words: Vec<&str> = config.extra_stopwords.iter().map(String::as_str).collect();
        assert_eq!(words, vec!["lord", "troy"]);
    }
}
