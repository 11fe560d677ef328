//! Cleaning analyzer.
//!
//! Runs the fixed cleaning order on raw text:
//!
//! ```text
//! Stage Directions → Word Tokenizer → Lowercase → Alphabetic
//!     → Stop Words → Lemma → Stop Words → Min Length
//! ```
//!
//! The stop list is checked a second time after lemmatization, since a lemma
//! can itself be a stop word (`wills` → `will`).
//!
//! # Examples
//!
//! ```
//! use folio::analysis::analyzer::Analyzer;
//! use folio::analysis::analyzer::cleaning::CleaningAnalyzer;
//! use folio::config::CleanConfig;
//!
//! let analyzer = CleaningAnalyzer::new(&CleanConfig::default()).unwrap();
//! let tokens: Vec<String> = analyzer
//!     .analyze("The companies hired 53 new engineers.")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(tokens, vec!["company", "hired", "new", "engineer"]);
//! ```

use std::sync::Arc;

use log::debug;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::stage_direction::StageDirectionCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::alphabetic::AlphabeticFilter;
use crate::analysis::token_filter::lemma::LemmaFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::min_length::MinLengthFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::word::WordTokenizer;
use crate::config::CleanConfig;
use crate::error::Result;

/// Analyzer implementing the text cleaning pipeline.
#[derive(Clone, Debug)]
pub struct CleaningAnalyzer {
    inner: PipelineAnalyzer,
    stop_filter: Arc<StopFilter>,
}

impl CleaningAnalyzer {
    /// Build the pipeline for `config`. The configuration is validated first.
    pub fn new(config: &CleanConfig) -> Result<Self> {
        config.validate()?;

        let stop_filter = Arc::new(StopFilter::from_list_with_extra(
            config.base_stopwords,
            config.extra_stopwords.iter().map(|w| w.to_lowercase()),
        ));

        let mut pipeline =
            PipelineAnalyzer::new(Arc::new(WordTokenizer::new())).with_name("cleaning");

        if config.strip_stage_directions {
            pipeline = pipeline.add_char_filter(Arc::new(StageDirectionCharFilter::with_marker(
                &config.direction_marker,
            )?));
        }

        pipeline = pipeline
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(AlphabeticFilter::new()))
            .add_filter(stop_filter.clone());

        if config.lemmatize {
            pipeline = pipeline
                .add_filter(Arc::new(LemmaFilter::new()))
                .add_filter(stop_filter.clone());
        }

        pipeline = pipeline.add_filter(Arc::new(MinLengthFilter::new(config.min_token_length)?));

        debug!("built cleaning analyzer: {pipeline:?}");

        Ok(CleaningAnalyzer {
            inner: pipeline,
            stop_filter,
        })
    }

    /// The underlying pipeline.
    pub fn pipeline(&self) -> &PipelineAnalyzer {
        &self.inner
    }

    /// The stop filter (base list plus extra words) used by this analyzer.
    pub fn stop_filter(&self) -> &StopFilter {
        &self.stop_filter
    }
}

impl Analyzer for CleaningAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "cleaning"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
