//! Exploratory helpers: pattern search over raw text, per-line token counts
//! and histogram binning of those counts.
//!
//! # Examples
//!
//! ```
//! use folio::inspect::{PatternSearch, quantities_before};
//!
//! let text = "We report a processor with 53 qubits. It has 2 rows.";
//!
//! let capitalized = PatternSearch::new(r"[A-Z]\w+").unwrap();
//! assert_eq!(capitalized.find_all(text), vec!["We", "It"]);
//!
//! assert_eq!(quantities_before(text, "qubits").unwrap(), vec!["53"]);
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::Tokenizer;
use crate::error::{FolioError, Result};

/// Sentence-ending punctuation.
pub const SENTENCE_ENDINGS: &str = r"[.?!]";

/// Runs of decimal digits.
pub const DIGITS: &str = r"\d+";

static SENTENCE_ENDINGS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SENTENCE_ENDINGS).expect("sentence ending pattern is valid"));

/// Bin edges used for line lengths: one bin per length up to 15 words,
/// then a single bin collecting everything longer.
pub const LINE_LENGTH_EDGES: &[usize] = &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 200];

/// A match location, byte offsets into the searched text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// A compiled pattern with split/find helpers.
#[derive(Debug, Clone)]
pub struct PatternSearch {
    regex: Regex,
}

impl PatternSearch {
    /// Compile `pattern`. Invalid patterns are `InvalidArgument` errors.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| FolioError::invalid_argument(format!("Invalid regex pattern: {e}")))?;
        Ok(PatternSearch { regex })
    }

    /// The pattern source.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Split `text` at every match. Leading and trailing empty pieces are
    /// kept, so `"a. b."` splits into `["a", " b", ""]`.
    pub fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex.split(text).collect()
    }

    /// Every non-overlapping match, in order.
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex.find_iter(text).map(|m| m.as_str()).collect()
    }

    /// The first match, if any.
    pub fn find_first(&self, text: &str) -> Option<MatchSpan> {
        self.regex.find(text).map(|m| MatchSpan {
            start: m.start(),
            end: m.end(),
            text: m.as_str().to_string(),
        })
    }
}

/// Split `text` on sentence-ending punctuation.
pub fn split_sentence_endings(text: &str) -> Vec<&str> {
    SENTENCE_ENDINGS_REGEX.split(text).collect()
}

/// Numbers written directly before `noun`, as in `53 qubits`.
pub fn quantities_before(text: &str, noun: &str) -> Result<Vec<String>> {
    let pattern = format!(r"(\d+) {}\b", regex::escape(noun));
    let regex = Regex::new(&pattern)
        .map_err(|e| FolioError::invalid_argument(format!("Invalid noun {noun:?}: {e}")))?;
    Ok(regex
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect())
}

/// Number of tokens on each `\n`-separated line of `text`.
pub fn line_token_counts(text: &str, tokenizer: &dyn Tokenizer) -> Result<Vec<usize>> {
    text.split('\n')
        .map(|line| Ok(tokenizer.tokenize(line)?.count()))
        .collect()
}

/// Counts of values per bin.
///
/// Bin `i` covers `[edges[i], edges[i + 1])`; the last bin also includes its
/// upper edge. Values outside the edges are clipped into the first or last
/// bin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Histogram {
    edges: Vec<usize>,
    counts: Vec<u64>,
}

impl Histogram {
    /// Bin `values` using `edges`, which must hold at least two strictly
    /// increasing values.
    pub fn from_values(values: &[usize], edges: &[usize]) -> Result<Self> {
        if edges.len() < 2 {
            return Err(FolioError::invalid_argument(
                "a histogram needs at least two bin edges",
            ));
        }
        if edges.windows(2).any(|w| w[0] >= w[1]) {
            return Err(FolioError::invalid_argument(
                "bin edges must be strictly increasing",
            ));
        }

        let bins = edges.len() - 1;
        let mut counts = vec![0u64; bins];
        for &value in values {
            // Index of the last edge <= value, clipped to a valid bin.
            let bin = edges
                .partition_point(|&edge| edge <= value)
                .saturating_sub(1)
                .min(bins - 1);
            counts[bin] += 1;
        }

        Ok(Histogram {
            edges: edges.to_vec(),
            counts,
        })
    }

    pub fn edges(&self) -> &[usize] {
        &self.edges
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// `(low, high, count)` per bin.
    pub fn bins(&self) -> impl Iterator<Item = (usize, usize, u64)> + '_ {
        self.edges
            .windows(2)
            .zip(&self.counts)
            .map(|(w, &count)| (w[0], w[1], count))
    }

    /// Number of values binned.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}
