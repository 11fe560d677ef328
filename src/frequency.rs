//! Token frequency tables and top-k ranking.
//!
//! Counts are ranked by count, highest first. Tokens with equal counts keep
//! the order in which they were first seen.
//!
//! # Examples
//!
//! ```
//! use folio::frequency::top_k;
//!
//! let tokens = ["b", "a", "b", "a", "c"];
//! assert_eq!(
//!     top_k(&tokens, 2),
//!     vec![("b".to_string(), 2), ("a".to_string(), 2)]
//! );
//! ```

use ahash::AHashMap;

/// Token counts remembering first-seen order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// Distinct tokens with their counts, in first-seen order.
    entries: Vec<(String, u64)>,
    index: AHashMap<String, usize>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token of `tokens`.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for token in tokens {
            table.add(token.as_ref());
        }
        table
    }

    /// Count one more occurrence of `token`.
    pub fn add(&mut self, token: &str) {
        self.add_count(token, 1);
    }

    /// Count `count` more occurrences of `token`. A zero count records nothing.
    pub fn add_count(&mut self, token: &str, count: u64) {
        if count == 0 {
            return;
        }
        match self.index.get(token) {
            Some(&i) => self.entries[i].1 += count,
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push((token.to_string(), count));
            }
        }
    }

    /// Occurrences of `token` (0 when unseen).
    pub fn count(&self, token: &str) -> u64 {
        self.index
            .get(token)
            .map(|&i| self.entries[i].1)
            .unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Iterate over `(token, count)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(t, c)| (t.as_str(), *c))
    }

    /// The `k` most frequent tokens, count descending, ties in first-seen
    /// order. Returns every token when `k` exceeds the number of distinct
    /// tokens.
    pub fn most_common(&self, k: usize) -> Vec<(String, u64)> {
        if k == 0 {
            return Vec::new();
        }
        let mut ranked: Vec<&(String, u64)> = self.entries.iter().collect();
        // `sort_by` is stable, so equal counts stay in first-seen order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.into_iter().take(k).cloned().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}

impl<S: AsRef<str>> Extend<S> for FrequencyTable {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for token in iter {
            self.add(token.as_ref());
        }
    }
}

/// The `k` most frequent tokens of `tokens`; see [`FrequencyTable::most_common`].
pub fn top_k<S: AsRef<str>>(tokens: &[S], k: usize) -> Vec<(String, u64)> {
    FrequencyTable::from_tokens(tokens).most_common(k)
}
