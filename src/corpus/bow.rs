//! Sparse bag-of-words vectors.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::corpus::dictionary::TokenId;

/// A document as `(token id, count)` pairs, sorted by id, counts ≥ 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BagOfWords {
    entries: Vec<(TokenId, u64)>,
}

impl BagOfWords {
    /// Build from token ids in any order, summing repeats.
    pub fn from_ids<I: IntoIterator<Item = TokenId>>(ids: I) -> Self {
        let mut counts: AHashMap<TokenId, u64> = AHashMap::new();
        for id in ids {
            *counts.entry(id).or_insert(0) += 1;
        }
        let mut entries: Vec<(TokenId, u64)> = counts.into_iter().collect();
        entries.sort_unstable_by_key(|&(id, _)| id);
        BagOfWords { entries }
    }

    /// The `(id, count)` pairs in id order.
    pub fn entries(&self) -> &[(TokenId, u64)] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (TokenId, u64)> + '_ {
        self.entries.iter().copied()
    }

    /// Count of `id` in this document (0 if absent).
    pub fn count(&self, id: TokenId) -> u64 {
        self.entries
            .binary_search_by_key(&id, |&(i, _)| i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of token occurrences.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, c)| c).sum()
    }

    /// The `k` highest counts; equal counts keep ascending id order.
    pub fn top_k(&self, k: usize) -> Vec<(TokenId, u64)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(k);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ids() {
        let bow = BagOfWords::from_ids([3, 1, 3, 0, 3, 1]);

        assert_eq!(bow.entries(), &[(0, 1), (1, 2), (3, 3)]);
        assert_eq!(bow.count(3), 3);
        assert_eq!(bow.count(2), 0);
        assert_eq!(bow.len(), 3);
        assert_eq!(bow.total(), 6);
    }

    #[test]
    fn test_top_k_ties_by_id() {
        let bow = BagOfWords::from_ids([4, 2, 2, 4, 1]);

        assert_eq!(bow.top_k(2), vec![(2, 2), (4, 2)]);
        assert_eq!(bow.top_k(10).len(), 3);
        assert!(bow.top_k(0).is_empty());
    }

    #[test]
    fn test_empty() {
        let bow = BagOfWords::from_ids(std::iter::empty());
        assert!(bow.is_empty());
        assert_eq!(bow.total(), 0);
    }
}
