//! Corpus builder: a shared vocabulary plus one bag of words per document.
//!
//! Documents are added in order. Tokens get ids the first time any document
//! contains them, so adding the same documents in the same order always
//! produces the same ids.
//!
//! # Examples
//!
//! ```
//! use folio::corpus::Corpus;
//!
//! let mut corpus = Corpus::new();
//! corpus.add_document(&["revenue", "cost", "revenue"]);
//! corpus.add_document(&["customer", "cost"]);
//!
//! let cost = corpus.dictionary().lookup("cost").unwrap();
//! assert_eq!(cost, 1);
//! assert_eq!(corpus.dictionary().token(2), Some("customer"));
//! assert_eq!(corpus.documents()[0].count(cost), 1);
//!
//! // Unknown tokens are ignored and the vocabulary is left alone.
//! let bow = corpus.encode(&["cost", "profit"]);
//! assert_eq!(bow.entries(), &[(cost, 1)]);
//! assert_eq!(corpus.dictionary().len(), 3);
//! ```

pub mod bow;
pub mod dictionary;

use log::debug;
use serde::{Deserialize, Serialize};

pub use bow::BagOfWords;
pub use dictionary::{Dictionary, TokenId};

use crate::error::{FolioError, Result};

/// Documents encoded against a shared, growing vocabulary.
///
/// Every id in every bag is below `dictionary().len()`. Deserialization
/// rejects input that breaks this.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "CorpusParts")]
pub struct Corpus {
    dictionary: Dictionary,
    documents: Vec<BagOfWords>,
}

#[derive(Deserialize)]
struct CorpusParts {
    dictionary: Dictionary,
    documents: Vec<BagOfWords>,
}

impl TryFrom<CorpusParts> for Corpus {
    type Error = FolioError;

    fn try_from(parts: CorpusParts) -> Result<Self> {
        let vocabulary = parts.dictionary.len();
        for (index, bow) in parts.documents.iter().enumerate() {
            if let Some((id, _)) = bow.iter().find(|&(id, _)| id as usize >= vocabulary) {
                return Err(FolioError::invalid_argument(format!(
                    "document {index} refers to token id {id} but the vocabulary has {vocabulary} token(s)"
                )));
            }
        }

        Ok(Corpus {
            dictionary: parts.dictionary,
            documents: parts.documents,
        })
    }
}

impl Corpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus from documents in order.
    pub fn from_documents<D, S>(documents: &[D]) -> Self
    where
        D: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut corpus = Self::new();
        for document in documents {
            corpus.add_document(document.as_ref());
        }
        corpus
    }

    /// Add a document, assigning ids to its new tokens in first-seen order.
    pub fn add_document<S: AsRef<str>>(&mut self, tokens: &[S]) -> &BagOfWords {
        let before = self.dictionary.len();
        let ids: Vec<TokenId> = tokens
            .iter()
            .map(|t| self.dictionary.get_or_insert(t.as_ref()))
            .collect();
        let bow = BagOfWords::from_ids(ids);

        for (id, _) in bow.iter() {
            self.dictionary.increment_document_frequency(id);
        }

        debug!(
            "document {}: {} token(s), {} distinct, {} new",
            self.documents.len(),
            tokens.len(),
            bow.len(),
            self.dictionary.len() - before
        );

        self.documents.push(bow);
        &self.documents[self.documents.len() - 1]
    }

    /// Encode `tokens` against the current vocabulary without changing it.
    /// Tokens not in the vocabulary are ignored.
    pub fn encode<S: AsRef<str>>(&self, tokens: &[S]) -> BagOfWords {
        BagOfWords::from_ids(
            tokens
                .iter()
                .filter_map(|t| self.dictionary.token_to_id(t.as_ref())),
        )
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The documents' bags of words, in the order they were added.
    pub fn documents(&self) -> &[BagOfWords] {
        &self.documents
    }

    /// Bag of words of document `index`.
    pub fn document(&self, index: usize) -> Option<&BagOfWords> {
        self.documents.get(index)
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Corpus-wide count of every token, indexed by id.
    pub fn total_counts(&self) -> Vec<(TokenId, u64)> {
        let mut totals = vec![0u64; self.dictionary.len()];
        for bow in &self.documents {
            for (id, count) in bow.iter() {
                totals[id as usize] += count;
            }
        }
        totals
            .into_iter()
            .enumerate()
            .map(|(id, count)| (id as TokenId, count))
            .collect()
    }

    /// The `k` most frequent tokens of the whole corpus; equal counts keep id order.
    pub fn top_terms(&self, k: usize) -> Vec<(String, u64)> {
        let mut ranked = self.total_counts();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(k)
            .filter_map(|(id, count)| {
                self.dictionary
                    .token(id)
                    .map(|token| (token.to_string(), count))
            })
            .collect()
    }

    /// The `k` most frequent tokens of document `index`, with their text.
    pub fn document_top_terms(&self, index: usize, k: usize) -> Option<Vec<(String, u64)>> {
        self.document(index).map(|bow| self.resolve(&bow.top_k(k)))
    }

    /// Replace ids by their tokens.
    pub fn resolve(&self, entries: &[(TokenId, u64)]) -> Vec<(String, u64)> {
        entries
            .iter()
            .filter_map(|&(id, count)| {
                self.dictionary
                    .token(id)
                    .map(|token| (token.to_string(), count))
            })
            .collect()
    }
}
