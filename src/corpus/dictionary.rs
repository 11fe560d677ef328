//! Vocabulary: a bijection between tokens and stable integer ids.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Identifier of a token in a [`Dictionary`].
pub type TokenId = u32;

/// Token vocabulary with ids assigned in first-seen order.
///
/// Ids are dense (`0..len`), never reused, and never change once assigned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<DictionaryEntry>", into = "Vec<DictionaryEntry>")]
pub struct Dictionary {
    tokens: Vec<String>,
    /// Number of documents containing each token, indexed by id.
    doc_freqs: Vec<u64>,
    ids: AHashMap<String, TokenId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DictionaryEntry {
    token: String,
    document_frequency: u64,
}

impl From<Vec<DictionaryEntry>> for Dictionary {
    fn from(entries: Vec<DictionaryEntry>) -> Self {
        let mut dictionary = Dictionary::new();
        for entry in entries {
            let id = dictionary.get_or_insert(&entry.token);
            dictionary.doc_freqs[id as usize] += entry.document_frequency;
        }
        dictionary
    }
}

impl From<Dictionary> for Vec<DictionaryEntry> {
    fn from(dictionary: Dictionary) -> Self {
        dictionary
            .tokens
            .into_iter()
            .zip(dictionary.doc_freqs)
            .map(|(token, document_frequency)| DictionaryEntry {
                token,
                document_frequency,
            })
            .collect()
    }
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of `token`, assigning the next free id if it is new.
    pub(crate) fn get_or_insert(&mut self, token: &str) -> TokenId {
        if let Some(&id) = self.ids.get(token) {
            return id;
        }
        let id = self.tokens.len() as TokenId;
        self.tokens.push(token.to_string());
        self.doc_freqs.push(0);
        self.ids.insert(token.to_string(), id);
        id
    }

    pub(crate) fn increment_document_frequency(&mut self, id: TokenId) {
        if let Some(df) = self.doc_freqs.get_mut(id as usize) {
            *df += 1;
        }
    }

    /// Id of `token`, if known.
    pub fn token_to_id(&self, token: &str) -> Option<TokenId> {
        self.ids.get(token).copied()
    }

    /// Id of `token`, or `NotFound`.
    pub fn lookup(&self, token: &str) -> Result<TokenId> {
        self.token_to_id(token)
            .ok_or_else(|| FolioError::not_found(format!("token {token:?} is not in the vocabulary")))
    }

    /// Token with id `id`, if assigned.
    pub fn token(&self, id: TokenId) -> Option<&str> {
        self.tokens.get(id as usize).map(String::as_str)
    }

    /// Number of documents containing the token with id `id`.
    pub fn document_frequency(&self, id: TokenId) -> u64 {
        self.doc_freqs.get(id as usize).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.ids.contains_key(token)
    }

    /// Iterate over `(id, token)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenId, &str)> {
        self.tokens
            .iter()
            .enumerate()
            .map(|(i, t)| (i as TokenId, t.as_str()))
    }
}
