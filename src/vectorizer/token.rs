use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// TokenFrequency structure
/// Per-document token count table: how often each token occurs and the
/// total token count of the document.
///
/// Iteration order is the insertion order of first occurrence, so a table
/// built from the same token sequence always serializes the same way.
///
/// # Examples
/// ```
/// use corpus_vectorizer::TokenFrequency;
/// let mut freq = TokenFrequency::new();
/// freq.add_token("the").add_token("cat").add_token("the");
/// assert_eq!(freq.token_count("the"), 2);
/// assert_eq!(freq.token_sum(), 3);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TokenFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    token_count: IndexMap<String, u64>,
    total_token_count: u64,
}

/// Token addition
impl TokenFrequency {
    pub fn new() -> Self {
        TokenFrequency {
            token_count: IndexMap::new(),
            total_token_count: 0,
        }
    }

    /// Count one token occurrence
    #[inline]
    pub fn add_token(&mut self, token: &str) -> &mut Self {
        let count = self.token_count.entry(token.to_string()).or_insert(0);
        *count += 1;
        self.total_token_count += 1;
        self
    }

    /// Count a slice of token occurrences, in order
    #[inline]
    pub fn add_tokens<T>(&mut self, tokens: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for token in tokens {
            self.add_token(token.as_ref());
        }
        self
    }

    /// Build a table directly from a token sequence
    pub fn from_tokens<T>(tokens: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        let mut freq = TokenFrequency::new();
        freq.add_tokens(tokens);
        freq
    }
}

/// Count access
impl TokenFrequency {
    /// Occurrence count of one token (0 when absent)
    #[inline]
    pub fn token_count(&self, token: &str) -> u64 {
        self.token_count.get(token).copied().unwrap_or(0)
    }

    /// Total number of counted tokens
    #[inline]
    pub fn token_sum(&self) -> u64 {
        self.total_token_count
    }

    /// Number of distinct tokens
    #[inline]
    pub fn token_num(&self) -> usize {
        self.token_count.len()
    }

    #[inline]
    pub fn contains_token(&self, token: &str) -> bool {
        self.token_count.contains_key(token)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.token_count.is_empty()
    }

    /// Iterate (token, count) in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.token_count
            .iter()
            .map(|(token, &count)| (token.as_str(), count))
    }

    /// Distinct tokens as string references
    #[inline]
    pub fn token_set_ref_str(&self) -> Vec<&str> {
        self.token_count.keys().map(String::as_str).collect()
    }

    /// Distinct tokens as a hash set
    #[inline]
    pub fn token_hashset_ref_str(&self) -> HashSet<&str> {
        self.token_count.keys().map(String::as_str).collect()
    }

    /// Count of the most frequent token (0 for an empty table)
    #[inline]
    pub fn most_frequent_token_count(&self) -> u64 {
        self.token_count.values().copied().max().unwrap_or(0)
    }

    /// Reset every count
    #[inline]
    pub fn clear(&mut self) {
        self.token_count.clear();
        self.total_token_count = 0;
    }
}
