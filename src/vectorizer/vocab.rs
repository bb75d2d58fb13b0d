use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::token::TokenFrequency;

/// Corpus vocabulary
/// The deduplicated set of every token observed in a corpus, ordered
/// lexicographically (byte/codepoint order, locale-independent). The term at
/// sorted position `i` owns column index `i`; indices are 0-based and stable
/// for the life of the vocabulary.
///
/// Built once per corpus and immutable afterward. Identical corpora always
/// produce identical vocabularies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// term -> column index, entries kept in index order
    #[serde(with = "indexmap::map::serde_seq")]
    index: IndexMap<Box<str>, usize>,
}

impl Vocabulary {
    /// Build from a corpus of token sequences
    ///
    /// # Arguments
    /// * `corpus` - one token sequence per document
    pub fn build<S, T>(corpus: &[S]) -> Self
    where
        S: AsRef<[T]>,
        T: AsRef<str>,
    {
        let mut terms: BTreeSet<&str> = BTreeSet::new();
        for seq in corpus {
            for token in seq.as_ref() {
                terms.insert(token.as_ref());
            }
        }
        Self::from_sorted(terms)
    }

    /// Build from per-document frequency tables
    pub fn from_frequencies<'a, I>(freqs: I) -> Self
    where
        I: IntoIterator<Item = &'a TokenFrequency>,
    {
        let mut terms: BTreeSet<&str> = BTreeSet::new();
        for freq in freqs {
            terms.extend(freq.iter().map(|(token, _)| token));
        }
        Self::from_sorted(terms)
    }

    fn from_sorted(terms: BTreeSet<&str>) -> Self {
        let index = terms
            .into_iter()
            .enumerate()
            .map(|(i, term)| (Box::<str>::from(term), i))
            .collect();
        Vocabulary { index }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Column index of a term
    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Term owning a column index
    #[inline]
    pub fn term_at(&self, index: usize) -> Option<&str> {
        self.index.get_index(index).map(|(term, _)| &**term)
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }

    /// Iterate terms in column order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(|term| &**term)
    }
}
