use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::utils::matrix::DenseMatrix;

use super::token::TokenFrequency;
use super::vocab::Vocabulary;

/// Document-Term Matrix
/// documents × vocabulary matrix of raw token counts, rows labeled by
/// document id in ingestion order, columns by vocabulary term.
///
/// Invariants held by construction:
/// * `row_sum(d) == token_sum(d)` for every document d
/// * every cell is a non-negative count
/// * every column sum is > 0 when the vocabulary was built from the same
///   token corpus (the vocabulary only holds observed tokens)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocTermMatrix {
    doc_ids: Vec<String>,
    vocabulary: Vocabulary,
    counts: DenseMatrix<u64>,
}

impl DocTermMatrix {
    /// Build from (doc_id, token sequence) pairs
    /// Computes each document's frequency table, then fills the zeroed
    /// matrix from the tables.
    ///
    /// # Returns
    /// * `Error::UnknownToken` - a document holds a token absent from
    ///   `vocabulary` (the vocabulary was built from a different corpus)
    pub fn build<T>(corpus: &[(String, Vec<T>)], vocabulary: &Vocabulary) -> Result<Self>
    where
        T: AsRef<str>,
    {
        let docs: Vec<(String, TokenFrequency)> = corpus
            .iter()
            .map(|(id, tokens)| (id.clone(), TokenFrequency::from_tokens(tokens)))
            .collect();
        Self::from_frequencies(&docs, vocabulary)
    }

    /// Build from per-document frequency tables
    pub fn from_frequencies(
        docs: &[(String, TokenFrequency)],
        vocabulary: &Vocabulary,
    ) -> Result<Self> {
        let mut counts = DenseMatrix::zeros(docs.len(), vocabulary.len());
        let mut doc_ids = Vec::with_capacity(docs.len());
        for (row, (id, freq)) in docs.iter().enumerate() {
            for (token, count) in freq.iter() {
                let col = vocabulary.index_of(token).ok_or_else(|| Error::UnknownToken {
                    doc_id: id.clone(),
                    token: token.to_string(),
                })?;
                counts.set(row, col, count);
            }
            doc_ids.push(id.clone());
        }
        debug!(
            "built {}x{} document-term matrix",
            counts.rows(),
            counts.cols()
        );
        Ok(DocTermMatrix {
            doc_ids,
            vocabulary: vocabulary.clone(),
            counts,
        })
    }

    #[inline]
    pub fn num_docs(&self) -> usize {
        self.counts.rows()
    }

    #[inline]
    pub fn num_terms(&self) -> usize {
        self.counts.cols()
    }

    #[inline]
    pub fn doc_ids(&self) -> &[String] {
        &self.doc_ids
    }

    #[inline]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[inline]
    pub fn counts(&self) -> &DenseMatrix<u64> {
        &self.counts
    }

    /// Row position of a document id
    #[inline]
    pub fn doc_index(&self, doc_id: &str) -> Option<usize> {
        self.doc_ids.iter().position(|id| id == doc_id)
    }

    /// Count row of one document
    pub fn row_for(&self, doc_id: &str) -> Option<&[u64]> {
        self.doc_index(doc_id).map(|row| self.counts.row(row))
    }

    /// Total token count of the document in the given row
    #[inline]
    pub fn token_sum(&self, row: usize) -> u64 {
        self.counts.row_sum(row)
    }

    /// Number of documents with a non-zero cell in the given column
    pub fn document_frequency(&self, col: usize) -> usize {
        self.counts.col_iter(col).filter(|&count| count > 0).count()
    }
}
