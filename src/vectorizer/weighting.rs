use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::utils::matrix::DenseMatrix;

use super::dtm::DocTermMatrix;
use super::vocab::Vocabulary;

/// Term-frequency variant feeding the TF-IDF product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TfWeight {
    /// Raw counts straight from the DTM
    RawCount,
    /// Counts divided by the document's row sum
    #[default]
    RelativeFrequency,
}

/// documents × vocabulary matrix of derived weights
/// Same shape and labels as the DTM it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightMatrix {
    doc_ids: Vec<String>,
    vocabulary: Vocabulary,
    weights: DenseMatrix<f64>,
}

impl WeightMatrix {
    /// Raw DTM counts as f64 weights
    pub fn from_counts(dtm: &DocTermMatrix) -> Self {
        WeightMatrix {
            doc_ids: dtm.doc_ids().to_vec(),
            vocabulary: dtm.vocabulary().clone(),
            weights: dtm.counts().map(|count| count as f64),
        }
    }

    #[inline]
    pub fn num_docs(&self) -> usize {
        self.weights.rows()
    }

    #[inline]
    pub fn num_terms(&self) -> usize {
        self.weights.cols()
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
    pub fn weights(&self) -> &DenseMatrix<f64> {
        &self.weights
    }

    /// Weight row of one document
    pub fn row_for(&self, doc_id: &str) -> Option<&[f64]> {
        self.doc_ids
            .iter()
            .position(|id| id == doc_id)
            .map(|row| self.weights.row(row))
    }
}

/// One IDF value per vocabulary term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdfVector {
    vocabulary: Vocabulary,
    values: Vec<f64>,
}

impl IdfVector {
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// IDF of one term
    pub fn value_of(&self, term: &str) -> Option<f64> {
        self.vocabulary
            .index_of(term)
            .map(|index| self.values[index])
    }
}

/// Weighting engine trait
/// Pure, deterministic transforms of a finished DTM. Pluggable so a
/// different weighting scheme can be swapped in without touching the
/// pipeline; `DefaultWeightingEngine` implements the textbook formulas.
pub trait WeightingEngine {
    /// Divide each row by its row sum.
    ///
    /// A document whose row sums to zero has no defined distribution:
    /// the chosen policy is to fail with `Error::EmptyDocument` rather
    /// than emit a NaN row.
    fn relative_frequency(dtm: &DocTermMatrix) -> Result<WeightMatrix>;

    /// Per term t: `log10(num_documents / document_frequency(t))`.
    /// Every vocabulary term is observed in at least one document, so the
    /// document frequency never reaches zero.
    fn inverse_document_frequency(dtm: &DocTermMatrix) -> IdfVector;

    /// Multiply each term column of `tf` by its IDF value.
    ///
    /// # Returns
    /// * `Error::DimensionMismatch` - term dimensions of `tf` and `idf`
    ///   disagree
    fn tfidf(tf: &WeightMatrix, idf: &IdfVector) -> Result<WeightMatrix>;
}

/// Textbook relative-frequency / log10-IDF engine
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultWeightingEngine;

impl WeightingEngine for DefaultWeightingEngine {
    fn relative_frequency(dtm: &DocTermMatrix) -> Result<WeightMatrix> {
        let counts = dtm.counts();
        let mut weights = DenseMatrix::zeros(counts.rows(), counts.cols());
        for (row, doc_id) in dtm.doc_ids().iter().enumerate() {
            let sum = counts.row_sum(row);
            if sum == 0 {
                return Err(Error::EmptyDocument(doc_id.clone()));
            }
            let inv = 1.0 / sum as f64;
            for col in 0..counts.cols() {
                weights.set(row, col, counts.get(row, col) as f64 * inv);
            }
        }
        Ok(WeightMatrix {
            doc_ids: dtm.doc_ids().to_vec(),
            vocabulary: dtm.vocabulary().clone(),
            weights,
        })
    }

    fn inverse_document_frequency(dtm: &DocTermMatrix) -> IdfVector {
        let doc_num = dtm.num_docs() as f64;
        let values = (0..dtm.num_terms())
            .map(|col| {
                let doc_freq = dtm.document_frequency(col) as f64;
                (doc_num / doc_freq).log10()
            })
            .collect();
        debug!("computed idf for {} terms", dtm.num_terms());
        IdfVector {
            vocabulary: dtm.vocabulary().clone(),
            values,
        }
    }

    fn tfidf(tf: &WeightMatrix, idf: &IdfVector) -> Result<WeightMatrix> {
        if tf.num_terms() != idf.len() {
            return Err(Error::DimensionMismatch {
                matrix: tf.num_terms(),
                idf: idf.len(),
            });
        }
        let mut weights = DenseMatrix::zeros(tf.num_docs(), tf.num_terms());
        for row in 0..tf.num_docs() {
            for col in 0..tf.num_terms() {
                weights.set(row, col, tf.weights().get(row, col) * idf.values[col]);
            }
        }
        Ok(WeightMatrix {
            doc_ids: tf.doc_ids.clone(),
            vocabulary: tf.vocabulary.clone(),
            weights,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::{tokenize, TokenPolicy};

    const EPS: f64 = 1e-12;

    fn scenario_dtm() -> DocTermMatrix {
        let corpus: Vec<(String, Vec<String>)> = [("d1", "the cat sat"), ("d2", "the dog ran")]
            .iter()
            .map(|(id, text)| {
                (
                    id.to_string(),
                    tokenize(text, &TokenPolicy::Word).unwrap(),
                )
            })
            .collect();
        let seqs: Vec<&[String]> = corpus.iter().map(|(_, toks)| toks.as_slice()).collect();
        let vocab = Vocabulary::build(&seqs);
        DocTermMatrix::build(&corpus, &vocab).unwrap()
    }

    #[test]
    fn relative_frequency_rows_sum_to_one() {
        let dtm = scenario_dtm();
        let rf = DefaultWeightingEngine::relative_frequency(&dtm).unwrap();
        // vocabulary order: cat dog ran sat the
        let d1 = rf.row_for("d1").unwrap();
        for (value, want) in d1.iter().zip([1.0 / 3.0, 0.0, 0.0, 1.0 / 3.0, 1.0 / 3.0]) {
            assert!((value - want).abs() < EPS);
        }
        for row in 0..rf.num_docs() {
            let sum: f64 = rf.weights().row(row).iter().sum();
            assert!((sum - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn relative_frequency_fails_on_empty_document() {
        let corpus = vec![
            ("d1".to_string(), vec!["a".to_string()]),
            ("empty".to_string(), Vec::<String>::new()),
        ];
        let seqs: Vec<&[String]> = corpus.iter().map(|(_, toks)| toks.as_slice()).collect();
        let vocab = Vocabulary::build(&seqs);
        let dtm = DocTermMatrix::build(&corpus, &vocab).unwrap();
        assert!(matches!(
            DefaultWeightingEngine::relative_frequency(&dtm),
            Err(Error::EmptyDocument(id)) if id == "empty"
        ));
    }

    #[test]
    fn idf_matches_log10_definition() {
        let dtm = scenario_dtm();
        let idf = DefaultWeightingEngine::inverse_document_frequency(&dtm);
        // "the" occurs in both documents, "cat" in one
        assert!((idf.value_of("the").unwrap() - 0.0).abs() < EPS);
        assert!((idf.value_of("cat").unwrap() - 2.0_f64.log10()).abs() < EPS);
        for col in 0..dtm.num_terms() {
            assert!(dtm.document_frequency(col) >= 1);
        }
    }

    #[test]
    fn tfidf_scales_columns_by_idf() {
        let dtm = scenario_dtm();
        let rf = DefaultWeightingEngine::relative_frequency(&dtm).unwrap();
        let idf = DefaultWeightingEngine::inverse_document_frequency(&dtm);
        let tfidf = DefaultWeightingEngine::tfidf(&rf, &idf).unwrap();

        let vocab = dtm.vocabulary();
        let the = vocab.index_of("the").unwrap();
        let cat = vocab.index_of("cat").unwrap();
        let d1 = tfidf.row_for("d1").unwrap();
        // "the" is corpus-wide, so its tf-idf vanishes
        assert!((d1[the] - 0.0).abs() < EPS);
        assert!((d1[cat] - (1.0 / 3.0) * 2.0_f64.log10()).abs() < EPS);
    }

    #[test]
    fn tfidf_works_on_raw_counts_too() {
        let dtm = scenario_dtm();
        let counts = WeightMatrix::from_counts(&dtm);
        let idf = DefaultWeightingEngine::inverse_document_frequency(&dtm);
        let tfidf = DefaultWeightingEngine::tfidf(&counts, &idf).unwrap();
        let cat = dtm.vocabulary().index_of("cat").unwrap();
        let d1 = tfidf.row_for("d1").unwrap();
        assert!((d1[cat] - 2.0_f64.log10()).abs() < EPS);
    }

    #[test]
    fn tfidf_rejects_dimension_mismatch() {
        let dtm = scenario_dtm();
        let counts = WeightMatrix::from_counts(&dtm);

        let other: Vec<(String, Vec<String>)> =
            vec![("x".to_string(), vec!["only".to_string()])];
        let seqs: Vec<&[String]> = other.iter().map(|(_, toks)| toks.as_slice()).collect();
        let other_vocab = Vocabulary::build(&seqs);
        let other_dtm = DocTermMatrix::build(&other, &other_vocab).unwrap();
        let short_idf = DefaultWeightingEngine::inverse_document_frequency(&other_dtm);

        assert!(matches!(
            DefaultWeightingEngine::tfidf(&counts, &short_idf),
            Err(Error::DimensionMismatch { matrix: 5, idf: 1 })
        ));
    }

    #[test]
    fn weighting_is_deterministic() {
        let dtm = scenario_dtm();
        let a = DefaultWeightingEngine::relative_frequency(&dtm).unwrap();
        let b = DefaultWeightingEngine::relative_frequency(&dtm).unwrap();
        assert_eq!(a, b);
        let idf_a = DefaultWeightingEngine::inverse_document_frequency(&dtm);
        let idf_b = DefaultWeightingEngine::inverse_document_frequency(&dtm);
        assert_eq!(idf_a, idf_b);
    }
}
