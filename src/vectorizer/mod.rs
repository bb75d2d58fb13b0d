pub mod dtm;
pub mod rank;
pub mod token;
pub mod vocab;
pub mod weighting;

use std::marker::PhantomData;

use log::debug;
use rayon::prelude::*;

use crate::corpus::Corpus;
use crate::error::{Error, Result};
use crate::tokenizer::{tokenize, TokenPolicy};

use self::dtm::DocTermMatrix;
use self::token::TokenFrequency;
use self::vocab::Vocabulary;
use self::weighting::{DefaultWeightingEngine, IdfVector, TfWeight, WeightMatrix, WeightingEngine};

/// Batch vectorization pipeline
/// One forward pass over a corpus: tokenize every document, build the
/// vocabulary, fill the document-term matrix, derive the weightings.
/// Nothing is mutated after its construction phase and nothing is
/// recomputed incrementally.
///
/// `Vectorizer<E>` is generic over the weighting engine `E`
/// (e.g. `DefaultWeightingEngine`).
#[derive(Debug, Clone)]
pub struct Vectorizer<E = DefaultWeightingEngine>
where
    E: WeightingEngine + Sync,
{
    policy: TokenPolicy,
    tf_weight: TfWeight,
    parallel: bool,
    _marker: PhantomData<E>,
}

/// Every matrix product of one pipeline run
/// Labels (document ids, vocabulary terms) ride along on each product for
/// downstream reporting.
#[derive(Debug, Clone)]
pub struct VectorizedCorpus {
    pub vocabulary: Vocabulary,
    pub dtm: DocTermMatrix,
    pub relative_frequency: WeightMatrix,
    pub idf: IdfVector,
    pub tfidf: WeightMatrix,
}

impl<E> Vectorizer<E>
where
    E: WeightingEngine + Sync,
{
    /// Create a pipeline with the given tokenization policy
    /// Defaults: relative-frequency tf, sequential tokenization.
    pub fn new(policy: TokenPolicy) -> Self {
        Vectorizer {
            policy,
            tf_weight: TfWeight::default(),
            parallel: false,
            _marker: PhantomData,
        }
    }

    /// Choose which tf variant feeds the TF-IDF product
    pub fn with_tf_weight(mut self, tf_weight: TfWeight) -> Self {
        self.tf_weight = tf_weight;
        self
    }

    /// Tokenize documents in parallel
    /// Each document is independent, so the map phase is embarrassingly
    /// parallel; vocabulary and matrix accumulation stays a single-threaded
    /// reduction over the per-document tables.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[inline]
    pub fn policy(&self) -> &TokenPolicy {
        &self.policy
    }

    #[inline]
    pub fn tf_weight(&self) -> TfWeight {
        self.tf_weight
    }

    /// Run the whole pipeline over a corpus
    ///
    /// # Returns
    /// * `VectorizedCorpus` - DTM, relative-frequency matrix, IDF vector
    ///   and TF-IDF matrix, all labeled
    /// * `Error::EmptyCorpus` - no documents to vectorize
    /// * `Error::InvalidPolicy` / `Error::EmptyDocument` - propagated from
    ///   the stages; any error aborts the whole batch
    pub fn fit(&self, corpus: &Corpus) -> Result<VectorizedCorpus> {
        if corpus.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let freqs = if self.parallel {
            self.frequencies_parallel(corpus)?
        } else {
            self.frequencies_sequential(corpus)?
        };
        debug!("tokenized {} documents with {:?}", freqs.len(), self.policy);

        let vocabulary = Vocabulary::from_frequencies(freqs.iter().map(|(_, freq)| freq));
        debug!("vocabulary holds {} terms", vocabulary.len());

        let dtm = DocTermMatrix::from_frequencies(&freqs, &vocabulary)?;
        let idf = E::inverse_document_frequency(&dtm);
        let relative_frequency = E::relative_frequency(&dtm)?;
        let tf = match self.tf_weight {
            TfWeight::RawCount => WeightMatrix::from_counts(&dtm),
            TfWeight::RelativeFrequency => relative_frequency.clone(),
        };
        let tfidf = E::tfidf(&tf, &idf)?;

        Ok(VectorizedCorpus {
            vocabulary,
            dtm,
            relative_frequency,
            idf,
            tfidf,
        })
    }

    fn frequencies_sequential(&self, corpus: &Corpus) -> Result<Vec<(String, TokenFrequency)>> {
        corpus
            .iter()
            .map(|(id, text)| {
                let tokens = tokenize(text, &self.policy)?;
                Ok((id.to_string(), TokenFrequency::from_tokens(&tokens)))
            })
            .collect()
    }

    fn frequencies_parallel(&self, corpus: &Corpus) -> Result<Vec<(String, TokenFrequency)>> {
        let docs: Vec<(&str, &str)> = corpus.iter().collect();
        docs.par_iter()
            .map(|(id, text)| {
                let tokens = tokenize(text, &self.policy)?;
                Ok((id.to_string(), TokenFrequency::from_tokens(&tokens)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn scenario_corpus() -> Corpus {
        Corpus::from_pairs([("d1", "the cat sat"), ("d2", "the dog ran")]).unwrap()
    }

    #[test]
    fn fit_runs_the_whole_forward_pass() {
        let vectorizer: Vectorizer = Vectorizer::new(TokenPolicy::Word);
        let result = vectorizer.fit(&scenario_corpus()).unwrap();

        let terms: Vec<&str> = result.vocabulary.terms().collect();
        assert_eq!(terms, vec!["cat", "dog", "ran", "sat", "the"]);
        assert_eq!(result.dtm.row_for("d1").unwrap(), &[1, 0, 0, 1, 1]);
        assert_eq!(result.dtm.row_for("d2").unwrap(), &[0, 1, 1, 0, 1]);
        assert_eq!(result.idf.len(), 5);
        assert_eq!(result.tfidf.num_docs(), 2);

        let d1 = result.relative_frequency.row_for("d1").unwrap();
        let sum: f64 = d1.iter().sum();
        assert!((sum - 1.0).abs() < EPS);
    }

    #[test]
    fn empty_corpus_is_rejected() {
        let vectorizer: Vectorizer = Vectorizer::new(TokenPolicy::Whitespace);
        assert!(matches!(
            vectorizer.fit(&Corpus::new()),
            Err(Error::EmptyCorpus)
        ));
    }

    #[test]
    fn empty_document_aborts_the_batch() {
        let corpus = Corpus::from_pairs([("d1", "some words"), ("blank", "   ")]).unwrap();
        let vectorizer: Vectorizer = Vectorizer::new(TokenPolicy::Whitespace);
        assert!(matches!(
            vectorizer.fit(&corpus),
            Err(Error::EmptyDocument(id)) if id == "blank"
        ));
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let corpus = Corpus::from_pairs([
            ("d1", "a b c a"),
            ("d2", "b c d"),
            ("d3", "e a"),
        ])
        .unwrap();
        let sequential: Vectorizer = Vectorizer::new(TokenPolicy::Whitespace);
        let parallel = sequential.clone().with_parallel(true);
        let a = sequential.fit(&corpus).unwrap();
        let b = parallel.fit(&corpus).unwrap();
        assert_eq!(a.dtm, b.dtm);
        assert_eq!(a.tfidf, b.tfidf);
    }

    #[test]
    fn raw_count_tf_scales_tfidf_by_counts() {
        let corpus = scenario_corpus();
        let rel: Vectorizer = Vectorizer::new(TokenPolicy::Word);
        let raw = rel.clone().with_tf_weight(TfWeight::RawCount);
        let rel_out = rel.fit(&corpus).unwrap();
        let raw_out = raw.fit(&corpus).unwrap();

        let cat = rel_out.vocabulary.index_of("cat").unwrap();
        let rel_d1 = rel_out.tfidf.row_for("d1").unwrap()[cat];
        let raw_d1 = raw_out.tfidf.row_for("d1").unwrap()[cat];
        // d1 holds three tokens, so the relative weight is a third
        assert!((raw_d1 / 3.0 - rel_d1).abs() < EPS);
    }

    #[test]
    fn refit_is_bit_identical() {
        let corpus = scenario_corpus();
        let vectorizer: Vectorizer = Vectorizer::new(TokenPolicy::Word);
        let a = vectorizer.fit(&corpus).unwrap();
        let b = vectorizer.fit(&corpus).unwrap();
        assert_eq!(a.dtm, b.dtm);
        assert_eq!(a.vocabulary, b.vocabulary);
        assert_eq!(a.idf, b.idf);
        assert_eq!(a.relative_frequency, b.relative_frequency);
        assert_eq!(a.tfidf, b.tfidf);
    }
}
