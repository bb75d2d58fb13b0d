/// This crate is a batch Document-Term Matrix and term weighting engine.
pub mod corpus;
pub mod error;
pub mod tokenizer;
pub mod utils;
pub mod vectorizer;

/// Vectorization Pipeline
/// The top-level struct of this crate, running the full forward pass over a
/// corpus: tokenization, vocabulary building, document-term matrix assembly
/// and weighting.
///
/// `Vectorizer<E>` has the following generic parameter:
/// - `E`: Weighting engine type (e.g., DefaultWeightingEngine)
///
/// The pipeline is batch-oriented: every product is derived in one pass and
/// nothing is updated incrementally afterward. Per-document tokenization can
/// run in parallel; accumulation into the shared vocabulary and matrix is a
/// single-threaded reduction.
pub use vectorizer::Vectorizer;

/// Result bundle of one pipeline run
/// Holds the vocabulary, the raw count matrix, the relative-frequency
/// matrix, the IDF vector and the TF-IDF matrix, all carrying their
/// document and term labels.
pub use vectorizer::VectorizedCorpus;

/// Corpus of raw documents
/// Keeps (id, text) pairs in ingestion order and rejects duplicate ids.
/// Documents are immutable once ingested.
pub use corpus::{Corpus, Document};

/// Loader interface for packaged corpora, with a built-in sample dataset.
pub use corpus::sample::{CorpusSource, SampleCorpus};

/// Tokenization policy and the pure tokenize function
/// Policies: whitespace split, regex split, Unicode words, word n-grams,
/// characters, character shingles.
pub use tokenizer::{tokenize, TokenPolicy};

/// Token Frequency structure
/// A struct for managing token occurrence counts within one document.
/// Used as the base data for matrix assembly.
pub use vectorizer::token::TokenFrequency;

/// Corpus vocabulary
/// Sorted, deduplicated term index; term `i` owns column `i` (0-based).
pub use vectorizer::vocab::Vocabulary;

/// Document-Term Matrix
/// documents × vocabulary counts with row/column labels.
pub use vectorizer::dtm::DocTermMatrix;

/// Weighting Engine Trait and its default implementation
/// Defines the relative-frequency, IDF and TF-IDF transforms of a finished
/// DTM. Implement the trait to plug a different weighting strategy into
/// `Vectorizer<E>`; `DefaultWeightingEngine` performs the textbook
/// calculation (row-normalized tf, `log10(N / df)` idf).
pub use vectorizer::weighting::{
    DefaultWeightingEngine, IdfVector, TfWeight, WeightMatrix, WeightingEngine,
};

/// Ranked term report
/// `TermHits` holds (term, weight) entries with score sorting and top-k
/// selection for downstream reporting.
pub use vectorizer::rank::TermHits;

/// Crate error type and Result alias.
pub use error::{Error, Result};
