use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Crate-wide error type.
/// Every error is raised synchronously at the point of detection; the
/// pipeline is deterministic, so nothing here is retryable.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid tokenization policy: {0}")]
    InvalidPolicy(String),

    #[error("token {token:?} in document {doc_id:?} is not in the vocabulary")]
    UnknownToken { doc_id: String, token: String },

    #[error("document {0:?} has no tokens, relative frequency is undefined")]
    EmptyDocument(String),

    #[error("term dimension mismatch: matrix has {matrix} columns, idf vector has {idf}")]
    DimensionMismatch { matrix: usize, idf: usize },

    #[error("corpus is empty")]
    EmptyCorpus,

    #[error("duplicate document id: {0:?}")]
    DuplicateDocument(String),

    #[error("malformed record at line {0}: expected \"id<TAB>text\"")]
    InvalidRecord(usize),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
