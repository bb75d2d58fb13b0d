pub mod sample;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single ingested document
/// Immutable once constructed: the id and the raw text never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    id: String,
    text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Document {
            id: id.into(),
            text: text.into(),
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// In-memory document collection
/// Keeps documents in ingestion order and rejects duplicate ids, so every
/// downstream matrix row has a stable, unique label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Corpus {
    /// id -> raw text, in ingestion order
    #[serde(with = "indexmap::map::serde_seq")]
    documents: IndexMap<String, String>,
}

impl Corpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Corpus {
            documents: IndexMap::new(),
        }
    }

    /// Ingest a document
    ///
    /// # Returns
    /// * `Error::DuplicateDocument` - when the id was already ingested
    pub fn push(&mut self, doc: Document) -> Result<()> {
        if self.documents.contains_key(&doc.id) {
            return Err(Error::DuplicateDocument(doc.id));
        }
        self.documents.insert(doc.id, doc.text);
        Ok(())
    }

    /// Ingest an (id, text) pair
    #[inline]
    pub fn add(&mut self, id: impl Into<String>, text: impl Into<String>) -> Result<()> {
        self.push(Document::new(id, text))
    }

    /// Build a corpus from (id, text) pairs, in order
    pub fn from_pairs<I, S, T>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut corpus = Corpus::new();
        for (id, text) in pairs {
            corpus.add(id, text)?;
        }
        Ok(corpus)
    }

    /// Parse `id<TAB>text` records, one per line
    /// Blank lines are skipped. This is the delimited-file shape external
    /// collaborators hand over; reading the file itself is the caller's job.
    ///
    /// # Returns
    /// * `Error::InvalidRecord` - on a non-blank line without a tab
    /// * `Error::DuplicateDocument` - on a repeated id
    pub fn from_tsv_str(data: &str) -> Result<Self> {
        let mut corpus = Corpus::new();
        for (line_no, line) in data.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let (id, text) = line
                .split_once('\t')
                .ok_or(Error::InvalidRecord(line_no + 1))?;
            corpus.add(id, text)?;
        }
        Ok(corpus)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Get a document's text by id
    #[inline]
    pub fn text_of(&self, id: &str) -> Option<&str> {
        self.documents.get(id).map(String::as_str)
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.documents.contains_key(id)
    }

    /// Iterate (id, text) in ingestion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.documents
            .iter()
            .map(|(id, text)| (id.as_str(), text.as_str()))
    }

    /// Document ids in ingestion order
    pub fn doc_ids(&self) -> Vec<String> {
        self.documents.keys().cloned().collect()
    }
}
