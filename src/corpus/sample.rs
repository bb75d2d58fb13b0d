use crate::error::Result;

use super::Corpus;

/// Loader interface for packaged corpora
/// Sample datasets are injected through this trait instead of living as
/// ambient global state, so tests and demos can swap in their own source.
pub trait CorpusSource {
    /// Short name of the dataset
    fn name(&self) -> &'static str;

    /// Load the dataset into an in-memory corpus
    fn load(&self) -> Result<Corpus>;
}

/// Built-in sample corpus
/// Opening lines of a few public-domain novels, keyed by title.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleCorpus;

const SAMPLE_DOCS: &[(&str, &str)] = &[
    ("moby_dick", "Call me Ishmael. Some years ago, never mind how long precisely, having little or no money in my purse, I thought I would sail about a little and see the watery part of the world."),
    ("pride_and_prejudice", "It is a truth universally acknowledged, that a single man in possession of a good fortune, must be in want of a wife."),
    ("tale_of_two_cities", "It was the best of times, it was the worst of times, it was the age of wisdom, it was the age of foolishness."),
    ("alice_in_wonderland", "Alice was beginning to get very tired of sitting by her sister on the bank, and of having nothing to do."),
    ("frankenstein", "You will rejoice to hear that no disaster has accompanied the commencement of an enterprise which you have regarded with such evil forebodings."),
];

impl CorpusSource for SampleCorpus {
    fn name(&self) -> &'static str {
        "sample"
    }

    fn load(&self) -> Result<Corpus> {
        Corpus::from_pairs(SAMPLE_DOCS.iter().copied())
    }
}
