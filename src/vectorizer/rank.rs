use std::fmt::{self, Debug, Display};

use super::weighting::{IdfVector, WeightMatrix};

/// Structure to store ranked terms
/// Reporting layer over a weight matrix row or column aggregate.
pub struct TermHits {
    /// (term, weight)
    pub list: Vec<(Box<str>, f64)>,
}

impl TermHits {
    /// Create a new TermHits instance
    pub fn new(list: Vec<(Box<str>, f64)>) -> Self {
        TermHits { list }
    }

    /// Sort terms by descending weight
    pub fn sort_by_weight(&mut self) -> &mut Self {
        // Remove NaN weights
        self.list.retain(|(_, w)| !w.is_nan());
        self.list.sort_by(|a, b| b.1.total_cmp(&a.1));
        self
    }

    /// Sort terms by ascending weight
    pub fn sort_by_weight_rev(&mut self) -> &mut Self {
        self.list.retain(|(_, w)| !w.is_nan());
        self.list.sort_by(|a, b| a.1.total_cmp(&b.1));
        self
    }

    /// First k entries in current order
    pub fn top_k(&self, k: usize) -> &[(Box<str>, f64)] {
        &self.list[..k.min(self.list.len())]
    }
}

impl Debug for TermHits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // Pretty print: each term on a new line
            writeln!(f, "TermHits [")?;
            for (term, weight) in &self.list {
                writeln!(f, "    {term:?}: {weight:.6}")?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl Display for TermHits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (term, weight) in &self.list {
            writeln!(f, "{weight:.6}\t{term}")?;
        }
        Ok(())
    }
}

/// Terms of one document row, weighted
/// Returns `None` for an unknown document id.
pub fn rank_document_terms(weights: &WeightMatrix, doc_id: &str) -> Option<TermHits> {
    let row = weights.row_for(doc_id)?;
    let list = weights
        .vocabulary()
        .terms()
        .zip(row.iter())
        .map(|(term, &weight)| (Box::<str>::from(term), weight))
        .collect();
    Some(TermHits::new(list))
}

/// Column sums across every document
pub fn rank_aggregate_terms(weights: &WeightMatrix) -> TermHits {
    let list = weights
        .vocabulary()
        .terms()
        .enumerate()
        .map(|(col, term)| {
            (
                Box::<str>::from(term),
                weights.weights().col_sum(col),
            )
        })
        .collect();
    TermHits::new(list)
}

/// Terms by corpus rarity
pub fn rank_idf_terms(idf: &IdfVector) -> TermHits {
    let list = idf
        .vocabulary()
        .terms()
        .zip(idf.values().iter())
        .map(|(term, &value)| (Box::<str>::from(term), value))
        .collect();
    TermHits::new(list)
}
