use crate::tokenizer::tokenize_value;
use crate::{DocId, Document};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Presence-only inverted index: term to the set of documents containing it in any field.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct InvertedIndex {
    postings: HashMap<String, BTreeSet<DocId>>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Build from documents, assigning ids in slice order.
    pub fn build(docs: &[Document]) -> Self {
        let mut postings: HashMap<String, BTreeSet<DocId>> = HashMap::new();
        for (doc_id, doc) in docs.iter().enumerate() {
            let mut seen_in_doc: HashSet<String> = HashSet::new();
            for value in doc.values() {
                seen_in_doc.extend(tokenize_value(value));
            }
            for term in seen_in_doc {
                postings.entry(term).or_default().insert(doc_id as DocId);
            }
        }
        Self { postings }
    }

    /// Number of documents containing `term`; 0 for unknown terms.
    pub fn doc_frequency(&self, term: &str) -> usize {
        self.postings.get(term).map_or(0, BTreeSet::len)
    }

    pub fn postings(&self, term: &str) -> Option<&BTreeSet<DocId>> {
        self.postings.get(term)
    }

    pub fn num_terms(&self) -> usize { self.postings.len() }

    pub fn is_empty(&self) -> bool { self.postings.is_empty() }
}

/// Smoothed inverse document frequency: `ln(N / df + 1) + 1` for indexed terms, `0` otherwise.
///
/// Unseen terms deliberately score 0 rather than the maximum, so query-only terms add nothing
/// to a dot product or a query norm.
pub fn idf(doc_count: usize, index: &InvertedIndex, term: &str) -> f64 {
    match index.doc_frequency(term) {
        0 => 0.0,
        df => (doc_count as f64 / df as f64 + 1.0).ln() + 1.0,
    }
}
