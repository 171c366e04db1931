use crate::index::{idf, InvertedIndex};
use crate::tokenizer::tokenize;
use indexmap::IndexMap;

/// Distinct query terms, each scored by its IDF in the corpus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryVector {
    terms: IndexMap<String, f64>,
}

impl QueryVector {
    /// Vectorize `phrase`. Repeated terms count once; unseen terms score 0 but are kept, so they
    /// still count towards the coordination factor.
    pub fn from_phrase(phrase: &str, doc_count: usize, index: &InvertedIndex) -> Self {
        let mut terms = IndexMap::new();
        for term in tokenize(phrase) {
            if terms.contains_key(&term) { continue; }
            let score = idf(doc_count, index, &term);
            terms.insert(term, score);
        }
        Self { terms }
    }

    pub fn get(&self, term: &str) -> Option<f64> {
        self.terms.get(term).copied()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.terms.iter().map(|(t, s)| (t.as_str(), *s))
    }

    /// Number of distinct terms, seen or not.
    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    /// Euclidean norm of the scores.
    pub fn norm(&self) -> f64 {
        self.terms.values().map(|s| s * s).sum::<f64>().sqrt()
    }
}
