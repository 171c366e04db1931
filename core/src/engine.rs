use crate::index::{idf, InvertedIndex};
use crate::query::QueryVector;
use crate::rank::{rank, FieldBoosts, RankingEntry};
use crate::select::select_vectors;
use crate::weights::{compute_weights, FieldWeights};
use crate::{DocId, Document, Error, Result};
use serde::{Deserialize, Serialize};

/// Construction-time settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Scale term weights by `1 / sqrt(field length)`.
    #[serde(default)]
    pub use_field_norms: bool,
}

/// Per-query settings.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOptions {
    /// Maximum entries to return; `None` or `Some(0)` returns all.
    pub num_results: Option<usize>,
    pub field_boosts: FieldBoosts,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self { num_results: Some(10), field_boosts: FieldBoosts::new() }
    }
}

impl QueryOptions {
    pub fn with_num_results(mut self, k: usize) -> Self {
        self.num_results = Some(k);
        self
    }

    pub fn all_results(mut self) -> Self {
        self.num_results = None;
        self
    }

    pub fn with_boost(mut self, field: impl Into<String>, boost: f64) -> Self {
        self.field_boosts.insert(field.into(), boost);
        self
    }
}

/// Immutable search engine over a fixed corpus.
///
/// The index and all term weights are computed in [`Engine::new`]; queries only read them, so a
/// shared `&Engine` can serve queries from several threads.
#[derive(Debug, Clone)]
pub struct Engine {
    docs: Vec<Document>,
    index: InvertedIndex,
    weights: Vec<FieldWeights>,
    options: EngineOptions,
}

impl Engine {
    /// Index `docs`, assigning ids in order. An empty corpus is accepted and answers every query
    /// with no results.
    pub fn new(docs: Vec<Document>, options: EngineOptions) -> Result<Self> {
        if docs.len() > DocId::MAX as usize {
            return Err(Error::InvalidCorpus(format!("{} documents exceed the id space", docs.len())));
        }
        if docs.is_empty() {
            tracing::warn!("building search engine over an empty corpus");
        }
        let doc_count = docs.len();
        let index = InvertedIndex::build(&docs);
        let weights: Vec<FieldWeights> = docs
            .iter()
            .map(|doc| compute_weights(doc, doc_count, &index, options.use_field_norms))
            .collect();
        tracing::debug!(
            num_docs = doc_count,
            num_terms = index.num_terms(),
            use_field_norms = options.use_field_norms,
            "built search index"
        );
        Ok(Self { docs, index, weights, options })
    }

    /// Index `docs` without field norms.
    pub fn from_documents(docs: Vec<Document>) -> Result<Self> {
        Self::new(docs, EngineOptions::default())
    }

    /// Rank documents for `phrase`. Empty and punctuation-only phrases give no results.
    pub fn query(&self, phrase: &str, options: &QueryOptions) -> Vec<RankingEntry> {
        let query = QueryVector::from_phrase(phrase, self.doc_count(), &self.index);
        if query.is_empty() {
            return Vec::new();
        }
        let doc_vectors = select_vectors(&self.docs, &self.weights, &query);
        let candidates = doc_vectors.len();
        let results = rank(&query, doc_vectors, &options.field_boosts, options.num_results);
        tracing::trace!(phrase, query_terms = query.len(), candidates, returned = results.len(), "query ranked");
        results
    }

    /// Rank with default options: top 10, no boosts.
    pub fn search(&self, phrase: &str) -> Vec<RankingEntry> {
        self.query(phrase, &QueryOptions::default())
    }

    pub fn doc_count(&self) -> usize { self.docs.len() }

    pub fn document(&self, id: DocId) -> Option<&Document> {
        self.docs.get(id as usize)
    }

    pub fn field_weights(&self, id: DocId) -> Option<&FieldWeights> {
        self.weights.get(id as usize)
    }

    pub fn doc_frequency(&self, term: &str) -> usize {
        self.index.doc_frequency(term)
    }

    pub fn idf(&self, term: &str) -> f64 {
        idf(self.doc_count(), &self.index, term)
    }

    pub fn index(&self) -> &InvertedIndex { &self.index }

    pub fn options(&self) -> EngineOptions { self.options }
}
