//! In-memory field-aware document search.
//!
//! Documents are indexed once at construction: a presence-only inverted index feeds a smoothed
//! IDF, and every field of every document gets a TF-IDF weight per term. Queries are scored with
//! a cosine-style similarity that applies per-field boosts (as exponents on the query score) and
//! a coordination factor for the share of query terms a document covers.

pub mod document;
pub mod engine;
pub mod index;
pub mod query;
pub mod rank;
pub mod select;
pub mod tokenizer;
pub mod weights;

pub use document::{parse_corpus, Document, FieldValue};
pub use engine::{Engine, EngineOptions, QueryOptions};
pub use error::{Error, Result};
pub use index::{idf, InvertedIndex};
pub use query::QueryVector;
pub use rank::{FieldBoosts, RankingEntry};
pub use select::{DocumentVector, TermMatch};
pub use weights::FieldWeights;

pub type DocId = u32;

mod error {
    /// Errors raised while building an engine from corpus input.
    #[derive(thiserror::Error, Debug)]
    pub enum Error {
        /// The corpus could not be interpreted as a list of flat documents.
        #[error("invalid corpus: {0}")]
        InvalidCorpus(String),
    }

    pub type Result<T> = std::result::Result<T, Error>;
}
