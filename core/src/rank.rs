use crate::query::QueryVector;
use crate::select::{vector_norm, DocumentVector};
use crate::DocId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-field boost, applied as an exponent on the query term score. Missing fields use 1.
pub type FieldBoosts = HashMap<String, f64>;

/// One ranked document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub doc_id: DocId,
    /// Similarity rounded to 4 decimal places.
    pub score: f64,
    /// Field name to field text for every field that supplied a matched term.
    pub field_matches: IndexMap<String, String>,
    pub matched_terms: Vec<String>,
}

impl RankingEntry {
    /// Matched terms joined with `", "`.
    pub fn terms_label(&self) -> String {
        self.matched_terms.join(", ")
    }
}

/// Score and order document vectors against the query.
///
/// `score = coord * Σ q^boost * d / (|q| * |d|)` where `coord` is the share of distinct query
/// terms the document matched. The sort is stable, so equal scores stay in input order.
/// `num_results` of `None` or `Some(0)` keeps every entry.
pub fn rank(
    query: &QueryVector,
    doc_vectors: Vec<(DocId, DocumentVector)>,
    boosts: &FieldBoosts,
    num_results: Option<usize>,
) -> Vec<RankingEntry> {
    let query_norm = query.norm();
    if query.is_empty() || query_norm == 0.0 {
        return Vec::new();
    }
    let total_terms = query.len() as f64;

    let mut entries: Vec<RankingEntry> = doc_vectors
        .into_iter()
        .map(|(doc_id, vector)| {
            let mut dot = 0.0;
            let mut matched = 0usize;
            for (term, query_score) in query.iter() {
                if let Some(m) = vector.get(term) {
                    let boost = boosts.get(&m.field_name).copied().unwrap_or(1.0);
                    dot += query_score.powf(boost) * m.score;
                    matched += 1;
                }
            }
            dot *= matched as f64 / total_terms;
            dot /= query_norm * vector_norm(&vector);

            let mut field_matches = IndexMap::new();
            let mut matched_terms = Vec::with_capacity(vector.len());
            for (term, m) in vector {
                matched_terms.push(term);
                field_matches.insert(m.field_name, m.field_text);
            }
            RankingEntry { doc_id, score: round4(dot), field_matches, matched_terms }
        })
        .collect();

    entries.sort_by(|a, b| b.score.total_cmp(&a.score));
    if let Some(k) = num_results.filter(|&k| k > 0) {
        entries.truncate(k);
    }
    entries
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::TermMatch;
    use crate::InvertedIndex;
    use crate::document::document;

    fn matched(field: &str, score: f64) -> TermMatch {
        TermMatch { field_name: field.into(), field_text: format!("{field} text"), score }
    }

    fn query(phrase: &str, corpus: &[&str]) -> QueryVector {
        let docs: Vec<_> = corpus.iter().map(|t| document([("t", *t)])).collect();
        let index = InvertedIndex::build(&docs);
        QueryVector::from_phrase(phrase, docs.len(), &index)
    }

    #[test]
    fn single_term_full_match_scores_one() {
        let q = query("apple", &["apple", "car"]);
        let mut v = DocumentVector::new();
        v.insert("apple".into(), matched("title", 1.7));
        let out = rank(&q, vec![(0, v)], &FieldBoosts::new(), None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].score, 1.0);
        assert_eq!(out[0].matched_terms, vec!["apple"]);
        assert_eq!(out[0].field_matches["title"], "title text");
    }

    #[test]
    fn coordination_factor_scales_partial_matches() {
        // "banana" is unseen: it adds to the term count but not to the norm.
        let q = query("apple banana", &["apple", "car"]);
        let mut v = DocumentVector::new();
        v.insert("apple".into(), matched("title", 2.0));
        let out = rank(&q, vec![(0, v)], &FieldBoosts::new(), None);
        assert_eq!(out[0].score, 0.5);
    }

    #[test]
    fn boost_is_an_exponent_on_the_query_score() {
        let q = query("apple car", &["apple", "car", "apple car", "bike"]);
        let apple = q.get("apple").unwrap();
        let car = q.get("car").unwrap();
        let mut v = DocumentVector::new();
        v.insert("apple".into(), matched("title", 1.0));
        v.insert("car".into(), matched("body", 1.0));
        let mut boosts = FieldBoosts::new();
        boosts.insert("title".into(), 2.0);
        let out = rank(&q, vec![(3, v)], &boosts, None);
        let expected = (apple.powf(2.0) + car) / ((apple * apple + car * car).sqrt() * 2f64.sqrt());
        assert_eq!(out[0].score, round4(expected));
    }

    #[test]
    fn stable_descending_order_and_truncation() {
        let q = query("apple", &["apple", "x"]);
        let mk = |s: f64| {
            let mut v = DocumentVector::new();
            v.insert("apple".into(), matched("t", s));
            v
        };
        let vectors = vec![(0, mk(1.0)), (1, mk(2.0)), (2, mk(3.0))];
        let all = rank(&q, vectors.clone(), &FieldBoosts::new(), Some(0));
        let ids: Vec<DocId> = all.iter().map(|e| e.doc_id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert!(all.iter().all(|e| e.score == 1.0));
        let top = rank(&q, vectors, &FieldBoosts::new(), Some(2));
        assert_eq!(top.len(), 2);
        assert_eq!(top[1].doc_id, 1);
    }

    #[test]
    fn zero_norm_query_short_circuits() {
        let q = query("banana", &["apple"]);
        let mut v = DocumentVector::new();
        v.insert("banana".into(), matched("t", 1.0));
        assert!(rank(&q, vec![(0, v)], &FieldBoosts::new(), None).is_empty());
        assert!(rank(&QueryVector::default(), Vec::new(), &FieldBoosts::new(), None).is_empty());
    }

    #[test]
    fn rounding() {
        assert_eq!(round4(0.123_449), 0.1234);
        assert_eq!(round4(0.123_46), 0.1235);
        assert_eq!(round4(1.0), 1.0);
    }

    #[test]
    fn terms_label_joins_terms() {
        let e = RankingEntry {
            doc_id: 0,
            score: 1.0,
            field_matches: IndexMap::new(),
            matched_terms: vec!["red".into(), "apple".into()],
        };
        assert_eq!(e.terms_label(), "red, apple");
    }
}
