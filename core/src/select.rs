use crate::query::QueryVector;
use crate::{DocId, Document, FieldWeights};
use indexmap::IndexMap;
use serde::Serialize;

/// Best field of a document for one query term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermMatch {
    pub field_name: String,
    pub field_text: String,
    pub score: f64,
}

/// Query term to its best field match, restricted to terms the document shares with the query.
pub type DocumentVector = IndexMap<String, TermMatch>;

/// For every document, pick per query term the field with the strictly highest weight.
///
/// Fields are visited in document order and terms in weight-map order, so ties go to the first
/// field seen. A weight must exceed 0 to count. Documents without a single match are left out.
pub fn select_vectors(
    docs: &[Document],
    weights: &[FieldWeights],
    query: &QueryVector,
) -> Vec<(DocId, DocumentVector)> {
    let mut out = Vec::new();
    for (doc_id, (doc, field_weights)) in docs.iter().zip(weights).enumerate() {
        let mut vector = DocumentVector::new();
        for (field_name, terms) in field_weights {
            for (term, &score) in terms {
                if !query.contains(term) { continue; }
                let best = vector.get(term).map_or(0.0, |m| m.score);
                if score > best {
                    let field_text = doc.get(field_name).map(|v| v.to_text()).unwrap_or_default();
                    vector.insert(term.clone(), TermMatch { field_name: field_name.clone(), field_text, score });
                }
            }
        }
        if !vector.is_empty() {
            out.push((doc_id as DocId, vector));
        }
    }
    out
}

/// Euclidean norm of the match scores.
pub fn vector_norm(vector: &DocumentVector) -> f64 {
    vector.values().map(|m| m.score * m.score).sum::<f64>().sqrt()
}
