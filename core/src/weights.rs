use crate::index::{idf, InvertedIndex};
use crate::tokenizer::tokenize;
use crate::Document;
use indexmap::IndexMap;

/// Term weights of one document: field name to (term to weight), both in document order.
pub type FieldWeights = IndexMap<String, IndexMap<String, f64>>;

/// TF-IDF weight of every distinct term in every field of `doc`.
///
/// `tf` is the square root of the raw count within the field. With `use_field_norms` the weight
/// is further scaled by `1 / sqrt(field length in chars)`; an empty field then weighs 0.
pub fn compute_weights(
    doc: &Document,
    doc_count: usize,
    index: &InvertedIndex,
    use_field_norms: bool,
) -> FieldWeights {
    let mut weights = FieldWeights::with_capacity(doc.len());
    for (field_name, value) in doc {
        let text = value.to_text();
        let norm = if use_field_norms { field_norm(text.chars().count()) } else { 1.0 };

        let mut counts: IndexMap<String, u32> = IndexMap::new();
        for term in tokenize(&text) {
            *counts.entry(term).or_insert(0) += 1;
        }
        let field_weights = counts
            .into_iter()
            .map(|(term, count)| {
                let tf = (count as f64).sqrt();
                let weight = tf * idf(doc_count, index, &term) * norm;
                (term, weight)
            })
            .collect();
        weights.insert(field_name.clone(), field_weights);
    }
    weights
}

fn field_norm(char_len: usize) -> f64 {
    if char_len == 0 { 0.0 } else { 1.0 / (char_len as f64).sqrt() }
}
