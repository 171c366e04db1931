use crate::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A document: field name to value, in insertion order.
///
/// Field order matters: when two fields carry the same weight for a query term, the earlier
/// field wins.
pub type Document = IndexMap<String, FieldValue>;

/// Scalar value of a document field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// String form used for tokenization and field length.
    ///
    /// Integers print in base 10, floats use the shortest round-trip form (`1.0`, `1e20`),
    /// booleans print as `true`/`false` and null is empty.
    pub fn to_text(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Integer(i) => i.to_string(),
            FieldValue::Float(f) => format!("{f:?}"),
            FieldValue::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self { FieldValue::Text(s.to_string()) }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self { FieldValue::Text(s) }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self { FieldValue::Integer(i) }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self { FieldValue::Integer(i as i64) }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self { FieldValue::Float(f) }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self { FieldValue::Bool(b) }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// Build a document from `(field, value)` pairs, keeping their order.
pub fn document<K, V, I>(fields: I) -> Document
where
    K: Into<String>,
    V: Into<FieldValue>,
    I: IntoIterator<Item = (K, V)>,
{
    fields.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
}

/// Parse a corpus from JSON text: either an array of objects or JSON Lines (one object per
/// non-blank line). Field values must be scalars.
pub fn parse_corpus(input: &str) -> Result<Vec<Document>> {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if trimmed.starts_with('[') {
        let json: Value = serde_json::from_str(input)
            .map_err(|e| Error::InvalidCorpus(format!("malformed JSON: {e}")))?;
        match json {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(pos, v)| document_from_json(pos, v))
                .collect(),
            _ => Err(Error::InvalidCorpus("expected a JSON array of documents".into())),
        }
    } else {
        let mut docs = Vec::new();
        for (line_no, line) in input.lines().enumerate() {
            if line.trim().is_empty() { continue; }
            let v: Value = serde_json::from_str(line).map_err(|e| {
                Error::InvalidCorpus(format!("line {}: malformed JSON: {e}", line_no + 1))
            })?;
            docs.push(document_from_json(docs.len(), v)?);
        }
        Ok(docs)
    }
}

fn document_from_json(pos: usize, value: Value) -> Result<Document> {
    let obj = match value {
        Value::Object(obj) => obj,
        other => {
            return Err(Error::InvalidCorpus(format!(
                "document {pos}: expected an object, found {}",
                json_kind(&other)
            )))
        }
    };
    let mut doc = Document::with_capacity(obj.len());
    for (field, v) in obj {
        let fv = match v {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Integer(i),
                None => FieldValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => FieldValue::Text(s),
            other => {
                return Err(Error::InvalidCorpus(format!(
                    "document {pos}, field {field:?}: expected a scalar, found {}",
                    json_kind(&other)
                )))
            }
        };
        doc.insert(field, fv);
    }
    Ok(doc)
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
