use crate::FieldValue;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // ASCII punctuation only; the POSIX class is ASCII-bound in the regex crate.
    static ref PUNCT: Regex = Regex::new(r"[[:punct:]]").expect("valid regex");
}

/// Tokenize text into lowercase terms: ASCII punctuation is deleted (not replaced), the rest is
/// split on whitespace. Empty tokens are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stripped = PUNCT.replace_all(&lowered, "");
    stripped.split_whitespace().map(str::to_string).collect()
}

/// Tokenize a field value through its string coercion.
pub fn tokenize_value(value: &FieldValue) -> Vec<String> {
    tokenize(&value.to_text())
}
