use anyhow::{anyhow, bail, Context, Result};
use docsearch::{parse_corpus, Document, RankingEntry};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const RULE: &str = "------------------------------------------------";

/// Load documents from a `.json`/`.jsonl` file, or from every such file under a directory
/// (visited in path order, so document ids are stable between runs).
pub fn load_corpus(path: &Path) -> Result<Vec<Document>> {
    let mut files: Vec<PathBuf> = Vec::new();
    if path.is_dir() {
        for entry in WalkDir::new(path).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && is_corpus_file(p) {
                files.push(p.to_path_buf());
            }
        }
    } else if path.is_file() {
        files.push(path.to_path_buf());
    } else {
        bail!("corpus path {} does not exist", path.display());
    }

    let mut docs = Vec::new();
    for file in files {
        let text = fs::read_to_string(&file).with_context(|| format!("reading {}", file.display()))?;
        let parsed = parse_corpus(&text).with_context(|| format!("parsing {}", file.display()))?;
        tracing::debug!(file = %file.display(), docs = parsed.len(), "loaded corpus file");
        docs.extend(parsed);
    }
    Ok(docs)
}

fn is_corpus_file(p: &Path) -> bool {
    matches!(p.extension().and_then(|s| s.to_str()), Some("json" | "jsonl"))
}

/// Parse a `field=exponent` boost argument.
pub fn parse_boost(arg: &str) -> Result<(String, f64)> {
    let (field, value) = arg
        .split_once('=')
        .ok_or_else(|| anyhow!("boost {arg:?} must look like field=exponent"))?;
    let field = field.trim();
    if field.is_empty() {
        bail!("boost {arg:?} has an empty field name");
    }
    let boost: f64 = value
        .trim()
        .parse()
        .with_context(|| format!("boost {arg:?} has a non-numeric exponent"))?;
    if !boost.is_finite() {
        bail!("boost {arg:?} must be finite");
    }
    Ok((field.to_string(), boost))
}

/// Render results as the console table: rank, score, document index, matched terms, then one
/// `field - text` line per matched field.
pub fn render_table(phrase: &str, results: &[RankingEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Query: {phrase}");
    let _ = writeln!(out, "Search Results");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{:<7} {:<7} {:<5} {:<30}", "Ranking", "Score", "Idx", "Terms");
    for (position, entry) in results.iter().enumerate() {
        let score = format!("{:?}", entry.score);
        let _ = writeln!(out, "{:<7} {:<7} {:<5} {:<30}", position + 1, score, entry.doc_id, entry.terms_label());
        let matches: Vec<String> = entry
            .field_matches
            .iter()
            .map(|(field, text)| format!("{field} - {text}"))
            .collect();
        let _ = writeln!(out, "{}", matches.join(".\n"));
        let _ = writeln!(out, "{RULE}");
    }
    out
}

/// Render results as pretty JSON.
pub fn render_json(results: &[RankingEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}
