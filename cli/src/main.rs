use anyhow::Result;
use clap::Parser;
use docsearch::{Engine, EngineOptions, QueryOptions};
use docsearch_cli::{load_corpus, parse_boost, render_json, render_table};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "docsearch")]
#[command(about = "Rank documents of a JSON corpus against a free-text query", long_about = None)]
struct Cli {
    /// Corpus file (.json array or .jsonl) or a directory of them
    #[arg(long)]
    corpus: PathBuf,
    /// Scale term weights by 1/sqrt(field length)
    #[arg(long, default_value_t = false)]
    field_norms: bool,
    /// Number of results to show; 0 shows all
    #[arg(short = 'k', long, default_value_t = 10)]
    num_results: usize,
    /// Field boost as field=exponent; may be repeated
    #[arg(long = "boost", value_parser = parse_boost)]
    boosts: Vec<(String, f64)>,
    /// Print results as JSON instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Query words
    #[arg(required = true)]
    query: Vec<String>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    let docs = load_corpus(&cli.corpus)?;
    let engine = Engine::new(docs, EngineOptions { use_field_norms: cli.field_norms })?;
    tracing::info!(num_docs = engine.doc_count(), corpus = %cli.corpus.display(), "corpus indexed");

    let mut options = QueryOptions::default().with_num_results(cli.num_results);
    for (field, boost) in cli.boosts {
        options = options.with_boost(field, boost);
    }
    let phrase = cli.query.join(" ");
    let results = engine.query(&phrase, &options);

    if cli.json {
        println!("{}", render_json(&results)?);
    } else {
        print!("{}", render_table(&phrase, &results));
    }
    Ok(())
}
