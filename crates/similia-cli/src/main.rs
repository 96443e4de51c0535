//! similia command-line interface.
//!
//! `similia build-index` is the offline build step: embed the corpus and
//! write the artifact set. `similia query` loads corpus + artifacts, runs
//! one query, prints the candidate list, and exits — the complaint text is
//! processed ephemerally and never written anywhere.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use similia_core::errors::{RetrievalError, SimiliaError};
use similia_core::{EmbeddingProvider, Remedy, SimiliaConfig};
use similia_corpus::Corpus;
use similia_embeddings::{HashingProvider, HttpProvider};
use similia_index::IndexBuilder;
use similia_retrieval::RetrievalEngine;

#[derive(Parser)]
#[command(name = "similia", version, about = "Hybrid remedy retrieval")]
struct Cli {
    /// Path to a TOML config file; defaults apply when absent.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use the deterministic local hashing provider instead of the HTTP
    /// embedding service (air-gapped builds and testing).
    #[arg(long, global = true)]
    hashing: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Embed the corpus and write the index artifacts (offline step).
    BuildIndex {
        /// Corpus file override; defaults to the configured path list.
        #[arg(long)]
        corpus: Option<PathBuf>,
        /// Output directory override for the artifact set.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Run one query against the corpus and print ranked candidates.
    Query {
        /// The complaint text.
        text: String,
        /// How many candidates to display.
        #[arg(long, default_value_t = 12)]
        top: usize,
        /// Emit the full candidate list as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => SimiliaConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SimiliaConfig::default(),
    };

    let provider: Arc<dyn EmbeddingProvider> = if cli.hashing {
        Arc::new(HashingProvider::new(config.embedding.dimensions))
    } else {
        Arc::new(HttpProvider::new(config.embedding.clone()).context("building embedding client")?)
    };

    match cli.command {
        Command::BuildIndex { corpus, out } => build_index(&config, provider, corpus, out),
        Command::Query { text, top, json } => query(&config, provider, &text, top, json),
    }
}

fn load_corpus(config: &SimiliaConfig, override_path: Option<PathBuf>) -> anyhow::Result<Corpus> {
    let corpus = match override_path {
        Some(path) => Corpus::load(&path)?,
        None => Corpus::load_first(&config.corpus.paths)?,
    };
    Ok(corpus)
}

fn build_index(
    config: &SimiliaConfig,
    provider: Arc<dyn EmbeddingProvider>,
    corpus_path: Option<PathBuf>,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    let corpus = load_corpus(config, corpus_path)?;
    let out_dir = out.unwrap_or_else(|| config.index.artifacts_dir.clone());

    let builder = IndexBuilder::new(provider.as_ref(), config.embedding.clone());
    let artifacts = builder.build(&corpus).context("building index")?;
    artifacts.save(&out_dir).context("persisting artifacts")?;

    println!(
        "built index: {} documents, {} dims, model {}, artifacts in {}",
        artifacts.manifest.rows,
        artifacts.manifest.dimensions,
        artifacts.manifest.model,
        out_dir.display()
    );
    Ok(())
}

fn query(
    config: &SimiliaConfig,
    provider: Arc<dyn EmbeddingProvider>,
    text: &str,
    top: usize,
    json: bool,
) -> anyhow::Result<()> {
    let corpus = match load_corpus(config, None) {
        Ok(corpus) => corpus,
        Err(e) => {
            // A missing corpus is non-fatal: report an empty result set.
            eprintln!("warning: {e}");
            Corpus::default()
        }
    };

    let engine = RetrievalEngine::from_artifacts_dir(
        Arc::new(corpus),
        provider,
        &config.index.artifacts_dir,
        config.retrieval.clone(),
    );

    let candidates = match engine.compute_candidates(text) {
        Ok(candidates) => candidates,
        Err(SimiliaError::Retrieval(RetrievalError::EmptyQuery)) => {
            anyhow::bail!("please enter a complaint to analyze");
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&candidates)?);
        return Ok(());
    }

    if candidates.is_empty() {
        println!("no candidates found");
        return Ok(());
    }

    println!("mode: {}", engine.mode());
    for c in candidates.iter().take(top) {
        println!("{:>2}. {} — {:.1}%", c.rank + 1, c.remedy.name, c.percent);
        println!(
            "      raw score {:.4}, rubric boost {:.2}",
            c.raw_score, c.rubric_boost
        );
    }
    if let Some(best) = candidates.first() {
        print!("{}", format_details(&best.remedy));
    }
    println!("\nsuggestions are for practitioner review only");
    Ok(())
}

/// Detail block printed for the best match: characteristics, symptom
/// pictures, thermal reaction, and modalities. Empty sections are skipped.
fn format_details(remedy: &Remedy) -> String {
    let mut out = String::new();
    push_section(&mut out, "key characteristics", &remedy.characteristics_display());
    push_section(&mut out, "physical symptoms", &remedy.physical_display());
    push_section(&mut out, "mental symptoms", &remedy.mental_display());
    push_section(&mut out, "thermal", remedy.thermal_display());
    let modalities = remedy
        .modalities
        .iter()
        .map(|(kind, value)| format!("{kind}: {}", value.display()))
        .collect::<Vec<_>>()
        .join("\n");
    push_section(&mut out, "modalities", &modalities);
    out
}

fn push_section(out: &mut String, title: &str, body: &str) {
    if body.is_empty() {
        return;
    }
    out.push('\n');
    out.push_str(title);
    out.push_str(":\n");
    for line in body.lines() {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
}
