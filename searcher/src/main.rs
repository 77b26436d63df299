use anyhow::Result;
use clap::{Parser, Subcommand};
use core::Engine;
use searcher::{check, ingest};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "searcher")]
#[command(about = "Build an in-memory TF-IDF index and answer boolean/ranked queries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank documents against a free-text query by cosine similarity
    Search {
        /// Corpus directory holding raw/ or a stemmed/ cache
        #[arg(long)]
        corpus: PathBuf,
        /// Number of results to return
        #[arg(long, default_value_t = 10)]
        k: usize,
        /// Emit hits as JSON instead of text lines
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Query words
        query: Vec<String>,
    },
    /// List the documents containing every query word
    Boolean {
        /// Corpus directory holding raw/ or a stemmed/ cache
        #[arg(long)]
        corpus: PathBuf,
        /// Query words
        query: Vec<String>,
    },
    /// Compare engine answers against golden query/solution files
    Check {
        /// Corpus directory holding raw/ or a stemmed/ cache
        #[arg(long)]
        corpus: PathBuf,
        /// File with one query line per part
        #[arg(long)]
        queries: PathBuf,
        /// File with one JSON solution line per part
        #[arg(long)]
        solutions: PathBuf,
    },
}

#[derive(Serialize)]
struct Hit {
    doc_id: u32,
    title: String,
    score: f32,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            corpus,
            k,
            json,
            query,
        } => {
            let engine = build_engine(&corpus)?;
            let query = query.join(" ");
            let start = std::time::Instant::now();
            let ranked = engine.query_ranked(&query, k);
            tracing::info!(took_s = start.elapsed().as_secs_f64(), "ranked query complete");
            if json {
                let hits: Vec<Hit> = ranked
                    .into_iter()
                    .filter_map(|(doc_id, score)| {
                        engine.title(doc_id).map(|title| Hit {
                            doc_id,
                            title: title.to_string(),
                            score,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else {
                println!("Best matching documents to '{query}':");
                for (doc_id, score) in ranked {
                    if let Some(title) = engine.title(doc_id) {
                        println!("{title}: {score}");
                    }
                }
            }
            Ok(())
        }
        Commands::Boolean { corpus, query } => {
            let engine = build_engine(&corpus)?;
            for doc_id in engine.query_boolean(&query.join(" ")) {
                if let Some(title) = engine.title(doc_id) {
                    println!("{title}");
                }
            }
            Ok(())
        }
        Commands::Check {
            corpus,
            queries,
            solutions,
        } => {
            let engine = build_engine(&corpus)?;
            check::run(&engine, &queries, &solutions)
        }
    }
}

fn build_engine(corpus: &Path) -> Result<Engine> {
    let documents = ingest::load_corpus(corpus)?;
    let engine = Engine::build(documents)?;
    Ok(engine)
}
