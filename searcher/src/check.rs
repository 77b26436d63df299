use anyhow::{bail, Context, Result};
use core::Engine;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

const TOLERANCE: f64 = 1e-4;

struct Part {
    label: &'static str,
    correct: usize,
    total: usize,
}

/// Replay a golden query/solution file pair against the engine.
///
/// The files carry four line pairs: posting lookups on unstemmed words,
/// Boolean AND queries, tf-idf lookups, and ranked queries. Expected answers
/// are JSON, one line per part.
pub fn run(engine: &Engine, queries: &Path, solutions: &Path) -> Result<()> {
    let queries = read_lines(queries)?;
    let solutions = read_lines(solutions)?;
    if queries.len() < 4 || solutions.len() < 4 {
        bail!("expected four query/solution line pairs");
    }

    let parts = [
        check_postings(engine, &queries[0], &solutions[0])?,
        check_boolean(engine, &queries[1], &solutions[1])?,
        check_tfidf(engine, &queries[2], &solutions[2])?,
        check_ranked(engine, &queries[3], &solutions[3])?,
    ];

    let mut all_passed = true;
    for part in &parts {
        println!("{}: {}/{} correct", part.label, part.correct, part.total);
        all_passed &= part.correct == part.total;
    }
    if !all_passed {
        bail!("golden answers diverged");
    }
    Ok(())
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(text.lines().map(|line| line.trim().to_string()).collect())
}

fn check_postings(engine: &Engine, line: &str, soln: &str) -> Result<Part> {
    let expected: Vec<Vec<u32>> = serde_json::from_str(soln).context("posting solutions")?;
    let words: Vec<&str> = line.split(", ").collect();
    let mut correct = 0;
    for (word, expected) in words.iter().zip(&expected) {
        let got: BTreeSet<u32> = engine
            .index()
            .posting_unstemmed(word)
            .map(|posting| posting.iter().copied().collect())
            .unwrap_or_default();
        let expected: BTreeSet<u32> = expected.iter().copied().collect();
        if got == expected {
            correct += 1;
        }
    }
    Ok(Part {
        label: "inverted index",
        correct,
        total: words.len(),
    })
}

fn check_boolean(engine: &Engine, line: &str, soln: &str) -> Result<Part> {
    let expected: Vec<Vec<u32>> = serde_json::from_str(soln).context("boolean solutions")?;
    let queries: Vec<&str> = line.split(", ").collect();
    let mut correct = 0;
    for (query, expected) in queries.iter().zip(&expected) {
        let got = engine.query_boolean(query);
        let expected: BTreeSet<u32> = expected.iter().copied().collect();
        if got == expected {
            correct += 1;
        }
    }
    Ok(Part {
        label: "boolean retrieval",
        correct,
        total: queries.len(),
    })
}

fn check_tfidf(engine: &Engine, line: &str, soln: &str) -> Result<Part> {
    let expected: Vec<f64> = serde_json::from_str(soln).context("tf-idf solutions")?;
    let mut correct = 0;
    let mut total = 0;
    for (pair, expected) in line.split("; ").zip(&expected) {
        let Some((word, doc)) = pair.split_once(", ") else {
            bail!("malformed tf-idf query {pair:?}");
        };
        let doc: u32 = doc.trim().parse().context("tf-idf doc id")?;
        total += 1;
        let got = engine.tfidf().weight_unstemmed(word, doc) as f64;
        if (got - expected).abs() <= TOLERANCE {
            correct += 1;
        }
    }
    Ok(Part {
        label: "tf-idf",
        correct,
        total,
    })
}

fn check_ranked(engine: &Engine, line: &str, soln: &str) -> Result<Part> {
    let expected: Vec<Value> = serde_json::from_str(soln).context("ranked solutions")?;
    let queries: Vec<&str> = line.split(", ").collect();
    let mut correct = 0;
    for (query, expected) in queries.iter().zip(&expected) {
        let expected_doc = expected[0].as_u64().context("ranked solution doc id")?;
        let expected_score = expected[1].as_f64().context("ranked solution score")?;
        let ranked = engine.query_ranked(query, 10);
        if let Some(&(doc, score)) = ranked.first() {
            if u64::from(doc) == expected_doc && (f64::from(score) - expected_score).abs() <= TOLERANCE {
                correct += 1;
            }
        }
    }
    Ok(Part {
        label: "cosine similarity",
        correct,
        total: queries.len(),
    })
}
