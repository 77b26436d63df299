use anyhow::{Context, Result};
use core::tokenizer::tokenize;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Load a corpus directory as `(title, tokens)` pairs.
///
/// A `stemmed/` subdirectory acts as a cache of normalized documents; when
/// present it is loaded directly, otherwise `raw/*.txt` files are tokenized
/// through the shared tokenizer and the cache is written for the next run.
pub fn load_corpus(dir: &Path) -> Result<Vec<(String, Vec<String>)>> {
    let stemmed = dir.join("stemmed");
    if stemmed.is_dir() {
        tracing::info!(dir = %stemmed.display(), "loading stemmed cache");
        read_stemmed(&stemmed)
    } else {
        tracing::info!(dir = %dir.display(), "stemming documents");
        read_raw(dir)
    }
}

fn text_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).max_depth(1).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if path.is_file() && name.ends_with(".txt") && !name.starts_with('.') {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    files
}

fn read_raw(dir: &Path) -> Result<Vec<(String, Vec<String>)>> {
    let raw_dir = dir.join("raw");
    let stemmed_dir = dir.join("stemmed");
    fs::create_dir_all(&stemmed_dir)
        .with_context(|| format!("creating {}", stemmed_dir.display()))?;
    // Filenames look like "King Solomons Mines 1885.txt"; the title is the
    // part before the trailing number.
    let title_re = Regex::new(r"(.*) \d+\.txt$").expect("valid regex");

    let mut documents = Vec::new();
    for path in text_files(&raw_dir) {
        let name = path.file_name().and_then(|s| s.to_str()).unwrap_or_default();
        let title = title_re
            .captures(name)
            .map(|c| c[1].to_string())
            .unwrap_or_else(|| name.trim_end_matches(".txt").to_string());
        tracing::info!(%title, "stemming");

        let text =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        let mut tokens = Vec::new();
        let mut cache = String::new();
        for line in text.lines() {
            let line_tokens = tokenize(line);
            if !line_tokens.is_empty() {
                cache.push_str(&line_tokens.join(" "));
                cache.push('\n');
            }
            tokens.extend(line_tokens);
        }
        fs::write(stemmed_dir.join(format!("{title}.txt")), cache)?;
        documents.push((title, tokens));
    }
    Ok(documents)
}

fn read_stemmed(dir: &Path) -> Result<Vec<(String, Vec<String>)>> {
    let mut documents = Vec::new();
    for path in text_files(dir) {
        let name = path.file_name().and_then(|s| s.to_str()).unwrap_or_default();
        let title = name.trim_end_matches(".txt").to_string();
        let text =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        let tokens = text.split_whitespace().map(str::to_string).collect();
        documents.push((title, tokens));
    }
    Ok(documents)
}
