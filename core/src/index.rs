use crate::corpus::Corpus;
use crate::error::{Error, Result};
use crate::tokenizer;
use crate::DocId;
use std::collections::{BTreeSet, HashMap};

/// Sparse TF-IDF weight table keyed term-then-document.
///
/// Only `(term, doc)` pairs where the term actually occurs are stored;
/// looking up any other pair yields 0.0. Per-document vector norms are
/// computed once at build time for cosine scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct TfIdfTable {
    weights: HashMap<String, HashMap<DocId, f32>>,
    norms: Vec<f32>,
}

impl TfIdfTable {
    /// Build weights in two phases: aggregate raw term counts per document,
    /// then transform counts into `(1 + log10(tf)) * log10(N / df)` weights.
    pub fn build(corpus: &Corpus) -> Self {
        let mut counts: HashMap<&str, HashMap<DocId, u32>> = HashMap::new();
        for (doc_id, tokens) in corpus.documents() {
            for term in tokens {
                *counts
                    .entry(term.as_str())
                    .or_default()
                    .entry(doc_id)
                    .or_insert(0) += 1;
            }
        }

        let num_docs = corpus.len() as f32;
        let mut weights = HashMap::with_capacity(counts.len());
        let mut norms = vec![0.0f32; corpus.len()];
        for (term, by_doc) in counts {
            let df = by_doc.len() as f32;
            let idf = (num_docs / df).log10();
            let term_weights: HashMap<DocId, f32> = by_doc
                .into_iter()
                .map(|(doc_id, tf_raw)| {
                    // tf_raw >= 1 for every stored pair, so log10 is safe.
                    let tf = 1.0 + (tf_raw as f32).log10();
                    let weight = tf * idf;
                    norms[doc_id as usize] += weight * weight;
                    (doc_id, weight)
                })
                .collect();
            weights.insert(term.to_string(), term_weights);
        }
        for norm in norms.iter_mut() {
            *norm = norm.sqrt();
        }

        tracing::debug!(num_terms = weights.len(), "tf-idf table built");
        Self { weights, norms }
    }

    /// Weight for a `(term, doc)` pair; 0.0 when the term does not occur in
    /// the document or is unknown entirely.
    pub fn weight(&self, term: &str, doc: DocId) -> f32 {
        self.weights
            .get(term)
            .and_then(|by_doc| by_doc.get(&doc))
            .copied()
            .unwrap_or(0.0)
    }

    /// Weight lookup for a raw, unstemmed word.
    pub fn weight_unstemmed(&self, word: &str, doc: DocId) -> f32 {
        self.weight(&tokenizer::stem(word), doc)
    }

    /// Euclidean length of the document's TF-IDF vector.
    pub fn norm(&self, doc: DocId) -> f32 {
        self.norms.get(doc as usize).copied().unwrap_or(0.0)
    }
}

/// Maps each indexed term to the set of documents containing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvertedIndex {
    postings: HashMap<String, BTreeSet<DocId>>,
}

impl InvertedIndex {
    pub fn build(corpus: &Corpus) -> Self {
        let mut postings: HashMap<String, BTreeSet<DocId>> = HashMap::new();
        for (doc_id, tokens) in corpus.documents() {
            for term in tokens {
                postings.entry(term.clone()).or_default().insert(doc_id);
            }
        }
        tracing::debug!(num_terms = postings.len(), "inverted index built");
        Self { postings }
    }

    /// Documents containing `term`, ascending by id. Errors if the term was
    /// never observed during indexing; callers that treat out-of-vocabulary
    /// terms as benign translate this at their own layer.
    pub fn posting(&self, term: &str) -> Result<&BTreeSet<DocId>> {
        self.postings
            .get(term)
            .ok_or_else(|| Error::UnknownTerm(term.to_string()))
    }

    /// Posting lookup for a raw, unstemmed word.
    pub fn posting_unstemmed(&self, word: &str) -> Result<&BTreeSet<DocId>> {
        self.posting(&tokenizer::stem(word))
    }

    pub fn contains(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    pub fn num_terms(&self) -> usize {
        self.postings.len()
    }
}
