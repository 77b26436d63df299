use crate::corpus::Corpus;
use crate::error::Result;
use crate::index::{InvertedIndex, TfIdfTable};
use crate::tokenizer;
use crate::DocId;
use std::collections::{BTreeSet, HashMap};

/// Build-then-serve retrieval engine.
///
/// Owns the corpus and the structures derived from it. Everything is
/// immutable after `build`, so queries may run concurrently from shared
/// references without further coordination.
pub struct Engine {
    corpus: Corpus,
    index: InvertedIndex,
    tfidf: TfIdfTable,
}

impl Engine {
    /// Sort the documents, then derive the inverted index and TF-IDF table.
    pub fn build(documents: Vec<(String, Vec<String>)>) -> Result<Self> {
        let corpus = Corpus::from_documents(documents)?;
        tracing::info!(num_docs = corpus.len(), "corpus loaded");

        tracing::info!("indexing");
        let index = InvertedIndex::build(&corpus);

        tracing::info!("calculating tf-idf");
        let tfidf = TfIdfTable::build(&corpus);

        Ok(Self {
            corpus,
            index,
            tfidf,
        })
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn tfidf(&self) -> &TfIdfTable {
        &self.tfidf
    }

    pub fn title(&self, doc: DocId) -> Option<&str> {
        self.corpus.title(doc)
    }

    /// Documents containing every query term (logical AND over postings).
    ///
    /// An empty query returns the empty set, never the whole corpus. A term
    /// outside the vocabulary has an empty posting list, which empties the
    /// intersection.
    pub fn boolean_retrieve(&self, terms: &[String]) -> BTreeSet<DocId> {
        let mut terms = terms.iter();
        let Some(first) = terms.next() else {
            return BTreeSet::new();
        };
        let mut hits = match self.index.posting(first) {
            Ok(posting) => posting.clone(),
            Err(_) => return BTreeSet::new(),
        };
        for term in terms {
            if hits.is_empty() {
                break;
            }
            match self.index.posting(term) {
                Ok(posting) => hits.retain(|doc| posting.contains(doc)),
                Err(_) => return BTreeSet::new(),
            }
        }
        hits
    }

    /// Top-`k` documents by cosine similarity under ltc.lnn weighting:
    /// log-scaled query term frequency times the document's TF-IDF weight,
    /// summed over posting lists, divided by the document vector length.
    ///
    /// Results are ordered by descending score; equal scores break toward
    /// the lower document id.
    pub fn rank_retrieve(&self, terms: &[String], k: usize) -> Vec<(DocId, f32)> {
        let mut query_tf: HashMap<&str, u32> = HashMap::new();
        for term in terms {
            *query_tf.entry(term.as_str()).or_insert(0) += 1;
        }

        let mut scores = vec![0.0f32; self.corpus.len()];
        for (term, count) in query_tf {
            let wtq = 1.0 + (count as f32).log10();
            let Ok(posting) = self.index.posting(term) else {
                continue;
            };
            for &doc in posting {
                scores[doc as usize] += self.tfidf.weight(term, doc) * wtq;
            }
        }
        for (doc, score) in scores.iter_mut().enumerate() {
            let norm = self.tfidf.norm(doc as DocId);
            if norm > 0.0 {
                *score /= norm;
            }
        }

        let mut ranked: Vec<(DocId, f32)> = scores
            .into_iter()
            .enumerate()
            .map(|(doc, score)| (doc as DocId, score))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(k);
        ranked
    }

    /// Normalize a free-text query and run Boolean retrieval.
    pub fn query_boolean(&self, raw: &str) -> BTreeSet<DocId> {
        self.boolean_retrieve(&tokenizer::tokenize(raw))
    }

    /// Normalize a free-text query and run ranked retrieval.
    pub fn query_ranked(&self, raw: &str, k: usize) -> Vec<(DocId, f32)> {
        self.rank_retrieve(&tokenizer::tokenize(raw), k)
    }
}
