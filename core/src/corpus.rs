use crate::error::{Error, Result};
use crate::DocId;
use std::collections::HashSet;

/// Immutable document collection.
///
/// Documents arrive as `(title, tokens)` pairs that already went through the
/// normalizing tokenizer. Construction sorts them by title; a document's id
/// is the rank of its title in that order, so every consumer that agrees on
/// the titles agrees on the ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    titles: Vec<String>,
    docs: Vec<Vec<String>>,
}

impl Corpus {
    pub fn from_documents(mut documents: Vec<(String, Vec<String>)>) -> Result<Self> {
        documents.sort_by(|a, b| a.0.cmp(&b.0));
        for pair in documents.windows(2) {
            if pair[0].0 == pair[1].0 {
                return Err(Error::DuplicateTitle(pair[0].0.clone()));
            }
        }
        let (titles, docs) = documents.into_iter().unzip();
        Ok(Self { titles, docs })
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn title(&self, doc: DocId) -> Option<&str> {
        self.titles.get(doc as usize).map(String::as_str)
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn tokens(&self, doc: DocId) -> Option<&[String]> {
        self.docs.get(doc as usize).map(Vec::as_slice)
    }

    /// Iterate documents as `(doc_id, tokens)` in id order.
    pub fn documents(&self) -> impl Iterator<Item = (DocId, &[String])> {
        self.docs
            .iter()
            .enumerate()
            .map(|(id, tokens)| (id as DocId, tokens.as_slice()))
    }

    /// Distinct terms across the whole corpus.
    pub fn vocabulary(&self) -> HashSet<&str> {
        self.docs
            .iter()
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(title: &str, tokens: &[&str]) -> (String, Vec<String>) {
        (title.into(), tokens.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn sorts_by_title_and_assigns_ranked_ids() {
        let corpus = Corpus::from_documents(vec![
            doc("She", &["she"]),
            doc("Allan Quatermain", &["allan"]),
            doc("King Solomons Mines", &["king"]),
        ])
        .unwrap();
        assert_eq!(
            corpus.titles(),
            &["Allan Quatermain", "King Solomons Mines", "She"]
        );
        assert_eq!(corpus.tokens(2).unwrap(), &["she".to_string()]);
    }

    #[test]
    fn rejects_duplicate_titles() {
        let err = Corpus::from_documents(vec![doc("A", &[]), doc("A", &[])]).unwrap_err();
        assert_eq!(err, Error::DuplicateTitle("A".into()));
    }

    #[test]
    fn vocabulary_is_distinct_terms() {
        let corpus =
            Corpus::from_documents(vec![doc("A", &["cat", "cat", "dog"]), doc("B", &["dog"])])
                .unwrap();
        let vocab = corpus.vocabulary();
        assert_eq!(vocab.len(), 2);
        assert!(vocab.contains("cat") && vocab.contains("dog"));
    }
}
