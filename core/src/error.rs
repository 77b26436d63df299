use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A term looked up directly against the inverted index that was never
    /// observed while indexing the corpus.
    #[error("term not in index: {0:?}")]
    UnknownTerm(String),
    /// Two documents carry the same title; titles are the external keys and
    /// must be unique.
    #[error("duplicate document title: {0:?}")]
    DuplicateTitle(String),
}

pub type Result<T> = std::result::Result<T, Error>;
