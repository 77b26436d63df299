pub mod corpus;
pub mod engine;
pub mod error;
pub mod index;
pub mod tokenizer;

pub type DocId = u32;

pub use corpus::Corpus;
pub use engine::Engine;
pub use error::{Error, Result};
pub use index::{InvertedIndex, TfIdfTable};
