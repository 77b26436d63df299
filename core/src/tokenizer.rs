use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref NON_ALNUM: Regex = Regex::new(r"[^a-zA-Z0-9]").expect("valid regex");
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
}

/// Tokenize text into normalized, stemmed terms: NFKC normalization,
/// lowercase, split on whitespace, strip non-alphanumeric characters inside
/// each token, drop tokens that end up empty, then stem.
///
/// Query strings and corpus documents must pass through this same function,
/// otherwise query terms silently miss the indexed vocabulary.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.nfkc().collect::<String>().to_lowercase();
    normalized
        .split_whitespace()
        .filter_map(|word| {
            let stripped = NON_ALNUM.replace_all(word, "");
            if stripped.is_empty() {
                None
            } else {
                Some(STEMMER.stem(&stripped).to_string())
            }
        })
        .collect()
}

/// Stem a single word the same way corpus tokens were stemmed.
pub fn stem(word: &str) -> String {
    STEMMER.stem(&word.to_lowercase()).to_string()
}
