use core::tokenizer::{stem, tokenize};

#[test]
fn it_normalizes_and_stems() {
    let words = tokenize("Running Runners RUN!");
    // every surface form reduces to the same stem family
    assert_eq!(words, vec!["run", "runner", "run"]);
}

#[test]
fn it_strips_non_alphanumerics_within_tokens() {
    let words = tokenize("x-ray 3");
    assert_eq!(words, vec!["xray", "3"]);
}

#[test]
fn query_and_corpus_normalization_agree() {
    let corpus_side = tokenize("The hunters hunted.");
    let query_side = tokenize("THE Hunters hunted");
    assert_eq!(corpus_side, query_side);
}

#[test]
fn stem_lowercases_first() {
    assert_eq!(stem("Hunting"), stem("hunting"));
}
