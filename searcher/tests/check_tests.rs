use core::Engine;
use searcher::{check, ingest};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn build_fixture_engine(dir: &Path) -> Engine {
    let stemmed = dir.join("stemmed");
    fs::create_dir_all(&stemmed).unwrap();
    fs::write(stemmed.join("Alpha.txt"), "cat sat mat\n").unwrap();
    fs::write(stemmed.join("Beta.txt"), "cat cat dog\n").unwrap();
    fs::write(stemmed.join("Gamma.txt"), "dog ran\n").unwrap();
    let documents = ingest::load_corpus(dir).unwrap();
    Engine::build(documents).unwrap()
}

#[test]
fn golden_answers_pass_for_matching_solutions() {
    let dir = tempdir().unwrap();
    let engine = build_fixture_engine(dir.path());

    let queries = dir.path().join("queries.txt");
    let solutions = dir.path().join("solutions.txt");
    fs::write(&queries, "cats, dog\ncat dog, ran\ncats, 1; sat, 0\ncat, dog ran\n").unwrap();
    fs::write(
        &solutions,
        concat!(
            "[[0, 1], [1, 2]]\n",
            "[[1], [2]]\n",
            "[0.229100, 0.477121]\n",
            "[[1, 0.792857], [2, 1.284387]]\n",
        ),
    )
    .unwrap();

    check::run(&engine, &queries, &solutions).unwrap();
}

#[test]
fn golden_answers_fail_on_divergence() {
    let dir = tempdir().unwrap();
    let engine = build_fixture_engine(dir.path());

    let queries = dir.path().join("queries.txt");
    let solutions = dir.path().join("solutions.txt");
    fs::write(&queries, "cats, dog\ncat dog, ran\ncats, 1; sat, 0\ncat, dog ran\n").unwrap();
    // boolean expectations deliberately wrong
    fs::write(
        &solutions,
        concat!(
            "[[0, 1], [1, 2]]\n",
            "[[0], [2]]\n",
            "[0.229100, 0.477121]\n",
            "[[1, 0.792857], [2, 1.284387]]\n",
        ),
    )
    .unwrap();

    assert!(check::run(&engine, &queries, &solutions).is_err());
}
