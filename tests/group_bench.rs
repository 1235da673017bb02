//! Integration tests of the group-order benchmark.
//!
//! Run only these tests:  cargo test --test group_bench

use std::fs;

use rand::rngs::StdRng;
use rand::SeedableRng;
use solo_bench::dictionary::GroupMap;
use solo_bench::generation::{generate_group_bench, GroupBenchFiles};
use solo_bench::report::render_group_report;
use solo_bench::{GroupBench, GroupBenchSettings, GroupConfig};

fn small_map() -> GroupMap {
    [
        ("zebra", 4),
        ("apple", 1),
        ("crane", 3),
        ("bloom", 2),
        ("quilt", 4),
        ("mango", 1),
        ("drift", 3),
        ("flint", 2),
    ]
    .into_iter()
    .collect()
}

fn create_test_bench(num_sentences: usize) -> GroupBench {
    let settings = GroupBenchSettings {
        num_sentences,
        ..Default::default()
    };
    GroupBench::with_map(small_map(), settings)
}

#[test]
fn test_matching_order_is_valid() {
    let bench = create_test_bench(2);
    let evaluation = bench.evaluate_text("1. Zebra apple crane bloom.\n2. quilt mango drift flint");
    assert_eq!(evaluation.valid_sentences(), 2);
    assert_eq!(evaluation.score(), 2);
    assert!(evaluation.is_perfect());

    let report = render_group_report(&evaluation);
    assert!(report.contains("Score: 2/2. PERFECT! All rules were followed."), "{}", report);
}

#[test]
fn test_wrong_order_reports_expected_and_actual() {
    let bench = create_test_bench(1);
    let evaluation = bench.evaluate_text("apple zebra crane bloom");
    assert_eq!(evaluation.valid_sentences(), 0);

    let report = render_group_report(&evaluation);
    assert!(report.contains(">> Wrong Group Order (1):"), "{}", report);
    assert!(
        report.contains("Incorrect group order. Got [1, 4, 3, 2], expected [4, 1, 3, 2]."),
        "{}",
        report
    );
}

#[test]
fn test_duplicate_across_valid_sentences_zeroes_score() {
    let bench = create_test_bench(2);
    let evaluation = bench.evaluate_text("zebra apple crane bloom\nzebra mango drift flint");
    assert_eq!(evaluation.valid_sentences(), 2);
    assert_eq!(evaluation.duplicate_words, vec!["zebra"]);
    assert_eq!(evaluation.score(), 0);

    let report = render_group_report(&evaluation);
    assert!(report.contains(">> Duplicate Words Found (1 unique duplicates):"), "{}", report);
    assert!(report.contains("Score: 0/2."), "{}", report);
}

#[test]
fn test_hallucinated_and_short_sentences() {
    let bench = create_test_bench(3);
    let evaluation = bench.evaluate_text("zebra apple crane\nzebra lemon crane bloom");
    let report = render_group_report(&evaluation);
    assert!(report.contains("Expected 4 words, but found 3."), "{}", report);
    assert!(
        report.contains("The word 'lemon' is not in the provided word list."),
        "{}",
        report
    );
    assert!(!report.contains(">> Wrong Group Order"), "{}", report);
}

#[test]
fn test_generate_then_evaluate_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let files = GroupBenchFiles::in_dir(dir.path());
    let settings = GroupBenchSettings {
        num_words: 40,
        num_sentences: 1,
        ..Default::default()
    };
    let map = generate_group_bench(&settings, &mut StdRng::seed_from_u64(7), &files).unwrap();

    // One word per group in the configured order
    let sentence: Vec<&str> = settings
        .group_order
        .iter()
        .filter_map(|group| map.iter().find(|(_, g)| g == group).map(|(w, _)| w))
        .collect();
    assert_eq!(sentence.len(), 4);
    fs::write(&files.response, format!("1. {}.\n", sentence.join(" "))).unwrap();

    let config = GroupConfig {
        data_file: files.word_data.clone(),
        settings,
        ..Default::default()
    };
    let bench = GroupBench::new(&config).unwrap();
    let response = fs::read_to_string(&files.response).unwrap();
    let evaluation = bench.evaluate_text(&response);
    assert_eq!(evaluation.score(), 1);
}
