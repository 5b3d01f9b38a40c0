//! File-level round trips for the run codec and loaders
//!
//! Exercises the on-disk paths: write a run, read it back, validate the
//! file, and load qrels/queries fixtures from real files.

use rankbench_core::{Error, Ranking, RunSet};
use rankbench_run::{
    load_qrels, load_queries, read_run, split_train_test, validate_file, write_run,
};
use std::fs;

// ============================================================================
// Test Helpers
// ============================================================================

fn sample_run_set() -> RunSet {
    let mut set = RunSet::new();
    set.insert(Ranking::from_scored(
        "301",
        vec![
            ("FBIS3-10082".to_string(), 12.503),
            ("FBIS3-10169".to_string(), 11.201),
            ("FBIS3-10243".to_string(), 9.875),
        ],
    ));
    set.insert(Ranking::from_scored(
        "302",
        vec![
            ("LA010189-0001".to_string(), 8.4),
            ("LA010189-0002".to_string(), 7.1),
            ("LA010189-0003".to_string(), 7.1),
        ],
    ));
    set
}

// ============================================================================
// Run files
// ============================================================================

#[test]
fn test_write_read_validate_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bm25.run");

    let original = sample_run_set();
    write_run(&path, "bm25", &original).unwrap();

    let loaded = read_run(&path).unwrap();
    assert_eq!(loaded.len(), 2);
    let ids: Vec<&str> = loaded.get("301").unwrap().doc_ids().collect();
    assert_eq!(ids, vec!["FBIS3-10082", "FBIS3-10169", "FBIS3-10243"]);

    let report = validate_file(&path, 3).unwrap();
    assert!(report.is_clean());
    assert_eq!(report.query_count, 2);
    assert_eq!(report.source_name, "bm25.run");
}

#[test]
fn test_validate_file_warns_on_short_query() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.run");
    write_run(&path, "bm25", &sample_run_set()).unwrap();

    let report = validate_file(&path, 1000).unwrap();
    assert_eq!(report.warnings.len(), 2);
    assert_eq!(report.expected_k, 1000);
}

#[test]
fn test_validate_file_names_file_in_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.run");
    // Rank 3 follows rank 1: a gap.
    fs::write(&path, "301 Q0 d1 1 0.9 t\n301 Q0 d2 3 0.8 t\n").unwrap();

    let err = validate_file(&path, 2).unwrap_err();
    match err {
        Error::RankSequence {
            source_name,
            query_id,
        } => {
            assert_eq!(source_name, "broken.run");
            assert_eq!(query_id, "301");
        }
        other => panic!("expected RankSequence, got {other:?}"),
    }
}

#[test]
fn test_read_run_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_run(&dir.path().join("absent.run")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

// ============================================================================
// Qrels and queries files
// ============================================================================

#[test]
fn test_load_qrels_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trec.qrels");
    fs::write(&path, "301 0 FBIS3-10082 1\n301 0 FBIS3-10169 0\n302 0 LA010189-0001 2\n")
        .unwrap();

    let qrels = load_qrels(&path).unwrap();
    assert_eq!(qrels.judged_query_count(), 2);
    assert!(qrels.relevant_set("301").contains("FBIS3-10082"));
    assert!(!qrels.relevant_set("301").contains("FBIS3-10169"));
}

#[test]
fn test_load_queries_file_and_split() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("topics.tsv");
    fs::write(
        &path,
        "301\tinternational organized crime\n302\tpoliomyelitis and post polio\n303 hubble telescope achievements\n",
    )
    .unwrap();

    let queries = load_queries(&path).unwrap();
    assert_eq!(queries.len(), 3);
    assert_eq!(
        queries.get("303").map(String::as_str),
        Some("hubble telescope achievements")
    );

    let (train, test) = split_train_test(&queries, 2);
    assert_eq!(train, vec!["301", "302"]);
    assert_eq!(test, vec!["303"]);
}
