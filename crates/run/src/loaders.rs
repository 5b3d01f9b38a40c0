//! Qrels and queries file loaders
//!
//! Qrels: `query_id 0 document_id grade`, whitespace-separated, one judged
//! pair per line. Queries: `query_id<TAB>query_text`, falling back to a
//! split on the first run of whitespace when no tab is present. Blank lines
//! are skipped in both formats.

use crate::codec::source_label;
use rankbench_core::{compare_query_ids, Error, RelevanceJudgments, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Number of columns in a qrels record
const QRELS_COLUMNS: usize = 4;

// ============================================================================
// Qrels
// ============================================================================

/// Parse qrels text. `source_name` labels the input in error messages.
pub fn parse_qrels(text: &str, source_name: &str) -> Result<RelevanceJudgments> {
    let malformed = |line: usize, reason: String| Error::MalformedLine {
        source_name: source_name.to_string(),
        line,
        reason,
    };

    let mut qrels = RelevanceJudgments::new();
    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != QRELS_COLUMNS {
            return Err(malformed(
                line_no,
                format!("{} columns (expected {})", parts.len(), QRELS_COLUMNS),
            ));
        }

        let grade: u32 = parts[3].parse().map_err(|_| {
            malformed(
                line_no,
                format!("grade is not a non-negative integer: {}", parts[3]),
            )
        })?;
        qrels.insert(parts[0], parts[2], grade);
    }
    Ok(qrels)
}

/// Load qrels from a file.
pub fn load_qrels(path: &Path) -> Result<RelevanceJudgments> {
    let text = fs::read_to_string(path)?;
    parse_qrels(&text, &source_label(path))
}

// ============================================================================
// Queries
// ============================================================================

/// Parse a queries file: `query_id<TAB>query_text` per line.
///
/// Falls back to splitting on the first run of whitespace when a line has no
/// tab. A line with an id but no text is malformed.
pub fn parse_queries(text: &str, source_name: &str) -> Result<HashMap<String, String>> {
    let mut queries = HashMap::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let split = line
            .split_once('\t')
            .or_else(|| line.split_once(char::is_whitespace));
        let Some((query_id, query_text)) = split else {
            return Err(Error::MalformedLine {
                source_name: source_name.to_string(),
                line: idx + 1,
                reason: "missing query text".to_string(),
            });
        };

        queries.insert(
            query_id.trim().to_string(),
            query_text.trim().to_string(),
        );
    }
    Ok(queries)
}

/// Load queries from a file.
pub fn load_queries(path: &Path) -> Result<HashMap<String, String>> {
    let text = fs::read_to_string(path)?;
    parse_queries(&text, &source_label(path))
}

// ============================================================================
// Topic split
// ============================================================================

/// Split topic ids into train and test partitions.
///
/// Ids are sorted ascending-numerically; the first `train_n` are train, the
/// remainder test. A `train_n` beyond the id count puts everything in train.
pub fn split_train_test(
    queries: &HashMap<String, String>,
    train_n: usize,
) -> (Vec<String>, Vec<String>) {
    let mut ids: Vec<String> = queries.keys().cloned().collect();
    ids.sort_by(|a, b| compare_query_ids(a, b));
    let split = train_n.min(ids.len());
    let test = ids.split_off(split);
    (ids, test)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Qrels
    // ========================================

    #[test]
    fn test_parse_qrels_basic() {
        let text = "301 0 doc-a 1\n301 0 doc-b 0\n302 0 doc-c 2\n";
        let qrels = parse_qrels(text, "test.qrels").unwrap();
        assert_eq!(qrels.grade("301", "doc-a"), Some(1));
        assert_eq!(qrels.grade("301", "doc-b"), Some(0));
        assert_eq!(qrels.judged_query_count(), 2);

        let relevant = qrels.relevant_set("301");
        assert_eq!(relevant.len(), 1);
        assert!(relevant.contains("doc-a"));
    }

    #[test]
    fn test_parse_qrels_rejects_wrong_columns() {
        let err = parse_qrels("301 0 doc-a\n", "bad.qrels").unwrap_err();
        assert!(err.to_string().contains("3 columns"));
    }

    #[test]
    fn test_parse_qrels_rejects_negative_grade() {
        let err = parse_qrels("301 0 doc-a -1\n", "bad.qrels").unwrap_err();
        assert!(err.to_string().contains("grade is not a non-negative integer"));
    }

    #[test]
    fn test_parse_qrels_skips_blank_lines() {
        let qrels = parse_qrels("\n301 0 d 1\n\n", "q").unwrap();
        assert_eq!(qrels.judged_query_count(), 1);
    }

    // ========================================
    // Queries
    // ========================================

    #[test]
    fn test_parse_queries_tab_separated() {
        let queries =
            parse_queries("301\tinternational organized crime\n", "topics.tsv").unwrap();
        assert_eq!(
            queries.get("301").map(String::as_str),
            Some("international organized crime")
        );
    }

    #[test]
    fn test_parse_queries_whitespace_fallback() {
        // No tab: split on the first run of whitespace, text keeps the rest.
        let queries = parse_queries("302 poliomyelitis and post polio\n", "topics.txt").unwrap();
        assert_eq!(
            queries.get("302").map(String::as_str),
            Some("poliomyelitis and post polio")
        );
    }

    #[test]
    fn test_parse_queries_rejects_id_without_text() {
        let err = parse_queries("303\n", "topics.tsv").unwrap_err();
        assert!(err.to_string().contains("missing query text"));
    }

    // ========================================
    // Split
    // ========================================

    fn queries_with_ids(ids: &[&str]) -> HashMap<String, String> {
        ids.iter()
            .map(|id| (id.to_string(), format!("query {id}")))
            .collect()
    }

    #[test]
    fn test_split_train_test_numeric_order() {
        let queries = queries_with_ids(&["10", "2", "30", "4"]);
        let (train, test) = split_train_test(&queries, 2);
        assert_eq!(train, vec!["2", "4"]);
        assert_eq!(test, vec!["10", "30"]);
    }

    #[test]
    fn test_split_train_test_train_n_beyond_count() {
        let queries = queries_with_ids(&["1", "2"]);
        let (train, test) = split_train_test(&queries, 50);
        assert_eq!(train.len(), 2);
        assert!(test.is_empty());
    }

    #[test]
    fn test_split_train_test_zero_train() {
        let queries = queries_with_ids(&["1", "2"]);
        let (train, test) = split_train_test(&queries, 0);
        assert!(train.is_empty());
        assert_eq!(test.len(), 2);
    }
}
