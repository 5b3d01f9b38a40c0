//! Canonical run-file serialization and parsing
//!
//! One record per line, six space-separated columns:
//!
//! ```text
//! query_id Q0 document_id rank score run_tag
//! ```
//!
//! Scores are written with six decimal places; queries are written in
//! ascending numeric id order. Parsing groups records by query and re-sorts
//! them by the parsed rank field, because file ordering is not trusted.

use rankbench_core::{Error, Ranking, Result, RunRecord, RunSet};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Number of columns in a run-file record
const RUN_COLUMNS: usize = 6;

/// Serialize a run set to the canonical textual form.
///
/// Ranks are emitted as 1..N in each ranking's order, regardless of the rank
/// values the records carry; integrity of stored ranks is the validator's
/// concern, not the writer's.
pub fn serialize(run_set: &RunSet, run_tag: &str) -> String {
    let mut out = String::new();
    for query_id in run_set.sorted_query_ids() {
        let Some(ranking) = run_set.get(&query_id) else {
            continue;
        };
        for (i, record) in ranking.records().iter().enumerate() {
            // query_id Q0 docid rank score tag
            let _ = writeln!(
                out,
                "{} Q0 {} {} {:.6} {}",
                query_id,
                record.document_id,
                i + 1,
                record.score,
                run_tag
            );
        }
    }
    out
}

/// Parse run-file text into a run set.
///
/// `source_name` labels the input in error messages (typically the file
/// name). Every non-empty line must have exactly six whitespace-separated
/// columns with the literal `Q0` in column two; rank must parse as an
/// integer and score as a float. Any violation is a fatal
/// [`Error::MalformedLine`].
pub fn parse(text: &str, source_name: &str) -> Result<RunSet> {
    let malformed = |line: usize, reason: String| Error::MalformedLine {
        source_name: source_name.to_string(),
        line,
        reason,
    };

    let mut by_query: Vec<(String, Vec<RunRecord>)> = Vec::new();
    let mut index_of: std::collections::HashMap<String, usize> = std::collections::HashMap::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != RUN_COLUMNS {
            return Err(malformed(
                line_no,
                format!("{} columns (expected {})", parts.len(), RUN_COLUMNS),
            ));
        }

        let (query_id, q0, document_id, rank_s, score_s, _tag) =
            (parts[0], parts[1], parts[2], parts[3], parts[4], parts[5]);

        if q0 != "Q0" {
            return Err(malformed(line_no, format!("column 2 must be Q0 (got {q0})")));
        }
        let rank: u32 = rank_s
            .parse()
            .map_err(|_| malformed(line_no, format!("rank is not an integer: {rank_s}")))?;
        let score: f64 = score_s
            .parse()
            .map_err(|_| malformed(line_no, format!("score is not a number: {score_s}")))?;

        let record = RunRecord {
            query_id: query_id.to_string(),
            document_id: document_id.to_string(),
            rank,
            score,
        };

        match index_of.get(query_id) {
            Some(&i) => by_query[i].1.push(record),
            None => {
                index_of.insert(query_id.to_string(), by_query.len());
                by_query.push((query_id.to_string(), vec![record]));
            }
        }
    }

    let mut run_set = RunSet::new();
    for (query_id, records) in by_query {
        run_set.insert(Ranking::from_records(query_id, records));
    }
    Ok(run_set)
}

/// Write a run set to a file in the canonical format.
pub fn write_run(path: &Path, run_tag: &str, run_set: &RunSet) -> Result<()> {
    fs::write(path, serialize(run_set, run_tag))?;
    Ok(())
}

/// Read a run file into a run set.
///
/// Error messages are labeled with the file name.
pub fn read_run(path: &Path) -> Result<RunSet> {
    let text = fs::read_to_string(path)?;
    parse(&text, &source_label(path))
}

/// File-name label for error messages, falling back to the full path.
pub(crate) fn source_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ============================================================================
// Tests
// ============================================================================
