//! Structural validation of run sets
//!
//! Checks, per query:
//! - ranks are exactly 1..count with no gaps or repeats (fatal)
//! - scores are non-increasing across ascending rank (fatal)
//! - hit count equals the expected depth (non-fatal warning; partial result
//!   sets are an accepted operational reality)
//!
//! Fatal findings abort the whole check. Warnings accumulate in the
//! [`ValidationReport`] and are logged via `tracing::warn!`.

use crate::codec;
use rankbench_core::{compare_query_ids, Error, Result, RunSet};
use std::path::Path;
use tracing::warn;

/// Upper bound on missing-query ids included in a coverage error
const MISSING_PREVIEW_LIMIT: usize = 10;

// ============================================================================
// Report types
// ============================================================================

/// Non-fatal finding: a query with a hit count other than the expected depth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitCountWarning {
    /// Query with the unexpected hit count
    pub query_id: String,
    /// Hits actually present
    pub hits: usize,
}

/// Outcome of a successful structural validation
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Source label the run was validated under
    pub source_name: String,
    /// Number of queries checked
    pub query_count: usize,
    /// Expected hits per query
    pub expected_k: usize,
    /// Accumulated non-fatal findings
    pub warnings: Vec<HitCountWarning>,
}

impl ValidationReport {
    /// Whether validation produced no warnings
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Validate the structural invariants of a run set.
///
/// Queries are checked in ascending numeric id order, so the first fatal
/// error for a given input is deterministic. `source_name` labels the run
/// in errors and warnings.
pub fn validate(run_set: &RunSet, expected_k: usize, source_name: &str) -> Result<ValidationReport> {
    let mut warnings = Vec::new();

    for query_id in run_set.sorted_query_ids() {
        let Some(ranking) = run_set.get(&query_id) else {
            continue;
        };
        let records = ranking.records();

        // Ranks must be exactly 1..count.
        for (i, record) in records.iter().enumerate() {
            if record.rank as usize != i + 1 {
                return Err(Error::RankSequence {
                    source_name: source_name.to_string(),
                    query_id,
                });
            }
        }

        // Scores must be non-increasing across ascending rank.
        for pair in records.windows(2) {
            if pair[1].score > pair[0].score {
                return Err(Error::ScoreOrder {
                    source_name: source_name.to_string(),
                    query_id,
                    rank: pair[1].rank,
                });
            }
        }

        if records.len() != expected_k {
            warn!(
                target: "rankbench::run",
                source = source_name,
                query_id = %query_id,
                hits = records.len(),
                expected_k,
                "hit count differs from expected depth"
            );
            warnings.push(HitCountWarning {
                query_id,
                hits: records.len(),
            });
        }
    }

    Ok(ValidationReport {
        source_name: source_name.to_string(),
        query_count: run_set.len(),
        expected_k,
        warnings,
    })
}

/// Read a run file and validate it.
pub fn validate_file(path: &Path, expected_k: usize) -> Result<ValidationReport> {
    let run_set = codec::read_run(path)?;
    validate(&run_set, expected_k, &codec::source_label(path))
}

/// Assert that every expected query has a ranking in the run set.
///
/// Fails with [`Error::MissingQueries`] carrying a bounded preview of the
/// absent ids, in ascending numeric order.
pub fn assert_coverage(run_set: &RunSet, expected_query_ids: &[String]) -> Result<()> {
    let mut missing: Vec<String> = expected_query_ids
        .iter()
        .filter(|qid| !run_set.contains(qid))
        .cloned()
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    missing.sort_by(|a, b| compare_query_ids(a, b));
    missing.dedup();
    let missing_count = missing.len();
    missing.truncate(MISSING_PREVIEW_LIMIT);

    Err(Error::MissingQueries {
        missing_count,
        preview: missing,
    })
}

// ============================================================================
// Tests
// ============================================================================
