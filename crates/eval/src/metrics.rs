//! Average precision and mean average precision
//!
//! Conventions, fixed here and relied on by callers:
//! - a topic with zero known relevant documents contributes AP 0.0, not
//!   "undefined"; excluding such topics is the aggregating caller's decision
//! - a query missing from the run set contributes AP 0.0
//! - MAP over an empty query-id sequence is 0.0

use rankbench_core::{RelevanceJudgments, RunSet};
use rayon::prelude::*;
use std::collections::HashSet;

/// Average precision of a ranked document-id sequence against a relevant set.
///
/// Scanning at 1-based position `i`, each hit increments a running relevant
/// count `h` and accumulates `h / i`; the result is that sum divided by
/// `|relevant|`. Empty `relevant` yields 0.0.
pub fn average_precision<S: AsRef<str>>(ranked_ids: &[S], relevant: &HashSet<String>) -> f64 {
    if relevant.is_empty() {
        return 0.0;
    }

    let mut hit_count = 0usize;
    let mut sum_precision = 0.0;
    for (i, doc_id) in ranked_ids.iter().enumerate() {
        if relevant.contains(doc_id.as_ref()) {
            hit_count += 1;
            sum_precision += hit_count as f64 / (i + 1) as f64;
        }
    }
    sum_precision / relevant.len() as f64
}

/// Mean average precision over `query_ids`.
///
/// Per query: the relevant set is the qrels documents with grade > 0 (a
/// query absent from qrels yields an empty set); the ranked sequence comes
/// from the run set (a missing query yields an empty sequence, hence AP 0).
/// Queries are scored in parallel; the mean is the arithmetic mean over
/// `query_ids`, or 0.0 when `query_ids` is empty.
pub fn mean_average_precision(
    run_set: &RunSet,
    qrels: &RelevanceJudgments,
    query_ids: &[String],
) -> f64 {
    if query_ids.is_empty() {
        return 0.0;
    }

    let aps: Vec<f64> = query_ids
        .par_iter()
        .map(|query_id| {
            let relevant = qrels.relevant_set(query_id);
            let ranked: Vec<&str> = run_set
                .get(query_id)
                .map(|ranking| ranking.doc_ids().collect())
                .unwrap_or_default();
            average_precision(&ranked, &relevant)
        })
        .collect();

    aps.iter().sum::<f64>() / aps.len() as f64
}

// ============================================================================
// Tests
// ============================================================================
