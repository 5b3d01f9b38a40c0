//! Interpolation fusion of a base ranking with reranker scores
//!
//! The head (first `topn` entries of the base) is re-scored by linearly
//! interpolating min-max-normalized base and reranker scores; the tail (the
//! rest of the base) is kept in its original order and shifted below the
//! head when necessary, so the concatenation is a valid globally-descending
//! ranking.

use rankbench_core::{min_max_normalize_or, FusionConfig, Ranking, ScoreMap};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Value every head score collapses to when its window is flat
/// (range below `FLAT_RANGE_EPS`).
///
/// Deliberately different from the general-purpose normalizer's
/// [`rankbench_core::DEGENERATE_NORM_VALUE`] of 0.0; with one flat signal
/// the interpolation then degenerates to a constant offset plus the other
/// signal, leaving the other signal's ordering intact. Unifying the two
/// conventions is a one-line change here once intended semantics are
/// confirmed.
pub const DEGENERATE_WINDOW_VALUE: f64 = 1.0;

/// Margin by which a shifted tail sits below the head's minimum fused score
const TAIL_SHIFT_MARGIN: f64 = 1e-4;

/// Fuse a base ranking with reranker scores.
///
/// - `base`: `(document_id, score)` pairs in ranking order (callers supply a
///   pre-sorted base). May be shorter than `topn`.
/// - `rerank`: reranker scores for the head's candidate set; ids absent from
///   the map default to 0.0 before normalization.
/// - `topn`: head window size, at least 1.
/// - `lam`: interpolation weight of the reranker signal, in [0, 1];
///   `fused = (1 - lam) * base_norm + lam * rerank_norm`.
/// - `keep_rest`: whether to append the unreranked tail (deduplicated by
///   document id, original relative order) below the head.
///
/// The head is stable-sorted by fused score descending, so tied documents
/// keep their head input order across runs. Output: `|head|` entries (or
/// `|head| + |tail|`), sorted descending, head entirely above the tail.
pub fn fuse(
    base: &[(String, f64)],
    rerank: &ScoreMap,
    topn: usize,
    lam: f64,
    keep_rest: bool,
) -> Vec<(String, f64)> {
    let head_len = topn.min(base.len());
    let head = &base[..head_len];

    let base_scores: Vec<f64> = head.iter().map(|(_, score)| *score).collect();
    let rerank_scores: Vec<f64> = head
        .iter()
        .map(|(doc, _)| rerank.get(doc).copied().unwrap_or(0.0))
        .collect();

    let base_norm = min_max_normalize_or(&base_scores, DEGENERATE_WINDOW_VALUE);
    let rerank_norm = min_max_normalize_or(&rerank_scores, DEGENERATE_WINDOW_VALUE);

    let mut fused: Vec<(String, f64)> = head
        .iter()
        .zip(base_norm.iter().zip(rerank_norm.iter()))
        .map(|((doc, _), (&b, &r))| (doc.clone(), (1.0 - lam) * b + lam * r))
        .collect();

    // Stable sort: ties keep head input order.
    fused.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    if !keep_rest {
        return fused;
    }

    let mut seen: HashSet<&str> = head.iter().map(|(doc, _)| doc.as_str()).collect();
    let mut tail: Vec<(String, f64)> = Vec::new();
    for (doc, score) in &base[head_len..] {
        if seen.insert(doc.as_str()) {
            tail.push((doc.clone(), *score));
        }
    }

    // The tail keeps base order, so its first entry carries its maximum
    // score. Shift the whole tail below the head's minimum when they touch.
    let head_min = fused.last().map(|entry| entry.1);
    let tail_max = tail.first().map(|entry| entry.1);
    if let (Some(head_min), Some(tail_max)) = (head_min, tail_max) {
        if tail_max >= head_min {
            let shift = tail_max - head_min + TAIL_SHIFT_MARGIN;
            for entry in &mut tail {
                entry.1 -= shift;
            }
        }
    }

    fused.extend(tail);
    fused
}

// ============================================================================
// InterpolationFuser
// ============================================================================

/// Parameter-carrying fuser over [`fuse`]
///
/// Holds the head size, interpolation weight, and tail policy; produces a
/// new [`Ranking`] rather than mutating the base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolationFuser {
    topn: usize,
    lam: f64,
    keep_rest: bool,
}

impl Default for InterpolationFuser {
    fn default() -> Self {
        InterpolationFuser::from_config(&FusionConfig::default())
    }
}

impl InterpolationFuser {
    /// Create a fuser with a head of `topn` and reranker weight `lam`.
    ///
    /// The tail is kept by default.
    pub fn new(topn: usize, lam: f64) -> Self {
        InterpolationFuser {
            topn,
            lam,
            keep_rest: true,
        }
    }

    /// Builder: set whether the unreranked tail is kept
    pub fn with_keep_rest(mut self, keep_rest: bool) -> Self {
        self.keep_rest = keep_rest;
        self
    }

    /// Create a fuser from a [`FusionConfig`]
    pub fn from_config(config: &FusionConfig) -> Self {
        InterpolationFuser {
            topn: config.topn,
            lam: config.lam,
            keep_rest: config.keep_rest,
        }
    }

    /// Fuse `(document_id, score)` pairs; see [`fuse`].
    pub fn fuse_scored(&self, base: &[(String, f64)], rerank: &ScoreMap) -> Vec<(String, f64)> {
        fuse(base, rerank, self.topn, self.lam, self.keep_rest)
    }

    /// Fuse a base [`Ranking`] into a new fused ranking for the same query.
    pub fn fuse_ranking(&self, base: &Ranking, rerank: &ScoreMap) -> Ranking {
        let fused = self.fuse_scored(&base.scored(), rerank);
        Ranking::from_scored(base.query_id(), fused)
    }
}

// ============================================================================
// Tests
// ============================================================================
