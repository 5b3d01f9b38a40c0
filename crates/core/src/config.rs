//! Configuration records for the supported retrieval methods
//!
//! One explicit struct per retrieval method, sharing common fields by
//! composition (a [`RetrievalParams`] or [`Bm25Params`] embedded by value)
//! rather than by extension chains, so every config owns exactly the fields
//! it declares.
//!
//! These are parameter records only; the retrieval methods they parameterize
//! are opaque collaborators.

use serde::{Deserialize, Serialize};

// ============================================================================
// Shared parameter blocks
// ============================================================================

/// Base retrieval parameters shared by every method
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetrievalParams {
    /// Retrieval depth: hits requested per query
    pub topk: usize,
}

impl Default for RetrievalParams {
    fn default() -> Self {
        RetrievalParams { topk: 1000 }
    }
}

/// BM25 scoring parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bm25Params {
    /// Term-frequency saturation
    pub k1: f64,
    /// Document-length normalization
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Bm25Params { k1: 0.9, b: 0.4 }
    }
}

/// Pseudo-relevance feedback parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedbackParams {
    /// Feedback documents to expand from
    pub fb_docs: usize,
    /// Expansion terms to keep
    pub fb_terms: usize,
    /// Weight of the original query in the expanded query
    pub original_query_weight: f64,
}

impl Default for FeedbackParams {
    fn default() -> Self {
        FeedbackParams {
            fb_docs: 10,
            fb_terms: 10,
            original_query_weight: 0.5,
        }
    }
}

// ============================================================================
// Per-method configs
// ============================================================================

/// Plain BM25 retrieval
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bm25Config {
    /// Base retrieval parameters
    pub retrieval: RetrievalParams,
    /// BM25 scoring parameters
    pub bm25: Bm25Params,
}

/// BM25 with RM3 query expansion
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rm3Config {
    /// Base retrieval parameters
    pub retrieval: RetrievalParams,
    /// BM25 scoring parameters
    pub bm25: Bm25Params,
    /// Feedback parameters
    pub feedback: FeedbackParams,
}

/// BM25 with Rocchio query expansion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RocchioConfig {
    /// Base retrieval parameters
    pub retrieval: RetrievalParams,
    /// BM25 scoring parameters
    pub bm25: Bm25Params,
    /// Feedback documents to expand from
    pub fb_docs: usize,
    /// Expansion terms to keep
    pub fb_terms: usize,
    /// Weight of the original query vector
    pub alpha: f64,
    /// Weight of the relevant centroid
    pub beta: f64,
    /// Weight of the non-relevant centroid
    pub gamma: f64,
}

impl Default for RocchioConfig {
    fn default() -> Self {
        RocchioConfig {
            retrieval: RetrievalParams::default(),
            bm25: Bm25Params::default(),
            fb_docs: 10,
            fb_terms: 10,
            alpha: 1.0,
            beta: 0.75,
            gamma: 0.0,
        }
    }
}

/// How passage-level evidence is aggregated into a document score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassageStrategy {
    /// Best passage wins
    Max,
    /// Average over passages
    Avg,
}

/// Passage-based re-scoring over a first-stage candidate set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PassageConfig {
    /// Base retrieval parameters
    pub retrieval: RetrievalParams,
    /// BM25 scoring parameters
    pub bm25: Bm25Params,
    /// Feedback parameters
    pub feedback: FeedbackParams,
    /// First-stage candidates to re-score
    pub candidate_k: usize,
    /// Passage window size in tokens
    pub window_size: usize,
    /// Window stride in tokens
    pub stride: usize,
    /// Interpolation weight between document and passage score
    pub alpha: f64,
    /// Passage aggregation strategy
    pub strategy: PassageStrategy,
}

impl Default for PassageConfig {
    fn default() -> Self {
        PassageConfig {
            retrieval: RetrievalParams::default(),
            bm25: Bm25Params::default(),
            feedback: FeedbackParams::default(),
            candidate_k: 200,
            window_size: 120,
            stride: 60,
            alpha: 0.5,
            strategy: PassageStrategy::Max,
        }
    }
}

/// Term-proximity evidence mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProximityMode {
    /// Pairwise term distances
    Pair,
    /// Minimal covering span
    Span,
}

/// BM25 with a term-proximity component
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProximityConfig {
    /// Base retrieval parameters
    pub retrieval: RetrievalParams,
    /// BM25 scoring parameters
    pub bm25: Bm25Params,
    /// Proximity evidence mode
    pub mode: ProximityMode,
}

impl Default for ProximityConfig {
    fn default() -> Self {
        ProximityConfig {
            retrieval: RetrievalParams::default(),
            bm25: Bm25Params::default(),
            mode: ProximityMode::Pair,
        }
    }
}

// ============================================================================
// Fusion config
// ============================================================================

/// Parameters for interpolation fusion of a base ranking with reranker scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FusionConfig {
    /// Size of the reranked head window
    pub topn: usize,
    /// Interpolation weight of the reranker signal, in [0, 1]
    pub lam: f64,
    /// Whether to keep the unreranked tail below the head
    pub keep_rest: bool,
}

impl Default for FusionConfig {
    fn default() -> Self {
        FusionConfig {
            topn: 50,
            lam: 0.5,
            keep_rest: true,
        }
    }
}

impl FusionConfig {
    /// Cartesian sweep over head sizes and interpolation weights.
    ///
    /// `keep_rest` is fixed to true: sweeps are scored with full-depth
    /// metrics, so the tail must be retained.
    pub fn grid(topns: &[usize], lams: &[f64]) -> Vec<FusionConfig> {
        let mut combos = Vec::with_capacity(topns.len() * lams.len());
        for &topn in topns {
            for &lam in lams {
                combos.push(FusionConfig {
                    topn,
                    lam,
                    keep_rest: true,
                });
            }
        }
        combos
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retrieval_defaults() {
        assert_eq!(RetrievalParams::default().topk, 1000);
        let bm25 = Bm25Params::default();
        assert!((bm25.k1 - 0.9).abs() < f64::EPSILON);
        assert!((bm25.b - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rocchio_defaults() {
        let cfg = RocchioConfig::default();
        assert!((cfg.alpha - 1.0).abs() < f64::EPSILON);
        assert!((cfg.beta - 0.75).abs() < f64::EPSILON);
        assert_eq!(cfg.gamma, 0.0);
        assert_eq!(cfg.retrieval.topk, 1000);
    }

    #[test]
    fn test_passage_defaults() {
        let cfg = PassageConfig::default();
        assert_eq!(cfg.candidate_k, 200);
        assert_eq!(cfg.window_size, 120);
        assert_eq!(cfg.stride, 60);
        assert_eq!(cfg.strategy, PassageStrategy::Max);
    }

    #[test]
    fn test_strategy_serde_lowercase() {
        let json = serde_json::to_string(&PassageStrategy::Max).unwrap();
        assert_eq!(json, "\"max\"");
        let mode: ProximityMode = serde_json::from_str("\"span\"").unwrap();
        assert_eq!(mode, ProximityMode::Span);
    }

    #[test]
    fn test_fusion_config_grid() {
        let combos = FusionConfig::grid(&[10, 20], &[0.0, 0.5, 1.0]);
        assert_eq!(combos.len(), 6);
        assert!(combos.iter().all(|c| c.keep_rest));
        assert_eq!(combos[0].topn, 10);
        assert_eq!(combos[5].topn, 20);
        assert!((combos[5].lam - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fusion_config_roundtrip() {
        let cfg = FusionConfig {
            topn: 30,
            lam: 0.25,
            keep_rest: false,
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: FusionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
