//! Core data model for rankbench
//!
//! This crate provides:
//! - RunRecord / Ranking / RunSet: the ranked-list data model
//! - RelevanceJudgments: per-query document relevance grades (qrels)
//! - ScoreMap: reranker output for one query's candidate set
//! - Error taxonomy shared by the codec, fusion, and evaluation crates
//! - Configuration records for the supported retrieval methods
//! - General-purpose min-max score normalization
//!
//! Downstream crates (`rankbench-run`, `rankbench-fusion`, `rankbench-eval`)
//! depend only on this crate and never on each other.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod normalize;
pub mod types;

// Re-export commonly used types
pub use config::{
    Bm25Config, Bm25Params, FeedbackParams, FusionConfig, PassageConfig, PassageStrategy,
    ProximityConfig, ProximityMode, RetrievalParams, Rm3Config, RocchioConfig,
};
pub use error::{Error, Result};
pub use normalize::{
    min_max_normalize, min_max_normalize_or, DEGENERATE_NORM_VALUE, FLAT_RANGE_EPS,
};
pub use types::{compare_query_ids, Ranking, RelevanceJudgments, RunRecord, RunSet, ScoreMap};
