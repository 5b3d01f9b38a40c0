//! Rankbench - score-fusion and run-integrity toolkit for retrieval
//! experiments
//!
//! Rankbench produces, validates, fuses, and scores ranked lists of
//! documents against relevance judgments. The search backend and the
//! reranking model are external collaborators behind the
//! [`SearchBackend`] and [`Reranker`] traits; everything here treats them
//! as opaque scoring oracles.
//!
//! # Quick Start
//!
//! ```ignore
//! use rankbench::experiment::ExperimentSession;
//! use rankbench::{mean_average_precision, validate, write_run, FusionConfig};
//!
//! // Retrieve, rerank, and fuse every query into one run set.
//! let session = ExperimentSession::new(&backend, &reranker, FusionConfig::default());
//! let run_set = session.run(&queries)?;
//!
//! // Persist, check integrity, and score it.
//! write_run(&path, "fused", &run_set)?;
//! let report = validate(&run_set, 1000, "fused")?;
//! let map = mean_average_precision(&run_set, &qrels, &query_ids);
//! ```
//!
//! # Architecture
//!
//! - [`rankbench_core`]: data model, error taxonomy, configs, normalization
//! - [`rankbench_run`]: run-file codec, validation, qrels/queries loaders
//! - [`rankbench_fusion`]: interpolation fusion and collaborator seams
//! - [`rankbench_eval`]: AP / MAP
//!
//! The codec and evaluator never depend on fusion; fusion depends only on
//! the data model.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod experiment;

// Re-export the public API of the member crates
pub use rankbench_core::{
    compare_query_ids, min_max_normalize, min_max_normalize_or, Bm25Config, Bm25Params,
    Error, FeedbackParams, FusionConfig, PassageConfig, PassageStrategy, ProximityConfig,
    ProximityMode, Ranking, RelevanceJudgments, Result, RetrievalParams, Rm3Config,
    RocchioConfig, RunRecord, RunSet, ScoreMap, DEGENERATE_NORM_VALUE, FLAT_RANGE_EPS,
};
pub use rankbench_eval::{average_precision, mean_average_precision};
pub use rankbench_fusion::{
    fuse, DocCache, InterpolationFuser, Reranker, SearchBackend, DEGENERATE_WINDOW_VALUE,
};
pub use rankbench_run::{
    assert_coverage, load_qrels, load_queries, parse, parse_qrels, parse_queries, read_run,
    serialize, split_train_test, validate, validate_file, write_run, HitCountWarning,
    ValidationReport,
};

pub use experiment::{sweep, ExperimentSession};
