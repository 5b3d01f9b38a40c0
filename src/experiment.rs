//! Experiment orchestration
//!
//! An [`ExperimentSession`] drives one fusion experiment: per query, first
//! stage retrieval from the backend, reranker scoring of the head candidate
//! set, interpolation fusion, and collection into a [`RunSet`]. Queries are
//! independent, so the session fans them out with rayon; no state is shared
//! across query boundaries.
//!
//! [`sweep`] evaluates a grid of fusion configurations by MAP over the same
//! queries, the Rust rendering of a parameter-grid search.

use rankbench_core::{FusionConfig, Ranking, RelevanceJudgments, Result, RetrievalParams, RunSet};
use rankbench_eval::mean_average_precision;
use rankbench_fusion::{InterpolationFuser, Reranker, SearchBackend};
use rayon::prelude::*;
use tracing::{debug, info};

// ============================================================================
// ExperimentSession
// ============================================================================

/// One fusion experiment over a set of queries
///
/// The session is stateless across queries: it holds collaborator references
/// and parameters only, and every per-query artifact (candidate list,
/// reranker scores, fused ranking) is ephemeral. Backend and reranker
/// latency is tolerated by treating both as opaque synchronous calls.
pub struct ExperimentSession<'a> {
    backend: &'a dyn SearchBackend,
    reranker: &'a dyn Reranker,
    config: FusionConfig,
    depth: usize,
}

impl<'a> ExperimentSession<'a> {
    /// Create a session over the given collaborators and fusion parameters.
    ///
    /// Retrieval depth defaults to [`RetrievalParams::default`] (1000 hits
    /// per query).
    pub fn new(
        backend: &'a dyn SearchBackend,
        reranker: &'a dyn Reranker,
        config: FusionConfig,
    ) -> Self {
        ExperimentSession {
            backend,
            reranker,
            config,
            depth: RetrievalParams::default().topk,
        }
    }

    /// Builder: set the first-stage retrieval depth
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Fusion parameters this session runs with
    pub fn config(&self) -> FusionConfig {
        self.config
    }

    /// Run the experiment over `(query_id, query_text)` pairs.
    ///
    /// Queries are processed in parallel; the first collaborator error
    /// aborts the run.
    pub fn run(&self, queries: &[(String, String)]) -> Result<RunSet> {
        let rankings: Vec<Ranking> = queries
            .par_iter()
            .map(|(query_id, query_text)| self.run_query(query_id, query_text))
            .collect::<Result<_>>()?;

        info!(
            target: "rankbench::experiment",
            queries = rankings.len(),
            topn = self.config.topn,
            lam = self.config.lam,
            "fused run complete"
        );
        Ok(rankings.into_iter().collect())
    }

    /// Retrieve, rerank, and fuse a single query.
    fn run_query(&self, query_id: &str, query_text: &str) -> Result<Ranking> {
        let base = self.backend.search(query_text, self.depth)?;

        let candidates: Vec<String> = base
            .iter()
            .take(self.config.topn)
            .map(|(doc_id, _)| doc_id.clone())
            .collect();
        let rerank = self.reranker.rerank(query_text, &candidates)?;

        let fused = InterpolationFuser::from_config(&self.config).fuse_scored(&base, &rerank);
        debug!(
            target: "rankbench::experiment",
            query_id,
            base_hits = base.len(),
            reranked = candidates.len(),
            fused_hits = fused.len(),
            "fused query"
        );
        Ok(Ranking::from_scored(query_id, fused))
    }
}

// ============================================================================
// Parameter sweep
// ============================================================================

/// Evaluate a grid of fusion configurations by MAP over the same queries.
///
/// Returns one `(config, MAP)` pair per configuration, in input order.
pub fn sweep(
    backend: &dyn SearchBackend,
    reranker: &dyn Reranker,
    queries: &[(String, String)],
    qrels: &RelevanceJudgments,
    configs: &[FusionConfig],
) -> Result<Vec<(FusionConfig, f64)>> {
    let query_ids: Vec<String> = queries.iter().map(|(qid, _)| qid.clone()).collect();

    let mut results = Vec::with_capacity(configs.len());
    for &config in configs {
        let run_set = ExperimentSession::new(backend, reranker, config).run(queries)?;
        let map = mean_average_precision(&run_set, qrels, &query_ids);
        debug!(
            target: "rankbench::experiment",
            topn = config.topn,
            lam = config.lam,
            map,
            "sweep point"
        );
        results.push((config, map));
    }
    Ok(results)
}

// ============================================================================
// Tests
// ============================================================================
