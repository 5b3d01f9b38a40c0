//! Collaborator seams and the caller-owned document cache
//!
//! The search backend and reranker are opaque scoring oracles: this crate
//! never implements them, only consumes them. Both may block for arbitrarily
//! long (index lookups, model inference); callers tolerate that latency by
//! scoping document-content retrieval behind a [`DocCache`] they own —
//! typically one per query-processing session, never process-wide.

use rankbench_core::{Result, ScoreMap};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

// ============================================================================
// Collaborator traits
// ============================================================================

/// First-stage retrieval collaborator
///
/// Implementations must be Send + Sync so queries can be processed
/// concurrently.
pub trait SearchBackend: Send + Sync {
    /// Retrieve an ordered `(document_id, score)` list for a query,
    /// best-first, at most `k` entries.
    fn search(&self, query: &str, k: usize) -> Result<Vec<(String, f64)>>;

    /// Retrieve the content of a document.
    ///
    /// Callers that fetch repeatedly should go through
    /// [`DocCache::get_or_fetch`] rather than calling this directly.
    fn document(&self, doc_id: &str) -> Result<String>;
}

/// Second-stage reranking collaborator
///
/// Scores a query's candidate set; the mapping it returns is consumed once
/// by fusion. Candidates it leaves unscored default to 0.0 there.
pub trait Reranker: Send + Sync {
    /// Score candidates for a query.
    fn rerank(&self, query: &str, candidates: &[String]) -> Result<ScoreMap>;
}

// ============================================================================
// DocCache
// ============================================================================

/// Caller-owned cache of document content keyed by document id
///
/// Memoizes [`SearchBackend::document`] across repeated fetches within one
/// query-processing session. The cache is passed by reference into each
/// backend access; it holds no backend reference itself and is never shared
/// across sessions.
#[derive(Debug, Clone, Default)]
pub struct DocCache {
    entries: HashMap<String, String>,
}

impl DocCache {
    /// Create an empty cache
    pub fn new() -> Self {
        DocCache::default()
    }

    /// Number of cached documents
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a document is cached
    pub fn contains(&self, doc_id: &str) -> bool {
        self.entries.contains_key(doc_id)
    }

    /// Return the cached content for `doc_id`, fetching it from the backend
    /// on a miss. The backend is consulted at most once per document id for
    /// the lifetime of the cache.
    pub fn get_or_fetch(&mut self, backend: &dyn SearchBackend, doc_id: &str) -> Result<&str> {
        match self.entries.entry(doc_id.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut().as_str()),
            Entry::Vacant(entry) => {
                let content = backend.document(doc_id)?;
                Ok(entry.insert(content).as_str())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
