//! Ranked-list data model
//!
//! This module defines the foundational types shared across the system:
//! - RunRecord: one (query, document, rank, score) row of a run
//! - Ranking: the ordered hit list for a single query
//! - RunSet: one Ranking per query
//! - RelevanceJudgments: ground-truth relevance grades (qrels)
//! - ScoreMap: reranker scores for one query's candidate set
//!
//! A Ranking is immutable once constructed for a given stage; fusion and
//! re-ranking produce a new Ranking rather than mutating in place.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Reranker-assigned scores for one query's candidate set
///
/// Produced by the external reranker collaborator and consumed once by
/// score fusion. Documents absent from the map are treated as unscored.
pub type ScoreMap = HashMap<String, f64>;

// ============================================================================
// Query id ordering
// ============================================================================

/// Compare query ids in ascending numeric order.
///
/// Topic ids in standard collections are numeric strings, and run files are
/// written in ascending numeric id order. Non-numeric ids sort after all
/// numeric ones, lexicographically, so ordering is total for any input.
pub fn compare_query_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

// ============================================================================
// RunRecord
// ============================================================================

/// One row of a run: a scored document at a rank position for a query
///
/// Invariant (enforced by validation, not construction): within one query,
/// ranks form the contiguous sequence 1..N and scores are non-increasing as
/// rank increases (ties permitted).
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    /// Query this record belongs to
    pub query_id: String,
    /// Retrieved document id
    pub document_id: String,
    /// 1-based rank position
    pub rank: u32,
    /// Retrieval (or fused) score
    pub score: f64,
}

// ============================================================================
// Ranking
// ============================================================================

/// The ordered hit list for a single query
///
/// Records are held in ascending rank order (equivalently descending score
/// for a well-formed run). Constructed from backend output via
/// [`Ranking::from_scored`] or from parsed records via
/// [`Ranking::from_records`].
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    query_id: String,
    records: Vec<RunRecord>,
}

impl Ranking {
    /// Build a ranking from `(document_id, score)` pairs already in ranking
    /// order, assigning ranks 1..N in input order.
    pub fn from_scored(query_id: impl Into<String>, scored: Vec<(String, f64)>) -> Self {
        let query_id = query_id.into();
        let records = scored
            .into_iter()
            .enumerate()
            .map(|(i, (document_id, score))| RunRecord {
                query_id: query_id.clone(),
                document_id,
                rank: (i + 1) as u32,
                score,
            })
            .collect();
        Ranking { query_id, records }
    }

    /// Build a ranking from parsed records, re-sorting by the rank field.
    ///
    /// File order is not trusted; the parsed rank field is authoritative.
    pub fn from_records(query_id: impl Into<String>, mut records: Vec<RunRecord>) -> Self {
        records.sort_by_key(|r| r.rank);
        Ranking {
            query_id: query_id.into(),
            records,
        }
    }

    /// Query id this ranking belongs to
    pub fn query_id(&self) -> &str {
        &self.query_id
    }

    /// Records in ascending rank order
    pub fn records(&self) -> &[RunRecord] {
        &self.records
    }

    /// Number of hits
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the ranking has no hits
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Document ids in rank order
    pub fn doc_ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.document_id.as_str())
    }

    /// Owned `(document_id, score)` pairs in rank order
    ///
    /// This is the shape fusion consumes as its base ranking.
    pub fn scored(&self) -> Vec<(String, f64)> {
        self.records
            .iter()
            .map(|r| (r.document_id.clone(), r.score))
            .collect()
    }
}

// ============================================================================
// RunSet
// ============================================================================

/// One ranking per query
///
/// Built in memory from backend output or a parsed run file, optionally
/// re-serialized. Keys are unique; inserting a ranking for an existing
/// query replaces it.
#[derive(Debug, Clone, Default)]
pub struct RunSet {
    rankings: HashMap<String, Ranking>,
}

impl RunSet {
    /// Create an empty run set
    pub fn new() -> Self {
        RunSet::default()
    }

    /// Insert a ranking, keyed by its query id.
    ///
    /// Returns the previous ranking for that query, if any.
    pub fn insert(&mut self, ranking: Ranking) -> Option<Ranking> {
        self.rankings
            .insert(ranking.query_id().to_string(), ranking)
    }

    /// Look up the ranking for a query
    pub fn get(&self, query_id: &str) -> Option<&Ranking> {
        self.rankings.get(query_id)
    }

    /// Whether a query has a ranking
    pub fn contains(&self, query_id: &str) -> bool {
        self.rankings.contains_key(query_id)
    }

    /// Number of queries
    pub fn len(&self) -> usize {
        self.rankings.len()
    }

    /// Whether the run set has no queries
    pub fn is_empty(&self) -> bool {
        self.rankings.is_empty()
    }

    /// Iterate over `(query_id, ranking)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Ranking)> {
        self.rankings.iter().map(|(q, r)| (q.as_str(), r))
    }

    /// Query ids in ascending numeric order
    ///
    /// This is the write order of the run file format and the deterministic
    /// iteration order for validation.
    pub fn sorted_query_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.rankings.keys().cloned().collect();
        ids.sort_by(|a, b| compare_query_ids(a, b));
        ids
    }
}

impl FromIterator<Ranking> for RunSet {
    fn from_iter<I: IntoIterator<Item = Ranking>>(iter: I) -> Self {
        let mut set = RunSet::new();
        for ranking in iter {
            set.insert(ranking);
        }
        set
    }
}

// ============================================================================
// RelevanceJudgments
// ============================================================================

/// Ground-truth relevance grades per query (qrels)
///
/// Maps `query_id -> document_id -> grade`; a grade greater than zero means
/// relevant. Loaded once, read-only thereafter.
#[derive(Debug, Clone, Default)]
pub struct RelevanceJudgments {
    grades: HashMap<String, HashMap<String, u32>>,
}

impl RelevanceJudgments {
    /// Create an empty judgment set
    pub fn new() -> Self {
        RelevanceJudgments::default()
    }

    /// Record a grade for a judged (query, document) pair
    pub fn insert(
        &mut self,
        query_id: impl Into<String>,
        document_id: impl Into<String>,
        grade: u32,
    ) {
        self.grades
            .entry(query_id.into())
            .or_default()
            .insert(document_id.into(), grade);
    }

    /// Grade for a judged pair, or None if unjudged
    pub fn grade(&self, query_id: &str, document_id: &str) -> Option<u32> {
        self.grades.get(query_id).and_then(|g| g.get(document_id)).copied()
    }

    /// Documents judged relevant (grade > 0) for a query
    ///
    /// A query absent from the judgments yields an empty set. Membership is
    /// order-independent, so qrels iteration order never affects results.
    pub fn relevant_set(&self, query_id: &str) -> HashSet<String> {
        self.grades
            .get(query_id)
            .map(|g| {
                g.iter()
                    .filter(|(_, &grade)| grade > 0)
                    .map(|(doc, _)| doc.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of judged queries
    pub fn judged_query_count(&self) -> usize {
        self.grades.len()
    }

    /// Whether no queries are judged
    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
