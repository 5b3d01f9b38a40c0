//! Error types for rankbench
//!
//! This module defines all fatal error conditions used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Non-fatal findings (e.g. a query with fewer hits than expected) are NOT
//! errors; they accumulate in validation reports and are logged instead.

use std::io;
use thiserror::Error;

/// Result type alias for rankbench operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for run parsing, validation, and evaluation
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (file open, read, write)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A run, qrels, or queries line that does not conform to its format.
    /// Fatal: aborts the parse of that file.
    #[error("{source_name}: line {line}: {reason}")]
    MalformedLine {
        /// File (or other source label) the line came from
        source_name: String,
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// Ranks within one query are not exactly 1..N. Fatal.
    #[error("{source_name}: query {query_id}: ranks are not consecutive starting at 1")]
    RankSequence {
        /// Source label of the offending run
        source_name: String,
        /// Query whose rank sequence is broken
        query_id: String,
    },

    /// A later-ranked document scores strictly higher than an earlier one. Fatal.
    #[error("{source_name}: query {query_id}: score at rank {rank} exceeds the preceding rank")]
    ScoreOrder {
        /// Source label of the offending run
        source_name: String,
        /// Query whose scores are not non-increasing
        query_id: String,
        /// Rank at which the increase was observed
        rank: u32,
    },

    /// Expected queries are absent from a run set. Fatal when coverage is
    /// explicitly asserted.
    #[error("run missing {missing_count} queries (e.g. {preview:?})")]
    MissingQueries {
        /// Total number of absent queries
        missing_count: usize,
        /// Bounded preview of absent query ids
        preview: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let err = Error::Io(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_display_malformed_line() {
        let err = Error::MalformedLine {
            source_name: "bm25.run".to_string(),
            line: 42,
            reason: "7 columns (expected 6)".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("bm25.run"));
        assert!(msg.contains("line 42"));
        assert!(msg.contains("7 columns"));
    }

    #[test]
    fn test_error_display_rank_sequence() {
        let err = Error::RankSequence {
            source_name: "bm25.run".to_string(),
            query_id: "301".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("query 301"));
        assert!(msg.contains("consecutive"));
    }

    #[test]
    fn test_error_display_score_order() {
        let err = Error::ScoreOrder {
            source_name: "fused.run".to_string(),
            query_id: "302".to_string(),
            rank: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains("fused.run"));
        assert!(msg.contains("rank 7"));
    }

    #[test]
    fn test_error_display_missing_queries() {
        let err = Error::MissingQueries {
            missing_count: 3,
            preview: vec!["301".to_string(), "305".to_string(), "310".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("missing 3 queries"));
        assert!(msg.contains("301"));
    }
}
