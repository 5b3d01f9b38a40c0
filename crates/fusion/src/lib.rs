//! Score fusion for two-stage retrieval
//!
//! This crate provides:
//! - fuse / InterpolationFuser: merge a base ranking with reranker scores by
//!   normalized linear interpolation over a top-N head window, preserving
//!   the unreranked tail below it
//! - SearchBackend / Reranker traits: the seams to the external retrieval
//!   and reranking collaborators
//! - DocCache: caller-owned memoization of document-content retrieval
//!
//! Fusion depends only on the data model; it never reads or writes run
//! files and never evaluates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod fuser;

pub use backend::{DocCache, Reranker, SearchBackend};
pub use fuser::{fuse, InterpolationFuser, DEGENERATE_WINDOW_VALUE};
