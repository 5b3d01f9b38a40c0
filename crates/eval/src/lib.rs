//! Ranking effectiveness metrics
//!
//! This crate provides:
//! - average_precision: per-query AP over a ranked document-id sequence
//! - mean_average_precision: corpus-level MAP over a run set and qrels
//!
//! Evaluation reads the data model only; it has no dependency on fusion or
//! the codec.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod metrics;

pub use metrics::{average_precision, mean_average_precision};
