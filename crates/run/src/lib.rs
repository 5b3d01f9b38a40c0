//! Run-file codec and integrity checks
//!
//! This crate provides:
//! - codec: serialize/parse the canonical 6-column run format
//! - validate: structural validation (rank sequence, score order, coverage)
//! - loaders: qrels and queries files, train/test topic split
//!
//! The codec does not trust file ordering: parsed records are re-sorted by
//! their rank field before being exposed as a Ranking. Structural integrity
//! is enforced separately by [`validate::validate`], so a parsed run can be
//! inspected even when it would fail validation.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod loaders;
pub mod validate;

pub use codec::{parse, read_run, serialize, write_run};
pub use loaders::{load_qrels, load_queries, parse_qrels, parse_queries, split_train_test};
pub use validate::{
    assert_coverage, validate, validate_file, HitCountWarning, ValidationReport,
};
