//! Property tests for the fusion contract
//!
//! For arbitrary pre-sorted bases, reranker maps, and parameters, the fused
//! output must be globally descending, free of duplicate document ids, and
//! of the contracted length, with every head document present.

use proptest::prelude::*;
use rankbench_core::ScoreMap;
use rankbench_fusion::fuse;
use std::collections::HashSet;

proptest! {
    #[test]
    fn fused_output_upholds_ordering_contract(
        scores in prop::collection::vec(-100.0f64..100.0, 1..40),
        rerank_scores in prop::collection::vec(0.0f64..1.0, 0..40),
        topn in 1usize..50,
        lam in 0.0f64..=1.0,
        keep_rest: bool,
    ) {
        // Base ids are unique; the contract requires a pre-sorted base.
        let mut base: Vec<(String, f64)> = scores
            .iter()
            .enumerate()
            .map(|(i, &score)| (format!("d{i}"), score))
            .collect();
        base.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());

        let rerank: ScoreMap = rerank_scores
            .iter()
            .enumerate()
            .map(|(i, &score)| (format!("d{i}"), score))
            .collect();

        let out = fuse(&base, &rerank, topn, lam, keep_rest);

        let head_len = topn.min(base.len());
        let expected_len = if keep_rest { base.len() } else { head_len };
        prop_assert_eq!(out.len(), expected_len);

        for pair in out.windows(2) {
            prop_assert!(
                pair[0].1 >= pair[1].1,
                "output not descending: {} then {}",
                pair[0].1,
                pair[1].1
            );
        }

        let ids: HashSet<&str> = out.iter().map(|(doc, _)| doc.as_str()).collect();
        prop_assert_eq!(ids.len(), out.len(), "duplicate document ids in output");

        for (doc, _) in &base[..head_len] {
            prop_assert!(ids.contains(doc.as_str()), "head document {} missing", doc);
        }
    }

    #[test]
    fn fusion_is_deterministic_under_ties(
        n in 1usize..20,
        topn in 1usize..25,
        lam in 0.0f64..=1.0,
    ) {
        // Flat base and flat reranker: every fused score ties. Two runs must
        // produce the identical ordering.
        let base: Vec<(String, f64)> = (0..n).map(|i| (format!("d{i}"), 1.0)).collect();
        let rerank = ScoreMap::new();

        let first = fuse(&base, &rerank, topn, lam, true);
        let second = fuse(&base, &rerank, topn, lam, true);
        prop_assert_eq!(first, second);
    }
}
