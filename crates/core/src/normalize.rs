//! Score normalization utilities
//!
//! Min-max normalization maps a score sequence onto [0, 1]. A sequence whose
//! range is below [`FLAT_RANGE_EPS`] carries no discriminating signal; the
//! value such a sequence collapses to is a policy choice, exposed as an
//! explicit argument so call sites with different conventions stay a
//! one-line change apart (the fusion window uses 1.0, everything else 0.0).

/// Range below which a score sequence is considered flat
pub const FLAT_RANGE_EPS: f64 = 1e-9;

/// Value assigned to every element of a flat sequence by [`min_max_normalize`]
pub const DEGENERATE_NORM_VALUE: f64 = 0.0;

/// Min-max normalize `values` onto [0, 1].
///
/// A flat sequence collapses to [`DEGENERATE_NORM_VALUE`] for every element.
pub fn min_max_normalize(values: &[f64]) -> Vec<f64> {
    min_max_normalize_or(values, DEGENERATE_NORM_VALUE)
}

/// Min-max normalize `values` onto [0, 1], collapsing a flat sequence to
/// `flat_value` for every element.
pub fn min_max_normalize_or(values: &[f64], flat_value: f64) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }

    let range = max - min;
    if range < FLAT_RANGE_EPS {
        return vec![flat_value; values.len()];
    }

    values.iter().map(|v| (v - min) / range).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max_normalize_basic() {
        let normed = min_max_normalize(&[2.0, 4.0, 6.0]);
        assert_eq!(normed, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_min_max_normalize_flat_collapses_to_zero() {
        let normed = min_max_normalize(&[3.0, 3.0, 3.0]);
        assert_eq!(normed, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_min_max_normalize_or_custom_flat_value() {
        let normed = min_max_normalize_or(&[3.0, 3.0], 1.0);
        assert_eq!(normed, vec![1.0, 1.0]);
    }

    #[test]
    fn test_min_max_normalize_near_flat_range() {
        // Range below epsilon is treated as flat, not divided through.
        let normed = min_max_normalize(&[1.0, 1.0 + 1e-12]);
        assert_eq!(normed, vec![0.0, 0.0]);
    }

    #[test]
    fn test_min_max_normalize_empty() {
        assert!(min_max_normalize(&[]).is_empty());
    }

    #[test]
    fn test_min_max_normalize_single_element_is_flat() {
        assert_eq!(min_max_normalize(&[7.5]), vec![0.0]);
    }
}
