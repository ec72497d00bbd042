//! Exact greedy split search with a regularized variance-reduction gain.
//!
//! The search enumerates, per feature, every distinct observed value as a
//! candidate threshold and scores it by how much it reduces the weighted
//! population variance of the targets. Features are scanned in ascending
//! index order and candidates in ascending value order with a strict `>`
//! comparison on gain, so ties resolve to the earliest feature and then the
//! smallest threshold.

use crate::dataset::SamplesView;

// =============================================================================
// GainParams
// =============================================================================

/// Gain computation parameters.
#[derive(Debug, Clone)]
pub struct GainParams {
    /// Flat penalty subtracted from every candidate's gain. Not scaled by
    /// sample count. Default: 1e-4.
    pub regularization: f32,
}

impl Default for GainParams {
    fn default() -> Self {
        Self {
            regularization: 1e-4,
        }
    }
}

// =============================================================================
// SplitCandidate
// =============================================================================

/// Best split found for a node's sample subset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitCandidate {
    /// Feature index tested by the split.
    pub feature: u32,
    /// Threshold; one of the distinct observed values of `feature`.
    pub threshold: f32,
    /// Penalized variance-reduction gain.
    pub gain: f32,
}

// =============================================================================
// Subset statistics
// =============================================================================

/// Arithmetic mean of the targets selected by `indices`.
///
/// `indices` must be non-empty.
pub(crate) fn subset_mean(targets: &[f32], indices: &[u32]) -> f64 {
    debug_assert!(!indices.is_empty());
    let sum: f64 = indices.iter().map(|&i| targets[i as usize] as f64).sum();
    sum / indices.len() as f64
}

/// Population variance (divide by count) of the targets selected by `indices`.
///
/// A single-element subset has variance 0. `indices` must be non-empty.
pub(crate) fn subset_variance(targets: &[f32], indices: &[u32]) -> f64 {
    let mean = subset_mean(targets, indices);
    let sum_sq: f64 = indices
        .iter()
        .map(|&i| {
            let diff = targets[i as usize] as f64 - mean;
            diff * diff
        })
        .sum();
    sum_sq / indices.len() as f64
}

// =============================================================================
// Split search
// =============================================================================

/// Penalized gain of splitting `indices` on `(feature, threshold)`.
///
/// Returns `None` when the partition is degenerate (an empty side).
fn candidate_gain(
    features: &SamplesView<'_>,
    targets: &[f32],
    indices: &[u32],
    feature: usize,
    threshold: f32,
    parent_variance: f64,
    params: &GainParams,
) -> Option<f64> {
    let mut n_left = 0usize;
    let mut n_right = 0usize;
    let mut sum_left = 0.0f64;
    let mut sum_right = 0.0f64;

    for &i in indices {
        let y = targets[i as usize] as f64;
        if features.get(i as usize, feature) < threshold {
            n_left += 1;
            sum_left += y;
        } else {
            n_right += 1;
            sum_right += y;
        }
    }

    if n_left == 0 || n_right == 0 {
        return None;
    }

    let mean_left = sum_left / n_left as f64;
    let mean_right = sum_right / n_right as f64;

    let mut sq_left = 0.0f64;
    let mut sq_right = 0.0f64;
    for &i in indices {
        let y = targets[i as usize] as f64;
        if features.get(i as usize, feature) < threshold {
            let diff = y - mean_left;
            sq_left += diff * diff;
        } else {
            let diff = y - mean_right;
            sq_right += diff * diff;
        }
    }

    let n = indices.len() as f64;
    let var_left = sq_left / n_left as f64;
    let var_right = sq_right / n_right as f64;

    let raw = parent_variance
        - (n_left as f64 / n) * var_left
        - (n_right as f64 / n) * var_right;
    Some(raw - params.regularization as f64)
}

/// Find the best split for the samples selected by `indices`.
///
/// Enumerates every feature and every distinct observed value of that feature
/// as a candidate threshold, skipping candidates whose partition has an empty
/// side. Returns `None` when every candidate was degenerate.
///
/// The returned candidate may still carry a negative penalized gain; the
/// grower decides whether to commit it.
pub fn find_best_split(
    features: &SamplesView<'_>,
    targets: &[f32],
    indices: &[u32],
    params: &GainParams,
) -> Option<SplitCandidate> {
    let parent_variance = subset_variance(targets, indices);

    let mut best: Option<SplitCandidate> = None;
    let mut best_gain = f64::NEG_INFINITY;
    let mut candidates: Vec<f32> = Vec::with_capacity(indices.len());

    for feature in 0..features.n_features() {
        candidates.clear();
        candidates.extend(indices.iter().map(|&i| features.get(i as usize, feature)));
        candidates.sort_unstable_by(f32::total_cmp);
        candidates.dedup();

        for &threshold in &candidates {
            let gain = candidate_gain(
                features,
                targets,
                indices,
                feature,
                threshold,
                parent_variance,
                params,
            );

            if let Some(gain) = gain {
                // Strict > keeps the first-seen best among equal-gain candidates.
                if gain > best_gain {
                    best_gain = gain;
                    best = Some(SplitCandidate {
                        feature: feature as u32,
                        threshold,
                        gain: gain as f32,
                    });
                }
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn no_penalty() -> GainParams {
        GainParams {
            regularization: 0.0,
        }
    }

    #[test]
    fn subset_statistics() {
        let targets = [1.0f32, 2.0, 3.0, 4.0, 5.0];

        assert_abs_diff_eq!(subset_mean(&targets, &[0, 1, 2, 3, 4]), 3.0);
        assert_abs_diff_eq!(subset_variance(&targets, &[0, 1, 2, 3, 4]), 2.0);

        // single-element subset: mean = value, variance = 0
        assert_abs_diff_eq!(subset_mean(&targets, &[3]), 4.0);
        assert_abs_diff_eq!(subset_variance(&targets, &[3]), 0.0);

        // subset selection ignores unselected targets
        assert_abs_diff_eq!(subset_mean(&targets, &[0, 4]), 3.0);
        assert_abs_diff_eq!(subset_variance(&targets, &[0, 4]), 4.0);
    }

    #[test]
    fn finds_obvious_split() {
        // Feature 0 separates targets perfectly at 10.0.
        let features = array![[1.0f32], [2.0], [10.0], [11.0]];
        let targets = [0.0f32, 0.0, 8.0, 8.0];
        let view = SamplesView::from_array(features.view());

        let best = find_best_split(&view, &targets, &[0, 1, 2, 3], &no_penalty()).unwrap();
        assert_eq!(best.feature, 0);
        assert_eq!(best.threshold, 10.0);
        // parent variance 16, both children pure
        assert_abs_diff_eq!(best.gain, 16.0, epsilon = 1e-6);
    }

    #[test]
    fn uninformative_feature_loses() {
        // Feature 0 is informative, feature 1 is anti-correlated noise.
        let features = array![[0.0f32, 5.0], [0.0, 7.0], [1.0, 5.0], [1.0, 7.0]];
        let targets = [0.0f32, 0.0, 10.0, 10.0];
        let view = SamplesView::from_array(features.view());

        let best = find_best_split(&view, &targets, &[0, 1, 2, 3], &no_penalty()).unwrap();
        assert_eq!(best.feature, 0);
        assert_eq!(best.threshold, 1.0);
    }

    #[test]
    fn tie_breaks_to_earliest_feature() {
        // Two identical columns produce identical gains; the first wins.
        let features = array![[1.0f32, 1.0], [2.0, 2.0], [3.0, 3.0], [4.0, 4.0]];
        let targets = [1.0f32, 2.0, 3.0, 4.0];
        let view = SamplesView::from_array(features.view());

        let best = find_best_split(&view, &targets, &[0, 1, 2, 3], &no_penalty()).unwrap();
        assert_eq!(best.feature, 0);
    }

    #[test]
    fn tie_breaks_to_smallest_threshold() {
        // Symmetric targets: splitting at 1.0 and at 2.0 yields the same
        // gain; the ascending candidate order keeps the smaller threshold.
        let features = array![[0.0f32], [1.0], [2.0]];
        let targets = [0.0f32, 1.0, 0.0];
        let view = SamplesView::from_array(features.view());

        let best = find_best_split(&view, &targets, &[0, 1, 2], &no_penalty()).unwrap();
        assert_eq!(best.threshold, 1.0);
    }

    #[test]
    fn all_candidates_degenerate_returns_none() {
        // A single distinct value per feature: every candidate's left side is
        // empty, so there is no viable split.
        let features = array![[3.0f32], [3.0], [3.0]];
        let targets = [1.0f32, 2.0, 3.0];
        let view = SamplesView::from_array(features.view());

        assert!(find_best_split(&view, &targets, &[0, 1, 2], &no_penalty()).is_none());
    }

    #[test]
    fn regularization_penalizes_gain() {
        let features = array![[1.0f32], [2.0]];
        let targets = [0.0f32, 1.0];
        let view = SamplesView::from_array(features.view());

        let unpenalized = find_best_split(&view, &targets, &[0, 1], &no_penalty()).unwrap();
        let penalized = find_best_split(
            &view,
            &targets,
            &[0, 1],
            &GainParams {
                regularization: 0.1,
            },
        )
        .unwrap();

        assert_abs_diff_eq!(unpenalized.gain - penalized.gain, 0.1, epsilon = 1e-6);
    }

    #[test]
    fn pure_node_yields_negative_penalized_gain() {
        // Identical targets: zero variance everywhere, so the best candidate's
        // gain is exactly the negated penalty.
        let features = array![[1.0f32], [2.0], [3.0], [4.0]];
        let targets = [3.0f32, 3.0, 3.0, 3.0];
        let view = SamplesView::from_array(features.view());

        let best = find_best_split(
            &view,
            &targets,
            &[0, 1, 2, 3],
            &GainParams {
                regularization: 1e-4,
            },
        )
        .unwrap();
        assert_abs_diff_eq!(best.gain, -1e-4, epsilon = 1e-9);
    }
}
