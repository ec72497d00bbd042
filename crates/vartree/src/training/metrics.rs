//! Evaluation metrics for model quality.
//!
//! Metrics are separate from the training criterion: the tree is grown by
//! variance reduction but may be evaluated with any regression metric.

use ndarray::ArrayView1;

/// A regression evaluation metric.
pub trait MetricFn {
    /// Compute the metric over parallel prediction/target vectors.
    fn compute(&self, predictions: ArrayView1<'_, f32>, targets: ArrayView1<'_, f32>) -> f64;

    /// Whether larger metric values indicate a better model.
    fn higher_is_better(&self) -> bool;

    /// Short metric name for display.
    fn name(&self) -> &'static str;
}

// =============================================================================
// RMSE (Root Mean Squared Error)
// =============================================================================

/// Root Mean Squared Error: sqrt(mean((pred - target)²))
///
/// Lower is better.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rmse;

impl MetricFn for Rmse {
    fn compute(&self, predictions: ArrayView1<'_, f32>, targets: ArrayView1<'_, f32>) -> f64 {
        debug_assert_eq!(predictions.len(), targets.len());
        let n = predictions.len();
        if n == 0 {
            return 0.0;
        }

        let sum_sq: f64 = predictions
            .iter()
            .zip(targets.iter())
            .map(|(&p, &t)| {
                let diff = p as f64 - t as f64;
                diff * diff
            })
            .sum();

        (sum_sq / n as f64).sqrt()
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "rmse"
    }
}

// =============================================================================
// MAE (Mean Absolute Error)
// =============================================================================

/// Mean Absolute Error: mean(|pred - target|)
///
/// Lower is better. More robust to outliers than RMSE.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mae;

impl MetricFn for Mae {
    fn compute(&self, predictions: ArrayView1<'_, f32>, targets: ArrayView1<'_, f32>) -> f64 {
        debug_assert_eq!(predictions.len(), targets.len());
        let n = predictions.len();
        if n == 0 {
            return 0.0;
        }

        let sum_abs: f64 = predictions
            .iter()
            .zip(targets.iter())
            .map(|(&p, &t)| (p as f64 - t as f64).abs())
            .sum();

        sum_abs / n as f64
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "mae"
    }
}
