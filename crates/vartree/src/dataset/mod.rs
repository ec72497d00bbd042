//! Training and prediction input handling.
//!
//! # Key Types
//!
//! - [`SamplesView`]: Read-only sample-major view over feature data
//! - [`DatasetError`]: Fail-fast validation errors at the API boundary
//!
//! # Storage Layout
//!
//! Features are sample-major: `[n_samples, n_features]`, each sample's
//! features contiguous. This is the layout both the exact-greedy split search
//! and tree traversal consume.

mod error;
mod views;

pub use error::DatasetError;
pub use views::SamplesView;

use ndarray::ArrayView1;

/// Validate training inputs before any tree work starts.
///
/// Checks that the dataset is non-empty, the target vector is parallel to the
/// samples, and every value is finite. Missing values are not supported, so
/// NaN or infinite entries are rejected here rather than routed.
pub fn validate_training_inputs(
    features: &SamplesView<'_>,
    targets: ArrayView1<'_, f32>,
) -> Result<(), DatasetError> {
    let n_samples = features.n_samples();
    let n_features = features.n_features();

    if n_samples == 0 {
        return Err(DatasetError::EmptySamples);
    }
    if n_features == 0 {
        return Err(DatasetError::EmptyFeatures);
    }
    if targets.len() != n_samples {
        return Err(DatasetError::TargetLengthMismatch {
            n_samples,
            n_targets: targets.len(),
        });
    }

    for sample in 0..n_samples {
        for feature in 0..n_features {
            if !features.get(sample, feature).is_finite() {
                return Err(DatasetError::NonFiniteFeature { sample, feature });
            }
        }
    }
    for (sample, &target) in targets.iter().enumerate() {
        if !target.is_finite() {
            return Err(DatasetError::NonFiniteTarget { sample });
        }
    }

    Ok(())
}
