//! Input validation errors.

/// Errors surfaced when validating training or prediction inputs.
///
/// The recursion itself never errors; malformed input is rejected at the
/// `train`/`predict` boundary before any tree work starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    /// The dataset contains no samples.
    #[error("dataset contains no samples")]
    EmptySamples,

    /// The dataset contains no features.
    #[error("dataset contains no features")]
    EmptyFeatures,

    /// Targets length does not match the sample count.
    #[error("targets length {n_targets} does not match sample count {n_samples}")]
    TargetLengthMismatch { n_samples: usize, n_targets: usize },

    /// A feature vector has the wrong dimensionality for this model.
    #[error("expected {expected} features, got {actual}")]
    FeatureCountMismatch { expected: usize, actual: usize },

    /// A feature value is NaN or infinite.
    #[error("non-finite feature value at sample {sample}, feature {feature}")]
    NonFiniteFeature { sample: usize, feature: usize },

    /// A target value is NaN or infinite.
    #[error("non-finite target value at sample {sample}")]
    NonFiniteTarget { sample: usize },
}
