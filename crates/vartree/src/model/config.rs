//! High-level tree configuration with builder pattern.
//!
//! [`TreeConfig`] carries the training hyperparameters. It uses the `bon`
//! crate for builder pattern generation with validation at build time.
//!
//! # Example
//!
//! ```
//! use vartree::TreeConfig;
//!
//! // All defaults
//! let config = TreeConfig::builder().build().unwrap();
//!
//! // Customize hyperparameters
//! let config = TreeConfig::builder()
//!     .max_depth(5)
//!     .min_samples_split(4)
//!     .regularization(1e-3)
//!     .build()
//!     .unwrap();
//! ```

use bon::Builder;

use crate::training::{GainParams, GrowerParams, Verbosity};

// =============================================================================
// ConfigError
// =============================================================================

/// Errors that can occur during configuration validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// min_samples_split must be at least 1.
    InvalidMinSamplesSplit(usize),
    /// Regularization must be finite and non-negative.
    InvalidRegularization(f32),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMinSamplesSplit(v) => {
                write!(f, "min_samples_split must be at least 1, got {}", v)
            }
            Self::InvalidRegularization(v) => {
                write!(f, "regularization must be finite and non-negative, got {}", v)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// TreeConfig
// =============================================================================

/// Configuration for regression tree training.
///
/// The builder pattern (via `bon`) provides a fluent API with validation at
/// build time.
#[derive(Debug, Clone, Builder)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
pub struct TreeConfig {
    /// Maximum tree depth in edges. Default: 3.
    ///
    /// A value of 0 always produces a single leaf predicting the global mean.
    #[builder(default = 3)]
    pub max_depth: u32,

    /// Minimum number of samples required to attempt a split. Default: 2.
    #[builder(default = 2)]
    pub min_samples_split: usize,

    /// Flat penalty subtracted from every candidate split gain. Default: 1e-4.
    ///
    /// A candidate whose penalized gain falls below zero is rejected and the
    /// node becomes a leaf.
    #[builder(default = 1e-4)]
    pub regularization: f32,

    /// Verbosity level for growth logging. Default: `Silent`.
    #[builder(default)]
    pub verbosity: Verbosity,
}

/// Custom finishing function that validates the config.
impl<S: tree_config_builder::IsComplete> TreeConfigBuilder<S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any parameter is invalid:
    /// - `min_samples_split == 0`
    /// - `regularization` negative or non-finite
    pub fn build(self) -> Result<TreeConfig, ConfigError> {
        let config = self.__build_internal();
        config.validate()?;
        Ok(config)
    }
}

impl TreeConfig {
    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_samples_split < 1 {
            return Err(ConfigError::InvalidMinSamplesSplit(self.min_samples_split));
        }
        if !self.regularization.is_finite() || self.regularization < 0.0 {
            return Err(ConfigError::InvalidRegularization(self.regularization));
        }
        Ok(())
    }

    /// Convert to grower parameters.
    pub(crate) fn to_grower_params(&self) -> GrowerParams {
        GrowerParams {
            max_depth: self.max_depth,
            min_samples_split: self.min_samples_split,
            gain: GainParams {
                regularization: self.regularization,
            },
        }
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self::builder().build().expect("default config is valid")
    }
}

// =============================================================================
// Tests
// =============================================================================
