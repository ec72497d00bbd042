//! vartree: single-tree regression in Rust.
//!
//! A decision tree trained by recursive variance-reduction splitting,
//! producing scalar predictions from real-valued feature vectors.
//!
//! # Key Types
//!
//! - [`RegressionTree`] - High-level model with train/predict
//! - [`TreeConfig`] - Configuration builder
//! - [`Tree`] / [`Node`] - Immutable tree representation
//! - [`MetricFn`] / [`Rmse`] / [`Mae`] - Evaluation metrics
//!
//! # Training
//!
//! Use `TreeConfig::builder()` to configure, then [`RegressionTree::train`].
//!
//! ```
//! use ndarray::array;
//! use vartree::{RegressionTree, TreeConfig};
//!
//! let features = array![[1.0f32, 2.0], [2.0, 3.0], [3.0, 4.0], [4.0, 5.0], [5.0, 6.0]];
//! let targets = array![1.0f32, 2.0, 3.0, 4.0, 5.0];
//!
//! let model = RegressionTree::train(features.view(), targets.view(), TreeConfig::default())?;
//! let prediction = model.predict_one(&[6.0, 7.0])?;
//! # Ok::<(), vartree::DatasetError>(())
//! ```

// Re-export approx traits for users who want to compare predictions
pub use approx;

pub mod dataset;
pub mod model;
pub mod repr;
pub mod testing;
pub mod training;
pub mod utils;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// High-level model types
pub use model::{ConfigError, RegressionTree, TreeConfig};

// Tree representation
pub use repr::{MutableTree, Node, NodeId, Tree, TreeValidationError};

// Training types (split search, logging, metrics)
pub use training::{
    find_best_split, GainParams, GrowerParams, GrowthLogger, Mae, MetricFn, Rmse, SplitCandidate,
    TreeGrower, Verbosity,
};

// Data types (for preparing training data)
pub use dataset::{DatasetError, SamplesView};

// Shared utilities
pub use utils::{run_with_threads, Parallelism};
