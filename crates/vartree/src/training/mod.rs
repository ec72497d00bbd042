//! Training infrastructure for the regression tree.
//!
//! This module provides the core types needed for training:
//!
//! - [`TreeGrower`], [`GrowerParams`]: Recursive exact-greedy tree growing
//! - [`find_best_split`], [`GainParams`], [`SplitCandidate`]: Split search
//!   with the regularized variance-reduction criterion
//! - [`GrowthLogger`], [`Verbosity`]: Growth logging
//! - [`MetricFn`], [`Rmse`], [`Mae`]: Evaluation metrics

mod grower;
mod logger;
mod metrics;
mod split;

pub use grower::{GrowerParams, TreeGrower};
pub use logger::{GrowthLogger, Verbosity};
pub use metrics::{Mae, MetricFn, Rmse};
pub use split::{find_best_split, GainParams, SplitCandidate};
