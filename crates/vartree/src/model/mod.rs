//! High-level regression tree model.
//!
//! [`RegressionTree`] wraps the immutable [`Tree`] with input validation,
//! training, and prediction. Access the underlying structure via
//! [`tree()`](RegressionTree::tree) and the hyperparameters via
//! [`config()`](RegressionTree::config).

mod config;

pub use config::{ConfigError, TreeConfig};

use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::dataset::{self, DatasetError, SamplesView};
use crate::repr::Tree;
use crate::training::TreeGrower;
use crate::utils::run_with_threads;

/// A trained single-tree regression model.
///
/// Training produces the tree once; afterwards the structure is read-only and
/// prediction is a pure traversal.
pub struct RegressionTree {
    /// The underlying tree.
    tree: Tree,
    /// Training configuration.
    config: TreeConfig,
}

impl RegressionTree {
    /// Train a new regression tree.
    ///
    /// # Arguments
    ///
    /// * `features` - Feature matrix with shape `[n_samples, n_features]`
    ///   (sample-major)
    /// * `targets` - Target values (length = `n_samples`)
    /// * `config` - Training configuration
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] for empty inputs, a target/sample length
    /// mismatch, or non-finite values. Validation happens before any tree
    /// work; the growing recursion itself cannot fail.
    pub fn train(
        features: ArrayView2<'_, f32>,
        targets: ArrayView1<'_, f32>,
        config: TreeConfig,
    ) -> Result<Self, DatasetError> {
        let view = SamplesView::from_array(features);
        dataset::validate_training_inputs(&view, targets)?;

        // Targets sliced from a larger array may be non-contiguous.
        let owned;
        let targets_slice = match targets.as_slice() {
            Some(slice) => slice,
            None => {
                owned = targets.to_vec();
                &owned
            }
        };

        let grower = TreeGrower::new(config.to_grower_params(), config.verbosity);
        let tree = grower.grow(&view, targets_slice);

        Ok(Self { tree, config })
    }

    /// Get reference to the underlying tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Get reference to the training configuration.
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    // =========================================================================
    // Prediction
    // =========================================================================

    /// Predict for a single feature vector.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::FeatureCountMismatch`] if `features` does not
    /// match the dimensionality the tree was trained with.
    pub fn predict_one(&self, features: &[f32]) -> Result<f32, DatasetError> {
        if features.len() != self.tree.n_features() {
            return Err(DatasetError::FeatureCountMismatch {
                expected: self.tree.n_features(),
                actual: features.len(),
            });
        }
        Ok(self.tree.predict_row(features))
    }

    /// Predict for multiple rows.
    ///
    /// Traversal order per row is identical in all modes, so results do not
    /// depend on `n_threads`.
    ///
    /// # Arguments
    ///
    /// * `features` - Feature matrix with shape `[n_samples, n_features]`
    ///   (sample-major)
    /// * `n_threads` - Thread count: 0 = auto, 1 = sequential, >1 = exact count
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::FeatureCountMismatch`] if the column count does
    /// not match the dimensionality the tree was trained with.
    pub fn predict(
        &self,
        features: ArrayView2<'_, f32>,
        n_threads: usize,
    ) -> Result<Array1<f32>, DatasetError> {
        if features.ncols() != self.tree.n_features() {
            return Err(DatasetError::FeatureCountMismatch {
                expected: self.tree.n_features(),
                actual: features.ncols(),
            });
        }

        let predictions = run_with_threads(n_threads, |parallelism| {
            parallelism.maybe_par_map(0..features.nrows(), |row| {
                let sample = features.row(row);
                match sample.as_slice() {
                    Some(slice) => self.tree.predict_row(slice),
                    None => self.tree.predict_row(&sample.to_vec()),
                }
            })
        });

        Ok(Array1::from_vec(predictions))
    }
}

impl std::fmt::Debug for RegressionTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegressionTree")
            .field("n_nodes", &self.tree.n_nodes())
            .field("n_leaves", &self.tree.n_leaves())
            .field("depth", &self.tree.depth())
            .field("n_features", &self.tree.n_features())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn train_and_predict_one() {
        let features = array![[0.0f32, 1.0], [0.0, 2.0], [1.0, 1.0], [1.0, 2.0]];
        let targets = array![2.0f32, 2.0, 8.0, 8.0];

        let model =
            RegressionTree::train(features.view(), targets.view(), TreeConfig::default()).unwrap();

        assert_eq!(model.predict_one(&[0.0, 1.5]).unwrap(), 2.0);
        assert_eq!(model.predict_one(&[1.0, 1.5]).unwrap(), 8.0);
    }

    #[test]
    fn predict_one_rejects_wrong_dimensionality() {
        let features = array![[0.0f32, 1.0], [1.0, 2.0]];
        let targets = array![1.0f32, 2.0];
        let model =
            RegressionTree::train(features.view(), targets.view(), TreeConfig::default()).unwrap();

        assert_eq!(
            model.predict_one(&[0.0]),
            Err(DatasetError::FeatureCountMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn batch_predict_matches_single() {
        let features = array![[1.0f32], [2.0], [3.0], [4.0], [5.0]];
        let targets = array![1.0f32, 2.0, 3.0, 4.0, 5.0];
        let model =
            RegressionTree::train(features.view(), targets.view(), TreeConfig::default()).unwrap();

        let batch = model.predict(features.view(), 1).unwrap();
        for (row, &expected) in batch.iter().enumerate() {
            let single = model
                .predict_one(features.row(row).as_slice().unwrap())
                .unwrap();
            assert_eq!(single, expected);
        }
    }

    #[test]
    fn batch_predict_rejects_wrong_width() {
        let features = array![[1.0f32, 2.0], [3.0, 4.0]];
        let targets = array![1.0f32, 2.0];
        let model =
            RegressionTree::train(features.view(), targets.view(), TreeConfig::default()).unwrap();

        let wide = array![[1.0f32, 2.0, 3.0]];
        assert!(matches!(
            model.predict(wide.view(), 1),
            Err(DatasetError::FeatureCountMismatch {
                expected: 2,
                actual: 3
            })
        ));
    }

    #[test]
    fn train_rejects_invalid_inputs() {
        let features = array![[1.0f32], [2.0]];
        let targets = array![1.0f32];
        assert!(matches!(
            RegressionTree::train(features.view(), targets.view(), TreeConfig::default()),
            Err(DatasetError::TargetLengthMismatch { .. })
        ));
    }

    #[test]
    fn trains_from_non_contiguous_targets() {
        // Take targets as a column of a 2D array (strided view).
        let features = array![[1.0f32], [2.0], [3.0]];
        let table = array![[1.0f32, 9.0], [2.0, 9.0], [3.0, 9.0]];
        let targets = table.column(0);

        let model =
            RegressionTree::train(features.view(), targets, TreeConfig::default()).unwrap();
        assert_abs_diff_eq!(model.predict_one(&[3.0]).unwrap(), 3.0, epsilon = 1e-6);
    }

    #[test]
    fn debug_summarizes_shape() {
        let features = array![[1.0f32], [2.0]];
        let targets = array![1.0f32, 2.0];
        let model =
            RegressionTree::train(features.view(), targets.view(), TreeConfig::default()).unwrap();

        let debug = format!("{model:?}");
        assert!(debug.contains("RegressionTree"));
        assert!(debug.contains("n_nodes"));
    }
}
