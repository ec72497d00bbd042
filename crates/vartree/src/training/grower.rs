//! Recursive tree growing.
//!
//! [`TreeGrower`] turns a training set into an immutable [`Tree`] by
//! recursive exact-greedy splitting. Each recursion level partitions the
//! sample indices it receives into two disjoint subsets, so sibling subtrees
//! never share state and every recursive call sees at least one sample.

use crate::dataset::SamplesView;
use crate::repr::{MutableTree, NodeId, Tree};

use super::logger::{GrowthLogger, Verbosity};
use super::split::{find_best_split, subset_mean, GainParams};

// =============================================================================
// GrowerParams
// =============================================================================

/// Parameters for tree growing.
#[derive(Debug, Clone)]
pub struct GrowerParams {
    /// Maximum tree depth in edges; depth 0 forces a single leaf.
    pub max_depth: u32,
    /// Minimum number of samples required to attempt a split.
    pub min_samples_split: usize,
    /// Gain computation parameters.
    pub gain: GainParams,
}

impl Default for GrowerParams {
    fn default() -> Self {
        Self {
            max_depth: 3,
            min_samples_split: 2,
            gain: GainParams::default(),
        }
    }
}

// =============================================================================
// TreeGrower
// =============================================================================

/// Grows a regression tree from a training set.
pub struct TreeGrower {
    params: GrowerParams,
    verbosity: Verbosity,
}

impl TreeGrower {
    /// Create a new grower.
    pub fn new(params: GrowerParams, verbosity: Verbosity) -> Self {
        Self { params, verbosity }
    }

    /// Get reference to parameters.
    pub fn params(&self) -> &GrowerParams {
        &self.params
    }

    /// Grow a tree.
    ///
    /// `features` and `targets` must already be validated: equal positive
    /// length, fixed dimensionality, finite values. The grower itself has no
    /// error path.
    pub fn grow(&self, features: &SamplesView<'_>, targets: &[f32]) -> Tree {
        debug_assert_eq!(features.n_samples(), targets.len());

        let logger = GrowthLogger::new(self.verbosity);
        logger.start_growth(features.n_samples(), features.n_features());

        let mut tree = MutableTree::new();
        let root = tree.init_root();
        let indices: Vec<u32> = (0..features.n_samples() as u32).collect();
        self.grow_node(features, targets, indices, 0, &mut tree, root, &logger);

        let tree = tree.freeze(features.n_features());
        logger.finish_growth(tree.n_nodes(), tree.n_leaves(), tree.depth());
        tree
    }

    /// Decide one node and recurse into its children.
    #[allow(clippy::too_many_arguments)]
    fn grow_node(
        &self,
        features: &SamplesView<'_>,
        targets: &[f32],
        indices: Vec<u32>,
        depth: u32,
        tree: &mut MutableTree,
        node: NodeId,
        logger: &GrowthLogger,
    ) {
        // Stop condition for recursive splitting.
        if depth >= self.params.max_depth || indices.len() < self.params.min_samples_split {
            let value = subset_mean(targets, &indices) as f32;
            logger.log_leaf(depth, indices.len(), value);
            tree.make_leaf(node, value);
            return;
        }

        let best = find_best_split(features, targets, &indices, &self.params.gain);

        // No viable candidate, or the best one's penalized gain falls below
        // zero: the split is rejected and the node becomes a leaf.
        let Some(best) = best.filter(|candidate| candidate.gain >= 0.0) else {
            let value = subset_mean(targets, &indices) as f32;
            logger.log_leaf(depth, indices.len(), value);
            tree.make_leaf(node, value);
            return;
        };

        let (left_indices, right_indices) =
            partition_indices(features, &indices, best.feature, best.threshold);
        logger.log_split(depth, &best, left_indices.len(), right_indices.len());

        let (left, right) = tree.apply_split(node, best.feature, best.threshold);
        self.grow_node(features, targets, left_indices, depth + 1, tree, left, logger);
        self.grow_node(features, targets, right_indices, depth + 1, tree, right, logger);
    }
}

/// Partition sample indices by `features[feature] < threshold`.
///
/// The committed candidate was scored on a non-degenerate partition, so both
/// returned sides are non-empty.
fn partition_indices(
    features: &SamplesView<'_>,
    indices: &[u32],
    feature: u32,
    threshold: f32,
) -> (Vec<u32>, Vec<u32>) {
    let mut left = Vec::new();
    let mut right = Vec::new();

    for &i in indices {
        if features.get(i as usize, feature as usize) < threshold {
            left.push(i);
        } else {
            right.push(i);
        }
    }

    (left, right)
}
