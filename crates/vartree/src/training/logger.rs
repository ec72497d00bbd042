//! Growth logging.

use super::split::SplitCandidate;

/// Verbosity level for training output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// No output.
    #[default]
    Silent,
    /// Start/finish summary lines.
    Info,
    /// Per-node split and leaf decisions.
    Debug,
}

/// Logger for tree growth progress.
#[derive(Debug)]
pub struct GrowthLogger {
    verbosity: Verbosity,
}

impl GrowthLogger {
    /// Create a new logger.
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Log the start of tree growth.
    pub fn start_growth(&self, n_samples: usize, n_features: usize) {
        if self.verbosity >= Verbosity::Info {
            println!("[grow] start: {n_samples} samples, {n_features} features");
        }
    }

    /// Log a committed split.
    pub fn log_split(&self, depth: u32, split: &SplitCandidate, n_left: usize, n_right: usize) {
        if self.verbosity >= Verbosity::Debug {
            println!(
                "[grow] depth {depth}: split feature {} at {} (gain {:.6}, {n_left}/{n_right})",
                split.feature, split.threshold, split.gain
            );
        }
    }

    /// Log a finalized leaf.
    pub fn log_leaf(&self, depth: u32, n_samples: usize, value: f32) {
        if self.verbosity >= Verbosity::Debug {
            println!("[grow] depth {depth}: leaf value {value:.6} ({n_samples} samples)");
        }
    }

    /// Log the finished tree shape.
    pub fn finish_growth(&self, n_nodes: usize, n_leaves: usize, depth: u32) {
        if self.verbosity >= Verbosity::Info {
            println!("[grow] done: {n_nodes} nodes, {n_leaves} leaves, depth {depth}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_ordering() {
        assert!(Verbosity::Silent < Verbosity::Info);
        assert!(Verbosity::Info < Verbosity::Debug);
        assert_eq!(Verbosity::default(), Verbosity::Silent);
    }
}
