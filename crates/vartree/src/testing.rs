//! Synthetic data generators for tests and benchmarks.

use rand::prelude::*;

/// Generate random dense features in row-major order.
///
/// Values are uniform in `[min, max]`.
pub fn random_dense_f32(rows: usize, cols: usize, seed: u64, min: f32, max: f32) -> Vec<f32> {
    assert!(max >= min);
    let mut rng = StdRng::seed_from_u64(seed);
    let width = max - min;
    (0..rows * cols)
        .map(|_| min + rng.gen::<f32>() * width)
        .collect()
}

/// Generate regression targets as a simple linear model of features plus
/// uniform noise.
///
/// Returns `(targets, weights, bias)`.
pub fn synthetic_regression_targets_linear(
    features_row_major: &[f32],
    rows: usize,
    cols: usize,
    seed: u64,
    noise_amplitude: f32,
) -> (Vec<f32>, Vec<f32>, f32) {
    assert_eq!(features_row_major.len(), rows * cols);
    let mut rng = StdRng::seed_from_u64(seed);

    let weights: Vec<f32> = (0..cols).map(|_| rng.gen::<f32>() * 2.0 - 1.0).collect();
    let bias: f32 = rng.gen::<f32>() * 0.5 - 0.25;

    let mut targets = Vec::with_capacity(rows);
    for r in 0..rows {
        let mut y = bias;
        let base = r * cols;
        for c in 0..cols {
            y += features_row_major[base + c] * weights[c];
        }
        if noise_amplitude > 0.0 {
            y += (rng.gen::<f32>() * 2.0 - 1.0) * noise_amplitude;
        }
        targets.push(y);
    }

    (targets, weights, bias)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generators_are_deterministic() {
        let a = random_dense_f32(8, 3, 7, -1.0, 1.0);
        let b = random_dense_f32(8, 3, 7, -1.0, 1.0);
        assert_eq!(a, b);
        assert!(a.iter().all(|v| (-1.0..=1.0).contains(v)));

        let (ya, _, _) = synthetic_regression_targets_linear(&a, 8, 3, 11, 0.1);
        let (yb, _, _) = synthetic_regression_targets_linear(&b, 8, 3, 11, 0.1);
        assert_eq!(ya, yb);
    }
}
