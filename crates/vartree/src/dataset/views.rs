//! View types for algorithm access.
//!
//! Read-only access to feature data with semantics matching what the trainer
//! and predictor need. All features are numeric.

use ndarray::{ArrayView1, ArrayView2};

/// Read-only view into feature data with sample-major layout.
///
/// Shape: `[n_samples, n_features]` - each sample's features are contiguous
/// in memory. The API uses conceptual terms (sample, feature) not array terms
/// (row, col).
#[derive(Clone, Copy)]
pub struct SamplesView<'a> {
    /// Shape: [n_samples, n_features] - sample-major
    data: ArrayView2<'a, f32>,
}

impl<'a> SamplesView<'a> {
    /// Create a samples view over an array.
    ///
    /// # Arguments
    ///
    /// * `data` - Array with shape `[n_samples, n_features]`, must be C-order
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that the array is in standard (C) layout.
    pub fn from_array(data: ArrayView2<'a, f32>) -> Self {
        debug_assert!(data.is_standard_layout(), "Array must be in C-order");
        Self { data }
    }

    /// Create from a contiguous slice in sample-major (row-major) order.
    ///
    /// This is zero-copy.
    ///
    /// # Arguments
    ///
    /// * `data` - Slice of length `n_samples * n_features`
    /// * `n_samples` - Number of samples (rows)
    /// * `n_features` - Number of features (columns)
    ///
    /// # Returns
    ///
    /// `None` if the slice length doesn't match `n_samples * n_features`.
    pub fn from_slice(data: &'a [f32], n_samples: usize, n_features: usize) -> Option<Self> {
        ArrayView2::from_shape((n_samples, n_features), data)
            .ok()
            .map(|view| Self { data: view })
    }

    /// Number of samples (first dimension).
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.data.nrows()
    }

    /// Number of features (second dimension).
    #[inline]
    pub fn n_features(&self) -> usize {
        self.data.ncols()
    }

    /// Get feature value at (sample, feature).
    #[inline]
    pub fn get(&self, sample: usize, feature: usize) -> f32 {
        self.data[[sample, feature]]
    }

    /// Get all features for a sample.
    #[inline]
    pub fn sample_view(&self, sample: usize) -> ArrayView1<'_, f32> {
        self.data.row(sample)
    }
}

impl<'a> std::fmt::Debug for SamplesView<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SamplesView")
            .field("n_samples", &self.n_samples())
            .field("n_features", &self.n_features())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn from_array_access() {
        let data = array![[1.0f32, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let view = SamplesView::from_array(data.view());

        assert_eq!(view.n_samples(), 3);
        assert_eq!(view.n_features(), 2);
        assert_eq!(view.get(1, 0), 3.0);
        assert_eq!(view.get(2, 1), 6.0);
        assert_eq!(view.sample_view(0).as_slice().unwrap(), &[1.0, 2.0]);
    }

    #[test]
    fn from_slice_shape_check() {
        let data = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let view = SamplesView::from_slice(&data, 3, 2).unwrap();
        assert_eq!(view.get(2, 0), 5.0);

        assert!(SamplesView::from_slice(&data, 4, 2).is_none());
    }
}
