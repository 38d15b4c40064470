//! Dataset abstractions.
//!
//! A [`Dataset`] is a source of `(X, y)` pairs where `X` is a feature matrix
//! of shape `(n_samples, n_features)` and `y` a target vector of shape
//! `(n_samples,)`. The gradient-descent driver works on the full batch
//! returned by [`Dataset::full_batch`].
//!
//! # Example
//!
//! ```rust
//! use linreg_scratch::dataset::{Dataset, InMemoryDataset};
//! use linreg_scratch::backend::CpuBackend;
//!
//! let x = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
//! let y = vec![2.0, -3.4];
//! let dataset = InMemoryDataset::new(x, y).unwrap();
//!
//! let (features, targets) = dataset.full_batch::<CpuBackend>().unwrap();
//! assert_eq!(features.shape(), (2, 2));
//! assert_eq!(targets.len(), 2);
//! ```

use crate::backend::{Backend, Tensor1D, Tensor2D};
use crate::error::{LinregError, Result};
use std::ops::Range;

pub mod memory;
pub mod synthetic;

pub use self::memory::InMemoryDataset;
pub use self::synthetic::{generate, SyntheticData};

/// Abstract interface for a regression dataset.
pub trait Dataset {
    /// Total number of samples.
    fn len(&self) -> usize;

    /// Number of feature columns.
    fn n_features(&self) -> usize;

    /// Checks whether the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Loads the samples in `range` as tensors.
    ///
    /// Implementors return an error for out-of-bounds ranges.
    fn get_batch<B: Backend>(&self, range: Range<usize>) -> Result<(Tensor2D<B>, Tensor1D<B>)>;

    /// Loads every sample. Fails with [`LinregError::EmptyData`] when there
    /// is nothing to load.
    fn full_batch<B: Backend>(&self) -> Result<(Tensor2D<B>, Tensor1D<B>)> {
        if self.is_empty() {
            return Err(LinregError::EmptyData("dataset has no samples".into()));
        }
        self.get_batch(0..self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;

    // Mock dataset for default-method testing
    struct MockDataset {
        len: usize,
    }

    impl Dataset for MockDataset {
        fn len(&self) -> usize {
            self.len
        }

        fn n_features(&self) -> usize {
            2
        }

        fn get_batch<B: Backend>(
            &self,
            range: Range<usize>,
        ) -> Result<(Tensor2D<B>, Tensor1D<B>)> {
            if range.end > self.len {
                return Err(LinregError::InvalidParameter("range out of bounds".into()));
            }
            let n = range.len();
            let start = range.start;

            // X: (n, 2) with unique values per sample
            let x_data: Vec<f64> = (0..n * 2).map(|i| (start * 2 + i) as f64).collect();
            let y_data: Vec<f64> = range.map(|i| i as f64).collect();
            Ok((Tensor2D::new(x_data, n, 2), Tensor1D::new(y_data)))
        }
    }

    #[test]
    fn test_dataset_is_empty() {
        assert!(MockDataset { len: 0 }.is_empty());
        assert!(!MockDataset { len: 1 }.is_empty());
    }

    #[test]
    fn test_full_batch_covers_everything() {
        let ds = MockDataset { len: 4 };
        let (x, y) = ds.full_batch::<CpuBackend>().unwrap();
        assert_eq!(x.shape(), (4, 2));
        assert_eq!(y.to_vec(), vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_full_batch_empty_dataset() {
        let ds = MockDataset { len: 0 };
        assert!(matches!(
            ds.full_batch::<CpuBackend>(),
            Err(LinregError::EmptyData(_))
        ));
    }
}
