use crate::backend::{Backend, Tensor1D, Tensor2D};
use crate::dataset::Dataset;
use crate::error::{LinregError, Result};
use std::ops::Range;

/// Feature rows and targets held in host memory.
///
/// Construction enforces the dataset invariants: one target per row, every
/// row of the same width. The contents never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct InMemoryDataset {
    x: Vec<Vec<f64>>,
    y: Vec<f64>,
}

impl InMemoryDataset {
    pub fn new(x: Vec<Vec<f64>>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(LinregError::mismatch("feature rows vs targets", x.len(), y.len()));
        }
        if x.is_empty() {
            return Err(LinregError::EmptyData("dataset has no samples".into()));
        }
        let n_features = x[0].len();
        if let Some(row) = x.iter().find(|row| row.len() != n_features) {
            return Err(LinregError::mismatch("feature row width", n_features, row.len()));
        }
        Ok(Self { x, y })
    }

    /// Feature rows.
    pub fn features(&self) -> &[Vec<f64>] {
        &self.x
    }

    /// Targets, aligned with [`InMemoryDataset::features`] by index.
    pub fn targets(&self) -> &[f64] {
        &self.y
    }
}

impl Dataset for InMemoryDataset {
    fn len(&self) -> usize {
        self.x.len()
    }

    fn n_features(&self) -> usize {
        self.x[0].len()
    }

    fn get_batch<B: Backend>(&self, range: Range<usize>) -> Result<(Tensor2D<B>, Tensor1D<B>)> {
        if range.start > range.end || range.end > self.x.len() {
            return Err(LinregError::InvalidParameter(format!(
                "batch range {:?} out of bounds for {} samples",
                range,
                self.x.len()
            )));
        }
        let batch_x = &self.x[range.clone()];
        let batch_y = &self.y[range];

        let data = batch_x.iter().flat_map(|row| row.iter()).copied().collect();
        let x_tensor = Tensor2D::<B>::new(data, batch_x.len(), self.n_features());
        let y_tensor = Tensor1D::<B>::new(batch_y.to_vec());

        Ok((x_tensor, y_tensor))
    }
}
