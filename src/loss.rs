//! Differentiable loss functions.

use crate::backend::{Backend, Scalar, Tensor1D};
use crate::error::{LinregError, Result};

/// A differentiable loss over prediction/target vectors.
///
/// Implementors define:
/// - the scalar loss value (for logging and the loss trace), and
/// - the gradient of the loss with respect to the predictions, which the
///   model's `backward()` turns into parameter gradients.
///
/// Both fail with [`LinregError::DimensionMismatch`] when the two vectors
/// differ in length; nothing is ever truncated.
pub trait Loss<B: Backend> {
    /// Computes the scalar loss value.
    fn loss(&self, prediction: &Tensor1D<B>, target: &Tensor1D<B>) -> Result<Scalar<B>>;

    /// Computes `∂L/∂pred`.
    fn grad_wrt_prediction(
        &self,
        prediction: &Tensor1D<B>,
        target: &Tensor1D<B>,
    ) -> Result<Tensor1D<B>>;
}

/// Mean Squared Error: `L = (1/n) · Σ(predᵢ − targetᵢ)²`.
///
/// Gradient w.r.t. prediction: `(pred − target) / n`. The factor of 2 is
/// absorbed into the learning rate, which makes the weight gradient
/// `−(1/n) · Xᵀ · (target − pred)`.
///
/// ```
/// use linreg_scratch::backend::{CpuBackend, Tensor1D};
/// use linreg_scratch::loss::{Loss, MSELoss};
///
/// let pred = Tensor1D::<CpuBackend>::new(vec![2.0, -3.4]);
/// let target = Tensor1D::<CpuBackend>::new(vec![2.0, -3.4]);
/// assert_eq!(MSELoss.loss(&pred, &target).unwrap().to_f64(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MSELoss;

impl MSELoss {
    fn residuals<B: Backend>(pred: &Tensor1D<B>, target: &Tensor1D<B>) -> Result<Tensor1D<B>> {
        if pred.len() != target.len() {
            return Err(LinregError::mismatch("mse loss", target.len(), pred.len()));
        }
        if pred.is_empty() {
            return Err(LinregError::EmptyData("mse loss over zero samples".into()));
        }
        Ok(pred.sub(target))
    }
}

impl<B: Backend> Loss<B> for MSELoss {
    fn loss(&self, pred: &Tensor1D<B>, target: &Tensor1D<B>) -> Result<Scalar<B>> {
        let diff = Self::residuals(pred, target)?;
        diff.mul(&diff).mean()
    }

    fn grad_wrt_prediction(&self, pred: &Tensor1D<B>, target: &Tensor1D<B>) -> Result<Tensor1D<B>> {
        let diff = Self::residuals(pred, target)?;
        let inv_n = Scalar::<B>::new(1. / diff.len() as f64);
        Ok(diff.scale(&inv_n))
    }
}
