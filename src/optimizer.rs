//! First-order parameter updates.

use crate::backend::{Backend, Scalar};
use crate::model::ParamOps;

/// Maps `(params, gradients)` to updated parameters.
///
/// Updates are functional: the inputs are left untouched and a new value is
/// returned, so the driver can compare old and candidate parameters before
/// committing.
///
/// ```rust
/// use linreg_scratch::backend::CpuBackend;
/// use linreg_scratch::model::LinearParams;
/// use linreg_scratch::optimizer::{Optimizer, SGD};
///
/// let params = LinearParams::<CpuBackend>::new(vec![1.0, 2.0], 0.5);
/// let grads = LinearParams::<CpuBackend>::new(vec![0.1, -0.2], -0.01);
/// let updated = SGD::<CpuBackend>::new(1.0).step(&params, &grads);
/// assert_eq!(updated.weights.to_vec(), vec![0.9, 2.2]);
/// ```
pub trait Optimizer<B: Backend, P> {
    /// `params_new = params - learning_rate * gradients`
    fn step(&self, params: &P, gradients: &P) -> P;
}

/// Plain gradient descent with a fixed learning rate: `θ ← θ - η · ∇L(θ)`.
///
/// No momentum and no schedule. The same step size is used for every
/// iteration and every parameter.
#[derive(Clone, Copy, Debug)]
pub struct SGD<B: Backend> {
    lr: Scalar<B>,
}

impl<B: Backend> SGD<B> {
    pub fn new(lr: f64) -> Self {
        Self {
            lr: Scalar::<B>::new(lr),
        }
    }

    pub fn learning_rate(&self) -> f64 {
        self.lr.to_f64()
    }
}

impl<B: Backend, P: ParamOps<B>> Optimizer<B, P> for SGD<B> {
    fn step(&self, params: &P, grads: &P) -> P {
        // single scale + add instead of scale + subtract
        let neg_lr = Scalar::<B>::new(0.0) - self.lr;
        params.add(&grads.scale(neg_lr))
    }
}
