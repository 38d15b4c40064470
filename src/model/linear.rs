//! The linear predictor `ŷ = X · w + b`.
//!
//! - [`LinearRegression`] = `LinearModel<B, Unfitted>`: what the driver trains.
//! - `LinearModel<B, Fitted>`: inference-only, serializable predictor.
//!
//! Every prediction path checks that the feature width matches the weight
//! length and returns [`LinregError::DimensionMismatch`] otherwise.

use crate::backend::{Backend, Scalar, Tensor1D, Tensor2D};
use crate::error::{LinregError, Result};
use crate::model::{Fitted, InferenceModel, ParamOps, TrainableModel, Unfitted};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Weights and bias of a linear model.
///
/// Used both as the model state and as the gradient container returned by
/// `backward()`.
#[derive(Clone, Debug)]
pub struct LinearParams<B: Backend> {
    pub weights: Tensor1D<B>,
    pub bias: Scalar<B>,
}

impl<B: Backend> LinearParams<B> {
    pub fn new(weights: Vec<f64>, bias: f64) -> Self {
        Self {
            weights: Tensor1D::new(weights),
            bias: Scalar::new(bias),
        }
    }

    /// Number of weights.
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }
}

impl<B: Backend> ParamOps<B> for LinearParams<B> {
    fn add(&self, other: &Self) -> Self {
        Self {
            weights: self.weights.add(&other.weights),
            bias: self.bias + other.bias,
        }
    }

    fn scale(&self, scalar: Scalar<B>) -> Self {
        Self {
            weights: self.weights.scale(&scalar),
            bias: self.bias * scalar,
        }
    }

    fn l1_distance(&self, other: &Self) -> Result<f64> {
        let dw = self.weights.l1_distance(&other.weights)?;
        Ok((dw + (self.bias - other.bias).abs()).to_f64())
    }
}

/// Plain representation of [`LinearParams`] used for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializableLinearParams {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl<B: Backend> From<&LinearParams<B>> for SerializableLinearParams {
    fn from(params: &LinearParams<B>) -> Self {
        Self {
            weights: params.weights.to_vec(),
            bias: params.bias.to_f64(),
        }
    }
}

impl<B: Backend> TryFrom<SerializableLinearParams> for LinearParams<B> {
    type Error = LinregError;

    fn try_from(value: SerializableLinearParams) -> Result<Self> {
        if value.weights.iter().chain([&value.bias]).any(|v| !v.is_finite()) {
            return Err(LinregError::InvalidParameter(
                "stored parameters contain non-finite values".into(),
            ));
        }
        Ok(Self::new(value.weights, value.bias))
    }
}

/// A linear model with its training state encoded at the type level.
///
/// - `S = Unfitted`: implements [`TrainableModel`].
/// - `S = Fitted`: implements [`InferenceModel`].
#[derive(Clone, Debug)]
pub struct LinearModel<B: Backend, S> {
    params: LinearParams<B>,
    _state: PhantomData<S>,
}

impl<B: Backend, S> LinearModel<B, S> {
    pub fn params(&self) -> &LinearParams<B> {
        &self.params
    }

    /// Current weights as host values.
    pub fn weights(&self) -> Vec<f64> {
        self.params.weights.to_vec()
    }

    pub fn bias(&self) -> f64 {
        self.params.bias.to_f64()
    }

    pub fn n_features(&self) -> usize {
        self.params.n_features()
    }

    fn linear(&self, x: &Tensor2D<B>) -> Result<Tensor1D<B>> {
        Ok(x.matvec(&self.params.weights)?.add_scalar(&self.params.bias))
    }
}

impl<B: Backend> LinearModel<B, Fitted> {
    /// Wraps already-trained parameters.
    pub fn new(params: LinearParams<B>) -> Self {
        Self {
            params,
            _state: PhantomData,
        }
    }
}

/// Inference: `ŷ = w · x + b` for one sample, `X · w + b` for a batch.
impl<B: Backend> InferenceModel<B> for LinearModel<B, Fitted> {
    type InputSingle = Tensor1D<B>;
    type OutputSingle = Scalar<B>;
    type InputBatch = Tensor2D<B>;
    type OutputBatch = Tensor1D<B>;
    type ParamsRepr = SerializableLinearParams;

    fn predict(&self, input: &Tensor1D<B>) -> Result<Scalar<B>> {
        if input.len() != self.n_features() {
            return Err(LinregError::mismatch("predict", self.n_features(), input.len()));
        }
        Ok(self.params.weights.dot(input)? + self.params.bias)
    }

    fn predict_batch(&self, input: &Tensor2D<B>) -> Result<Tensor1D<B>> {
        self.linear(input)
    }

    fn extract_params(&self) -> SerializableLinearParams {
        (&self.params).into()
    }

    fn from_params(params: SerializableLinearParams) -> Result<Self> {
        Ok(Self::new(LinearParams::try_from(params)?))
    }
}

/// Training interface.
///
/// Forward pass: `X · w + b`.
/// Backward pass: `∇w = Xᵀ · g`, `∇b = Σ g` where `g = ∂L/∂ŷ`.
impl<B: Backend> TrainableModel<B> for LinearModel<B, Unfitted> {
    type Input = Tensor2D<B>;
    type Prediction = Tensor1D<B>;
    type Params = LinearParams<B>;
    type Gradients = LinearParams<B>;
    type Output = LinearModel<B, Fitted>;

    fn forward(&self, x: &Tensor2D<B>) -> Result<Tensor1D<B>> {
        self.linear(x)
    }

    fn backward(&self, x: &Tensor2D<B>, grad_output: &Tensor1D<B>) -> Result<LinearParams<B>> {
        Ok(LinearParams {
            weights: x.tmatvec(grad_output)?,
            bias: grad_output.sum(),
        })
    }

    fn params(&self) -> &LinearParams<B> {
        &self.params
    }

    fn update_params(&mut self, params: LinearParams<B>) {
        self.params = params;
    }

    fn into_fitted(self) -> LinearModel<B, Fitted> {
        LinearModel::<B, Fitted>::new(self.params)
    }
}

pub type LinearRegression<B> = LinearModel<B, Unfitted>;

impl<B: Backend> LinearRegression<B> {
    /// Zero-initialized model with `n_features` weights.
    pub fn new(n_features: usize) -> Self {
        Self::from_params(LinearParams {
            weights: Tensor1D::zeros(n_features),
            bias: Scalar::new(0.),
        })
    }

    /// Starts training from caller-supplied parameters.
    pub fn from_params(params: LinearParams<B>) -> Self {
        Self {
            params,
            _state: PhantomData,
        }
    }

    /// Weights drawn uniformly from `[-scale, scale]`, zero bias.
    ///
    /// ```
    /// use linreg_scratch::backend::CpuBackend;
    /// use linreg_scratch::model::LinearRegression;
    ///
    /// let a = LinearRegression::<CpuBackend>::random(3, 0.01, 42).unwrap();
    /// let b = LinearRegression::<CpuBackend>::random(3, 0.01, 42).unwrap();
    /// assert_eq!(a.weights(), b.weights());
    /// assert!(a.weights().iter().all(|w| w.abs() <= 0.01));
    /// ```
    pub fn random(n_features: usize, scale: f64, seed: u64) -> Result<Self> {
        if !scale.is_finite() || scale < 0.0 {
            return Err(LinregError::InvalidParameter(format!(
                "init scale must be finite and >= 0, got {scale}"
            )));
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let dist = Uniform::new_inclusive(-scale, scale);
        let weights = (0..n_features).map(|_| dist.sample(&mut rng)).collect();
        Ok(Self::from_params(LinearParams::new(weights, 0.0)))
    }
}
