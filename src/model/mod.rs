//! Model traits and the linear predictor.
//!
//! Models come in two typestates:
//! - `Model<Unfitted>` implements [`TrainableModel`] and is what the
//!   gradient-descent driver mutates.
//! - `Model<Fitted>` implements [`InferenceModel`] and is a frozen predictor.

pub mod linear;
pub mod state;

pub use linear::{LinearModel, LinearParams, LinearRegression, SerializableLinearParams};
pub use state::{Fitted, Unfitted};

use crate::backend::{Backend, Scalar};
use crate::error::Result;
use crate::serialization::SerializableParams;
use std::path::Path;

/// A model that can be trained with first-order gradient methods.
pub trait TrainableModel<B: Backend> {
    type Input;
    type Prediction;
    type Params: ParamOps<B>;
    type Gradients;
    type Output;

    /// Computes predictions for `input`. Fails on incompatible shapes.
    fn forward(&self, input: &Self::Input) -> Result<Self::Prediction>;

    /// Maps `∂L/∂pred` to parameter gradients.
    fn backward(&self, input: &Self::Input, grad_output: &Self::Prediction)
        -> Result<Self::Gradients>;

    fn params(&self) -> &Self::Params;

    fn update_params(&mut self, new_params: Self::Params);

    /// Freezes the model into its inference form.
    fn into_fitted(self) -> Self::Output;
}

/// Parameter arithmetic needed by optimizers.
pub trait ParamOps<B: Backend>: Clone {
    fn add(&self, other: &Self) -> Self;
    fn scale(&self, scalar: Scalar<B>) -> Self;

    /// `Σ|selfᵢ − otherᵢ|` over every parameter. This is the update
    /// magnitude the driver compares against its tolerance.
    fn l1_distance(&self, other: &Self) -> Result<f64>;
}

/// A trained model used for prediction and persistence.
pub trait InferenceModel<B: Backend> {
    type InputSingle;
    type OutputSingle;
    type InputBatch;
    type OutputBatch;
    type ParamsRepr: SerializableParams;

    fn predict(&self, input: &Self::InputSingle) -> Result<Self::OutputSingle>;
    fn predict_batch(&self, input: &Self::InputBatch) -> Result<Self::OutputBatch>;

    /// Copies the parameters into a plain, backend-free representation.
    fn extract_params(&self) -> Self::ParamsRepr;

    fn from_params(params: Self::ParamsRepr) -> Result<Self>
    where
        Self: Sized;

    /// Writes the parameters to `path` in the [`SerializableParams`] format.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.extract_params().to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>
    where
        Self: Sized,
    {
        let bytes = std::fs::read(path)?;
        Self::from_params(Self::ParamsRepr::from_bytes(&bytes)?)
    }
}
