//! # linreg-scratch
//!
//! Linear regression fitted "from scratch": synthetic data from a known linear
//! function, a dot-product predictor, a mean-squared-error loss and a
//! fixed-step full-batch gradient-descent loop that stops once the parameter
//! update falls below a tolerance.
//!
//! ## Design
//!
//! - **Backend agnosticism**: every numeric operation goes through the
//!   [`Backend`] trait, so the same code runs on `Vec<f64>` or `ndarray`.
//! - **Typestate models**: [`model::LinearRegression`] is trainable,
//!   `LinearModel<B, Fitted>` is inference-only.
//! - **Explicit failure**: shape mismatches and non-convergence are
//!   [`LinregError`] values, never panics or silent truncation.
//!
//! ## Quick Start
//!
//! ```rust
//! use linreg_scratch::backend::CpuBackend;
//! use linreg_scratch::config::{GradientDescentConfig, SyntheticConfig};
//! use linreg_scratch::dataset::{generate, Dataset};
//! use linreg_scratch::trainer::{fit, init_model};
//!
//! let data = generate(&SyntheticConfig::default()).unwrap();
//! let config = GradientDescentConfig::builder().fit_bias(true).build().unwrap();
//! let model = init_model::<CpuBackend>(&config, data.dataset.n_features()).unwrap();
//!
//! let (fitted, report) = fit(&config, model, &data.dataset).unwrap();
//! assert!((fitted.weights()[0] - 2.0).abs() < 0.01);
//! assert!((fitted.bias() - 4.2).abs() < 0.01);
//! println!("converged after {} iterations", report.iterations);
//! ```
//!
//! ## Module Structure
//!
//! - `backend`: tensor abstractions and computation primitives
//! - `config`: immutable run configuration, JSON loadable
//! - `dataset`: in-memory data sets and the synthetic generator
//! - `model`: the linear predictor with typestate
//! - `loss`: differentiable mean squared error
//! - `optimizer`: fixed-step SGD
//! - `trainer`: the gradient-descent driver
//! - `metrics`: reporting metrics (MSE, RMSE, MAE, R²)
//! - `serialization`: parameter persistence

pub mod backend;

/// Run configuration for the generator and the driver.
pub mod config;

/// Data sets and synthetic data generation.
pub mod dataset;

pub mod error;

/// Differentiable loss functions for model training.
pub mod loss;

/// Regression metrics for reporting fit quality.
pub mod metrics;

/// Linear models with compile-time state safety.
pub mod model;

/// Optimization algorithms for parameter updates.
pub mod optimizer;

/// Model persistence.
pub mod serialization;

/// The gradient-descent driver.
pub mod trainer;

#[cfg(feature = "cpu")]
pub use backend::CpuBackend;
pub use backend::{Backend, Scalar, Tensor1D, Tensor2D};
pub use error::{LinregError, Result};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GradientDescentConfig, SyntheticConfig};
    use crate::dataset::{generate, Dataset};
    use crate::loss::{Loss, MSELoss};
    use crate::metrics::Metrics;
    use crate::model::InferenceModel;
    use crate::trainer::{fit, init_model, DriverState};

    #[test]
    fn test_end_to_end_recovers_generating_parameters() {
        let data = generate(
            &SyntheticConfig::builder()
                .n_samples(500)
                .noise_variance(1e-4)
                .seed(3)
                .build()
                .unwrap(),
        )
        .unwrap();
        let config = GradientDescentConfig::builder()
            .log_every(0)
            .fit_bias(true)
            .build()
            .unwrap();
        let model = init_model::<CpuBackend>(&config, data.dataset.n_features()).unwrap();

        let (fitted, report) = fit(&config, model, &data.dataset).unwrap();
        assert_eq!(report.state, DriverState::Converged);
        assert!(Metrics::parameter_error(&fitted.weights(), &data.true_weights).unwrap() < 0.01);
        assert!((fitted.bias() - data.true_bias).abs() < 0.01);

        let (x, y) = data.dataset.full_batch::<CpuBackend>().unwrap();
        let preds = fitted.predict_batch(&x).unwrap();
        let loss = MSELoss.loss(&preds, &y).unwrap().to_f64();
        assert!((loss - report.final_loss).abs() < 1e-12);
        assert!(Metrics::r_squared(data.dataset.targets(), &preds.to_vec()).unwrap() > 0.999);
    }
}
