//! Full-batch gradient-descent driver.
//!
//! A [`GradientDescent`] owns the parameters being fitted together with the
//! data they are fitted on, and moves through two states:
//!
//! ```text
//!            delta >= tolerance
//!              ┌──────────┐
//!              ▼          │
//!   start ─► Running ─────┘
//!              │ delta < tolerance
//!              ▼
//!          Converged
//! ```
//!
//! Each [`step`](GradientDescent::step) predicts, takes the MSE gradient,
//! forms candidate parameters `θ' = θ - lr · ∇L` and measures the update
//! as `Σ|θ' - θ|`. Below the tolerance the driver converges and the
//! candidate is discarded; otherwise it is committed. [`run`](GradientDescent::run)
//! repeats this up to `max_iterations` times and fails with
//! [`LinregError::NotConverged`] when the cap is hit.

use crate::backend::{Backend, Scalar, Tensor1D, Tensor2D};
use crate::config::GradientDescentConfig;
use crate::dataset::Dataset;
use crate::error::{LinregError, Result};
use crate::loss::{Loss, MSELoss};
use crate::model::{Fitted, LinearModel, LinearParams, LinearRegression, ParamOps, TrainableModel};
use crate::optimizer::{Optimizer, SGD};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Where the driver is in its fixed-point iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DriverState {
    Running,
    Converged,
}

/// Loss observed at the start of an iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LossRecord {
    pub iteration: usize,
    pub loss: f64,
}

/// Summary of a finished fit.
#[derive(Debug, Clone, Serialize)]
pub struct FitReport {
    /// Steps evaluated, including the one that converged.
    pub iterations: usize,
    /// `Σ|Δθ|` of the last evaluated step.
    pub final_delta: f64,
    /// MSE of the fitted parameters on the training data.
    pub final_loss: f64,
    /// Losses sampled every `log_every` iterations.
    pub loss_trace: Vec<LossRecord>,
    pub state: DriverState,
}

/// Draws the initial model described by `config`: uniform weights in
/// `[-init_scale, init_scale]`, zero bias.
pub fn init_model<B: Backend>(
    config: &GradientDescentConfig,
    n_features: usize,
) -> Result<LinearRegression<B>> {
    LinearRegression::random(n_features, config.init_scale, config.seed)
}

/// Fits `model` on `dataset` with MSE loss and fixed-step SGD.
///
/// ```
/// use linreg_scratch::backend::CpuBackend;
/// use linreg_scratch::config::GradientDescentConfig;
/// use linreg_scratch::dataset::InMemoryDataset;
/// use linreg_scratch::model::LinearRegression;
/// use linreg_scratch::trainer::{fit, DriverState};
///
/// let x = vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]];
/// let y = vec![3.0, 0.0, 2.0]; // y = 2·x₁ - x₂ + 1
/// let dataset = InMemoryDataset::new(x, y).unwrap();
///
/// let config = GradientDescentConfig::builder()
///     .learning_rate(0.5)
///     .fit_bias(true)
///     .build()
///     .unwrap();
/// let (fitted, report) = fit(&config, LinearRegression::<CpuBackend>::new(2), &dataset).unwrap();
///
/// assert_eq!(report.state, DriverState::Converged);
/// assert!((fitted.weights()[0] - 2.0).abs() < 1e-3);
/// ```
pub fn fit<B, D>(
    config: &GradientDescentConfig,
    model: LinearRegression<B>,
    dataset: &D,
) -> Result<(LinearModel<B, Fitted>, FitReport)>
where
    B: Backend,
    D: Dataset,
{
    GradientDescent::new(config.clone(), model, dataset)?.run()
}

/// The gradient-descent state machine.
///
/// Generic over the loss and the optimizer; [`GradientDescent::new`] wires up
/// [`MSELoss`] and [`SGD`] with the configured learning rate.
pub struct GradientDescent<B: Backend, L = MSELoss, O = SGD<B>> {
    config: GradientDescentConfig,
    loss_fn: L,
    optimizer: O,
    model: LinearRegression<B>,
    x: Tensor2D<B>,
    y: Tensor1D<B>,
    state: DriverState,
    iteration: usize,
    last_delta: f64,
    loss_trace: Vec<LossRecord>,
}

impl<B: Backend> GradientDescent<B> {
    pub fn new<D: Dataset>(
        config: GradientDescentConfig,
        model: LinearRegression<B>,
        dataset: &D,
    ) -> Result<Self> {
        let optimizer = SGD::new(config.learning_rate);
        Self::with_components(config, MSELoss, optimizer, model, dataset)
    }
}

impl<B, L, O> GradientDescent<B, L, O>
where
    B: Backend,
    L: Loss<B>,
    O: Optimizer<B, LinearParams<B>>,
{
    /// Builds a driver with a custom loss and optimizer.
    ///
    /// Loads the full batch from `dataset` and checks that the model has one
    /// weight per feature column.
    pub fn with_components<D: Dataset>(
        config: GradientDescentConfig,
        loss_fn: L,
        optimizer: O,
        model: LinearRegression<B>,
        dataset: &D,
    ) -> Result<Self> {
        config.validate()?;
        let (x, y) = dataset.full_batch::<B>()?;
        if x.cols() != model.n_features() {
            return Err(LinregError::mismatch(
                "model weights vs feature columns",
                x.cols(),
                model.n_features(),
            ));
        }
        Ok(Self {
            config,
            loss_fn,
            optimizer,
            model,
            x,
            y,
            state: DriverState::Running,
            iteration: 0,
            last_delta: f64::INFINITY,
            loss_trace: Vec::new(),
        })
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Number of steps evaluated so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// `Σ|Δθ|` of the most recent step, `∞` before the first one.
    pub fn last_delta(&self) -> f64 {
        self.last_delta
    }

    pub fn model(&self) -> &LinearRegression<B> {
        &self.model
    }

    pub fn loss_trace(&self) -> &[LossRecord] {
        &self.loss_trace
    }

    /// Evaluates one iteration and returns the resulting state.
    ///
    /// Calling `step` on a converged driver is a no-op. The iteration cap is
    /// not checked here; see [`GradientDescent::run`].
    pub fn step(&mut self) -> Result<DriverState> {
        if self.state == DriverState::Converged {
            return Ok(self.state);
        }

        let preds = self.model.forward(&self.x)?;
        let grad_preds = self.loss_fn.grad_wrt_prediction(&preds, &self.y)?;
        let mut grads = self.model.backward(&self.x, &grad_preds)?;
        if !self.config.fit_bias {
            grads.bias = Scalar::new(0.0);
        }

        let candidate = self.optimizer.step(self.model.params(), &grads);
        let delta = candidate.l1_distance(self.model.params())?;

        if self.config.log_every > 0 && self.iteration % self.config.log_every == 0 {
            let loss = self.loss_fn.loss(&preds, &self.y)?.to_f64();
            info!(iteration = self.iteration, loss, delta, "gradient descent");
            self.loss_trace.push(LossRecord {
                iteration: self.iteration,
                loss,
            });
        }

        self.iteration += 1;
        self.last_delta = delta;

        if delta < self.config.tolerance {
            self.state = DriverState::Converged;
        } else {
            self.model.update_params(candidate);
        }
        Ok(self.state)
    }

    /// Steps until convergence or until `max_iterations` steps have been
    /// evaluated, whichever comes first.
    pub fn run(mut self) -> Result<(LinearModel<B, Fitted>, FitReport)> {
        info!(
            n_samples = self.x.rows(),
            n_features = self.x.cols(),
            learning_rate = self.config.learning_rate,
            tolerance = self.config.tolerance,
            max_iterations = self.config.max_iterations,
            "starting gradient descent"
        );

        while self.state == DriverState::Running {
            if self.iteration >= self.config.max_iterations {
                warn!(
                    iterations = self.iteration,
                    last_delta = self.last_delta,
                    "iteration cap reached before convergence"
                );
                return Err(LinregError::NotConverged {
                    iterations: self.iteration,
                    last_delta: self.last_delta,
                });
            }
            self.step()?;
            if !self.last_delta.is_finite() {
                debug!(iteration = self.iteration, "parameter update is not finite");
            }
        }

        let preds = self.model.forward(&self.x)?;
        let final_loss = self.loss_fn.loss(&preds, &self.y)?.to_f64();
        info!(
            iterations = self.iteration,
            final_delta = self.last_delta,
            final_loss,
            "gradient descent converged"
        );

        let report = FitReport {
            iterations: self.iteration,
            final_delta: self.last_delta,
            final_loss,
            loss_trace: self.loss_trace,
            state: self.state,
        };
        Ok((self.model.into_fitted(), report))
    }
}
