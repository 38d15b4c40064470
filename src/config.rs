//! Immutable run configuration for the data generator and the
//! gradient-descent driver.
//!
//! Both structures are plain data: build them with their builders (which
//! validate on `build()`), deserialize them from JSON, or use the defaults,
//! which reproduce the classic `y = 2·x₁ − 3.4·x₂ + 4.2` setup.

use crate::error::{LinregError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters of the synthetic linear data set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticConfig {
    /// Number of samples (rows of the feature matrix).
    pub n_samples: usize,
    /// Feature dimensionality (columns of the feature matrix).
    pub n_features: usize,
    /// Weights of the generating linear function.
    pub true_weights: Vec<f64>,
    /// Bias of the generating linear function.
    pub true_bias: f64,
    /// Variance of the zero-mean Gaussian noise added to each target.
    pub noise_variance: f64,
    /// Seed for the feature and noise draws.
    pub seed: u64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            n_samples: 1000,
            n_features: 2,
            true_weights: vec![2.0, -3.4],
            true_bias: 4.2,
            noise_variance: 1e-4,
            seed: 0,
        }
    }
}

impl SyntheticConfig {
    /// Starts a builder from the defaults.
    pub fn builder() -> SyntheticConfigBuilder {
        SyntheticConfigBuilder {
            config: Self::default(),
        }
    }

    /// Checks internal consistency.
    ///
    /// - `true_weights.len()` must equal `n_features`
    /// - `noise_variance` must be finite and non-negative
    pub fn validate(&self) -> Result<()> {
        if self.true_weights.len() != self.n_features {
            return Err(LinregError::mismatch(
                "true weights vs feature count",
                self.n_features,
                self.true_weights.len(),
            ));
        }
        if !self.noise_variance.is_finite() || self.noise_variance < 0.0 {
            return Err(LinregError::InvalidParameter(format!(
                "noise_variance must be finite and >= 0, got {}",
                self.noise_variance
            )));
        }
        if !self.true_bias.is_finite() || self.true_weights.iter().any(|w| !w.is_finite()) {
            return Err(LinregError::InvalidParameter(
                "true weights and bias must be finite".into(),
            ));
        }
        Ok(())
    }
}

/// Fluent builder for [`SyntheticConfig`].
#[derive(Debug, Clone)]
pub struct SyntheticConfigBuilder {
    config: SyntheticConfig,
}

impl SyntheticConfigBuilder {
    pub fn n_samples(mut self, n: usize) -> Self {
        self.config.n_samples = n;
        self
    }

    /// Sets the generating weights; the feature count follows their length.
    pub fn true_weights(mut self, weights: Vec<f64>) -> Self {
        self.config.n_features = weights.len();
        self.config.true_weights = weights;
        self
    }

    pub fn true_bias(mut self, bias: f64) -> Self {
        self.config.true_bias = bias;
        self
    }

    pub fn noise_variance(mut self, variance: f64) -> Self {
        self.config.noise_variance = variance;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn build(self) -> Result<SyntheticConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Hyperparameters of the fixed-step gradient-descent driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientDescentConfig {
    /// Fixed step size applied to every update.
    pub learning_rate: f64,
    /// Convergence threshold on `Σ|Δw|` (plus `|Δb|` when fitting the bias).
    pub tolerance: f64,
    /// Safety cap; reaching it without converging is an error.
    pub max_iterations: usize,
    /// Report the loss every `log_every` iterations. `0` disables reporting.
    pub log_every: usize,
    /// Whether the bias takes part in the updates. Off by default: only the
    /// weights move and the bias stays at its initial value.
    pub fit_bias: bool,
    /// Half-width of the uniform range used for random weight initialization.
    pub init_scale: f64,
    /// Seed for the random weight initialization.
    pub seed: u64,
}

impl Default for GradientDescentConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            tolerance: 1e-6,
            max_iterations: 10_000,
            log_every: 100,
            fit_bias: false,
            init_scale: 0.01,
            seed: 42,
        }
    }
}

impl GradientDescentConfig {
    /// Starts a builder from the defaults.
    pub fn builder() -> GradientDescentConfigBuilder {
        GradientDescentConfigBuilder {
            config: Self::default(),
        }
    }

    /// Rejects non-finite or negative step sizes and tolerances, and a zero
    /// iteration cap.
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate < 0.0 {
            return Err(LinregError::InvalidParameter(format!(
                "learning_rate must be finite and >= 0, got {}",
                self.learning_rate
            )));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(LinregError::InvalidParameter(format!(
                "tolerance must be finite and >= 0, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(LinregError::InvalidParameter(
                "max_iterations must be at least 1".into(),
            ));
        }
        if !self.init_scale.is_finite() || self.init_scale < 0.0 {
            return Err(LinregError::InvalidParameter(format!(
                "init_scale must be finite and >= 0, got {}",
                self.init_scale
            )));
        }
        Ok(())
    }
}

/// Fluent builder for [`GradientDescentConfig`].
///
/// Defaults:
/// - `learning_rate`: 0.1
/// - `tolerance`: 1e-6
/// - `max_iterations`: 10 000
/// - `log_every`: 100
/// - `fit_bias`: false
#[derive(Debug, Clone)]
pub struct GradientDescentConfigBuilder {
    config: GradientDescentConfig,
}

impl GradientDescentConfigBuilder {
    pub fn learning_rate(mut self, lr: f64) -> Self {
        self.config.learning_rate = lr;
        self
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    pub fn max_iterations(mut self, n: usize) -> Self {
        self.config.max_iterations = n;
        self
    }

    /// Sets the loss reporting interval; `0` keeps the driver quiet.
    pub fn log_every(mut self, n: usize) -> Self {
        self.config.log_every = n;
        self
    }

    pub fn fit_bias(mut self, fit_bias: bool) -> Self {
        self.config.fit_bias = fit_bias;
        self
    }

    pub fn init_scale(mut self, scale: f64) -> Self {
        self.config.init_scale = scale;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn build(self) -> Result<GradientDescentConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// A complete run: data generation followed by fitting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub data: SyntheticConfig,
    pub training: GradientDescentConfig,
}

impl RunConfig {
    /// Parses and validates a JSON document. Missing fields take defaults.
    ///
    /// ```
    /// use linreg_scratch::config::RunConfig;
    ///
    /// let cfg = RunConfig::from_json_str(r#"{ "training": { "learning_rate": 0.05 } }"#).unwrap();
    /// assert_eq!(cfg.training.learning_rate, 0.05);
    /// assert_eq!(cfg.data.n_samples, 1000);
    /// ```
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: RunConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads, parses and validates a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        self.data.validate()?;
        self.training.validate()
    }
}
