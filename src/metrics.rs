//! Regression metrics on host slices.
//!
//! Unlike [`MSELoss`](crate::loss::MSELoss) these work on plain `&[f64]`
//! and are meant for reporting, not for gradients.

use crate::error::{LinregError, Result};
use serde::Serialize;

/// Metrics for evaluating regression fits.
pub struct Metrics;

impl Metrics {
    fn check(y_true: &[f64], y_pred: &[f64]) -> Result<()> {
        if y_true.len() != y_pred.len() {
            return Err(LinregError::mismatch("metric inputs", y_true.len(), y_pred.len()));
        }
        if y_true.is_empty() {
            return Err(LinregError::EmptyData("metric over zero samples".into()));
        }
        Ok(())
    }

    /// Mean Squared Error: `mean((y_true - y_pred)²)`.
    pub fn mse(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
        Self::check(y_true, y_pred)?;
        let sum_sq: f64 = y_true
            .iter()
            .zip(y_pred)
            .map(|(&t, &p)| (t - p).powi(2))
            .sum();
        Ok(sum_sq / y_true.len() as f64)
    }

    /// Root Mean Squared Error, in the units of the target.
    pub fn rmse(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
        Ok(Self::mse(y_true, y_pred)?.sqrt())
    }

    /// Mean Absolute Error: `mean(|y_true - y_pred|)`.
    pub fn mae(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
        Self::check(y_true, y_pred)?;
        let sum_abs: f64 = y_true
            .iter()
            .zip(y_pred)
            .map(|(&t, &p)| (t - p).abs())
            .sum();
        Ok(sum_abs / y_true.len() as f64)
    }

    /// Coefficient of determination `R² = 1 - SS_res / SS_tot`.
    ///
    /// Negative when the model does worse than predicting the mean. With a
    /// constant target, returns 1 for an exact fit and 0 otherwise.
    pub fn r_squared(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
        Self::check(y_true, y_pred)?;
        let mean_true = y_true.iter().sum::<f64>() / y_true.len() as f64;
        let ss_res: f64 = y_true
            .iter()
            .zip(y_pred)
            .map(|(&t, &p)| (t - p).powi(2))
            .sum();
        let ss_tot: f64 = y_true.iter().map(|&t| (t - mean_true).powi(2)).sum();

        if ss_tot == 0.0 {
            return Ok(if ss_res == 0.0 { 1.0 } else { 0.0 });
        }
        Ok(1.0 - ss_res / ss_tot)
    }

    /// `Σ|fitted - true|` over the weight vector: how far a fit landed from
    /// the generating parameters.
    pub fn parameter_error(fitted: &[f64], truth: &[f64]) -> Result<f64> {
        if fitted.len() != truth.len() {
            return Err(LinregError::mismatch("parameter vectors", truth.len(), fitted.len()));
        }
        Ok(fitted.iter().zip(truth).map(|(f, t)| (f - t).abs()).sum())
    }

    pub fn calculate_all(y_true: &[f64], y_pred: &[f64]) -> Result<RegressionMetrics> {
        Ok(RegressionMetrics {
            mse: Self::mse(y_true, y_pred)?,
            rmse: Self::rmse(y_true, y_pred)?,
            mae: Self::mae(y_true, y_pred)?,
            r_squared: Self::r_squared(y_true, y_pred)?,
        })
    }
}

/// All regression metrics for one set of predictions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegressionMetrics {
    pub mse: f64,
    pub rmse: f64,
    pub mae: f64,
    pub r_squared: f64,
}
