//! Synthetic linear data: `y = X · w + b + ε`.
//!
//! Features are independent standard-normal draws and `ε ~ N(0, σ²)` is drawn
//! independently per sample. Everything comes from one seeded RNG, so a
//! given [`SyntheticConfig`] always yields the same data set.

use crate::config::SyntheticConfig;
use crate::dataset::InMemoryDataset;
use crate::error::{LinregError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal, StandardNormal};

/// Generated data together with the parameters that produced it.
#[derive(Debug, Clone)]
pub struct SyntheticData {
    pub dataset: InMemoryDataset,
    pub true_weights: Vec<f64>,
    pub true_bias: f64,
}

/// Draws a data set according to `config`.
///
/// ```
/// use linreg_scratch::config::SyntheticConfig;
/// use linreg_scratch::dataset::{generate, Dataset};
///
/// let data = generate(&SyntheticConfig::default()).unwrap();
/// assert_eq!(data.dataset.len(), 1000);
/// assert_eq!(data.dataset.n_features(), 2);
/// ```
pub fn generate(config: &SyntheticConfig) -> Result<SyntheticData> {
    config.validate()?;
    if config.n_samples == 0 {
        return Err(LinregError::EmptyData("n_samples must be positive".into()));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let noise = Normal::new(0.0, config.noise_variance.sqrt())
        .map_err(|e| LinregError::InvalidParameter(format!("noise distribution: {e}")))?;

    let mut features = Vec::with_capacity(config.n_samples);
    let mut targets = Vec::with_capacity(config.n_samples);
    for _ in 0..config.n_samples {
        let row: Vec<f64> = (0..config.n_features)
            .map(|_| StandardNormal.sample(&mut rng))
            .collect();
        let clean: f64 = row
            .iter()
            .zip(&config.true_weights)
            .map(|(x, w)| x * w)
            .sum::<f64>()
            + config.true_bias;
        let eps = if config.noise_variance > 0.0 {
            noise.sample(&mut rng)
        } else {
            0.0
        };
        features.push(row);
        targets.push(clean + eps);
    }

    Ok(SyntheticData {
        dataset: InMemoryDataset::new(features, targets)?,
        true_weights: config.true_weights.clone(),
        true_bias: config.true_bias,
    })
}
