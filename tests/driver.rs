//! End-to-end behavior of the generator, predictor, loss and driver.

use approx::assert_abs_diff_eq;

use linreg_scratch::backend::{CpuBackend, Tensor1D, Tensor2D};
use linreg_scratch::config::{GradientDescentConfig, RunConfig, SyntheticConfig};
use linreg_scratch::dataset::{generate, Dataset, InMemoryDataset};
use linreg_scratch::loss::{Loss, MSELoss};
use linreg_scratch::metrics::Metrics;
use linreg_scratch::model::{Fitted, InferenceModel, LinearModel, LinearParams, LinearRegression};
use linreg_scratch::trainer::{fit, init_model, DriverState, GradientDescent};
use linreg_scratch::LinregError;

fn quiet(lr: f64) -> GradientDescentConfig {
    GradientDescentConfig::builder()
        .learning_rate(lr)
        .log_every(0)
        .build()
        .unwrap()
}

fn quiet_with_bias(lr: f64) -> GradientDescentConfig {
    GradientDescentConfig::builder()
        .learning_rate(lr)
        .log_every(0)
        .fit_bias(true)
        .build()
        .unwrap()
}

#[test]
fn identity_features_give_zero_loss_on_exact_predictions() {
    let x = Tensor2D::<CpuBackend>::from_rows(&[vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
    let y = Tensor1D::<CpuBackend>::new(vec![2.0, -3.4]);
    let model = LinearModel::<CpuBackend, Fitted>::new(LinearParams::new(vec![2.0, -3.4], 0.0));

    let preds = model.predict_batch(&x).unwrap();
    assert_eq!(MSELoss.loss(&preds, &y).unwrap().to_f64(), 0.0);
}

#[test]
fn mismatched_lengths_fail_instead_of_truncating() {
    let preds = Tensor1D::<CpuBackend>::new(vec![1.0, 2.0, 3.0]);
    let target = Tensor1D::<CpuBackend>::new(vec![1.0, 2.0]);
    let err = MSELoss.loss(&preds, &target).unwrap_err();
    assert!(matches!(err, LinregError::DimensionMismatch { expected: 2, got: 3, .. }));
}

#[test]
fn driver_from_true_parameters_converges_in_one_step() {
    let data = generate(
        &SyntheticConfig::builder()
            .n_samples(200)
            .noise_variance(0.0)
            .seed(9)
            .build()
            .unwrap(),
    )
    .unwrap();
    let model = LinearRegression::<CpuBackend>::from_params(LinearParams::new(
        data.true_weights.clone(),
        data.true_bias,
    ));

    let (fitted, report) = fit(&quiet(0.1), model, &data.dataset).unwrap();
    assert_eq!(report.iterations, 1);
    assert_eq!(report.state, DriverState::Converged);
    assert_eq!(fitted.weights(), data.true_weights);
    assert!(report.final_loss < 1e-20);
}

#[test]
fn zero_learning_rate_converges_immediately() {
    let data = generate(&SyntheticConfig::default()).unwrap();
    let config = quiet(0.0);
    let model = init_model::<CpuBackend>(&config, 2).unwrap();
    let initial = model.weights();

    let (fitted, report) = fit(&config, model, &data.dataset).unwrap();
    assert_eq!(report.iterations, 1);
    assert_eq!(report.final_delta, 0.0);
    assert_eq!(fitted.weights(), initial);
}

#[test]
fn zero_learning_rate_with_zero_tolerance_hits_the_cap() {
    let data = generate(&SyntheticConfig::default()).unwrap();
    let config = GradientDescentConfig::builder()
        .learning_rate(0.0)
        .tolerance(0.0)
        .max_iterations(5)
        .log_every(0)
        .build()
        .unwrap();
    let err = fit(&config, LinearRegression::<CpuBackend>::new(2), &data.dataset).unwrap_err();
    assert!(matches!(err, LinregError::NotConverged { iterations: 5, .. }));
}

#[test]
fn diverging_learning_rate_is_reported_not_looped_forever() {
    let data = generate(&SyntheticConfig::default()).unwrap();
    let config = GradientDescentConfig::builder()
        .learning_rate(10.0)
        .max_iterations(200)
        .log_every(0)
        .build()
        .unwrap();
    let err = fit(&config, LinearRegression::<CpuBackend>::new(2), &data.dataset).unwrap_err();
    assert!(matches!(err, LinregError::NotConverged { iterations: 200, .. }));
}

#[test]
fn noisy_synthetic_data_recovers_generating_parameters() {
    let data = generate(&SyntheticConfig::builder().noise_variance(0.01).seed(21).build().unwrap()).unwrap();
    let config = quiet_with_bias(0.1);
    let model = init_model::<CpuBackend>(&config, data.dataset.n_features()).unwrap();

    let (fitted, report) = fit(&config, model, &data.dataset).unwrap();
    assert_eq!(report.state, DriverState::Converged);
    assert!(Metrics::parameter_error(&fitted.weights(), &data.true_weights).unwrap() < 0.05);
    assert_abs_diff_eq!(fitted.bias(), data.true_bias, epsilon = 0.05);
    // residual variance should sit near the noise variance
    assert_abs_diff_eq!(report.final_loss, 0.01, epsilon = 0.003);
}

#[test]
fn default_update_rule_moves_only_the_weights() {
    // Targets have no intercept, so the weights alone can fit them.
    let x = vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]];
    let dataset = InMemoryDataset::new(x, vec![2.0, -3.4, -1.4]).unwrap();
    let config = quiet(0.5);

    let (fitted, _) = fit(&config, LinearRegression::<CpuBackend>::new(2), &dataset).unwrap();
    assert_eq!(fitted.bias(), 0.0);
    assert_abs_diff_eq!(fitted.weights()[0], 2.0, epsilon = 1e-4);
    assert_abs_diff_eq!(fitted.weights()[1], -3.4, epsilon = 1e-4);
}

#[test]
fn manual_stepping_reaches_the_same_fit_as_run() {
    let data = generate(&SyntheticConfig::builder().n_samples(100).seed(4).build().unwrap()).unwrap();
    let config = quiet(0.1);

    let (fitted, report) = fit(&config, LinearRegression::<CpuBackend>::new(2), &data.dataset).unwrap();

    let mut gd = GradientDescent::new(config, LinearRegression::<CpuBackend>::new(2), &data.dataset).unwrap();
    while gd.step().unwrap() == DriverState::Running {}
    assert_eq!(gd.iteration(), report.iterations);
    assert_eq!(gd.model().weights(), fitted.weights());
}

#[test]
fn fitted_model_survives_a_save_load_cycle() {
    let data = generate(&SyntheticConfig::builder().n_samples(50).build().unwrap()).unwrap();
    let (fitted, _) = fit(&quiet(0.1), LinearRegression::<CpuBackend>::new(2), &data.dataset).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("linreg.bin");
    fitted.save_to_file(&path).unwrap();
    let loaded = LinearModel::<CpuBackend, Fitted>::load_from_file(&path).unwrap();

    let (x, _) = data.dataset.full_batch::<CpuBackend>().unwrap();
    assert_eq!(
        fitted.predict_batch(&x).unwrap().to_vec(),
        loaded.predict_batch(&x).unwrap().to_vec()
    );
}

#[test]
fn run_config_from_file_drives_a_full_fit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.json");
    std::fs::write(
        &path,
        r#"{
            "data": { "n_samples": 300, "true_weights": [1.5, 0.5, -2.0], "n_features": 3, "true_bias": -1.0, "noise_variance": 0.0 },
            "training": { "learning_rate": 0.2, "log_every": 0, "fit_bias": true }
        }"#,
    )
    .unwrap();

    let cfg = RunConfig::from_json_file(&path).unwrap();
    let data = generate(&cfg.data).unwrap();
    let model = init_model::<CpuBackend>(&cfg.training, 3).unwrap();
    let (fitted, _) = fit(&cfg.training, model, &data.dataset).unwrap();

    for (w, t) in fitted.weights().iter().zip([1.5, 0.5, -2.0]) {
        assert_abs_diff_eq!(*w, t, epsilon = 1e-4);
    }
    assert_abs_diff_eq!(fitted.bias(), -1.0, epsilon = 1e-4);
}

#[cfg(feature = "ndarray")]
#[test]
fn ndarray_backend_matches_cpu_backend() {
    use linreg_scratch::backend::NdarrayBackend;

    let data = generate(&SyntheticConfig::builder().n_samples(100).seed(2).build().unwrap()).unwrap();
    let config = quiet(0.1);

    let (cpu, _) = fit(&config, LinearRegression::<CpuBackend>::new(2), &data.dataset).unwrap();
    let (nd, _) = fit(&config, LinearRegression::<NdarrayBackend>::new(2), &data.dataset).unwrap();

    for (a, b) in cpu.weights().iter().zip(nd.weights()) {
        assert_abs_diff_eq!(*a, b, epsilon = 1e-5);
    }
}
