// Fits a linear model on synthetic data and prints what it recovered.
//
// Usage: cargo run --example fit_synthetic [-- path/to/run.json]
// Set RUST_LOG=debug for more detail. The bias is only fitted when the
// config sets `"fit_bias": true` under `"training"`.

use linreg_scratch::config::RunConfig;
use linreg_scratch::dataset::{generate, Dataset};
use linreg_scratch::metrics::Metrics;
use linreg_scratch::model::InferenceModel;
use linreg_scratch::trainer::{fit, init_model};
use linreg_scratch::CpuBackend;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => RunConfig::from_json_file(path)?,
        None => RunConfig::default(),
    };

    let data = generate(&config.data)?;
    let model = init_model::<CpuBackend>(&config.training, data.dataset.n_features())?;
    let (fitted, report) = fit(&config.training, model, &data.dataset)?;

    let (x, _) = data.dataset.full_batch::<CpuBackend>()?;
    let preds = fitted.predict_batch(&x)?.to_vec();
    let metrics = Metrics::calculate_all(data.dataset.targets(), &preds)?;

    println!("iterations      : {}", report.iterations);
    println!("final delta     : {:e}", report.final_delta);
    println!("true weights    : {:?}", data.true_weights);
    println!("fitted weights  : {:?}", fitted.weights());
    println!("true bias       : {}", data.true_bias);
    println!("fitted bias     : {}", fitted.bias());
    println!(
        "weight error    : {:e}",
        Metrics::parameter_error(&fitted.weights(), &data.true_weights)?
    );
    println!("mse / r²        : {:.6} / {:.6}", metrics.mse, metrics.r_squared);
    println!("loss trace      :");
    for record in &report.loss_trace {
        println!("  {:>6}  {:.6e}", record.iteration, record.loss);
    }

    Ok(())
}
