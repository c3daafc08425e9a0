use std::{env, io};

use log::info;
use quadratic_sgd::{self as sgd, TrainingConfig};

/// Window used to read the loss trend out of the trace.
const SUMMARY_WINDOW: usize = 100;

fn main() -> io::Result<()> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => sgd::load_config(&path)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?,
        None => {
            info!("no run file given, using built-in defaults");
            TrainingConfig::default()
        }
    };

    let outcome = sgd::train(&config)?;

    let window = SUMMARY_WINDOW.min(outcome.trace.len().max(1));
    let summary = outcome.trace.summary(window)?;
    info!(
        "loss over {} steps: first {}-step mean {:.6}, last {:.6}, final {:.6}",
        summary.steps, window, summary.first_window_mean, summary.last_window_mean,
        summary.final_loss
    );

    println!(
        "true parameters:      [{}, {}, {}]",
        config.true_weights[0], config.true_weights[1], config.true_bias
    );
    println!(
        "estimated parameters: [{}, {}, {}]",
        outcome.weights[0], outcome.weights[1], outcome.weights[2]
    );

    if let Some(path) = &config.trace_path {
        outcome.trace.write_csv(path, config.trace_steps)?;
        info!("loss trace written to {}", path.display());
    }

    Ok(())
}
