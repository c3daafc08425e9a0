pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod optimization;
pub mod trace;
pub mod training;

pub use config::{ParamInitConfig, TrainingConfig, load_config};
pub use error::{MlErr, Result};
pub use trace::{LossTrace, TraceSummary};
pub use training::{TrainOutcome, TrainerBuilder};

/// Runs one training session described by a config.
///
/// # Errors
/// Returns an `MlErr` if the config resolves to invalid components.
pub fn train(config: &TrainingConfig) -> Result<TrainOutcome> {
    log::info!(
        "training for {} steps at lr {}",
        config.steps,
        config.learning_rate
    );
    let trainer = TrainerBuilder::new().build(config)?;
    trainer.run()
}
