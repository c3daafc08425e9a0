use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Uniform};

use super::Trainer;
use crate::{
    config::{ParamInitConfig, TrainingConfig},
    data::SyntheticSampler,
    error::{MlErr, Result},
    model,
    optimization::GradientDescent,
};

/// Builds `Trainer`s given a configuration.
#[derive(Default)]
pub struct TrainerBuilder;

impl TrainerBuilder {
    /// Creates a new `TrainerBuilder`.
    pub fn new() -> Self {
        Self
    }

    /// Builds a new `Trainer` following a config.
    ///
    /// # Arguments
    /// * `config` - The configuration for the run.
    ///
    /// # Errors
    /// Returns `MlErr::ShapeMismatch` if `true_weights` does not hold
    /// exactly two scalars, and `MlErr::InvalidInput` for bad sample or
    /// init ranges.
    pub fn build(&self, config: &TrainingConfig) -> Result<Trainer<GradientDescent, StdRng>> {
        let sampler = self.resolve_sampler(config)?;
        let optimizer = GradientDescent::new(config.learning_rate);
        let mut rng = self.generate_rng(config.seed);
        let init_params = self.resolve_init(config.init, &mut rng)?;

        Ok(Trainer::new(
            sampler,
            optimizer,
            init_params,
            config.steps.get(),
            rng,
        ))
    }

    fn resolve_sampler(&self, config: &TrainingConfig) -> Result<SyntheticSampler> {
        if config.true_weights.len() != model::NUM_FEATURES {
            return Err(MlErr::ShapeMismatch {
                what: "true weights",
                got: config.true_weights.len(),
                expected: model::NUM_FEATURES,
            });
        }

        let mut true_params = config.true_weights.clone();
        true_params.push(config.true_bias);
        SyntheticSampler::new(true_params, config.sample_low, config.sample_high)
    }

    fn resolve_init<R: Rng>(&self, init: ParamInitConfig, rng: &mut R) -> Result<Vec<f32>> {
        match init {
            ParamInitConfig::Const { value } => Ok(vec![value; model::NUM_PARAMS]),
            ParamInitConfig::Uniform { low, high } => {
                let dist = Uniform::new(low, high)
                    .map_err(|_| MlErr::InvalidInput("init range must satisfy low < high"))?;
                Ok((0..model::NUM_PARAMS).map(|_| dist.sample(rng)).collect())
            }
        }
    }

    fn generate_rng(&self, seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
