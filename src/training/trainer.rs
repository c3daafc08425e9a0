use log::debug;
use rand::Rng;

use crate::{
    data::SyntheticSampler,
    error::Result,
    model::QuadraticModel,
    optimization::Optimizer,
    trace::LossTrace,
};

/// How often the loop reports progress.
const LOG_EVERY: usize = 1000;

/// A ready-to-run online SGD session.
///
/// Owns every component of the run: the model, the sample stream, the
/// optimizer, the RNG, and the parameter and gradient buffers. Buffers are
/// allocated once at construction; the loop itself allocates nothing beyond
/// the trace it fills.
#[derive(Debug)]
pub struct Trainer<O, R>
where
    O: Optimizer,
    R: Rng,
{
    model: QuadraticModel,
    sampler: SyntheticSampler,
    optimizer: O,
    rng: R,

    params: Vec<f32>,
    grads: Vec<f32>,
    steps: usize,
}

/// The product of one training run.
#[derive(Debug, Clone)]
pub struct TrainOutcome {
    /// Final estimated parameters `[w0, w1, b]`.
    pub weights: Vec<f32>,
    /// Per-step squared-error losses, in step order.
    pub trace: LossTrace,
}

impl<O, R> Trainer<O, R>
where
    O: Optimizer,
    R: Rng,
{
    /// Returns a new `Trainer`.
    ///
    /// # Arguments
    /// * `sampler` - The synthetic sample stream to train against.
    /// * `optimizer` - The parameter update rule.
    /// * `init_params` - Initial values of the estimated parameters.
    /// * `steps` - The number of iterations to run.
    /// * `rng` - A random number generator driving the input draws.
    pub fn new(
        sampler: SyntheticSampler,
        optimizer: O,
        init_params: Vec<f32>,
        steps: usize,
        rng: R,
    ) -> Self {
        let grads = vec![0.0; init_params.len()];
        Self {
            model: QuadraticModel::new(),
            sampler,
            optimizer,
            rng,
            params: init_params,
            grads,
            steps,
        }
    }

    /// Runs the loop for the configured number of steps.
    ///
    /// Per iteration: draw a fresh sample, compute the prediction's
    /// squared-error loss and its gradient in one kernel pass, append the
    /// loss to the trace, then step the parameters against the gradient.
    ///
    /// # Errors
    /// Propagates `MlErr::ShapeMismatch` from the model or the optimizer;
    /// buffers built by `TrainerBuilder` never trigger it.
    pub fn run(mut self) -> Result<TrainOutcome> {
        let mut trace = LossTrace::with_capacity(self.steps);

        for step in 0..self.steps {
            let sample = self.sampler.draw(&mut self.rng);
            let loss = self
                .model
                .grad_step(&self.params, &sample.x, sample.y, &mut self.grads)?;

            trace.push(loss);
            self.optimizer.update_params(&mut self.params, &self.grads)?;

            if (step + 1) % LOG_EVERY == 0 {
                debug!(step = step + 1, loss = loss as f64; "training step");
            }
        }

        Ok(TrainOutcome {
            weights: self.params,
            trace,
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::optimization::GradientDescent;

    fn trainer(steps: usize, seed: u64) -> Trainer<GradientDescent, StdRng> {
        let sampler = SyntheticSampler::new(vec![-0.8, 1.3, 0.5], -2.0, 2.0).unwrap();
        Trainer::new(
            sampler,
            GradientDescent::new(1e-3),
            vec![0.0; 3],
            steps,
            StdRng::seed_from_u64(seed),
        )
    }

    #[test]
    fn runs_exactly_the_requested_steps() {
        let outcome = trainer(10, 1).run().unwrap();
        assert_eq!(outcome.trace.len(), 10);
        assert_eq!(outcome.weights.len(), 3);
    }

    #[test]
    fn zero_steps_leave_the_init_untouched() {
        let outcome = trainer(0, 1).run().unwrap();
        assert!(outcome.trace.is_empty());
        assert_eq!(outcome.weights, vec![0.0; 3]);
    }

    #[test]
    fn first_step_loss_is_the_pre_update_error() {
        // From zero parameters the first prediction is 0, so the first
        // recorded loss must be the label squared.
        let sampler = SyntheticSampler::new(vec![-0.8, 1.3, 0.5], -2.0, 2.0).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let first = sampler.draw(&mut rng);

        let outcome = trainer(1, 3).run().unwrap();
        assert_eq!(outcome.trace.losses()[0], first.y * first.y);
    }
}
