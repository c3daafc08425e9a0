use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::{
    error::{MlErr, Result},
    model::{self, QuadraticModel},
};

/// One supervised sample `(x, y)`.
///
/// Labels are exact: the generator is noiseless, so the only randomness in
/// a run comes from the input draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: [f32; 2],
    pub y: f32,
}

/// An endless stream of synthetic samples.
///
/// Inputs are drawn uniformly per dimension from `[low, high)` and labelled
/// through the model's own forward pass using a fixed true parameter
/// buffer. Samples are never stored or reused; each `draw` is fresh.
#[derive(Debug, Clone)]
pub struct SyntheticSampler {
    model: QuadraticModel,
    true_params: Vec<f32>,
    input_dist: Uniform<f32>,
}

impl SyntheticSampler {
    /// Creates a sampler for a fixed generating function.
    ///
    /// # Arguments
    /// * `true_params` - The generator's flat parameter buffer `[w0, w1, b]`.
    /// * `low` / `high` - Per-dimension input bounds, half-open.
    ///
    /// # Errors
    /// Returns `MlErr::ShapeMismatch` if `true_params` is not exactly 3
    /// scalars, and `MlErr::InvalidInput` if the bounds are not finite or
    /// `low >= high`.
    pub fn new(true_params: Vec<f32>, low: f32, high: f32) -> Result<Self> {
        if true_params.len() != model::NUM_PARAMS {
            return Err(MlErr::ShapeMismatch {
                what: "true parameters",
                got: true_params.len(),
                expected: model::NUM_PARAMS,
            });
        }
        if !low.is_finite() || !high.is_finite() {
            return Err(MlErr::InvalidInput("sample bounds must be finite"));
        }
        if low >= high {
            return Err(MlErr::InvalidInput("sample range must satisfy low < high"));
        }

        let input_dist = Uniform::new(low, high)
            .map_err(|_| MlErr::InvalidInput("sample range must satisfy low < high"))?;

        Ok(Self {
            model: QuadraticModel::new(),
            true_params,
            input_dist,
        })
    }

    /// The generator's parameter buffer.
    pub fn true_params(&self) -> &[f32] {
        &self.true_params
    }

    /// Draws one fresh labelled sample.
    ///
    /// The label is computed with the same forward kernel used for
    /// predictions; the parameters were validated at construction.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Sample {
        let x = [
            self.input_dist.sample(rng),
            self.input_dist.sample(rng),
        ];
        let y = model::ops::forward(self.model.layout(), &self.true_params, &x);
        Sample { x, y }
    }
}
