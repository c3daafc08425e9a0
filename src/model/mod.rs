mod layout;
pub(crate) mod ops;
mod view;

pub use layout::ParameterLayout;
pub use view::QuadraticView;

use crate::error::{MlErr, Result};

/// Number of scalars in the flat parameter buffer: `[w0, w1, b]`.
pub const NUM_PARAMS: usize = 3;

/// Number of input features; both enter the target function squared.
pub const NUM_FEATURES: usize = 2;

/// The two-feature quadratic model `y = w0*x0^2 + w1*x1^2 + b`.
///
/// The model owns no parameters. It defines the forward evaluation and the
/// closed-form gradient of the squared-error loss over a caller-provided
/// flat buffer, validating buffer shapes before touching them.
#[derive(Debug, Clone)]
pub struct QuadraticModel {
    layout: ParameterLayout,
}

impl Default for QuadraticModel {
    fn default() -> Self {
        Self::new()
    }
}

impl QuadraticModel {
    pub fn new() -> Self {
        let layout = ParameterLayout::quadratic();
        layout.validate(NUM_PARAMS);
        Self { layout }
    }

    #[inline]
    pub fn num_params(&self) -> usize {
        NUM_PARAMS
    }

    #[inline]
    pub fn num_features(&self) -> usize {
        NUM_FEATURES
    }

    #[inline]
    pub fn layout(&self) -> &ParameterLayout {
        &self.layout
    }

    /// Evaluates the model for one input.
    ///
    /// # Errors
    /// Returns `MlErr::ShapeMismatch` if `weights` is not exactly 3 scalars
    /// or `x` is not exactly 2.
    pub fn forward(&self, weights: &[f32], x: &[f32]) -> Result<f32> {
        self.check_weights(weights)?;
        self.check_features(x)?;
        Ok(ops::forward(&self.layout, weights, x))
    }

    /// Computes one sample's squared-error loss and writes its gradient.
    ///
    /// `grads` is overwritten, not accumulated: the online loop applies each
    /// step's gradient immediately.
    ///
    /// # Errors
    /// Returns `MlErr::ShapeMismatch` if any of the three buffers has the
    /// wrong length.
    pub fn grad_step(&self, weights: &[f32], x: &[f32], y: f32, grads: &mut [f32]) -> Result<f32> {
        self.check_weights(weights)?;
        self.check_features(x)?;
        if grads.len() != NUM_PARAMS {
            return Err(MlErr::ShapeMismatch {
                what: "grads",
                got: grads.len(),
                expected: NUM_PARAMS,
            });
        }
        Ok(ops::step_grad(&self.layout, weights, x, y, grads))
    }

    fn check_weights(&self, weights: &[f32]) -> Result<()> {
        if weights.len() != NUM_PARAMS {
            return Err(MlErr::ShapeMismatch {
                what: "weights",
                got: weights.len(),
                expected: NUM_PARAMS,
            });
        }
        Ok(())
    }

    fn check_features(&self, x: &[f32]) -> Result<()> {
        if x.len() != NUM_FEATURES {
            return Err(MlErr::ShapeMismatch {
                what: "features",
                got: x.len(),
                expected: NUM_FEATURES,
            });
        }
        Ok(())
    }
}
