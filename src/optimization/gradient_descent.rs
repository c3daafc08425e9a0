use super::Optimizer;
use crate::error::{MlErr, Result};

/// Plain stochastic gradient descent.
#[derive(Debug, Clone)]
pub struct GradientDescent {
    learning_rate: f32,
}

impl GradientDescent {
    /// Returns a new `GradientDescent`.
    ///
    /// # Arguments
    /// * `learning_rate` - The length of the step taken against the gradient.
    pub fn new(learning_rate: f32) -> Self {
        Self { learning_rate }
    }

    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }
}

impl Optimizer for GradientDescent {
    /// Steps every parameter against its gradient:
    /// `param -= learning_rate * grad`.
    fn update_params(&mut self, params: &mut [f32], grad: &[f32]) -> Result<()> {
        if params.len() != grad.len() {
            return Err(MlErr::ShapeMismatch {
                what: "grad",
                got: grad.len(),
                expected: params.len(),
            });
        }

        let lr = self.learning_rate;
        for (w, g) in params.iter_mut().zip(grad) {
            *w -= lr * g;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_is_param_minus_lr_times_grad() {
        // Powers of two keep the arithmetic exact in f32.
        let mut sgd = GradientDescent::new(0.5);
        let mut params = [5.0_f32, -3.0, 0.5];
        sgd.update_params(&mut params, &[10.0, -6.0, 2.0]).unwrap();

        assert_eq!(params, [0.0, 0.0, -0.5]);
    }

    #[test]
    fn zero_gradient_leaves_params_unchanged() {
        let mut sgd = GradientDescent::new(0.5);
        let mut params = [2.0_f32, 3.0, -1.0];
        sgd.update_params(&mut params, &[0.0; 3]).unwrap();

        assert_eq!(params, [2.0, 3.0, -1.0]);
    }

    #[test]
    fn rejects_mismatched_buffers() {
        let mut sgd = GradientDescent::new(0.1);
        let mut params = [0.0_f32; 3];
        let err = sgd.update_params(&mut params, &[1.0, 2.0]).unwrap_err();

        // The gradient buffer is the one being measured against the params.
        assert!(matches!(
            err,
            MlErr::ShapeMismatch {
                what: "grad",
                got: 2,
                expected: 3,
            }
        ));
        assert_eq!(err.to_string(), "shape mismatch for grad: got 2, expected 3");
    }
}
