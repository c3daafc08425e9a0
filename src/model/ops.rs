//! Closed-form math kernels for the quadratic model.
//!
//! Callers are expected to have validated buffer lengths already; the
//! kernels only keep debug assertions.

use super::{layout::ParameterLayout, view::QuadraticView};

/// Evaluates the target function for one input:
///
/// y = w0*x0^2 + w1*x1^2 + b
///
/// The same routine is used to synthesize labels (true parameters) and to
/// predict (estimated parameters), so the two can never diverge.
#[inline]
pub fn forward(layout: &ParameterLayout, weights: &[f32], x: &[f32]) -> f32 {
    debug_assert!(weights.len() >= layout.len());
    debug_assert_eq!(x.len(), 2);

    QuadraticView::new(weights, layout).predict([x[0], x[1]])
}

/// Computes the squared-error loss of one sample and its gradient.
///
/// loss = (yhat - y)^2
///
/// With err = yhat - y, the chain rule gives:
/// - dL/dw0 = 2 * err * x0^2
/// - dL/dw1 = 2 * err * x1^2
/// - dL/db  = 2 * err
///
/// `grads` is overwritten (every slot is assigned; online updates never
/// accumulate across steps). Returns the loss.
pub fn step_grad(
    layout: &ParameterLayout,
    weights: &[f32],
    x: &[f32],
    y: f32,
    grads: &mut [f32],
) -> f32 {
    debug_assert!(weights.len() >= layout.len());
    debug_assert!(grads.len() >= layout.len());
    debug_assert_eq!(x.len(), 2);

    let err = forward(layout, weights, x) - y;
    let two_err = 2.0 * err;

    grads[layout.w.start] = two_err * x[0] * x[0];
    grads[layout.w.start + 1] = two_err * x[1] * x[1];
    grads[layout.b.start] = two_err;

    err * err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_grad_matches_hand_computed_values() {
        // Truth y = 1*x0^2 + 2*x1^2, sample x = (1, 2) => y = 9.
        // From zero weights: err = -9, loss = 81,
        // dw0 = 2*(-9)*1 = -18, dw1 = 2*(-9)*4 = -72, db = -18.
        let layout = ParameterLayout::quadratic();
        let weights = [0.0_f32, 0.0, 0.0];
        let mut grads = [0.0_f32; 3];

        let loss = step_grad(&layout, &weights, &[1.0, 2.0], 9.0, &mut grads);

        assert_eq!(loss, 81.0);
        assert_eq!(grads, [-18.0, -72.0, -18.0]);
    }

    #[test]
    fn step_grad_from_nonzero_weights() {
        // Weights (0.5, -0.25, 1.0), x = (2, 2): prediction 2 - 1 + 1 = 2.
        // Label 12 => err = -10: loss 100, grads (-80, -80, -20).
        let layout = ParameterLayout::quadratic();
        let weights = [0.5_f32, -0.25, 1.0];
        let mut grads = [0.0_f32; 3];

        let loss = step_grad(&layout, &weights, &[2.0, 2.0], 12.0, &mut grads);

        assert_eq!(loss, 100.0);
        assert_eq!(grads, [-80.0, -80.0, -20.0]);
    }

    #[test]
    fn forward_goes_through_the_view() {
        let layout = ParameterLayout::quadratic();
        let weights = [-0.8_f32, 1.3, 0.5];
        let x = [1.0_f32, 2.0];

        let direct = QuadraticView::new(&weights, &layout).predict([x[0], x[1]]);
        assert_eq!(forward(&layout, &weights, &x), direct);
    }
}
