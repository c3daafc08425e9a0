use crate::error::Result;

/// The update rule moving parameters from step `t` to `t+1`.
pub trait Optimizer {
    /// Applies one update in place.
    ///
    /// # Arguments
    /// * `params` - The parameters to modify.
    /// * `grad` - The gradient computed for the current step.
    ///
    /// # Errors
    /// Returns `MlErr::ShapeMismatch` when the two buffers differ in length.
    fn update_params(&mut self, params: &mut [f32], grad: &[f32]) -> Result<()>;
}
