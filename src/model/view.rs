use super::layout::ParameterLayout;

/// A read-only view over a flat parameter buffer.
///
/// The view does not own the parameters; it interprets them through a
/// `ParameterLayout`. Label synthesis and prediction both evaluate the
/// target function through this view, so there is a single forward path.
#[derive(Debug, Clone, Copy)]
pub struct QuadraticView<'a> {
    weights: &'a [f32],
    layout: &'a ParameterLayout,
}

impl<'a> QuadraticView<'a> {
    pub fn new(weights: &'a [f32], layout: &'a ParameterLayout) -> Self {
        debug_assert!(weights.len() >= layout.len());
        Self { weights, layout }
    }

    #[inline]
    pub fn w0(&self) -> f32 {
        self.weights[self.layout.w.start]
    }

    #[inline]
    pub fn w1(&self) -> f32 {
        self.weights[self.layout.w.start + 1]
    }

    #[inline]
    pub fn b(&self) -> f32 {
        self.weights[self.layout.b.start]
    }

    /// y = w0*x0^2 + w1*x1^2 + b
    #[inline]
    pub fn predict(&self, x: [f32; 2]) -> f32 {
        self.w0() * x[0] * x[0] + self.w1() * x[1] * x[1] + self.b()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_reads_named_slots() {
        let layout = ParameterLayout::quadratic();
        let weights = [-0.8, 1.3, 0.5];
        let view = QuadraticView::new(&weights, &layout);
        assert_eq!(view.w0(), -0.8);
        assert_eq!(view.w1(), 1.3);
        assert_eq!(view.b(), 0.5);
    }

    #[test]
    fn predict_evaluates_the_quadratic_form() {
        let layout = ParameterLayout::quadratic();
        let weights = [2.0, -1.0, 0.25];
        let view = QuadraticView::new(&weights, &layout);
        // 2*9 - 1*4 + 0.25
        assert_eq!(view.predict([3.0, 2.0]), 14.25);
    }
}
