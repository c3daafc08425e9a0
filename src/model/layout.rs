use std::ops::Range;

/// Maps the flat parameter buffer `[w0, w1, b]` into named slices.
///
/// The quadratic model keeps its three scalars in one contiguous buffer so
/// the optimizer and the gradient kernel can treat parameters uniformly;
/// the layout is the single place that knows which slot is which.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterLayout {
    pub w: Range<usize>,
    pub b: Range<usize>,
}

impl ParameterLayout {
    /// Layout for the two-feature quadratic model: weights first, bias last.
    pub fn quadratic() -> Self {
        Self { w: 0..2, b: 2..3 }
    }

    /// Total number of scalars covered by the layout.
    pub fn len(&self) -> usize {
        self.b.end
    }

    /// Sanity check: ranges must be non-empty, in-bounds, and non-overlapping.
    pub fn validate(&self, total_params: usize) {
        assert!(self.w.start < self.w.end, "weight range must be non-empty");
        assert!(self.b.start < self.b.end, "bias range must be non-empty");
        assert!(self.w.end <= total_params, "weight range out of bounds");
        assert!(self.b.end <= total_params, "bias range out of bounds");
        assert!(self.w.end <= self.b.start, "layout ranges overlap");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadratic_layout_is_valid() {
        let layout = ParameterLayout::quadratic();
        layout.validate(layout.len());
        assert_eq!(layout.w, 0..2);
        assert_eq!(layout.b, 2..3);
        assert_eq!(layout.len(), 3);
    }
}
