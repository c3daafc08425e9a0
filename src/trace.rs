use std::{fs, io, io::Write, path::Path};

use ndarray::ArrayView1;

use crate::error::{MlErr, Result};

/// Per-step loss history of one training run.
///
/// One squared-error value is appended per iteration, before the parameter
/// update of that iteration. Individual entries fluctuate because every
/// step uses a fresh random sample; trends are read through `moving_average`.
#[derive(Debug, Clone, Default)]
pub struct LossTrace {
    losses: Vec<f32>,
}

/// Windowed digest of a trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceSummary {
    pub steps: usize,
    pub first_window_mean: f32,
    pub last_window_mean: f32,
    pub final_loss: f32,
}

impl LossTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(steps: usize) -> Self {
        Self {
            losses: Vec::with_capacity(steps),
        }
    }

    #[inline]
    pub fn push(&mut self, loss: f32) {
        self.losses.push(loss);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.losses.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.losses.is_empty()
    }

    /// All recorded losses, in step order.
    #[inline]
    pub fn losses(&self) -> &[f32] {
        &self.losses
    }

    /// The last recorded loss, if any step ran.
    pub fn final_loss(&self) -> Option<f32> {
        self.losses.last().copied()
    }

    /// Stride-1 windowed means over the trace.
    ///
    /// The result has `len() - window + 1` entries; entry `i` is the mean of
    /// steps `i..i + window`.
    ///
    /// # Errors
    /// Returns `MlErr::InvalidInput` when `window` is zero or exceeds the
    /// number of recorded steps.
    pub fn moving_average(&self, window: usize) -> Result<Vec<f32>> {
        if window == 0 {
            return Err(MlErr::InvalidInput("window must be greater than zero"));
        }
        if window > self.losses.len() {
            return Err(MlErr::InvalidInput(
                "window exceeds the number of recorded steps",
            ));
        }

        let view = ArrayView1::from(self.losses.as_slice());
        Ok(view
            .windows(window)
            .into_iter()
            .map(|w| w.mean().unwrap_or_default())
            .collect())
    }

    /// First/last windowed means plus the final raw loss.
    ///
    /// # Errors
    /// Same conditions as `moving_average`.
    pub fn summary(&self, window: usize) -> Result<TraceSummary> {
        let smoothed = self.moving_average(window)?;

        // moving_average guarantees at least one entry here.
        let first_window_mean = smoothed.first().copied().unwrap_or_default();
        let last_window_mean = smoothed.last().copied().unwrap_or_default();
        let final_loss = self.final_loss().unwrap_or_default();

        Ok(TraceSummary {
            steps: self.losses.len(),
            first_window_mean,
            last_window_mean,
            final_loss,
        })
    }

    /// Writes `step,loss` rows for the first `limit` steps (all when `None`).
    ///
    /// The file is the run's chart artifact: loss versus step index, ready
    /// for external plotting.
    pub fn write_csv(&self, path: &Path, limit: Option<usize>) -> io::Result<()> {
        let take = limit.unwrap_or(self.losses.len()).min(self.losses.len());

        let mut buf = Vec::new();
        for (step, loss) in self.losses[..take].iter().enumerate() {
            writeln!(buf, "{step},{loss}")?;
        }

        fs::write(path, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace_of(losses: &[f32]) -> LossTrace {
        let mut trace = LossTrace::new();
        for &loss in losses {
            trace.push(loss);
        }
        trace
    }

    #[test]
    fn moving_average_slides_one_step_at_a_time() {
        let trace = trace_of(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(trace.moving_average(2).unwrap(), vec![1.5, 2.5, 3.5]);
    }

    #[test]
    fn moving_average_rejects_bad_windows() {
        let trace = trace_of(&[1.0, 2.0]);
        assert!(matches!(
            trace.moving_average(0).unwrap_err(),
            MlErr::InvalidInput(_)
        ));
        assert!(matches!(
            trace.moving_average(3).unwrap_err(),
            MlErr::InvalidInput(_)
        ));
    }

    #[test]
    fn summary_reads_both_ends() {
        let trace = trace_of(&[4.0, 4.0, 2.0, 0.5, 0.5]);
        let summary = trace.summary(2).unwrap();

        assert_eq!(summary.steps, 5);
        assert_eq!(summary.first_window_mean, 4.0);
        assert_eq!(summary.last_window_mean, 0.5);
        assert_eq!(summary.final_loss, 0.5);
    }

    #[test]
    fn csv_lists_step_and_loss_rows() {
        let trace = trace_of(&[2.5, 1.0, 0.25]);
        let path =
            std::env::temp_dir().join(format!("quadratic_sgd_trace_{}.csv", std::process::id()));

        trace.write_csv(&path, Some(2)).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(content, "0,2.5\n1,1\n");
    }
}
