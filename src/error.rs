use std::{error::Error, fmt, io};

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, MlErr>;

/// Failures surfaced by the estimator's public API.
///
/// Every buffer handed to the model or the optimizer is length-checked up
/// front; a wrong shape is reported here instead of producing a silently
/// wrong update.
#[derive(Debug)]
pub enum MlErr {
    /// An input is invalid for domain reasons (bad sample range, bad
    /// trace window, bad init bounds).
    InvalidInput(&'static str),

    /// A buffer length does not match what the model expects.
    ShapeMismatch {
        /// What was being checked (e.g. "weights", "features").
        what: &'static str,
        /// Observed length.
        got: usize,
        /// Expected length.
        expected: usize,
    },
}

impl fmt::Display for MlErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MlErr::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            MlErr::ShapeMismatch {
                what,
                got,
                expected,
            } => {
                write!(f, "shape mismatch for {what}: got {got}, expected {expected}")
            }
        }
    }
}

impl Error for MlErr {}

/// Boundary conversion for the demo binary.
impl From<MlErr> for io::Error {
    fn from(value: MlErr) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, value)
    }
}
