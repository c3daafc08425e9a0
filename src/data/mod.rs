pub mod synthetic;

pub use synthetic::{Sample, SyntheticSampler};
