use std::{num::NonZeroUsize, path::PathBuf};

/// How the estimated parameters start out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamInitConfig {
    Const { value: f32 },
    Uniform { low: f32, high: f32 },
}

/// Configuration of one training run.
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    /// The generator's weights `[w0, w1]`.
    pub true_weights: Vec<f32>,
    /// The generator's bias.
    pub true_bias: f32,
    pub learning_rate: f32,
    pub steps: NonZeroUsize,
    /// Per-dimension input bounds, half-open `[low, high)`.
    pub sample_low: f32,
    pub sample_high: f32,
    pub init: ParamInitConfig,
    pub seed: Option<u64>,
    /// Where to write the `step,loss` trace, if anywhere.
    pub trace_path: Option<PathBuf>,
    /// How many leading steps of the trace to export (all when `None`).
    pub trace_steps: Option<usize>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            true_weights: vec![-0.8, 1.3],
            true_bias: 0.5,
            learning_rate: 1e-3,
            steps: NonZeroUsize::new(5000).unwrap(),
            sample_low: -2.0,
            sample_high: 2.0,
            init: ParamInitConfig::Const { value: 0.0 },
            seed: None,
            trace_path: None,
            trace_steps: None,
        }
    }
}

/// Loads a [`TrainingConfig`] from a JSON run file.
///
/// Absent fields fall back to the defaults; present fields must have the
/// right type.
///
/// # Errors
/// Returns a human-readable string if the file cannot be read or parsed.
pub fn load_config(path: &str) -> Result<TrainingConfig, String> {
    let content =
        std::fs::read_to_string(path).map_err(|e| format!("cannot read '{path}': {e}"))?;

    let val: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| format!("invalid JSON: {e}"))?;

    let defaults = TrainingConfig::default();

    let true_weights = match &val["true_weights"] {
        serde_json::Value::Null => defaults.true_weights,
        v => v
            .as_array()
            .ok_or("true_weights must be an array")?
            .iter()
            .map(|w| {
                w.as_f64()
                    .map(|w| w as f32)
                    .ok_or_else(|| "true_weights must contain numbers".to_string())
            })
            .collect::<Result<Vec<_>, _>>()?,
    };

    let steps = val["steps"]
        .as_u64()
        .unwrap_or(defaults.steps.get() as u64) as usize;
    let steps = NonZeroUsize::new(steps).ok_or("steps must be greater than zero")?;

    let init = match val["init"].as_str().unwrap_or("const") {
        "const" => ParamInitConfig::Const {
            value: val["init_value"].as_f64().unwrap_or(0.0) as f32,
        },
        "uniform" => ParamInitConfig::Uniform {
            low: val["init_low"].as_f64().unwrap_or(-1.0) as f32,
            high: val["init_high"].as_f64().unwrap_or(1.0) as f32,
        },
        other => return Err(format!("unknown init: {other}")),
    };

    Ok(TrainingConfig {
        true_weights,
        true_bias: val["true_bias"].as_f64().unwrap_or(defaults.true_bias as f64) as f32,
        learning_rate: val["learning_rate"]
            .as_f64()
            .unwrap_or(defaults.learning_rate as f64) as f32,
        steps,
        sample_low: val["sample_low"].as_f64().unwrap_or(defaults.sample_low as f64) as f32,
        sample_high: val["sample_high"]
            .as_f64()
            .unwrap_or(defaults.sample_high as f64) as f32,
        init,
        seed: val["seed"].as_u64(),
        trace_path: val["trace_path"].as_str().map(PathBuf::from),
        trace_steps: val["trace_steps"].as_u64().map(|n| n as usize),
    })
}
