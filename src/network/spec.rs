use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::error::{MlpError, Result};

/// Construction parameters for a `Network`.
///
/// `layers[0]` is the input width and is not materialised as neurons;
/// `layers[1..]` are the hidden layer widths followed by the output width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub layers: Vec<usize>,
    pub learning_rate: f64,
    /// Minimum MSE improvement between consecutive epochs; training stops
    /// once an epoch improves by less than this. `None` disables the check.
    #[serde(default)]
    pub stop_factor: Option<f64>,
    #[serde(default)]
    pub activation: ActivationFunction,
}

/// On-disk form of a spec. Widths are signed so that a negative entry is
/// reported as an architecture error rather than a parse error.
#[derive(Debug, Deserialize)]
struct SpecFile {
    layers: Vec<i64>,
    learning_rate: f64,
    #[serde(default)]
    stop_factor: Option<f64>,
    #[serde(default)]
    activation: ActivationFunction,
}

impl NetworkSpec {
    pub fn new(layers: Vec<usize>, learning_rate: f64) -> NetworkSpec {
        NetworkSpec {
            layers,
            learning_rate,
            stop_factor: None,
            activation: ActivationFunction::default(),
        }
    }

    /// Builds a spec from signed widths, rejecting any non-positive entry.
    pub fn from_widths(widths: &[i64], learning_rate: f64) -> Result<NetworkSpec> {
        let layers = widths.iter()
            .enumerate()
            .map(|(idx, &w)| {
                usize::try_from(w).ok().filter(|&w| w > 0).ok_or_else(|| {
                    MlpError::InvalidArchitecture(format!("layer {idx} has non-positive width {w}"))
                })
            })
            .collect::<Result<Vec<usize>>>()?;
        let spec = NetworkSpec::new(layers, learning_rate);
        spec.validate()?;
        Ok(spec)
    }

    pub fn with_stop_factor(mut self, stop_factor: f64) -> NetworkSpec {
        self.stop_factor = Some(stop_factor);
        self
    }

    pub fn input_size(&self) -> usize {
        self.layers.first().copied().unwrap_or(0)
    }

    pub fn output_size(&self) -> usize {
        self.layers.last().copied().unwrap_or(0)
    }

    /// Rejects degenerate architectures before any neuron is created.
    pub fn validate(&self) -> Result<()> {
        if self.layers.len() < 2 {
            return Err(MlpError::InvalidArchitecture(format!(
                "need at least an input and an output width, got {} layer size(s)",
                self.layers.len()
            )));
        }
        if let Some(idx) = self.layers.iter().position(|&w| w == 0) {
            return Err(MlpError::InvalidArchitecture(format!(
                "layer {idx} has zero width"
            )));
        }
        if !self.learning_rate.is_finite() {
            return Err(MlpError::InvalidArchitecture(format!(
                "learning rate must be finite, got {}",
                self.learning_rate
            )));
        }
        if let Some(factor) = self.stop_factor {
            if !factor.is_finite() || factor < 0.0 {
                return Err(MlpError::InvalidArchitecture(format!(
                    "stop factor must be a non-negative number, got {factor}"
                )));
            }
        }
        Ok(())
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes and validates a spec from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<NetworkSpec> {
        let json = std::fs::read_to_string(path)?;
        NetworkSpec::parse_json(&json)
    }

    /// Parses and validates a spec from JSON text.
    pub fn parse_json(json: &str) -> Result<NetworkSpec> {
        let file: SpecFile = serde_json::from_str(json)?;
        let mut spec = NetworkSpec::from_widths(&file.layers, file.learning_rate)?;
        spec.stop_factor = file.stop_factor;
        spec.activation = file.activation;
        spec.validate()?;
        Ok(spec)
    }
}
