use std::collections::BTreeMap;
use std::path::Path;

use serde::{Serialize, Deserialize};
use tracing::info;

use crate::activation::activation::ActivationFunction;
use crate::data::example::LabelledSample;
use crate::data::glyph::recognize;
use crate::error::{MlpError, Result};
use crate::network::network::Network;
use crate::network::snapshot::{round_to, NetworkSnapshot};
use crate::train::trainer::Trainer;

const ERROR_DECIMALS: u32 = 5;
const WEIGHT_DECIMALS: u32 = 3;
const OUTPUT_DECIMALS: u32 = 2;

/// Everything besides the weights needed to rebuild the trained network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Architecture {
    pub layers: Vec<usize>,
    pub learning_rate: f64,
    #[serde(default)]
    pub activation: ActivationFunction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_factor: Option<f64>,
}

impl Architecture {
    /// Rebuilds a network from `snapshot` with this learning rate and
    /// activation. The snapshot's shape must match `layers`.
    pub fn rebuild(&self, snapshot: &NetworkSnapshot) -> Result<Network> {
        let network = Network::from_snapshot(snapshot, self.learning_rate, self.activation)?;
        if network.layer_sizes() != self.layers {
            return Err(MlpError::InvalidArchitecture(format!(
                "snapshot has layer sizes {:?}, architecture expects {:?}",
                network.layer_sizes(),
                self.layers
            )));
        }
        Ok(network)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightsReport {
    pub initial: NetworkSnapshot,
    #[serde(rename = "final")]
    pub trained: NetworkSnapshot,
}

/// Network response to one labelled sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleOutput {
    pub expected: String,
    pub obtained: Vec<f64>,
    pub recognized: Option<String>,
}

/// Human-readable summary of a training run.
///
/// Numbers are rounded for reading; rebuild networks from
/// `Trainer::initial_snapshot` or `Network::snapshot` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    pub architecture: Architecture,
    pub errors: Vec<f64>,
    pub weights: WeightsReport,
    /// Evaluation set name → outputs for each sample.
    pub outputs: BTreeMap<String, Vec<SampleOutput>>,
}

impl TrainingReport {
    /// Collects the report, running the trained network over every sample of
    /// every named evaluation set. `labels` maps output units to names.
    pub fn build(
        trainer: &mut Trainer,
        eval_sets: &[(String, Vec<LabelledSample>)],
        labels: &[&str],
    ) -> Result<TrainingReport> {
        let architecture = Architecture {
            layers: trainer.network().layer_sizes(),
            learning_rate: trainer.network().learning_rate(),
            activation: trainer.network().activation(),
            stop_factor: trainer.stop_factor(),
        };
        let errors = trainer.errors().iter()
            .map(|&e| round_to(e, ERROR_DECIMALS))
            .collect();
        let weights = WeightsReport {
            initial: trainer.initial_snapshot().rounded(WEIGHT_DECIMALS),
            trained: trainer.network().snapshot().rounded(WEIGHT_DECIMALS),
        };

        let mut outputs = BTreeMap::new();
        for (name, samples) in eval_sets {
            let mut rows = Vec::with_capacity(samples.len());
            for sample in samples {
                let raw = trainer.predict(&sample.inputs)?;
                rows.push(SampleOutput {
                    expected: sample.label.clone(),
                    recognized: recognize(&raw, labels).map(str::to_owned),
                    obtained: raw.iter().map(|&o| round_to(o, OUTPUT_DECIMALS)).collect(),
                });
            }
            outputs.insert(name.clone(), rows);
        }

        Ok(TrainingReport { architecture, errors, weights, outputs })
    }

    /// Fraction of samples in set `name` whose recognised label matches.
    pub fn accuracy(&self, name: &str) -> Option<f64> {
        let rows = self.outputs.get(name)?;
        if rows.is_empty() {
            return None;
        }
        let hits = rows.iter()
            .filter(|r| r.recognized.as_deref() == Some(r.expected.as_str()))
            .count();
        Some(hits as f64 / rows.len() as f64)
    }

    /// Writes `architecture.json`, `errors.json`, `weights.json` and
    /// `outputs.json` into `dir`, creating it if needed.
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        write_pretty(&dir.join("architecture.json"), &self.architecture)?;
        write_pretty(&dir.join("errors.json"), &self.errors)?;
        write_pretty(&dir.join("weights.json"), &self.weights)?;
        write_pretty(&dir.join("outputs.json"), &self.outputs)?;
        info!(dir = %dir.display(), "report written");
        Ok(())
    }
}

fn write_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, value)?;
    Ok(())
}
