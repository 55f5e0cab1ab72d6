use std::time::Instant;

use rand::Rng;
use tracing::{debug, info};

use crate::data::example::Example;
use crate::error::{MlpError, Result};
use crate::loss::mse::MseLoss;
use crate::network::network::Network;
use crate::network::snapshot::NetworkSnapshot;
use crate::network::spec::NetworkSpec;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainerState {
    /// Initial parameters captured, no epoch run yet.
    Untrained,
    /// At least one epoch has completed.
    Trained,
}

/// Owns a network, drives the epoch loop and keeps the per-epoch MSE history.
#[derive(Debug)]
pub struct Trainer {
    network: Network,
    initial: NetworkSnapshot,
    stop_factor: Option<f64>,
    errors: Vec<f64>,
}

impl Trainer {
    /// Wraps `network`, capturing its current parameters as the initial state.
    pub fn new(network: Network, stop_factor: Option<f64>) -> Trainer {
        let initial = network.snapshot();
        Trainer { network, initial, stop_factor, errors: Vec::new() }
    }

    pub fn from_spec<R: Rng + ?Sized>(spec: &NetworkSpec, rng: &mut R) -> Result<Trainer> {
        Ok(Trainer::new(Network::new(spec, rng)?, spec.stop_factor))
    }

    pub fn seeded(spec: &NetworkSpec, seed: u64) -> Result<Trainer> {
        Ok(Trainer::new(Network::seeded(spec, seed)?, spec.stop_factor))
    }

    pub fn state(&self) -> TrainerState {
        if self.errors.is_empty() {
            TrainerState::Untrained
        } else {
            TrainerState::Trained
        }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn stop_factor(&self) -> Option<f64> {
        self.stop_factor
    }

    /// Parameters as they stood before any training.
    pub fn initial_snapshot(&self) -> &NetworkSnapshot {
        &self.initial
    }

    /// Mean-squared error of every completed epoch, oldest first.
    pub fn errors(&self) -> &[f64] {
        &self.errors
    }

    /// Runs the trained network on `inputs`.
    pub fn predict(&mut self, inputs: &[f64]) -> Result<Vec<f64>> {
        self.network.run(inputs)
    }

    /// Trains for `epochs` epochs. Returns the number of epochs actually run,
    /// which is smaller only when the stop factor ends training early.
    pub fn train(&mut self, examples: &[Example], epochs: usize) -> Result<usize> {
        self.train_with(examples, &TrainConfig::new(epochs))
    }

    pub fn train_with(&mut self, examples: &[Example], config: &TrainConfig) -> Result<usize> {
        if examples.is_empty() {
            return Err(MlpError::EmptyDataset);
        }
        let stop_factor = config.stop_factor.or(self.stop_factor);

        info!(
            epochs = config.epochs,
            examples = examples.len(),
            learning_rate = self.network.learning_rate(),
            "training started"
        );

        let mut run = 0;
        for epoch in 1..=config.epochs {
            let t_start = Instant::now();
            let mse = self.run_one_epoch(examples)?;
            let previous = self.errors.last().copied();
            self.errors.push(mse);
            run = epoch;

            let elapsed_ms = t_start.elapsed().as_millis() as u64;
            debug!(epoch, mse, elapsed_ms, "epoch finished");

            if let Some(ref tx) = config.progress_tx {
                // A dropped receiver only means nobody is watching.
                let _ = tx.send(EpochStats { epoch, total_epochs: config.epochs, mse, elapsed_ms });
            }

            if let (Some(factor), Some(prev)) = (stop_factor, previous) {
                if (prev - mse).abs() < factor {
                    info!(epoch, mse, factor, "mse improvement below stop factor, stopping");
                    break;
                }
            }
        }

        info!(epochs_run = run, final_mse = ?self.errors.last(), "training finished");
        Ok(run)
    }

    /// One online sweep: every example is trained on in order, and the MSE is
    /// measured from the outputs each example produced before its own update.
    fn run_one_epoch(&mut self, examples: &[Example]) -> Result<f64> {
        let mut obtained = Vec::with_capacity(examples.len());
        for example in examples {
            obtained.push(self.network.train_example(&example.inputs, &example.expected)?);
        }
        MseLoss::epoch(
            examples.iter()
                .map(|ex| ex.expected.as_slice())
                .zip(obtained.iter().map(Vec::as_slice)),
        )
    }
}
