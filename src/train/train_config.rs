use std::sync::mpsc;

use crate::train::epoch_stats::EpochStats;

/// Configuration for one `Trainer::train_with` run.
///
/// # Fields
/// - `epochs`      — number of full sweeps over the example set
/// - `stop_factor` — overrides the network spec's stop factor for this run
/// - `progress_tx` — optional channel sender; one `EpochStats` is sent per
///                   completed epoch. A dropped receiver does not stop training.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    pub epochs: usize,
    pub stop_factor: Option<f64>,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl TrainConfig {
    /// Creates a minimal `TrainConfig` with no override and no progress channel.
    pub fn new(epochs: usize) -> Self {
        TrainConfig {
            epochs,
            stop_factor: None,
            progress_tx: None,
        }
    }

    pub fn with_stop_factor(mut self, stop_factor: f64) -> Self {
        self.stop_factor = Some(stop_factor);
        self
    }

    pub fn with_progress(mut self, tx: mpsc::Sender<EpochStats>) -> Self {
        self.progress_tx = Some(tx);
        self
    }
}
