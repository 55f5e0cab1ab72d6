use serde::{Serialize, Deserialize};

/// Per-epoch record emitted by `Trainer::train_with`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number within the current run.
    pub epoch: usize,
    /// Epochs requested for this run.
    pub total_epochs: usize,
    /// Mean-squared error observed during the epoch's sweep.
    pub mse: f64,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}
