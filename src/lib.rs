pub mod error;
pub mod activation;
pub mod neuron;
pub mod layers;
pub mod network;
pub mod loss;
pub mod train;
pub mod data;
pub mod report;

// Convenience re-exports
pub use error::{MlpError, Result};
pub use activation::activation::ActivationFunction;
pub use neuron::neuron::Neuron;
pub use layers::dense::Layer;
pub use network::network::Network;
pub use network::snapshot::{NetworkSnapshot, NeuronParams};
pub use network::spec::NetworkSpec;
pub use loss::mse::MseLoss;
pub use train::trainer::{Trainer, TrainerState};
pub use train::{EpochStats, TrainConfig};
pub use data::example::{Example, LabelledSample};
pub use report::report::TrainingReport;
