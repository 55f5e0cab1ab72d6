pub mod metadata;
pub mod neuron;

pub use metadata::NeuronMetadata;
pub use neuron::Neuron;
