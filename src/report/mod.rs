pub mod report;

pub use report::{Architecture, SampleOutput, TrainingReport, WeightsReport};
