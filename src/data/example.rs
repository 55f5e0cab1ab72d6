use serde::{Serialize, Deserialize};

/// One labelled training pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub inputs: Vec<f64>,
    pub expected: Vec<f64>,
}

impl Example {
    pub fn new(inputs: Vec<f64>, expected: Vec<f64>) -> Example {
        Example { inputs, expected }
    }
}

/// An input grid tagged with the name of what it depicts, used for evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelledSample {
    pub label: String,
    pub inputs: Vec<f64>,
}
