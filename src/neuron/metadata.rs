/// Scratch record carried by a neuron between the training phases.
///
/// `inputs` and `output` are written by the forward pass, `error` by the
/// output-error or backpropagation phase. Each forward pass resets `error`
/// to `None`, so an error always belongs to the current inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NeuronMetadata {
    pub inputs: Option<Vec<f64>>,
    pub output: Option<f64>,
    pub error: Option<f64>,
}
