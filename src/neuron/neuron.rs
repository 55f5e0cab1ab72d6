use rand::Rng;

use crate::activation::activation::ActivationFunction;
use crate::error::{ensure_len, MlpError, Result};
use crate::neuron::metadata::NeuronMetadata;

#[derive(Debug, Clone)]
pub struct Neuron {
    /// One weight per incoming connection; index `i` is the connection from
    /// neuron `i` of the previous layer (or input `i`).
    pub weights: Vec<f64>,
    pub bias: f64,
    pub activation: ActivationFunction,
    pub metadata: NeuronMetadata,
}

impl Neuron {
    /// Creates a neuron with `fan_in` weights and a bias drawn uniformly from [-1, 1].
    pub fn new<R: Rng + ?Sized>(fan_in: usize, activation: ActivationFunction, rng: &mut R) -> Neuron {
        let weights = (0..fan_in).map(|_| rng.gen_range(-1.0..=1.0)).collect();
        let bias = rng.gen_range(-1.0..=1.0);
        Neuron::with_params(weights, bias, activation)
    }

    /// Creates a neuron from explicit parameters with empty metadata.
    pub fn with_params(weights: Vec<f64>, bias: f64, activation: ActivationFunction) -> Neuron {
        Neuron {
            weights,
            bias,
            activation,
            metadata: NeuronMetadata::default(),
        }
    }

    pub fn fan_in(&self) -> usize {
        self.weights.len()
    }

    /// Weighted sum plus bias, passed through the activation.
    /// Records the inputs and output for the later training phases and
    /// discards any error left over from the previous step.
    pub fn execute(&mut self, inputs: &[f64]) -> Result<f64> {
        ensure_len(self.weights.len(), inputs.len())?;

        let z = inputs.iter()
            .zip(self.weights.iter())
            .map(|(x, w)| x * w)
            .sum::<f64>() + self.bias;
        let output = self.activation.function(z);

        self.metadata.inputs = Some(inputs.to_vec());
        self.metadata.output = Some(output);
        self.metadata.error = None;
        Ok(output)
    }

    /// Output of the last `execute` call.
    pub fn output(&self) -> Result<f64> {
        self.metadata.output
            .ok_or(MlpError::UninitializedState("neuron has not executed yet"))
    }

    /// Error assigned during the current training step.
    pub fn error(&self) -> Result<f64> {
        self.metadata.error
            .ok_or(MlpError::UninitializedState("neuron has no error assigned"))
    }

    /// Activation derivative evaluated at the last output.
    pub fn output_derivative(&self) -> Result<f64> {
        Ok(self.activation.derivative(self.output()?))
    }

    /// Stores the error for this step. Fails if the neuron never executed,
    /// since the error would have no inputs to refer to.
    pub fn mark_error(&mut self, error: f64) -> Result<()> {
        if self.metadata.output.is_none() {
            return Err(MlpError::UninitializedState("error marked before a forward pass"));
        }
        self.metadata.error = Some(error);
        Ok(())
    }

    /// True once both the forward pass and error assignment have populated metadata.
    pub fn is_ready_for_update(&self) -> bool {
        self.metadata.inputs.is_some() && self.metadata.error.is_some()
    }

    /// Delta rule: `w[i] += error * lr * input[i]`, `bias += error * lr`.
    ///
    /// Metadata is not cleared, so calling this twice applies the delta twice.
    pub fn update_weights(&mut self, learning_rate: f64) -> Result<()> {
        let error = self.metadata.error
            .ok_or(MlpError::UninitializedState("weights updated before an error was marked"))?;
        let inputs = self.metadata.inputs.as_ref()
            .ok_or(MlpError::UninitializedState("weights updated before a forward pass"))?;
        ensure_len(self.weights.len(), inputs.len())?;

        let step = error * learning_rate;
        for (weight, input) in self.weights.iter_mut().zip(inputs.iter()) {
            *weight += step * input;
        }
        self.bias += step;
        Ok(())
    }
}
