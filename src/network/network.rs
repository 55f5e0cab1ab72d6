use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::activation::activation::ActivationFunction;
use crate::error::{ensure_len, MlpError, Result};
use crate::layers::dense::Layer;
use crate::network::snapshot::{NetworkSnapshot, NeuronParams};
use crate::network::spec::NetworkSpec;
use crate::neuron::neuron::Neuron;

/// Multilayer perceptron: hidden layers followed by one output layer.
///
/// There is no input layer object; the raw input vector feeds the first
/// layer directly. Training is split into four phases that must run in
/// order for each example: `feedforward`, `compute_output_errors`,
/// `backpropagate`, `update_weights`.
#[derive(Debug, Clone)]
pub struct Network {
    pub layers: Vec<Layer>,
    input_size: usize,
    learning_rate: f64,
    activation: ActivationFunction,
}

impl Network {
    /// Builds a network with weights and biases drawn uniformly from [-1, 1].
    pub fn new<R: Rng + ?Sized>(spec: &NetworkSpec, rng: &mut R) -> Result<Network> {
        spec.validate()?;
        let layers = spec.layers.windows(2)
            .map(|pair| Layer::new(pair[1], pair[0], spec.activation, &mut *rng))
            .collect();
        trace!(layers = ?spec.layers, learning_rate = spec.learning_rate, "network built");
        Ok(Network {
            layers,
            input_size: spec.input_size(),
            learning_rate: spec.learning_rate,
            activation: spec.activation,
        })
    }

    /// Builds a network from a fixed seed; equal seeds give equal weights.
    pub fn seeded(spec: &NetworkSpec, seed: u64) -> Result<Network> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Network::new(spec, &mut rng)
    }

    /// Rebuilds a network from captured parameters.
    ///
    /// The snapshot's shape must be consistent: every neuron of the first
    /// layer shares one fan-in, and each later layer's fan-in equals the
    /// previous layer's width.
    pub fn from_snapshot(
        snapshot: &NetworkSnapshot,
        learning_rate: f64,
        activation: ActivationFunction,
    ) -> Result<Network> {
        let input_size = snapshot.layers.first()
            .and_then(|layer| layer.first())
            .map(|n| n.weights.len())
            .ok_or_else(|| MlpError::InvalidArchitecture("snapshot has no neurons".into()))?;

        let mut spec_layers = vec![input_size];
        spec_layers.extend(snapshot.layers.iter().map(Vec::len));
        let spec = NetworkSpec { layers: spec_layers, learning_rate, stop_factor: None, activation };
        spec.validate()?;

        let mut fan_in = input_size;
        let mut layers = Vec::with_capacity(snapshot.layers.len());
        for (idx, params) in snapshot.layers.iter().enumerate() {
            if let Some(bad) = params.iter().find(|n| n.weights.len() != fan_in) {
                return Err(MlpError::InvalidArchitecture(format!(
                    "layer {idx} expects fan-in {fan_in}, found a neuron with {}",
                    bad.weights.len()
                )));
            }
            let neurons = params.iter()
                .map(|n| Neuron::with_params(n.weights.clone(), n.bias, activation))
                .collect();
            layers.push(Layer::from_neurons(neurons));
            fan_in = params.len();
        }

        Ok(Network { layers, input_size, learning_rate, activation })
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn output_size(&self) -> usize {
        self.layers.last().map_or(0, Layer::size)
    }

    /// Input width followed by every layer's width.
    pub fn layer_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![self.input_size];
        sizes.extend(self.layers.iter().map(Layer::size));
        sizes
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn activation(&self) -> ActivationFunction {
        self.activation
    }

    /// Forward pass; each layer's outputs become the next layer's inputs.
    pub fn feedforward(&mut self, inputs: &[f64]) -> Result<()> {
        ensure_len(self.input_size, inputs.len())?;
        let mut current = inputs.to_vec();
        for layer in &mut self.layers {
            current = layer.feed_from(&current)?;
        }
        Ok(())
    }

    /// Runs a forward pass and returns the output layer's values.
    pub fn run(&mut self, inputs: &[f64]) -> Result<Vec<f64>> {
        self.feedforward(inputs)?;
        self.outputs()
    }

    /// Output layer values from the last forward pass.
    pub fn outputs(&self) -> Result<Vec<f64>> {
        self.output_layer().outputs()
    }

    /// Marks each output neuron with `(expected - output) * derivative(output)`.
    pub fn compute_output_errors(&mut self, expected: &[f64]) -> Result<()> {
        let output_layer = self.output_layer_mut();
        ensure_len(output_layer.size(), expected.len())?;

        for (neuron, target) in output_layer.neurons.iter_mut().zip(expected) {
            let output = neuron.output()?;
            let error = (target - output) * neuron.activation.derivative(output);
            neuron.mark_error(error)?;
        }
        Ok(())
    }

    /// Propagates output errors back through the hidden layers, last hidden
    /// layer first. Neuron `i` of layer `L` receives
    /// `Σ_j next[j].weights[i] * next[j].error`, scaled by its own derivative.
    pub fn backpropagate(&mut self) -> Result<()> {
        for idx in (0..self.layers.len().saturating_sub(1)).rev() {
            let (head, tail) = self.layers.split_at_mut(idx + 1);
            let layer = &mut head[idx];
            let next = &tail[0];

            let next_errors = next.neurons.iter()
                .map(Neuron::error)
                .collect::<Result<Vec<f64>>>()?;

            for (i, neuron) in layer.neurons.iter_mut().enumerate() {
                let raw_error: f64 = next.neurons.iter()
                    .zip(next_errors.iter())
                    .map(|(n, err)| n.weights[i] * err)
                    .sum();
                let error = raw_error * neuron.output_derivative()?;
                neuron.mark_error(error)?;
            }
        }
        Ok(())
    }

    /// Applies the delta rule to every neuron.
    ///
    /// Fails without touching any weight unless every neuron has both inputs
    /// and an error recorded.
    pub fn update_weights(&mut self) -> Result<()> {
        let ready = self.layers.iter()
            .flat_map(|layer| layer.neurons.iter())
            .all(Neuron::is_ready_for_update);
        if !ready {
            return Err(MlpError::UninitializedState(
                "weights updated before every neuron was assigned an error",
            ));
        }

        let learning_rate = self.learning_rate;
        for neuron in self.layers.iter_mut().flat_map(|layer| layer.neurons.iter_mut()) {
            neuron.update_weights(learning_rate)?;
        }
        Ok(())
    }

    /// One online training step over a single example. Returns the outputs
    /// obtained before the weights were adjusted.
    pub fn train_example(&mut self, inputs: &[f64], expected: &[f64]) -> Result<Vec<f64>> {
        ensure_len(self.output_size(), expected.len())?;
        let obtained = self.run(inputs)?;
        self.compute_output_errors(expected)?;
        self.backpropagate()?;
        self.update_weights()?;
        Ok(obtained)
    }

    /// Captures every weight and bias at full precision.
    pub fn snapshot(&self) -> NetworkSnapshot {
        let layers = self.layers.iter()
            .map(|layer| {
                layer.neurons.iter()
                    .map(|n| NeuronParams { weights: n.weights.clone(), bias: n.bias })
                    .collect()
            })
            .collect();
        NetworkSnapshot { layers }
    }

    fn output_layer(&self) -> &Layer {
        // validate() guarantees at least one materialised layer
        &self.layers[self.layers.len() - 1]
    }

    fn output_layer_mut(&mut self) -> &mut Layer {
        let last = self.layers.len() - 1;
        &mut self.layers[last]
    }
}
