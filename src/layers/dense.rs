use rand::Rng;

use crate::activation::activation::ActivationFunction;
use crate::error::Result;
use crate::neuron::neuron::Neuron;

/// Fully connected layer: an ordered list of neurons sharing one fan-in.
///
/// Neuron order is significant: the output of neuron `i` feeds weight `i`
/// of every neuron in the next layer.
#[derive(Debug, Clone)]
pub struct Layer {
    pub neurons: Vec<Neuron>,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        size: usize,
        input_size: usize,
        activation: ActivationFunction,
        rng: &mut R,
    ) -> Layer {
        let neurons = (0..size)
            .map(|_| Neuron::new(input_size, activation, &mut *rng))
            .collect();
        Layer { neurons }
    }

    pub fn from_neurons(neurons: Vec<Neuron>) -> Layer {
        Layer { neurons }
    }

    pub fn size(&self) -> usize {
        self.neurons.len()
    }

    /// Fan-in shared by every neuron (0 for an empty layer).
    pub fn input_size(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::fan_in)
    }

    /// Executes every neuron on `input` and returns their outputs in order.
    pub fn feed_from(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        self.neurons.iter_mut()
            .map(|neuron| neuron.execute(input))
            .collect()
    }

    /// Outputs recorded by the last `feed_from`.
    pub fn outputs(&self) -> Result<Vec<f64>> {
        self.neurons.iter().map(Neuron::output).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MlpError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn neurons_share_fan_in() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let layer = Layer::new(5, 3, ActivationFunction::ScaledSigmoid, &mut rng);
        assert_eq!(layer.size(), 5);
        assert_eq!(layer.input_size(), 3);
        assert!(layer.neurons.iter().all(|n| n.fan_in() == 3));
    }

    #[test]
    fn feed_from_preserves_neuron_order() {
        let act = ActivationFunction::ScaledSigmoid;
        let mut layer = Layer::from_neurons(vec![
            Neuron::with_params(vec![1.0], 0.0, act),
            Neuron::with_params(vec![-1.0], 0.0, act),
        ]);
        let out = layer.feed_from(&[2.0]).unwrap();
        assert_eq!(out, vec![act.function(2.0), act.function(-2.0)]);
        assert_eq!(layer.outputs().unwrap(), out);
    }

    #[test]
    fn outputs_before_feed_is_uninitialized() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let layer = Layer::new(2, 2, ActivationFunction::ScaledSigmoid, &mut rng);
        assert!(matches!(layer.outputs(), Err(MlpError::UninitializedState(_))));
    }
}
