use serde::{Serialize, Deserialize};

/// Activation applied by every neuron of a network.
///
/// Only the scaled-logistic family is supported. The tag is copied into each
/// neuron at construction, so neurons never need a handle back to the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    /// `-1 + 2 / (1 + e^(-z))`, with outputs in the open interval (-1, 1).
    #[default]
    ScaledSigmoid,
}

impl ActivationFunction {
    /// Applies the activation to a weighted sum `z`.
    pub fn function(&self, z: f64) -> f64 {
        match self {
            ActivationFunction::ScaledSigmoid => -1.0 + 2.0 / (1.0 + (-z).exp()),
        }
    }

    /// Derivative expressed in terms of the activation's *output* `y`.
    ///
    /// `y` must be a neuron's last output, never its weighted sum.
    pub fn derivative(&self, y: f64) -> f64 {
        match self {
            ActivationFunction::ScaledSigmoid => 0.5 * (1.0 + y) * (1.0 - y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACT: ActivationFunction = ActivationFunction::ScaledSigmoid;

    #[test]
    fn zero_sum_maps_to_zero() {
        assert_eq!(ACT.function(0.0), 0.0);
    }

    #[test]
    fn output_stays_inside_open_interval() {
        for z in [-20.0, -3.0, -0.5, 0.5, 3.0, 20.0] {
            let y = ACT.function(z);
            assert!(y > -1.0 && y < 1.0, "activation({z}) = {y}");
        }
    }

    #[test]
    fn function_is_odd() {
        for z in [0.1, 1.0, 2.5] {
            assert!((ACT.function(z) + ACT.function(-z)).abs() < 1e-12);
        }
    }

    #[test]
    fn derivative_peaks_at_half() {
        assert_eq!(ACT.derivative(0.0), 0.5);
    }

    #[test]
    fn derivative_vanishes_at_saturation() {
        assert!(ACT.derivative(1.0 - 1e-9).abs() < 1e-8);
        assert!(ACT.derivative(-1.0 + 1e-9).abs() < 1e-8);
        assert_eq!(ACT.derivative(1.0), 0.0);
        assert_eq!(ACT.derivative(-1.0), 0.0);
    }

    #[test]
    fn derivative_matches_numeric_slope() {
        let h = 1e-6;
        for z in [-2.0, -0.3, 0.0, 0.7, 1.9] {
            let numeric = (ACT.function(z + h) - ACT.function(z - h)) / (2.0 * h);
            let analytic = ACT.derivative(ACT.function(z));
            assert!((numeric - analytic).abs() < 1e-6, "z = {z}");
        }
    }
}
