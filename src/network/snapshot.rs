use serde::{Serialize, Deserialize};

/// Parameters of one neuron, detached from its runtime metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeuronParams {
    pub weights: Vec<f64>,
    pub bias: f64,
}

/// Read-only copy of every weight and bias, indexed layer → neuron.
///
/// Captured instead of cloning a live network; `Network::from_snapshot`
/// rebuilds an equivalent network when one is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub layers: Vec<Vec<NeuronParams>>,
}

impl NetworkSnapshot {
    /// Copy with every weight and bias rounded to `decimals` places.
    pub fn rounded(&self, decimals: u32) -> NetworkSnapshot {
        let layers = self.layers.iter()
            .map(|layer| {
                layer.iter()
                    .map(|n| NeuronParams {
                        weights: n.weights.iter().map(|&w| round_to(w, decimals)).collect(),
                        bias: round_to(n.bias, decimals),
                    })
                    .collect()
            })
            .collect();
        NetworkSnapshot { layers }
    }
}

/// Rounds `value` half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
