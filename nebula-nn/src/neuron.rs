use log::trace;
use nebula_core::{Graph, NodeId};
use rand::Rng;

use crate::activation::Activation;
use crate::error::NnError;
use crate::init::Init;

/// A single unit computing `activation(Σ wᵢ·xᵢ + bias)`.
///
/// Weights and bias are leaves of the graph passed to [`Neuron::new`]; the
/// neuron only stores their handles.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<NodeId>,
    bias: NodeId,
    activation: Activation,
}

impl Neuron {
    /// Creates `input_size` weight leaves followed by one bias leaf, all drawn from `init`.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        input_size: usize,
        init: Init,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, NnError> {
        let weights = init
            .sample_n(input_size, rng)?
            .into_iter()
            .map(|w| graph.leaf(w))
            .collect();
        let bias = graph.leaf(init.sample(rng)?);
        Ok(Neuron { weights, bias, activation })
    }

    pub fn input_size(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[NodeId] {
        &self.weights
    }

    pub fn bias(&self) -> NodeId {
        self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Weights first, then the bias.
    pub fn parameters(&self) -> Vec<NodeId> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }

    pub fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<NodeId, NnError> {
        if inputs.len() != self.weights.len() {
            return Err(NnError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        let mut sum = self.bias;
        for (&w, &x) in self.weights.iter().zip(inputs) {
            let wx = graph.mul(w, x)?;
            sum = graph.add(sum, wx)?;
        }
        let out = self.activation.apply(graph, sum)?;
        trace!("Neuron forward: {} inputs -> {}", inputs.len(), out);
        Ok(out)
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
