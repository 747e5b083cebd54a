use log::debug;
use nebula_core::{Graph, NodeId};
use rand::Rng;

use crate::activation::Activation;
use crate::error::NnError;
use crate::init::Init;
use crate::neuron::Neuron;

/// Shape and initialization of a fully connected [`Layer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerConfig {
    pub inputs: usize,
    pub outputs: usize,
    pub activation: Activation,
    pub init: Init,
}

impl LayerConfig {
    /// Sigmoid neurons with weights drawn from `Init::default()`.
    pub fn new(inputs: usize, outputs: usize) -> Self {
        LayerConfig {
            inputs,
            outputs,
            activation: Activation::default(),
            init: Init::default(),
        }
    }

    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    pub fn with_init(mut self, init: Init) -> Self {
        self.init = init;
        self
    }
}

/// `outputs` neurons that each see every input.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    inputs: usize,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(graph: &mut Graph, config: &LayerConfig, rng: &mut R) -> Result<Self, NnError> {
        config.init.validate()?;
        let neurons = (0..config.outputs)
            .map(|_| Neuron::new(graph, config.inputs, config.init, config.activation, rng))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(
            "Layer created: {} -> {} ({:?}), {} parameters",
            config.inputs,
            config.outputs,
            config.activation,
            config.outputs * (config.inputs + 1)
        );
        Ok(Layer { neurons, inputs: config.inputs })
    }

    pub fn input_size(&self) -> usize {
        self.inputs
    }

    pub fn output_size(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// One output node per neuron, in neuron order.
    pub fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, NnError> {
        if inputs.len() != self.inputs {
            return Err(NnError::InputSizeMismatch {
                expected: self.inputs,
                actual: inputs.len(),
            });
        }
        self.neurons.iter().map(|n| n.forward(graph, inputs)).collect()
    }

    /// Every weight and bias handle, grouped by neuron.
    pub fn parameters(&self) -> Vec<NodeId> {
        self.neurons.iter().flat_map(Neuron::parameters).collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
