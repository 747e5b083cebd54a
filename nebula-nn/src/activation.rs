use nebula_core::{Graph, NebulaError, NodeId};

/// Nonlinearity applied to a neuron's pre-activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Sigmoid,
    Relu,
    Tanh,
    /// Passes the pre-activation through without adding a node.
    Identity,
}

impl Activation {
    pub fn apply(self, graph: &mut Graph, x: NodeId) -> Result<NodeId, NebulaError> {
        match self {
            Activation::Sigmoid => graph.sigmoid(x),
            Activation::Relu => graph.relu(x),
            Activation::Tanh => graph.tanh(x),
            Activation::Identity => {
                graph.node(x)?;
                Ok(x)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_apply() -> Result<(), NebulaError> {
        let mut graph = Graph::new();
        let x = graph.leaf(-0.5);

        let s = Activation::Sigmoid.apply(&mut graph, x)?;
        assert_relative_eq!(graph.value(s)?, 1.0 / (1.0 + 0.5_f64.exp()), epsilon = 1e-12);
        let r = Activation::Relu.apply(&mut graph, x)?;
        assert_eq!(graph.value(r)?, 0.0);
        let t = Activation::Tanh.apply(&mut graph, x)?;
        assert_relative_eq!(graph.value(t)?, (-0.5_f64).tanh(), epsilon = 1e-12);

        let len = graph.len();
        assert_eq!(Activation::Identity.apply(&mut graph, x)?, x);
        assert_eq!(graph.len(), len);
        Ok(())
    }

    #[test]
    fn test_identity_rejects_foreign_node() {
        let mut other = Graph::new();
        let x = other.leaf(1.0);
        let mut graph = Graph::new();
        assert!(matches!(
            Activation::Identity.apply(&mut graph, x),
            Err(NebulaError::ForeignNode { .. })
        ));
    }
}
