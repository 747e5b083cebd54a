use crate::autograd::backward_op::Op;
use crate::autograd::graph::topological_sort;
use crate::error::NebulaError;
use crate::graph::Graph;
use crate::node::NodeId;
use log::{debug, trace};

impl Graph {
    /// Performs the backward pass starting from `root`.
    ///
    /// Seeds the root gradient with `1.0` (overwriting whatever it held),
    /// visits every node reachable from the root in reverse topological
    /// order and applies each node's rule, adding its contributions to the
    /// operands' gradients. Afterwards every reachable node holds
    /// `d(root)/d(node)`.
    ///
    /// Gradients of nodes other than the root are added to, never reset:
    /// call [`Graph::zero_grad`] between passes to start from zero.
    ///
    /// Non-finite values are propagated, not reported. A `pow` node whose
    /// base is not positive is logged at `debug` level because its exponent
    /// branch involves `ln(base)`; with a constant exponent only the
    /// literal's leaf receives the non-finite value.
    ///
    /// # Errors
    /// Returns `NebulaError` if `root` does not belong to this graph.
    pub fn backward(&mut self, root: NodeId) -> Result<(), NebulaError> {
        let root_index = self.check(root)?;
        self.nodes_mut()[root_index].gradient = 1.0;

        let sorted = topological_sort(self.nodes(), root_index);
        debug!(
            "backward: graph {}, {} nodes reachable from {}",
            self.id(),
            sorted.len(),
            root
        );

        for &index in sorted.iter().rev() {
            let node = &self.nodes()[index];
            if node.op.is_leaf() {
                continue;
            }

            let inputs: Vec<f64> = node
                .operands
                .iter()
                .map(|operand| self.value_of(*operand))
                .collect();
            if matches!(node.op, Op::Pow { .. }) && inputs[0] <= 0.0 {
                debug!(
                    "backward: pow node #{} has non-positive base {}; exponent gradient is not finite",
                    index, inputs[0]
                );
            }
            let contributions = node.op.contributions(&inputs, node.gradient);
            trace!(
                "backward: #{} {} upstream={} contributions={:?}",
                index,
                node.op.name(),
                node.gradient,
                contributions
            );

            for (k, contribution) in contributions.into_iter().enumerate() {
                let target = self.nodes()[index].operands[k].index;
                self.nodes_mut()[target].gradient += contribution;
            }
        }

        debug!("backward: graph {} done", self.id());
        Ok(())
    }

    /// Resets every gradient in the graph to zero.
    pub fn zero_grad(&mut self) {
        debug!("zero_grad: graph {}, {} nodes", self.id(), self.len());
        for node in self.nodes_mut() {
            node.gradient = 0.0;
        }
    }

    /// The nodes reachable from `root`, operands before consumers, `root` last.
    pub fn topological_order(&self, root: NodeId) -> Result<Vec<NodeId>, NebulaError> {
        let root_index = self.check(root)?;
        Ok(topological_sort(self.nodes(), root_index)
            .into_iter()
            .map(|index| NodeId {
                graph: self.id(),
                index,
            })
            .collect())
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
