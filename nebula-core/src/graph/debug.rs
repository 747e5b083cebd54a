use crate::autograd::backward_op::Op;
use crate::graph::Graph;
use crate::node::{Node, NodeId};
use std::fmt;

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node(value={}, gradient={})", self.value, self.gradient)
    }
}

/// One line per node, e.g. `#2 = mul(#0, #1) Node(value=6, gradient=1)`.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, node) in self.iter() {
            write!(f, "{} = {}", id, node.op)?;
            if !node.operands.is_empty() {
                let operands: Vec<String> = node.operands.iter().map(ToString::to_string).collect();
                write!(f, "({})", operands.join(", "))?;
            }
            writeln!(f, " {}", node)?;
        }
        Ok(())
    }
}
