use crate::autograd::backward_op::Op;
use crate::error::NebulaError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::operand::Operand;

impl Graph {
    /// `e^a`.
    pub fn exp(&mut self, a: impl Into<Operand>) -> Result<NodeId, NebulaError> {
        self.unary_op(a.into(), |a| {
            let output = a.exp();
            (output, Op::Exp { output })
        })
    }

    /// Natural logarithm. NaN for negative `a`, `-inf` at zero.
    pub fn ln(&mut self, a: impl Into<Operand>) -> Result<NodeId, NebulaError> {
        self.unary_op(a.into(), |a| (a.ln(), Op::Ln))
    }
}
