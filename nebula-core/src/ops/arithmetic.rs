// nebula-core/src/ops/arithmetic.rs

use crate::autograd::backward_op::Op;
use crate::error::NebulaError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::operand::Operand;

impl Graph {
    /// `a + b`.
    pub fn add(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> Result<NodeId, NebulaError> {
        self.binary_op(a.into(), b.into(), |a, b| (a + b, Op::Add))
    }

    /// `a - b`.
    pub fn sub(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> Result<NodeId, NebulaError> {
        self.binary_op(a.into(), b.into(), |a, b| (a - b, Op::Sub))
    }

    /// `a * b`.
    pub fn mul(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> Result<NodeId, NebulaError> {
        self.binary_op(a.into(), b.into(), |a, b| (a * b, Op::Mul))
    }

    /// `a / b`. Dividing by zero yields an infinite or NaN value, not an error.
    pub fn div(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> Result<NodeId, NebulaError> {
        self.binary_op(a.into(), b.into(), |a, b| (a / b, Op::Div))
    }

    /// `a ^ b`.
    ///
    /// The gradient with respect to the exponent is `ln(a) * a^b * g`, so it
    /// is only finite for `a > 0`. Callers differentiating through a
    /// variable exponent must keep the base positive; with a constant
    /// exponent only that constant's leaf receives the non-finite value.
    pub fn pow(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> Result<NodeId, NebulaError> {
        self.binary_op(a.into(), b.into(), |a, b| {
            let output = a.powf(b);
            (output, Op::Pow { output })
        })
    }

    /// `-a`.
    pub fn neg(&mut self, a: impl Into<Operand>) -> Result<NodeId, NebulaError> {
        self.unary_op(a.into(), |a| (-a, Op::Neg))
    }
}

#[cfg(test)]
#[path = "arithmetic_test.rs"]
mod tests;
