//! # Activation Functions
//!
//! Non-linear functions whose derivative is expressed through their own
//! output. The output is captured in the node's [`Op`] at creation time and
//! reused unchanged by the backward pass.

use crate::autograd::backward_op::Op;
use crate::error::NebulaError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::operand::Operand;

/// Logistic function, evaluated without overflowing `exp` for large `|x|`.
fn logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

impl Graph {
    /// `σ(a) = 1 / (1 + e^(-a))`.
    pub fn sigmoid(&mut self, a: impl Into<Operand>) -> Result<NodeId, NebulaError> {
        self.unary_op(a.into(), |a| {
            let output = logistic(a);
            (output, Op::Sigmoid { output })
        })
    }

    /// `max(a, 0)`. The gradient passes through only where the output is positive.
    pub fn relu(&mut self, a: impl Into<Operand>) -> Result<NodeId, NebulaError> {
        self.unary_op(a.into(), |a| {
            let output = if a > 0.0 { a } else { 0.0 };
            (output, Op::Relu { output })
        })
    }

    /// Hyperbolic tangent.
    pub fn tanh(&mut self, a: impl Into<Operand>) -> Result<NodeId, NebulaError> {
        self.unary_op(a.into(), |a| {
            let output = a.tanh();
            (output, Op::Tanh { output })
        })
    }
}

#[cfg(test)]
#[path = "activation_test.rs"]
mod tests;
