//! # Differentiable Operations
//!
//! Each operation is a method on [`Graph`] that coerces its arguments,
//! computes the forward value and appends a node carrying the matching
//! [`Op`] rule.
//!
//! - [`arithmetic`]: `add`, `sub`, `mul`, `div`, `pow`, `neg`.
//! - [`activation`]: `sigmoid`, `relu`, `tanh`.
//! - [`math_elem`]: `exp`, `ln`.

use crate::autograd::backward_op::Op;
use crate::error::NebulaError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::operand::Operand;

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

impl Graph {
    /// Shared body of every binary op. `forward` maps the operand values
    /// to the output value and the rule to store.
    pub(crate) fn binary_op<F>(&mut self, a: Operand, b: Operand, forward: F) -> Result<NodeId, NebulaError>
    where
        F: FnOnce(f64, f64) -> (f64, Op),
    {
        let (a, b) = self.coerce_pair(a, b)?;
        let (value, op) = forward(self.value_of(a), self.value_of(b));
        Ok(self.push(value, op, vec![a, b]))
    }

    /// Shared body of every unary op.
    pub(crate) fn unary_op<F>(&mut self, a: Operand, forward: F) -> Result<NodeId, NebulaError>
    where
        F: FnOnce(f64) -> (f64, Op),
    {
        let a = self.coerce(a)?;
        let (value, op) = forward(self.value_of(a));
        Ok(self.push(value, op, vec![a]))
    }
}
