//! Coercion of "a node or a number" arguments.

use crate::error::NebulaError;
use crate::graph::Graph;
use crate::node::NodeId;

/// An argument to a graph operation: an existing node or a bare number.
///
/// Every operation takes `impl Into<Operand>`, so any primitive number or
/// `NodeId` is accepted and anything else is a compile error. Numbers are
/// turned into fresh leaf nodes when the operation runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Number(f64),
    Ref(NodeId),
}

impl From<NodeId> for Operand {
    fn from(id: NodeId) -> Self {
        Operand::Ref(id)
    }
}

impl From<&NodeId> for Operand {
    fn from(id: &NodeId) -> Self {
        Operand::Ref(*id)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(value: $t) -> Self {
                    Operand::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Graph {
    /// Turns an operand into a node of this graph.
    ///
    /// Numbers become new leaves; references are validated.
    pub fn coerce(&mut self, operand: impl Into<Operand>) -> Result<NodeId, NebulaError> {
        match operand.into() {
            Operand::Number(value) => Ok(self.leaf(value)),
            Operand::Ref(id) => {
                self.check(id)?;
                Ok(id)
            }
        }
    }

    /// Coerces both operands of a binary op.
    ///
    /// Both references are validated before any literal leaf is created,
    /// so a failed call leaves the graph untouched.
    pub(crate) fn coerce_pair(&mut self, a: Operand, b: Operand) -> Result<(NodeId, NodeId), NebulaError> {
        for operand in [a, b] {
            if let Operand::Ref(id) = operand {
                self.check(id)?;
            }
        }
        Ok((self.coerce(a)?, self.coerce(b)?))
    }
}
