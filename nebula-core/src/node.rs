use crate::autograd::backward_op::Op;

/// Stable handle to a node stored in a [`Graph`](crate::Graph).
///
/// A `NodeId` is only meaningful for the graph that created it. It carries
/// the id of that graph so that handles passed to the wrong graph are
/// rejected instead of silently aliasing an unrelated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) graph: u64,
    pub(crate) index: usize,
}

impl NodeId {
    /// Position of the node inside its graph's arena.
    ///
    /// Operands always have a smaller index than the nodes built from them.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Id of the graph that minted this handle.
    pub fn graph_id(&self) -> u64 {
        self.graph
    }
}

/// A scalar value in the computation graph plus its gradient bookkeeping.
///
/// `operands` and `op` are fixed at construction. Only `gradient` changes
/// afterwards, and only through [`Graph::backward`](crate::Graph::backward)
/// and [`Graph::zero_grad`](crate::Graph::zero_grad).
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) value: f64,
    pub(crate) gradient: f64,
    pub(crate) operands: Vec<NodeId>,
    pub(crate) op: Op,
}

impl Node {
    pub(crate) fn new(value: f64, op: Op, operands: Vec<NodeId>) -> Self {
        debug_assert_eq!(operands.len(), op.arity());
        Node {
            value,
            gradient: 0.0,
            operands,
            op,
        }
    }

    /// The forward-computed value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The accumulated gradient. Zero until a backward pass reaches this node.
    pub fn gradient(&self) -> f64 {
        self.gradient
    }

    /// The nodes this one was computed from, in argument order.
    pub fn operands(&self) -> &[NodeId] {
        &self.operands
    }

    /// The gradient rule of this node.
    pub fn op(&self) -> &Op {
        &self.op
    }

    pub fn is_leaf(&self) -> bool {
        self.op.is_leaf()
    }
}
