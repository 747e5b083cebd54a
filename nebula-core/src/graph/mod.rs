//! The arena owning every node of a computation.

use crate::autograd::backward_op::Op;
use crate::error::NebulaError;
use crate::node::{Node, NodeId};
use log::trace;
use std::sync::atomic::{AtomicU64, Ordering};

pub mod autograd_methods;
pub mod debug;

/// Global counter for graph ids, so handles from different graphs never compare equal.
static GRAPH_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

fn next_graph_id() -> u64 {
    GRAPH_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// A dynamically built computation graph of scalar nodes.
///
/// Nodes are appended and never removed; a node can only reference nodes
/// that already exist, so the graph is acyclic by construction. All nodes
/// are dropped together with the graph.
///
/// A clone is an independent copy with its own id. Handles taken before
/// cloning stay valid in both copies; handles minted by either copy after
/// the fork are rejected by the other.
#[derive(Debug)]
pub struct Graph {
    id: u64,
    nodes: Vec<Node>,
    /// `(graph id, node count at the fork)` of every graph this one was cloned from.
    forked_from: Vec<(u64, usize)>,
}

impl Clone for Graph {
    fn clone(&self) -> Self {
        let mut forked_from = self.forked_from.clone();
        forked_from.push((self.id, self.nodes.len()));
        Graph {
            id: next_graph_id(),
            nodes: self.nodes.clone(),
            forked_from,
        }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            id: next_graph_id(),
            nodes: Vec::new(),
            forked_from: Vec::new(),
        }
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            id: next_graph_id(),
            nodes: Vec::with_capacity(capacity),
            forked_from: Vec::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Number of nodes, including literal leaves created by coercion.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Wraps a raw number in a new leaf node.
    pub fn leaf(&mut self, value: f64) -> NodeId {
        self.push(value, Op::Leaf, Vec::new())
    }

    /// Returns the node behind `id`.
    pub fn node(&self, id: NodeId) -> Result<&Node, NebulaError> {
        let index = self.check(id)?;
        Ok(&self.nodes[index])
    }

    /// The forward value of `id`.
    pub fn value(&self, id: NodeId) -> Result<f64, NebulaError> {
        self.node(id).map(Node::value)
    }

    /// The gradient accumulated on `id` so far.
    pub fn gradient(&self, id: NodeId) -> Result<f64, NebulaError> {
        self.node(id).map(Node::gradient)
    }

    /// Iterates over all nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(move |(index, node)| (self.id_at(index), node))
    }

    /// Validates that `id` refers to a node of this graph and returns its arena index.
    ///
    /// Handles minted by a graph this one was cloned from are accepted only
    /// for nodes that existed when the clone was taken.
    pub(crate) fn check(&self, id: NodeId) -> Result<usize, NebulaError> {
        let len = if id.graph == self.id {
            self.nodes.len()
        } else {
            match self.forked_from.iter().find(|(graph, _)| *graph == id.graph) {
                Some(&(_, fork_len)) => fork_len,
                None => {
                    return Err(NebulaError::ForeignNode {
                        index: id.index,
                        node_graph: id.graph,
                        graph: self.id,
                    })
                }
            }
        };
        if id.index >= len {
            return Err(NebulaError::NodeOutOfBounds { index: id.index, len });
        }
        Ok(id.index)
    }

    /// Appends a node. Operands must already have been validated.
    pub(crate) fn push(&mut self, value: f64, op: Op, operands: Vec<NodeId>) -> NodeId {
        let id = self.id_at(self.nodes.len());
        trace!("graph {}: {} = {} {:?} -> {}", self.id, id, op.name(), operands, value);
        self.nodes.push(Node::new(value, op, operands));
        id
    }

    /// Value lookup for an id already validated by [`Graph::check`].
    pub(crate) fn value_of(&self, id: NodeId) -> f64 {
        self.nodes[id.index].value
    }

    pub(crate) fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    fn id_at(&self, index: usize) -> NodeId {
        NodeId {
            graph: self.id,
            index,
        }
    }
}
