//! # nebula-core - Scalar Reverse-mode Automatic Differentiation
//!
//! Every value is a node in a dynamically built computation graph. Operations
//! append new nodes that remember their operands and the rule for passing a
//! gradient back to them; [`Graph::backward`] walks the graph in reverse
//! topological order and accumulates `d(root)/d(node)` on every reachable node.
//!
//! ## Quick Start
//!
//! ```
//! use nebula_core::{Graph, NebulaError};
//!
//! # fn main() -> Result<(), NebulaError> {
//! let mut graph = Graph::new();
//! let a = graph.leaf(2.0);
//! let b = graph.leaf(3.0);
//!
//! // c = sigmoid(a * b + 1); plain numbers are accepted wherever a node is
//! let ab = graph.mul(a, b)?;
//! let shifted = graph.add(ab, 1.0)?;
//! let c = graph.sigmoid(shifted)?;
//!
//! graph.backward(c)?;
//! let s = graph.value(c)?;
//! assert!((graph.gradient(a)? - s * (1.0 - s) * 3.0).abs() < 1e-12);
//! assert!((graph.gradient(b)? - s * (1.0 - s) * 2.0).abs() < 1e-12);
//! println!("{}", graph.node(c)?); // Node(value=0.999..., gradient=1)
//! # Ok(())
//! # }
//! ```
//!
//! ## Supported Operations
//!
//! | Category | Operations |
//! |----------|------------|
//! | Arithmetic | `add`, `sub`, `mul`, `div`, `pow`, `neg` |
//! | Activation | `sigmoid`, `relu`, `tanh` |
//! | Elementary | `exp`, `ln` |
//!
//! ## Architecture
//!
//! - **[`Graph`]**: arena owning all nodes; every operation is a method on it.
//! - **[`NodeId`]**: copyable handle into one graph.
//! - **[`Op`]**: the per-node gradient rule, a plain enum.
//! - **[`Operand`]**: "node or number" argument; numbers become leaves.
//! - **[`check_grad`]**: compares gradients against finite differences.
//!
//! Numeric domain errors (division by zero, logarithm of a negative number)
//! are not reported: they flow through the graph as infinities and NaNs.

pub mod autograd;
pub mod error;
pub mod graph;
pub mod node;
pub mod operand;
pub mod ops;
pub mod utils;

pub use autograd::backward_op::Op;
pub use autograd::grad_check::{check_grad, finite_diff_grad, max_grad_error, GradCheckConfig, GradCheckError};
pub use error::NebulaError;
pub use graph::Graph;
pub use node::{Node, NodeId};
pub use operand::Operand;
