//! Gradient rules, graph traversal and gradient checking.

pub mod backward_op;
pub mod grad_check;
pub(crate) mod graph;

pub use backward_op::Op;
pub use grad_check::{check_grad, finite_diff_grad, max_grad_error, GradCheckConfig, GradCheckError};
