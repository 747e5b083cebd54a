use crate::error::NebulaError;
use crate::graph::Graph;
use crate::node::NodeId;
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical:?} != numerical grad {numerical:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNonFinite { input_index: usize, value: f64 },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNonFinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Invalid gradient check configuration: {0}")]
    InvalidConfig(String),

    #[error("Graph error during gradient check: {0}")]
    Graph(NebulaError),
}

impl From<NebulaError> for GradCheckError {
    fn from(err: NebulaError) -> Self {
        GradCheckError::Graph(err)
    }
}

/// Step size and tolerances for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Finite-difference step.
    pub epsilon: f64,
    /// Absolute tolerance, used when both gradients are close to zero.
    pub abs_tolerance: f64,
    /// Relative tolerance.
    pub rel_tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            abs_tolerance: 1e-6,
            rel_tolerance: 1e-4,
        }
    }
}

impl GradCheckConfig {
    fn validate(&self) -> Result<(), GradCheckError> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(GradCheckError::InvalidConfig(format!(
                "epsilon must be positive and finite, got {}",
                self.epsilon
            )));
        }
        if !(self.abs_tolerance >= 0.0 && self.rel_tolerance >= 0.0) {
            return Err(GradCheckError::InvalidConfig(format!(
                "tolerances must be non-negative, got abs={} rel={}",
                self.abs_tolerance, self.rel_tolerance
            )));
        }
        Ok(())
    }
}

/// Compute gradients using central finite differences.
///
/// # Arguments
/// * `f` - Function that takes a slice of variable values and returns a scalar
/// * `point` - The point at which to compute gradients
/// * `eps` - Step size (typically 1e-7 to 1e-5)
///
/// # Example
/// ```
/// use nebula_core::finite_diff_grad;
///
/// // f(x, y) = x^2 + y^2
/// let f = |v: &[f64]| v[0] * v[0] + v[1] * v[1];
/// let grads = finite_diff_grad(f, &[3.0, 4.0], 1e-7);
///
/// assert!((grads[0] - 6.0).abs() < 1e-5);
/// assert!((grads[1] - 8.0).abs() < 1e-5);
/// ```
pub fn finite_diff_grad<F>(f: F, point: &[f64], eps: f64) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
{
    let mut perturbed = point.to_vec();
    (0..point.len())
        .map(|i| {
            let (plus, minus) = central_pair(&mut perturbed, point, i, eps, &f);
            (plus - minus) / (2.0 * eps)
        })
        .collect()
}

/// Maximum absolute difference between two gradient vectors.
pub fn max_grad_error(grad1: &[f64], grad2: &[f64]) -> f64 {
    assert_eq!(grad1.len(), grad2.len(), "Gradient vectors must have the same length");
    grad1
        .iter()
        .zip(grad2.iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max)
}

/// Checks analytical gradients against numerical gradients.
///
/// `build` receives a fresh graph and one leaf per coordinate of `point`
/// and returns the output node. It is called once for the backward pass
/// and twice more per coordinate for the central differences.
///
/// # Example
/// ```
/// use nebula_core::{check_grad, GradCheckConfig};
///
/// let result = check_grad(
///     |graph, x| {
///         let prod = graph.mul(x[0], x[1])?;
///         graph.sigmoid(prod)
///     },
///     &[0.3, -1.2],
///     &GradCheckConfig::default(),
/// );
/// assert!(result.is_ok());
/// ```
pub fn check_grad<F>(build: F, point: &[f64], config: &GradCheckConfig) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, NebulaError>,
{
    config.validate()?;

    // --- Analytical gradients ---
    let mut graph = Graph::new();
    let inputs: Vec<NodeId> = point.iter().map(|&v| graph.leaf(v)).collect();
    let output = build(&mut graph, &inputs)?;
    graph.backward(output)?;
    let analytical = inputs
        .iter()
        .map(|&id| graph.gradient(id))
        .collect::<Result<Vec<f64>, NebulaError>>()?;

    // --- Numerical gradients ---
    let forward = |values: &[f64]| -> Result<f64, NebulaError> {
        let mut graph = Graph::new();
        let inputs: Vec<NodeId> = values.iter().map(|&v| graph.leaf(v)).collect();
        let output = build(&mut graph, &inputs)?;
        graph.value(output)
    };

    let mut perturbed = point.to_vec();
    for (i, &analytical_grad) in analytical.iter().enumerate() {
        perturbed[i] = point[i] + config.epsilon;
        let loss_plus = forward(&perturbed)?;
        perturbed[i] = point[i] - config.epsilon;
        let loss_minus = forward(&perturbed)?;
        perturbed[i] = point[i];

        let numerical = (loss_plus - loss_minus) / (2.0 * config.epsilon);
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNonFinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNonFinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        debug!(
            "check_grad: input {} analytical={} numerical={}",
            i, analytical_grad, numerical
        );
        if !relative_eq!(
            analytical_grad,
            numerical,
            epsilon = config.abs_tolerance,
            max_relative = config.rel_tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical: analytical_grad,
                numerical,
                difference: (analytical_grad - numerical).abs(),
            });
        }
    }
    Ok(())
}

/// Evaluates `f` at `point` shifted by `+eps` and `-eps` along axis `i`.
fn central_pair<F>(perturbed: &mut [f64], point: &[f64], i: usize, eps: f64, f: &F) -> (f64, f64)
where
    F: Fn(&[f64]) -> f64,
{
    perturbed[i] = point[i] + eps;
    let plus = f(&*perturbed);
    perturbed[i] = point[i] - eps;
    let minus = f(&*perturbed);
    perturbed[i] = point[i];
    (plus, minus)
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
