use super::*;
use crate::utils::testing::check_near;
use approx::assert_relative_eq;

#[test]
fn test_basic_arithmetic() -> Result<(), NebulaError> {
    let mut graph = Graph::new();
    let x = graph.leaf(2.0);
    let y = graph.leaf(3.0);

    let sum = graph.add(x, y)?;
    let diff = graph.sub(x, y)?;
    let prod = graph.mul(x, y)?;
    let quot = graph.div(x, y)?;
    let power = graph.pow(x, y)?;
    let neg = graph.neg(x)?;

    check_near(graph.value(sum)?, 5.0, 1e-12);
    check_near(graph.value(diff)?, -1.0, 1e-12);
    check_near(graph.value(prod)?, 6.0, 1e-12);
    check_near(graph.value(quot)?, 2.0 / 3.0, 1e-12);
    check_near(graph.value(power)?, 8.0, 1e-12);
    check_near(graph.value(neg)?, -2.0, 1e-12);
    Ok(())
}

#[test]
fn test_operands_are_ordered() -> Result<(), NebulaError> {
    let mut graph = Graph::new();
    let x = graph.leaf(2.0);
    let y = graph.leaf(3.0);
    let z = graph.sub(y, x)?;

    let node = graph.node(z)?;
    assert_eq!(node.operands(), &[y, x]);
    assert_eq!(node.op(), &Op::Sub);
    assert_eq!(node.value(), 1.0);
    Ok(())
}

#[test]
fn test_number_operands_become_leaves() -> Result<(), NebulaError> {
    let mut graph = Graph::new();
    let x = graph.leaf(4.0);
    let z = graph.mul(x, 4)?;

    assert_eq!(graph.len(), 3);
    let literal = graph.node(z)?.operands()[1];
    assert!(graph.node(literal)?.is_leaf());
    assert_eq!(graph.value(literal)?, 4.0);

    // Both sides may be numbers.
    let w = graph.add(1.5, 2_u8)?;
    assert_eq!(graph.value(w)?, 3.5);
    Ok(())
}

#[test]
fn test_identities() -> Result<(), NebulaError> {
    let mut graph = Graph::new();
    for value in [-3.5, 0.0, 1.0, 42.0, 1e-300] {
        let a = graph.leaf(value);
        let plus_zero = graph.add(a, 0.0)?;
        let times_one = graph.mul(a, 1.0)?;
        assert_eq!(graph.value(plus_zero)?, value);
        assert_eq!(graph.value(times_one)?, value);
    }
    Ok(())
}

#[test]
fn test_gradient_add() -> Result<(), NebulaError> {
    let mut graph = Graph::new();
    let x = graph.leaf(2.0);
    let y = graph.leaf(3.0);
    let z = graph.add(x, y)?;

    graph.backward(z)?;
    assert_eq!(graph.gradient(x)?, 1.0);
    assert_eq!(graph.gradient(y)?, 1.0);
    assert_eq!(graph.gradient(z)?, 1.0);
    Ok(())
}

#[test]
fn test_gradient_sub() -> Result<(), NebulaError> {
    let mut graph = Graph::new();
    let x = graph.leaf(2.0);
    let y = graph.leaf(3.0);
    let z = graph.sub(x, y)?;

    graph.backward(z)?;
    assert_eq!(graph.gradient(x)?, 1.0);
    assert_eq!(graph.gradient(y)?, -1.0);
    Ok(())
}

#[test]
fn test_gradient_mul() -> Result<(), NebulaError> {
    // dz/dx = y, dz/dy = x
    let mut graph = Graph::new();
    let x = graph.leaf(2.0);
    let y = graph.leaf(3.0);
    let z = graph.mul(x, y)?;

    graph.backward(z)?;
    assert_eq!(graph.gradient(x)?, 3.0);
    assert_eq!(graph.gradient(y)?, 2.0);
    Ok(())
}

#[test]
fn test_gradient_div() -> Result<(), NebulaError> {
    // dz/dx = 1/y, dz/dy = -x/y^2
    let mut graph = Graph::new();
    let x = graph.leaf(2.0);
    let y = graph.leaf(4.0);
    let z = graph.div(x, y)?;

    graph.backward(z)?;
    assert_relative_eq!(graph.gradient(x)?, 0.25);
    assert_relative_eq!(graph.gradient(y)?, -2.0 / 16.0);
    Ok(())
}

#[test]
fn test_div_by_zero_is_non_finite() -> Result<(), NebulaError> {
    let mut graph = Graph::new();
    let x = graph.leaf(1.0);
    let z = graph.div(x, 0.0)?;
    assert_eq!(graph.value(z)?, f64::INFINITY);

    let nan = graph.div(0.0, 0.0)?;
    assert!(graph.value(nan)?.is_nan());

    graph.backward(z)?;
    assert_eq!(graph.gradient(x)?, f64::INFINITY);
    Ok(())
}

#[test]
fn test_gradient_pow() -> Result<(), NebulaError> {
    // z = x^y; dz/dx = y*x^(y-1), dz/dy = ln(x)*x^y
    let mut graph = Graph::new();
    let x = graph.leaf(2.0);
    let y = graph.leaf(3.0);
    let z = graph.pow(x, y)?;

    graph.backward(z)?;
    assert_relative_eq!(graph.gradient(x)?, 12.0);
    assert_relative_eq!(graph.gradient(y)?, 2.0_f64.ln() * 8.0);
    Ok(())
}

#[test]
fn test_pow_negative_base_constant_exponent() -> Result<(), NebulaError> {
    // The base gradient is fine; only the exponent leaf gets NaN.
    let mut graph = Graph::new();
    let x = graph.leaf(-3.0);
    let z = graph.pow(x, 2.0)?;
    let exponent = graph.node(z)?.operands()[1];

    graph.backward(z)?;
    assert_relative_eq!(graph.value(z)?, 9.0);
    assert_relative_eq!(graph.gradient(x)?, -6.0);
    assert!(graph.gradient(exponent)?.is_nan());
    Ok(())
}

#[test]
fn test_gradient_neg() -> Result<(), NebulaError> {
    let mut graph = Graph::new();
    let x = graph.leaf(2.0);
    let z = graph.neg(x)?;

    graph.backward(z)?;
    assert_eq!(graph.gradient(x)?, -1.0);
    Ok(())
}

#[test]
fn test_foreign_operand_rejected() {
    let mut other = Graph::new();
    let foreign = other.leaf(1.0);

    let mut graph = Graph::new();
    let x = graph.leaf(2.0);
    let result = graph.add(x, foreign);
    match result {
        Err(NebulaError::ForeignNode { index, node_graph, graph: graph_id }) => {
            assert_eq!(index, foreign.index());
            assert_eq!(node_graph, other.id());
            assert_eq!(graph_id, graph.id());
        }
        unexpected => panic!("Incorrect result returned: {:?}", unexpected),
    }
    // No literal or result node was appended.
    assert_eq!(graph.len(), 1);

    let result = graph.mul(3.0, foreign);
    assert!(result.is_err());
    assert_eq!(graph.len(), 1);
}
