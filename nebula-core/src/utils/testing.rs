use crate::graph::Graph;
use crate::node::NodeId;

/// Checks that `actual` is within `tolerance` of `expected`; equal
/// infinities match. Panics with both values if it is not.
pub fn check_near(actual: f64, expected: f64, tolerance: f64) {
    if actual == expected {
        return;
    }
    let diff = (actual - expected).abs();
    if diff.is_nan() || diff > tolerance {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, expected, diff, tolerance
        );
    }
}

/// Checks the gradients of `ids` against `expected`, element by element.
/// Panics on the first mismatch or if `ids` is not part of `graph`.
pub fn check_gradients_near(graph: &Graph, ids: &[NodeId], expected: &[f64], tolerance: f64) {
    assert_eq!(ids.len(), expected.len(), "Gradient count mismatch");

    for (i, (id, e)) in ids.iter().zip(expected.iter()).enumerate() {
        let actual = graph
            .gradient(*id)
            .unwrap_or_else(|err| panic!("Gradient lookup failed for input {}: {}", i, err));
        let diff = (actual - *e).abs();
        if actual != *e && (diff.is_nan() || diff > tolerance) {
            panic!(
                "Gradient mismatch at input {} ({}): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, id, actual, e, diff, tolerance
            );
        }
    }
}
