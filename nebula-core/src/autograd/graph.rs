use crate::node::Node;

/// Builds a topological sort of the nodes reachable from `root`.
///
/// Depth-first over `operands`, in argument order, appending a node only
/// after all of its operands (post-order). Each node is visited once,
/// by arena index. The root is the last element of the result.
///
/// Uses an explicit stack, so the depth of the graph is not limited by
/// the call stack.
pub(crate) fn topological_sort(nodes: &[Node], root: usize) -> Vec<usize> {
    let mut visited = vec![false; nodes.len()];
    let mut sorted = Vec::new();
    // (node index, position of the next operand to visit)
    let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
    visited[root] = true;

    while let Some(frame) = stack.last_mut() {
        let (index, next) = *frame;
        match nodes[index].operands.get(next) {
            Some(operand) => {
                frame.1 += 1;
                let child = operand.index;
                if !visited[child] {
                    visited[child] = true;
                    stack.push((child, 0));
                }
            }
            None => {
                sorted.push(index);
                stack.pop();
            }
        }
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Graph;

    #[test]
    fn test_topological_sort_simple() {
        let mut graph = Graph::new();
        let x = graph.leaf(1.0);
        let y = graph.leaf(2.0);
        let z = graph.add(x, y).unwrap();

        let order = topological_sort(graph.nodes(), z.index());
        assert_eq!(order, vec![x.index(), y.index(), z.index()]);
    }

    #[test]
    fn test_topological_sort_shared_node() {
        let mut graph = Graph::new();
        let x = graph.leaf(1.0);
        let z = graph.mul(x, x).unwrap();

        let order = topological_sort(graph.nodes(), z.index());
        assert_eq!(order.len(), 2);
    }

    #[test]
    fn test_topological_sort_skips_unreachable() {
        let mut graph = Graph::new();
        let x = graph.leaf(1.0);
        let unrelated = graph.leaf(5.0);
        let y = graph.neg(x).unwrap();
        let _later = graph.mul(y, unrelated).unwrap();

        let order = topological_sort(graph.nodes(), y.index());
        assert_eq!(order, vec![x.index(), y.index()]);
    }

    #[test]
    fn test_topological_sort_operands_before_consumers() {
        // Diamond: z = (x + y) * (x - y)
        let mut graph = Graph::new();
        let x = graph.leaf(3.0);
        let y = graph.leaf(2.0);
        let a = graph.add(x, y).unwrap();
        let b = graph.sub(x, y).unwrap();
        let z = graph.mul(a, b).unwrap();

        let order = topological_sort(graph.nodes(), z.index());
        assert_eq!(order.len(), 5);
        let position = |index: usize| order.iter().position(|&i| i == index).unwrap();
        for &node in &order {
            for operand in graph.nodes()[node].operands() {
                assert!(position(operand.index()) < position(node));
            }
        }
        assert_eq!(*order.last().unwrap(), z.index());
    }

    #[test]
    fn test_topological_sort_deep_chain() {
        let mut graph = Graph::new();
        let mut current = graph.leaf(0.0);
        for _ in 0..200_000 {
            current = graph.add(current, 1.0).unwrap();
        }
        let order = topological_sort(graph.nodes(), current.index());
        // Every add introduces one coerced literal leaf.
        assert_eq!(order.len(), 1 + 2 * 200_000);
    }
}
