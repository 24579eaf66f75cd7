//! Dijkstra's algorithm and the shared best-first loop.

use super::queue::Frontier;
use super::ShortestPath;
use crate::error::Result;
use crate::graph::traversal::reconstruct;
use crate::graph::{check_node, GraphView};
use tracing::debug;

/// Cheapest path from `source` to `destination`.
///
/// Requires strictly positive weights, which [`GraphView`] guarantees.
/// Stops as soon as the destination is settled.
///
/// # Examples
///
/// ```
/// use u_pathfind::graph::Graph;
/// use u_pathfind::shortest::dijkstra;
///
/// let graph = Graph::from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 5.0)], true).unwrap();
/// let result = dijkstra(&graph, 0, 2).unwrap();
/// assert_eq!(result.nodes, vec![0, 1, 2]);
/// assert_eq!(result.cost, 2.0);
/// ```
///
/// # Errors
/// Returns [`PathError::NodeOutOfRange`](crate::PathError::NodeOutOfRange)
/// if either endpoint is not in the graph. An unreachable destination is
/// not an error; see [`ShortestPath::is_reachable`].
pub fn dijkstra<G: GraphView + ?Sized>(graph: &G, source: usize, destination: usize) -> Result<ShortestPath> {
    check_node(graph, source)?;
    check_node(graph, destination)?;
    Ok(best_first(graph, source, destination, |_| 0.0))
}

/// Best-first search keyed by `distance(node) + heuristic(node)`.
///
/// With a zero heuristic this is Dijkstra. Endpoints must already be
/// validated.
pub(crate) fn best_first<G, H>(graph: &G, source: usize, destination: usize, heuristic: H) -> ShortestPath
where
    G: GraphView + ?Sized,
    H: Fn(usize) -> f64,
{
    let n = graph.node_count();
    let mut distance = vec![f64::INFINITY; n];
    let mut predecessor = vec![None; n];
    let mut settled = vec![false; n];
    let mut expanded = 0usize;
    let mut frontier = Frontier::new();

    distance[source] = 0.0;
    frontier.push(source, heuristic(source));

    while let Some(node) = frontier.pop() {
        if settled[node] {
            continue;
        }
        settled[node] = true;
        expanded += 1;
        if node == destination {
            break;
        }

        for &next in graph.neighbors(node) {
            if settled[next] {
                continue;
            }
            let Some(w) = graph.weight(node, next) else {
                continue;
            };
            let candidate = distance[node] + w;
            if candidate < distance[next] {
                distance[next] = candidate;
                predecessor[next] = Some(node);
                frontier.push(next, candidate + heuristic(next));
            }
        }
    }

    if !distance[destination].is_finite() {
        debug!(source, destination, expanded, "destination unreachable");
        return ShortestPath::unreachable(expanded);
    }

    let nodes = reconstruct(&predecessor, source, destination);
    if nodes.is_empty() {
        return ShortestPath::unreachable(expanded);
    }

    ShortestPath {
        nodes,
        cost: distance[destination],
        expanded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::sample_graph;
    use crate::graph::Graph;
    use crate::PathError;

    fn path_cost(graph: &Graph, path: &[usize]) -> f64 {
        path.windows(2).map(|p| graph.weight(p[0], p[1]).unwrap()).sum()
    }

    #[test]
    fn test_sample_graph_minimum() {
        let g = sample_graph();
        let result = dijkstra(&g, 0, 10).unwrap();
        assert_eq!(result.cost, 12.0);
        // two routes tie at 12: 0-5-6-9-10 and 0-5-7-8-10
        assert!(
            result.nodes == vec![0, 5, 6, 9, 10] || result.nodes == vec![0, 5, 7, 8, 10],
            "unexpected path {:?}",
            result.nodes
        );
        assert_eq!(path_cost(&g, &result.nodes), 12.0);
        assert!(result.is_reachable());
        assert_eq!(result.hops(), Some(4));
    }

    #[test]
    fn test_beats_fewest_hops_route() {
        let g = sample_graph();
        // 0-3-6-9-10 is 13, strictly worse than the optimum
        let result = dijkstra(&g, 0, 10).unwrap();
        assert!(result.cost < path_cost(&g, &[0, 3, 6, 9, 10]));
    }

    #[test]
    fn test_deterministic() {
        let g = sample_graph();
        let a = dijkstra(&g, 0, 10).unwrap();
        let b = dijkstra(&g, 0, 10).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unreachable_destination() {
        let g = sample_graph();
        let result = dijkstra(&g, 0, 11).unwrap();
        assert!(result.nodes.is_empty());
        assert!(result.cost.is_infinite());
        assert!(!result.is_reachable());
        assert_eq!(result.hops(), None);
    }

    #[test]
    fn test_source_equals_destination() {
        let g = sample_graph();
        let result = dijkstra(&g, 0, 0).unwrap();
        assert_eq!(result.nodes, vec![0]);
        assert_eq!(result.cost, 0.0);
        assert_eq!(result.expanded, 1);
    }

    #[test]
    fn test_against_edge_direction() {
        let g = sample_graph();
        let result = dijkstra(&g, 10, 0).unwrap();
        assert!(!result.is_reachable());
    }

    #[test]
    fn test_undirected_graph() {
        let g = Graph::from_edges(4, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (0, 3, 10.0)], false).unwrap();
        let result = dijkstra(&g, 3, 0).unwrap();
        assert_eq!(result.nodes, vec![3, 2, 1, 0]);
        assert_eq!(result.cost, 3.0);
    }

    #[test]
    fn test_out_of_range() {
        let g = sample_graph();
        assert_eq!(
            dijkstra(&g, 0, 13),
            Err(PathError::NodeOutOfRange {
                node: 13,
                node_count: 13
            })
        );
    }

    #[test]
    fn test_fractional_weights() {
        let g = Graph::from_edges(3, &[(0, 1, 0.25), (1, 2, 0.5), (0, 2, 1.0)], true).unwrap();
        let result = dijkstra(&g, 0, 2).unwrap();
        assert_eq!(result.nodes, vec![0, 1, 2]);
        assert!((result.cost - 0.75).abs() < 1e-12);
    }
}
