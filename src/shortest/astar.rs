//! A* search.

use super::dijkstra::best_first;
use super::ShortestPath;
use crate::error::Result;
use crate::graph::traversal::{bfs, reverse_bfs};
use crate::graph::{check_node, GraphView};
use tracing::debug;

/// Estimate of the remaining cost used to order the A* frontier.
///
/// # Examples
///
/// ```
/// use u_pathfind::shortest::Heuristic;
///
/// assert_eq!(Heuristic::default(), Heuristic::HopSymmetry);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// `hops(source, destination) - hops(source, node)`, from one BFS out of
    /// the source.
    ///
    /// Informed but **not admissible** in general: it ignores edge weights
    /// and assumes hop distance is symmetric, so A* may return a suboptimal
    /// path when weights do not track hop counts. Nodes the BFS did not
    /// reach get an infinite estimate.
    #[default]
    HopSymmetry,

    /// `min_edge_weight × hops(node, destination)`, from one reverse BFS out
    /// of the destination.
    ///
    /// Consistent, so A* returns an optimal path.
    MinWeightHops,

    /// Always 0. Equivalent to Dijkstra.
    Zero,
}

/// A* with the default [`Heuristic::HopSymmetry`] estimate.
///
/// See [`a_star_with`] for an optimal alternative.
pub fn a_star<G: GraphView + ?Sized>(graph: &G, source: usize, destination: usize) -> Result<ShortestPath> {
    a_star_with(graph, source, destination, Heuristic::HopSymmetry)
}

/// A* with an explicit heuristic.
///
/// # Examples
///
/// ```
/// use u_pathfind::graph::Graph;
/// use u_pathfind::shortest::{a_star_with, Heuristic};
///
/// let graph = Graph::from_edges(4, &[(0, 1, 2.0), (1, 3, 2.0), (0, 2, 1.0), (2, 3, 1.0)], true).unwrap();
/// let result = a_star_with(&graph, 0, 3, Heuristic::MinWeightHops).unwrap();
/// assert_eq!(result.nodes, vec![0, 2, 3]);
/// assert_eq!(result.cost, 2.0);
/// ```
pub fn a_star_with<G: GraphView + ?Sized>(
    graph: &G,
    source: usize,
    destination: usize,
    heuristic: Heuristic,
) -> Result<ShortestPath> {
    check_node(graph, source)?;
    check_node(graph, destination)?;

    match heuristic {
        Heuristic::Zero => Ok(best_first(graph, source, destination, |_| 0.0)),
        Heuristic::HopSymmetry => {
            let hops = bfs(graph, source)?.hops;
            let Some(target_hops) = hops[destination] else {
                debug!(source, destination, "destination not reached by BFS");
                return Ok(ShortestPath::unreachable(0));
            };
            Ok(best_first(graph, source, destination, |node| match hops[node] {
                Some(h) => target_hops as f64 - h as f64,
                None => f64::INFINITY,
            }))
        }
        Heuristic::MinWeightHops => {
            let hops_to = reverse_bfs(graph, destination)?;
            if hops_to[source].is_none() {
                debug!(source, destination, "source cannot reach destination");
                return Ok(ShortestPath::unreachable(0));
            }
            let min_weight = graph.min_edge_weight().unwrap_or(0.0);
            Ok(best_first(graph, source, destination, |node| match hops_to[node] {
                Some(h) => min_weight * h as f64,
                None => f64::INFINITY,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::sample_graph;
    use crate::graph::Graph;
    use crate::shortest::dijkstra;
    use proptest::prelude::*;

    #[test]
    fn test_sample_graph_all_heuristics() {
        let g = sample_graph();
        for h in [Heuristic::HopSymmetry, Heuristic::MinWeightHops, Heuristic::Zero] {
            let result = a_star_with(&g, 0, 10, h).unwrap();
            assert_eq!(result.cost, 12.0, "heuristic {h:?}");
            assert_eq!(result.nodes.first(), Some(&0));
            assert_eq!(result.nodes.last(), Some(&10));
        }
    }

    #[test]
    fn test_default_is_hop_symmetry() {
        let g = sample_graph();
        assert_eq!(
            a_star(&g, 0, 10).unwrap(),
            a_star_with(&g, 0, 10, Heuristic::HopSymmetry).unwrap()
        );
    }

    #[test]
    fn test_zero_heuristic_matches_dijkstra() {
        let g = sample_graph();
        assert_eq!(
            a_star_with(&g, 0, 10, Heuristic::Zero).unwrap(),
            dijkstra(&g, 0, 10).unwrap()
        );
    }

    #[test]
    fn test_unreachable() {
        let g = sample_graph();
        for h in [Heuristic::HopSymmetry, Heuristic::MinWeightHops, Heuristic::Zero] {
            let result = a_star_with(&g, 0, 11, h).unwrap();
            assert!(result.nodes.is_empty());
            assert!(result.cost.is_infinite());
        }
    }

    #[test]
    fn test_source_equals_destination() {
        let g = sample_graph();
        let result = a_star(&g, 4, 4).unwrap();
        assert_eq!(result.nodes, vec![4]);
        assert_eq!(result.cost, 0.0);
    }

    #[test]
    fn test_informed_search_expands_less() {
        // long chain 0..=9 plus side branches hanging off node 0
        let mut edges: Vec<(usize, usize, f64)> = (0..9).map(|i| (i, i + 1, 1.0)).collect();
        for side in 10..20 {
            edges.push((0, side, 1.0));
        }
        let g = Graph::from_edges(20, &edges, true).unwrap();
        let plain = dijkstra(&g, 0, 9).unwrap();
        let informed = a_star_with(&g, 0, 9, Heuristic::MinWeightHops).unwrap();
        assert_eq!(plain.cost, informed.cost);
        assert!(informed.expanded < plain.expanded);
    }

    #[test]
    fn test_hop_symmetry_finds_cheap_detour() {
        let g = Graph::from_edges(4, &[(0, 3, 10.0), (0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)], true).unwrap();
        let result = a_star(&g, 0, 3).unwrap();
        assert_eq!(result.nodes, vec![0, 1, 2, 3]);
        assert_eq!(result.cost, 3.0);
    }

    #[test]
    fn test_hop_symmetry_can_miss_optimum() {
        // Sub-unit weights make the hop estimate overshoot at node 1, so the
        // destination is settled through node 2 first.
        let g = Graph::from_edges(4, &[(0, 1, 0.1), (1, 3, 0.1), (0, 2, 0.05), (2, 3, 0.9)], true).unwrap();
        let informed = a_star(&g, 0, 3).unwrap();
        let exact = dijkstra(&g, 0, 3).unwrap();
        assert_eq!(exact.nodes, vec![0, 1, 3]);
        assert_eq!(informed.nodes, vec![0, 2, 3]);
        assert!(informed.cost > exact.cost);

        let admissible = a_star_with(&g, 0, 3, Heuristic::MinWeightHops).unwrap();
        assert_eq!(admissible.nodes, exact.nodes);
    }

    fn arb_weighted_graph() -> impl Strategy<Value = Graph> {
        (2usize..7).prop_flat_map(|n| {
            prop::collection::vec((0..n, 0..n, 1u32..10), 0..n * 3).prop_map(move |edges| {
                let edges: Vec<(usize, usize, f64)> = edges
                    .into_iter()
                    .map(|(u, v, w)| (u, v, w as f64))
                    .collect();
                Graph::from_edges(n, &edges, true).unwrap()
            })
        })
    }

    /// Cheapest simple path by exhaustive enumeration.
    fn brute_force(g: &Graph, source: usize, destination: usize) -> f64 {
        fn walk(g: &Graph, node: usize, destination: usize, cost: f64, seen: &mut Vec<bool>, best: &mut f64) {
            if node == destination {
                *best = best.min(cost);
                return;
            }
            for &next in g.neighbors(node) {
                if !seen[next] {
                    seen[next] = true;
                    walk(g, next, destination, cost + g.weight(node, next).unwrap(), seen, best);
                    seen[next] = false;
                }
            }
        }
        let mut seen = vec![false; g.node_count()];
        seen[source] = true;
        let mut best = f64::INFINITY;
        walk(g, source, destination, 0.0, &mut seen, &mut best);
        best
    }

    proptest! {
        #[test]
        fn prop_dijkstra_is_optimal(g in arb_weighted_graph()) {
            let d = g.node_count() - 1;
            let expected = brute_force(&g, 0, d);
            let result = dijkstra(&g, 0, d).unwrap();
            prop_assert_eq!(result.cost, expected);
            if result.is_reachable() {
                let sum: f64 = result.nodes.windows(2).map(|p| g.weight(p[0], p[1]).unwrap()).sum();
                prop_assert_eq!(sum, result.cost);
            }
        }

        #[test]
        fn prop_admissible_a_star_is_optimal(g in arb_weighted_graph()) {
            let d = g.node_count() - 1;
            let result = a_star_with(&g, 0, d, Heuristic::MinWeightHops).unwrap();
            prop_assert_eq!(result.cost, brute_force(&g, 0, d));
        }

        #[test]
        fn prop_hop_symmetry_never_beats_optimum(g in arb_weighted_graph()) {
            let d = g.node_count() - 1;
            let informed = a_star(&g, 0, d).unwrap();
            let exact = dijkstra(&g, 0, d).unwrap();
            prop_assert_eq!(informed.is_reachable(), exact.is_reachable());
            prop_assert!(informed.cost >= exact.cost);
        }
    }
}
