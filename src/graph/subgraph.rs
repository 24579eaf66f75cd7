//! Reachability pruning.
//!
//! [`prune`] keeps only the nodes from which a destination can be reached,
//! together with the edges among them. Any walk that stays inside the
//! pruned view can always be extended to the destination, which is what
//! lets the genetic path generator run without dead ends.

use super::traversal::reverse_dfs;
use super::GraphView;
use crate::error::Result;

/// Induced subgraph over the nodes that can reach a destination.
///
/// Node indices are those of the parent graph; nodes outside the subset
/// are simply not [`contains`](GraphView::contains)-ed and have no edges.
#[derive(Debug)]
pub struct SubgraphView<'g, G: GraphView + ?Sized> {
    graph: &'g G,
    destination: usize,
    nodes: Vec<usize>,
    member: Vec<bool>,
    outgoing: Vec<Vec<usize>>,
    incoming: Vec<Vec<usize>>,
}

/// Restricts `graph` to the nodes with a directed path to `destination`.
///
/// # Examples
///
/// ```
/// use u_pathfind::graph::{subgraph::prune, Graph, GraphView};
///
/// // 3 is a dead end: it cannot reach 2.
/// let graph = Graph::from_unweighted_edges(4, &[(0, 1), (1, 2), (1, 3)], true).unwrap();
/// let sub = prune(&graph, 2).unwrap();
/// assert_eq!(sub.nodes(), &[0, 1, 2]);
/// assert_eq!(sub.neighbors(1), &[2]);
/// assert!(!sub.contains(3));
/// ```
pub fn prune<G: GraphView + ?Sized>(graph: &G, destination: usize) -> Result<SubgraphView<'_, G>> {
    let nodes = reverse_dfs(graph, destination)?;
    let n = graph.node_count();
    let mut member = vec![false; n];
    for &node in &nodes {
        member[node] = true;
    }

    let mut outgoing = vec![Vec::new(); n];
    let mut incoming = vec![Vec::new(); n];
    for &u in &nodes {
        for &v in graph.neighbors(u) {
            if member[v] {
                outgoing[u].push(v);
                incoming[v].push(u);
            }
        }
    }

    Ok(SubgraphView {
        graph,
        destination,
        nodes,
        member,
        outgoing,
        incoming,
    })
}

impl<'g, G: GraphView + ?Sized> SubgraphView<'g, G> {
    /// Member nodes in ascending order.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Number of member nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: the destination itself is a member.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node every member can reach.
    pub fn destination(&self) -> usize {
        self.destination
    }
}

impl<G: GraphView + ?Sized> GraphView for SubgraphView<'_, G> {
    fn node_count(&self) -> usize {
        self.member.len()
    }

    fn contains(&self, node: usize) -> bool {
        self.member.get(node).copied().unwrap_or(false)
    }

    fn weight(&self, from: usize, to: usize) -> Option<f64> {
        if self.contains(from) && self.contains(to) {
            self.graph.weight(from, to)
        } else {
            None
        }
    }

    fn neighbors(&self, node: usize) -> &[usize] {
        self.outgoing.get(node).map_or(&[][..], Vec::as_slice)
    }

    fn predecessors(&self, node: usize) -> &[usize] {
        self.incoming.get(node).map_or(&[][..], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::sample_graph;
    use crate::graph::traversal::{bfs_path, reverse_dfs};

    #[test]
    fn test_prune_members() {
        let g = sample_graph();
        let sub = prune(&g, 10).unwrap();
        assert_eq!(sub.nodes(), &[0, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(sub.len(), 9);
        assert_eq!(sub.destination(), 10);
        assert!(!sub.is_empty());
        assert!(!sub.contains(2));
        assert!(!sub.contains(12));
        assert!(!sub.contains(500));
    }

    #[test]
    fn test_prune_drops_edges_leaving_the_subset() {
        let g = sample_graph();
        let sub = prune(&g, 10).unwrap();
        assert_eq!(sub.neighbors(0), &[3, 4, 5]);
        assert_eq!(sub.neighbors(8), &[10]);
        assert_eq!(sub.weight(8, 12), None);
        assert_eq!(sub.weight(8, 10), Some(4.0));
        assert!(sub.neighbors(2).is_empty());
        assert_eq!(sub.predecessors(8), &[6, 7]);
    }

    #[test]
    fn test_every_member_reaches_destination_inside_view() {
        let g = sample_graph();
        let sub = prune(&g, 10).unwrap();
        for &node in sub.nodes() {
            let found = bfs_path(&sub, node, 10).unwrap();
            assert!(!found.path.is_empty(), "node {node} cannot reach 10");
            assert!(found.path.iter().all(|&n| sub.contains(n)));
        }
        // reverse search inside the view finds the same set
        assert_eq!(reverse_dfs(&sub, 10).unwrap(), sub.nodes());
    }

    #[test]
    fn test_prune_isolated_destination() {
        let g = sample_graph();
        let sub = prune(&g, 11).unwrap();
        assert_eq!(sub.nodes(), &[11]);
        assert!(!sub.contains(0));
    }

    #[test]
    fn test_prune_bad_destination() {
        let g = sample_graph();
        assert!(prune(&g, 13).is_err());
    }
}
