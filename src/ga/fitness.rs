//! Path cost.

use crate::graph::GraphView;

/// Total edge weight along `path`.
///
/// Returns `f64::INFINITY` as soon as a consecutive pair has no edge, and
/// for an empty path. A single-node path costs 0.
///
/// # Examples
///
/// ```
/// use u_pathfind::ga::fitness;
/// use u_pathfind::graph::Graph;
///
/// let graph = Graph::from_edges(3, &[(0, 1, 2.0), (1, 2, 3.0)], true).unwrap();
/// assert_eq!(fitness(&[0, 1, 2], &graph), 5.0);
/// assert_eq!(fitness(&[0, 2], &graph), f64::INFINITY);
/// assert_eq!(fitness(&[1], &graph), 0.0);
/// ```
pub fn fitness<G: GraphView + ?Sized>(path: &[usize], graph: &G) -> f64 {
    if path.is_empty() {
        return f64::INFINITY;
    }
    let mut cost = 0.0;
    for pair in path.windows(2) {
        match graph.weight(pair[0], pair[1]) {
            Some(w) => cost += w,
            None => return f64::INFINITY,
        }
    }
    cost
}
