//! Weighted directed graphs and read-only views over them.
//!
//! [`Graph`] stores a dense weight matrix where a non-positive entry means
//! "no edge". Out- and in-adjacency lists are cached at construction so that
//! traversals do not rescan matrix rows.
//!
//! Every algorithm in the crate is written against the [`GraphView`] trait,
//! which is implemented by [`Graph`] and by the pruned
//! [`SubgraphView`](subgraph::SubgraphView).
//!
//! # Submodules
//!
//! - [`traversal`]: BFS, DFS, and reverse reachability
//! - [`subgraph`]: restriction to the nodes that can reach a destination

pub mod subgraph;
pub mod traversal;

use crate::error::{PathError, Result};

/// Read-only access to a weighted directed graph.
///
/// Node identifiers are indices in `0..node_count()`. A view may expose only
/// a subset of them; [`contains`](GraphView::contains) tells which.
pub trait GraphView {
    /// Size of the node index space.
    fn node_count(&self) -> usize;

    /// Whether `node` belongs to this view.
    fn contains(&self, node: usize) -> bool {
        node < self.node_count()
    }

    /// Weight of the edge `from -> to`, or `None` if there is no such edge.
    ///
    /// Returned weights are always strictly positive.
    fn weight(&self, from: usize, to: usize) -> Option<f64>;

    /// Out-neighbours of `node` in ascending order.
    fn neighbors(&self, node: usize) -> &[usize];

    /// In-neighbours of `node` in ascending order.
    fn predecessors(&self, node: usize) -> &[usize];

    /// Whether the edge `from -> to` exists.
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.weight(from, to).is_some()
    }

    /// Smallest edge weight in the view, or `None` when it has no edges.
    fn min_edge_weight(&self) -> Option<f64> {
        (0..self.node_count())
            .filter(|&u| self.contains(u))
            .flat_map(|u| self.neighbors(u).iter().filter_map(move |&v| self.weight(u, v)))
            .min_by(f64::total_cmp)
    }
}

/// Returns an error if `node` is not part of `graph`.
pub(crate) fn check_node<G: GraphView + ?Sized>(graph: &G, node: usize) -> Result<()> {
    if graph.contains(node) {
        Ok(())
    } else {
        Err(PathError::NodeOutOfRange {
            node,
            node_count: graph.node_count(),
        })
    }
}

/// Dense weighted graph, immutable once built.
///
/// # Examples
///
/// ```
/// use u_pathfind::graph::{Graph, GraphView};
///
/// let graph = Graph::from_edges(3, &[(0, 1, 4.0), (1, 2, 1.5)], true).unwrap();
/// assert_eq!(graph.weight(0, 1), Some(4.0));
/// assert_eq!(graph.weight(1, 0), None);
/// assert_eq!(graph.neighbors(1), &[2]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    node_count: usize,
    directed: bool,
    weights: Vec<f64>,
    outgoing: Vec<Vec<usize>>,
    incoming: Vec<Vec<usize>>,
}

impl Graph {
    /// Builds a graph from a square weight matrix.
    ///
    /// Entries `<= 0` mean "no edge". For an undirected graph the matrix is
    /// symmetrized: an edge present in either direction is stored in both,
    /// and a later row overrides an earlier one on conflicting weights.
    pub fn from_matrix(rows: &[Vec<f64>], directed: bool) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(PathError::EmptyGraph);
        }

        let mut weights = vec![0.0; n * n];
        for (u, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(PathError::NonSquareMatrix {
                    row: u,
                    len: row.len(),
                    expected: n,
                });
            }
            for (v, &w) in row.iter().enumerate() {
                if !w.is_finite() {
                    return Err(PathError::NonFiniteWeight { from: u, to: v });
                }
                if w > 0.0 {
                    weights[u * n + v] = w;
                    if !directed {
                        weights[v * n + u] = w;
                    }
                }
            }
        }

        Ok(Self::from_dense(n, weights, directed))
    }

    /// Builds a graph from weighted edges `(from, to, weight)`.
    ///
    /// Edges with a non-positive weight are ignored. A repeated edge keeps
    /// the last weight given.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize, f64)], directed: bool) -> Result<Self> {
        if node_count == 0 {
            return Err(PathError::EmptyGraph);
        }

        let mut weights = vec![0.0; node_count * node_count];
        for &(u, v, w) in edges {
            for node in [u, v] {
                if node >= node_count {
                    return Err(PathError::NodeOutOfRange { node, node_count });
                }
            }
            if !w.is_finite() {
                return Err(PathError::NonFiniteWeight { from: u, to: v });
            }
            if w <= 0.0 {
                continue;
            }
            weights[u * node_count + v] = w;
            if !directed {
                weights[v * node_count + u] = w;
            }
        }

        Ok(Self::from_dense(node_count, weights, directed))
    }

    /// Builds a graph where every listed edge has weight 1.
    pub fn from_unweighted_edges(node_count: usize, edges: &[(usize, usize)], directed: bool) -> Result<Self> {
        let weighted: Vec<(usize, usize, f64)> = edges.iter().map(|&(u, v)| (u, v, 1.0)).collect();
        Self::from_edges(node_count, &weighted, directed)
    }

    fn from_dense(n: usize, weights: Vec<f64>, directed: bool) -> Self {
        let mut outgoing = vec![Vec::new(); n];
        let mut incoming = vec![Vec::new(); n];
        for u in 0..n {
            for v in 0..n {
                if weights[u * n + v] > 0.0 {
                    outgoing[u].push(v);
                    incoming[v].push(u);
                }
            }
        }
        Self {
            node_count: n,
            directed,
            weights,
            outgoing,
            incoming,
        }
    }

    /// Whether edges were added one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Total number of stored (directed) edges.
    pub fn edge_count(&self) -> usize {
        self.outgoing.iter().map(Vec::len).sum()
    }

    /// Weight matrix as rows, `0.0` meaning no edge.
    pub fn to_matrix(&self) -> Vec<Vec<f64>> {
        self.weights
            .chunks(self.node_count)
            .map(<[f64]>::to_vec)
            .collect()
    }
}

impl GraphView for Graph {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn weight(&self, from: usize, to: usize) -> Option<f64> {
        if from >= self.node_count || to >= self.node_count {
            return None;
        }
        let w = self.weights[from * self.node_count + to];
        (w > 0.0).then_some(w)
    }

    fn neighbors(&self, node: usize) -> &[usize] {
        self.outgoing.get(node).map_or(&[][..], Vec::as_slice)
    }

    fn predecessors(&self, node: usize) -> &[usize] {
        self.incoming.get(node).map_or(&[][..], Vec::as_slice)
    }
}
