//! Deterministic shortest-path search.
//!
//! Both solvers share one best-first loop over a stale-entry priority
//! queue: a relaxation pushes a fresh entry instead of decreasing a key,
//! and entries for already-settled nodes are skipped when popped.
//!
//! - [`dijkstra`]: exact for strictly positive weights
//! - [`a_star`]: Dijkstra with a [`Heuristic`] added to the queue key
//!
//! # Tie-breaking
//!
//! Among queue entries with equal keys, the one pushed first is popped
//! first. Neighbours are relaxed in ascending node order, so results are
//! deterministic for a given graph.
//!
//! # References
//!
//! - Dijkstra (1959), "A Note on Two Problems in Connexion with Graphs"
//! - Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//!   Determination of Minimum Cost Paths"

mod astar;
mod dijkstra;
mod queue;

pub use astar::{a_star, a_star_with, Heuristic};
pub use dijkstra::dijkstra;

/// Outcome of a shortest-path query.
///
/// An unreachable destination is reported as an empty path with infinite
/// cost rather than as an error.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPath {
    /// Nodes from source to destination, inclusive. Empty if unreachable.
    pub nodes: Vec<usize>,

    /// Total edge weight of `nodes`; `f64::INFINITY` if unreachable.
    pub cost: f64,

    /// Number of nodes settled before the search stopped.
    pub expanded: usize,
}

impl ShortestPath {
    pub(crate) fn unreachable(expanded: usize) -> Self {
        Self {
            nodes: Vec::new(),
            cost: f64::INFINITY,
            expanded,
        }
    }

    /// Whether a path was found.
    pub fn is_reachable(&self) -> bool {
        !self.nodes.is_empty() && self.cost.is_finite()
    }

    /// Number of edges on the path, or `None` when unreachable.
    pub fn hops(&self) -> Option<usize> {
        self.nodes.len().checked_sub(1)
    }
}
