//! Best-path search on weighted directed graphs.
//!
//! Two complementary strategies share one read-only graph abstraction:
//!
//! - **Shortest path**: Dijkstra and A* over a binary-heap frontier with
//!   deterministic tie-breaking. A* defaults to a hop-count heuristic that
//!   is informed but not guaranteed optimal; an admissible variant is
//!   available.
//! - **Genetic Algorithm (GA)**: Evolves a population of simple paths
//!   toward minimal cost with common-node crossover and local edge
//!   substitution, after pruning the graph to nodes that can reach the
//!   destination.
//!
//! Both build on the traversal primitives in [`graph::traversal`]
//! (BFS, DFS, reverse reachability).
//!
//! # Architecture
//!
//! Algorithms are written against the [`graph::GraphView`] trait, so they
//! run unchanged on a full [`graph::Graph`] or on a pruned
//! [`graph::subgraph::SubgraphView`]. Every randomized operation takes an
//! explicit RNG (see [`random`]); a seed reproduces a run exactly.
//!
//! # Quick Start
//!
//! ```
//! use u_pathfind::ga::{genetic, GeneticConfig};
//! use u_pathfind::graph::Graph;
//! use u_pathfind::shortest::dijkstra;
//!
//! let graph = Graph::from_edges(
//!     4,
//!     &[(0, 1, 4.0), (0, 2, 1.0), (2, 1, 2.0), (1, 3, 1.0)],
//!     true,
//! )?;
//!
//! let exact = dijkstra(&graph, 0, 3)?;
//! assert_eq!(exact.nodes, vec![0, 2, 1, 3]);
//! assert_eq!(exact.cost, 4.0);
//!
//! let evolved = genetic(&graph, 0, 3, &GeneticConfig::fast().with_seed(7))?;
//! assert_eq!(evolved, vec![0, 2, 1, 3]);
//! # Ok::<(), u_pathfind::PathError>(())
//! ```

pub mod error;
pub mod ga;
pub mod graph;
pub mod random;
pub mod shortest;

pub use error::{PathError, Result};
