//! Genetic path optimizer.
//!
//! Evolves a population of simple paths between two nodes toward minimal
//! cost. Each run first prunes the graph to the nodes that can reach the
//! destination, so every random walk and every operator stays on nodes
//! with a way forward.
//!
//! # Pipeline
//!
//! 1. [`prune`](crate::graph::subgraph::prune) the graph to the destination's
//!    ancestors
//! 2. [`generate_population`] by randomized depth-first search
//! 3. per generation: [`crossover`] on reversed-roulette parent pairs,
//!    [`mutate`] on plain-roulette targets, survivor selection, replenishing
//! 4. stop on `max_generations`, stagnation, or an empty survivor set
//!
//! # Key Types
//!
//! - [`GeneticConfig`]: Algorithm parameters (rates, limits, presets)
//! - [`GeneticRunner`]: Executes the generational loop
//! - [`GeneticResult`]: Best path plus run statistics
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Ahn & Ramakrishna (2002), "A Genetic Algorithm for Shortest Path Routing
//!   Problem and the Sizing of Populations"

mod config;
mod fitness;
pub mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use config::GeneticConfig;
pub use fitness::fitness;
pub use operators::{crossover, erase_loops, mutate};
pub use population::{generate_population, random_path};
pub use runner::{GenerationStats, GeneticResult, GeneticRunner, Termination};
pub use selection::{roulette, sample_count, select, Selection};
pub use types::{is_simple, Path, Population};

use crate::error::Result;
use crate::graph::GraphView;

/// Best path found by the GA.
///
/// Shorthand for [`GeneticRunner::run`] when only the path matters.
///
/// # Errors
/// Same as [`GeneticRunner::run`].
///
/// # Examples
///
/// ```
/// use u_pathfind::ga::{genetic, GeneticConfig};
/// use u_pathfind::graph::Graph;
///
/// let graph = Graph::from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 5.0)], true).unwrap();
/// let path = genetic(&graph, 0, 2, &GeneticConfig::fast().with_seed(1)).unwrap();
/// assert_eq!(path, vec![0, 1, 2]);
/// ```
pub fn genetic<G: GraphView + ?Sized>(
    graph: &G,
    source: usize,
    destination: usize,
    config: &GeneticConfig,
) -> Result<Path> {
    GeneticRunner::run(graph, source, destination, config).map(|result| result.best)
}
