//! Initial population by randomized depth-first search.
//!
//! Walks are meant to run on a [`SubgraphView`](crate::graph::subgraph::SubgraphView)
//! produced by [`prune`](crate::graph::subgraph::prune): every member node can
//! reach the destination there, so a walk never strands itself.

use super::types::Path;
use crate::error::{PathError, Result};
use crate::graph::traversal::reconstruct;
use crate::graph::{check_node, GraphView};
use rand::seq::SliceRandom;
use rand::Rng;

/// Random simple path from `source` to `destination`.
///
/// Depth-first search with a shuffled push order: a node is marked
/// visited when popped, its unvisited neighbours are pushed in random
/// order with the popped node recorded as their predecessor, and the
/// walk stops when the destination is popped. The path is read back from
/// the predecessor table, so it is simple and every hop is an edge.
///
/// # Errors
/// - [`PathError::NodeOutOfRange`] if `destination` is not in `graph`
/// - [`PathError::Unreachable`] if `source` is not in `graph` or the stack
///   empties before the destination is reached
pub fn random_path<G, R>(graph: &G, source: usize, destination: usize, rng: &mut R) -> Result<Path>
where
    G: GraphView + ?Sized,
    R: Rng,
{
    check_node(graph, destination)?;
    if !graph.contains(source) {
        return Err(PathError::Unreachable(source, destination));
    }

    let n = graph.node_count();
    let mut visited = vec![false; n];
    let mut predecessor = vec![None; n];
    let mut stack = vec![source];
    let mut reached = false;

    while let Some(current) = stack.pop() {
        if visited[current] {
            continue;
        }
        visited[current] = true;
        if current == destination {
            reached = true;
            break;
        }

        let mut fresh: Vec<usize> = graph
            .neighbors(current)
            .iter()
            .copied()
            .filter(|&next| !visited[next])
            .collect();
        fresh.shuffle(rng);
        for next in fresh {
            predecessor[next] = Some(current);
            stack.push(next);
        }
    }

    if !reached {
        return Err(PathError::Unreachable(source, destination));
    }
    let path = reconstruct(&predecessor, source, destination);
    if path.is_empty() {
        return Err(PathError::Unreachable(source, destination));
    }
    Ok(path)
}

/// `size` independent [`random_path`] walks.
///
/// # Errors
/// [`PathError::EmptyPopulation`] when `size == 0`, otherwise the first
/// error from [`random_path`]. Reachability is checked before any walk.
pub fn generate_population<G, R>(
    graph: &G,
    source: usize,
    destination: usize,
    size: usize,
    rng: &mut R,
) -> Result<Vec<Path>>
where
    G: GraphView + ?Sized,
    R: Rng,
{
    if size == 0 {
        return Err(PathError::EmptyPopulation);
    }
    check_node(graph, destination)?;
    if !graph.contains(source) {
        return Err(PathError::Unreachable(source, destination));
    }
    (0..size)
        .map(|_| random_path(graph, source, destination, rng))
        .collect()
}
