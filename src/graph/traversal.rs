//! Breadth-first and depth-first traversal.
//!
//! All traversals use explicit queues/stacks, so depth is bounded by the
//! node count rather than the call stack. Unreached nodes are reported as
//! `None` in hop and distance tables.
//!
//! BFS explores in non-decreasing hop order and is the unweighted
//! shortest-path primitive; DFS is only meant for connectivity questions.

use super::{check_node, GraphView};
use crate::error::Result;
use std::collections::VecDeque;

/// Full breadth-first search tree rooted at a source.
#[derive(Debug, Clone, PartialEq)]
pub struct BfsTree {
    /// Nodes in discovery order, starting with the source.
    pub order: Vec<usize>,
    /// Parent of each node in the tree; `None` for the source and unreached nodes.
    pub predecessor: Vec<Option<usize>>,
    /// Hop distance from the source; `None` when unreached.
    pub hops: Vec<Option<usize>>,
}

impl BfsTree {
    /// Path from the tree root to `node`, or `None` if `node` was not reached.
    pub fn path_to(&self, node: usize) -> Option<Vec<usize>> {
        let root = *self.order.first()?;
        let path = reconstruct(&self.predecessor, root, node);
        (!path.is_empty()).then_some(path)
    }
}

/// Result of a BFS that stops once the destination is discovered.
#[derive(Debug, Clone, PartialEq)]
pub struct BfsPath {
    /// Fewest-hops path from source to destination; empty when unreachable.
    pub path: Vec<usize>,
    /// Sum of edge weights along `path`; `f64::INFINITY` when unreachable.
    pub cost: f64,
    /// Hop distances of every node discovered before the search stopped.
    pub hops: Vec<Option<usize>>,
}

/// Depth-first search tree rooted at a node.
#[derive(Debug, Clone, PartialEq)]
pub struct DfsTree {
    /// Nodes in the order they were popped.
    pub order: Vec<usize>,
    /// Node that discovered each node; `None` for the root and unreached nodes.
    pub predecessor: Vec<Option<usize>>,
    /// Accumulated edge weight along the DFS tree (not a shortest distance).
    pub distance: Vec<Option<f64>>,
}

/// Breadth-first search over every node reachable from `source`.
///
/// # Examples
///
/// ```
/// use u_pathfind::graph::{traversal::bfs, Graph};
///
/// let graph = Graph::from_unweighted_edges(4, &[(0, 1), (1, 2)], true).unwrap();
/// let tree = bfs(&graph, 0).unwrap();
/// assert_eq!(tree.hops, vec![Some(0), Some(1), Some(2), None]);
/// ```
pub fn bfs<G: GraphView + ?Sized>(graph: &G, source: usize) -> Result<BfsTree> {
    check_node(graph, source)?;
    let n = graph.node_count();
    let mut predecessor = vec![None; n];
    let mut hops = vec![None; n];
    let mut order = Vec::new();
    let mut queue = VecDeque::from([source]);
    hops[source] = Some(0);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        let next_hop = hops[current].map(|h| h + 1);
        for &neighbor in graph.neighbors(current) {
            if hops[neighbor].is_none() {
                hops[neighbor] = next_hop;
                predecessor[neighbor] = Some(current);
                queue.push_back(neighbor);
            }
        }
    }

    Ok(BfsTree {
        order,
        predecessor,
        hops,
    })
}

/// Fewest-hops path from `source` to `destination`.
///
/// Expansion stops as soon as the destination is discovered (enqueued),
/// not when it is dequeued. Hop counts of nodes discovered up to that
/// point are returned alongside the path.
pub fn bfs_path<G: GraphView + ?Sized>(graph: &G, source: usize, destination: usize) -> Result<BfsPath> {
    check_node(graph, source)?;
    check_node(graph, destination)?;
    let n = graph.node_count();
    let mut predecessor = vec![None; n];
    let mut hops = vec![None; n];
    let mut queue = VecDeque::from([source]);
    hops[source] = Some(0);

    'search: while hops[destination].is_none() {
        let Some(current) = queue.pop_front() else {
            break;
        };
        let next_hop = hops[current].map(|h| h + 1);
        for &neighbor in graph.neighbors(current) {
            if hops[neighbor].is_none() {
                hops[neighbor] = next_hop;
                predecessor[neighbor] = Some(current);
                if neighbor == destination {
                    break 'search;
                }
                queue.push_back(neighbor);
            }
        }
    }

    let path = reconstruct(&predecessor, source, destination);
    let cost = if path.is_empty() {
        f64::INFINITY
    } else {
        path.windows(2)
            .map(|pair| graph.weight(pair[0], pair[1]).unwrap_or(f64::INFINITY))
            .sum()
    };

    Ok(BfsPath { path, cost, hops })
}

/// Stack-based depth-first search from `root`.
///
/// A node is marked discovered when it is pushed, so each node is pushed
/// at most once and the result is a spanning tree of the reachable set.
pub fn dfs<G: GraphView + ?Sized>(graph: &G, root: usize) -> Result<DfsTree> {
    check_node(graph, root)?;
    let n = graph.node_count();
    let mut predecessor = vec![None; n];
    let mut distance = vec![None; n];
    let mut discovered = vec![false; n];
    let mut order = Vec::new();
    let mut stack = vec![root];
    discovered[root] = true;
    distance[root] = Some(0.0);

    while let Some(current) = stack.pop() {
        order.push(current);
        let base = distance[current].unwrap_or(0.0);
        for &neighbor in graph.neighbors(current) {
            if discovered[neighbor] {
                continue;
            }
            let Some(w) = graph.weight(current, neighbor) else {
                continue;
            };
            discovered[neighbor] = true;
            predecessor[neighbor] = Some(current);
            distance[neighbor] = Some(base + w);
            stack.push(neighbor);
        }
    }

    Ok(DfsTree {
        order,
        predecessor,
        distance,
    })
}

/// Nodes that have a directed path to `destination`, in ascending order.
///
/// Edges are followed backwards. The result always contains `destination`.
pub fn reverse_dfs<G: GraphView + ?Sized>(graph: &G, destination: usize) -> Result<Vec<usize>> {
    check_node(graph, destination)?;
    let mut visited = vec![false; graph.node_count()];
    let mut stack = vec![destination];
    visited[destination] = true;

    while let Some(current) = stack.pop() {
        for &pred in graph.predecessors(current) {
            if !visited[pred] {
                visited[pred] = true;
                stack.push(pred);
            }
        }
    }

    Ok(visited
        .iter()
        .enumerate()
        .filter_map(|(node, &seen)| seen.then_some(node))
        .collect())
}

/// Hop distance from every node *to* `destination`, following edges backwards.
pub fn reverse_bfs<G: GraphView + ?Sized>(graph: &G, destination: usize) -> Result<Vec<Option<usize>>> {
    check_node(graph, destination)?;
    let mut hops = vec![None; graph.node_count()];
    let mut queue = VecDeque::from([destination]);
    hops[destination] = Some(0);

    while let Some(current) = queue.pop_front() {
        let next_hop = hops[current].map(|h| h + 1);
        for &pred in graph.predecessors(current) {
            if hops[pred].is_none() {
                hops[pred] = next_hop;
                queue.push_back(pred);
            }
        }
    }

    Ok(hops)
}

/// Walks `predecessor` back from `destination`.
///
/// Returns an empty path if the chain ends before reaching `source`.
pub(crate) fn reconstruct(predecessor: &[Option<usize>], source: usize, destination: usize) -> Vec<usize> {
    let mut path = vec![destination];
    let mut current = destination;
    while current != source {
        match predecessor.get(current).copied().flatten() {
            // a predecessor table is a forest, so the walk cannot exceed n steps
            Some(prev) if path.len() <= predecessor.len() => {
                path.push(prev);
                current = prev;
            }
            _ => return Vec::new(),
        }
    }
    path.reverse();
    path
}
