//! Path crossover and mutation.
//!
//! Both operators keep the source and destination fixed and only splice
//! or substitute interior nodes, so a connected path stays connected.
//!
//! # Crossover
//!
//! [`crossover`] swaps tails at a node shared by both parents. Splicing
//! can repeat a node when the shared node sits at different depths, so
//! children are passed through [`erase_loops`], which keeps them simple
//! and never raises their cost.
//!
//! # Mutation
//!
//! [`mutate`] replaces one interior node with an alternative neighbour
//! that still connects the path.

use super::types::Path;
use crate::graph::GraphView;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::HashMap;

// ============================================================================
// Crossover
// ============================================================================

/// Common-node crossover.
///
/// Candidate splice nodes are those present in both parents, skipping each
/// parent's first position and its last two positions. The exclusion applies
/// to `b` as well as `a`, which keeps the operator symmetric. One candidate is
/// picked uniformly; with positions `ia` in `a` and `ib` in `b`:
///
/// ```text
/// child_a = a[..ia] ++ b[ib..]
/// child_b = b[..ib] ++ a[ia..]
/// ```
///
/// Parents are returned unchanged when nothing is shared. Candidates are
/// ordered by node id, so swapping the arguments (with the same RNG state)
/// swaps the children.
///
/// # Examples
///
/// ```
/// use u_pathfind::ga::crossover;
/// use u_pathfind::random::create_rng;
///
/// let a = vec![0, 3, 6, 8, 10];
/// let b = vec![0, 5, 6, 9, 10];
/// let (c1, c2) = crossover(&a, &b, &mut create_rng(1));
/// assert_eq!(c1, vec![0, 3, 6, 9, 10]);
/// assert_eq!(c2, vec![0, 5, 6, 8, 10]);
/// ```
pub fn crossover<R: Rng>(a: &[usize], b: &[usize], rng: &mut R) -> (Path, Path) {
    let b_positions: HashMap<usize, usize> = splice_range(b).map(|i| (b[i], i)).collect();

    let mut common: Vec<(usize, usize, usize)> = splice_range(a)
        .filter_map(|ia| b_positions.get(&a[ia]).map(|&ib| (a[ia], ia, ib)))
        .collect();
    if common.is_empty() {
        return (a.to_vec(), b.to_vec());
    }
    common.sort_unstable_by_key(|&(node, _, _)| node);

    let (_, ia, ib) = common[rng.random_range(0..common.len())];
    let child_a: Path = a[..ia].iter().chain(&b[ib..]).copied().collect();
    let child_b: Path = b[..ib].iter().chain(&a[ia..]).copied().collect();

    (erase_loops(&child_a), erase_loops(&child_b))
}

/// Positions eligible as splice points: not the first, not the last two.
fn splice_range(path: &[usize]) -> std::ops::Range<usize> {
    1..path.len().saturating_sub(2).max(1)
}

/// Removes cycles from a walk.
///
/// Whenever a node reappears, everything after its first occurrence up to
/// the repeat is dropped. Consecutive nodes in the result are consecutive
/// somewhere in the input, so no new edges are introduced.
///
/// ```
/// use u_pathfind::ga::erase_loops;
///
/// assert_eq!(erase_loops(&[0, 1, 2, 1, 3]), vec![0, 1, 3]);
/// assert_eq!(erase_loops(&[0, 1, 2]), vec![0, 1, 2]);
/// ```
pub fn erase_loops(walk: &[usize]) -> Path {
    let mut path: Path = Vec::with_capacity(walk.len());
    let mut position: HashMap<usize, usize> = HashMap::with_capacity(walk.len());

    for &node in walk {
        match position.get(&node) {
            Some(&first) => {
                for dropped in path.drain(first + 1..) {
                    position.remove(&dropped);
                }
            }
            None => {
                position.insert(node, path.len());
                path.push(node);
            }
        }
    }

    path
}

// ============================================================================
// Mutation
// ============================================================================

/// Local edge substitution.
///
/// Picks a random position `i` with `path[i] -> path[i + 1] -> path[i + 2]`
/// and looks for neighbours `link` of `path[i]` that also have an edge to
/// `path[i + 2]` and are not already on the path. If any exist, `path[i + 1]`
/// is replaced by a random one of them.
///
/// Paths shorter than 3 nodes are left alone. Returns whether the path
/// changed. Length and endpoints never change.
pub fn mutate<G, R>(path: &mut Path, graph: &G, rng: &mut R) -> bool
where
    G: GraphView + ?Sized,
    R: Rng,
{
    if path.len() < 3 {
        return false;
    }

    let i = rng.random_range(0..path.len() - 2);
    let (current, next, after_next) = (path[i], path[i + 1], path[i + 2]);

    let analogs: Vec<usize> = graph
        .neighbors(current)
        .iter()
        .copied()
        .filter(|&link| link != next && graph.has_edge(link, after_next) && !path.contains(&link))
        .collect();

    match analogs.choose(rng) {
        Some(&link) => {
            path[i + 1] = link;
            true
        }
        None => false,
    }
}

// ============================================================================
// Tests
// ============================================================================
