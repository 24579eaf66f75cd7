//! Path and population types.
//!
//! A [`Population`] keeps its paths and their fitness values in two
//! parallel vectors. Every mutating method takes the graph so that the
//! fitness table is refreshed together with the path it describes.

use super::fitness::fitness;
use crate::graph::GraphView;
use std::collections::HashSet;

/// Ordered node sequence from a source to a destination.
pub type Path = Vec<usize>;

/// Whether no node occurs twice in `path`.
pub fn is_simple(path: &[usize]) -> bool {
    let mut seen = HashSet::with_capacity(path.len());
    path.iter().all(|node| seen.insert(*node))
}

/// Candidate paths with their cached fitness (lower is better).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Population {
    paths: Vec<Path>,
    fitness: Vec<f64>,
}

impl Population {
    /// Creates an empty population.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `paths`, computing each one's fitness on `graph`.
    pub fn evaluate<G: GraphView + ?Sized>(paths: Vec<Path>, graph: &G) -> Self {
        let fitness = paths.iter().map(|p| fitness(p, graph)).collect();
        Self { paths, fitness }
    }

    /// Number of paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the population holds no paths.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// All paths, in population order.
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Fitness table, parallel to [`paths`](Self::paths).
    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    /// Path at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn path(&self, index: usize) -> &Path {
        &self.paths[index]
    }

    /// Appends a path and its fitness.
    pub fn push<G: GraphView + ?Sized>(&mut self, path: Path, graph: &G) {
        self.fitness.push(fitness(&path, graph));
        self.paths.push(path);
    }

    /// Replaces the path at `index` and refreshes its fitness.
    pub fn replace<G: GraphView + ?Sized>(&mut self, index: usize, path: Path, graph: &G) {
        self.fitness[index] = fitness(&path, graph);
        self.paths[index] = path;
    }

    /// Keeps only the members at `indices`, in that order.
    ///
    /// Repeated indices keep only their first occurrence; out-of-range ones
    /// are ignored.
    pub fn retain_indices(&mut self, indices: &[usize]) {
        let mut seen = vec![false; self.paths.len()];
        let (paths, fitness): (Vec<Path>, Vec<f64>) = indices
            .iter()
            .filter(|&&i| i < seen.len() && !std::mem::replace(&mut seen[i], true))
            .map(|&i| (std::mem::take(&mut self.paths[i]), self.fitness[i]))
            .unzip();
        self.paths = paths;
        self.fitness = fitness;
    }

    /// Index of the lowest fitness; the first one on ties.
    pub fn best_index(&self) -> Option<usize> {
        self.fitness
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.total_cmp(b.1).then(a.0.cmp(&b.0)))
            .map(|(i, _)| i)
    }

    /// Best path and its fitness.
    pub fn best(&self) -> Option<(&Path, f64)> {
        self.best_index().map(|i| (&self.paths[i], self.fitness[i]))
    }

    /// Lowest fitness, or infinity when empty.
    pub fn best_fitness(&self) -> f64 {
        self.best().map_or(f64::INFINITY, |(_, f)| f)
    }

    /// Mean of the finite fitness values, or infinity if there are none.
    pub fn mean_fitness(&self) -> f64 {
        let finite: Vec<f64> = self.fitness.iter().copied().filter(|f| f.is_finite()).collect();
        if finite.is_empty() {
            f64::INFINITY
        } else {
            finite.iter().sum::<f64>() / finite.len() as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::sample_graph;

    #[test]
    fn test_is_simple() {
        assert!(is_simple(&[0, 5, 6, 9, 10]));
        assert!(is_simple(&[3]));
        assert!(is_simple(&[]));
        assert!(!is_simple(&[0, 5, 0]));
    }

    #[test]
    fn test_evaluate_keeps_tables_parallel() {
        let g = sample_graph();
        let pop = Population::evaluate(vec![vec![0, 5, 6, 9, 10], vec![0, 3, 6, 9, 10], vec![0, 10]], &g);
        assert_eq!(pop.len(), 3);
        assert_eq!(pop.fitness(), &[12.0, 13.0, f64::INFINITY]);
        assert_eq!(pop.best_index(), Some(0));
        assert_eq!(pop.best_fitness(), 12.0);
        assert_eq!(pop.mean_fitness(), 12.5);
    }

    #[test]
    fn test_push_and_replace() {
        let g = sample_graph();
        let mut pop = Population::new();
        assert!(pop.is_empty());
        assert_eq!(pop.best_index(), None);
        assert!(pop.best_fitness().is_infinite());

        pop.push(vec![0, 3, 6, 9, 10], &g);
        pop.push(vec![0, 4, 7, 8, 10], &g);
        assert_eq!(pop.fitness(), &[13.0, 14.0]);

        pop.replace(1, vec![0, 5, 7, 8, 10], &g);
        assert_eq!(pop.path(1), &vec![0, 5, 7, 8, 10]);
        assert_eq!(pop.fitness(), &[13.0, 12.0]);
        assert_eq!(pop.best_index(), Some(1));
    }

    #[test]
    fn test_retain_indices() {
        let g = sample_graph();
        let mut pop = Population::evaluate(
            vec![vec![0, 3, 6, 9, 10], vec![0, 4, 7, 8, 10], vec![0, 5, 6, 9, 10]],
            &g,
        );
        pop.retain_indices(&[2, 0, 7]);
        assert_eq!(pop.paths(), &[vec![0, 5, 6, 9, 10], vec![0, 3, 6, 9, 10]]);
        assert_eq!(pop.fitness(), &[12.0, 13.0]);
    }

    #[test]
    fn test_retain_indices_repeated_index() {
        let g = sample_graph();
        let mut pop = Population::evaluate(vec![vec![0, 5, 6, 9, 10], vec![0, 3, 6, 9, 10]], &g);
        pop.retain_indices(&[0, 0, 1, 1]);
        assert_eq!(pop.paths(), &[vec![0, 5, 6, 9, 10], vec![0, 3, 6, 9, 10]]);
        let recomputed: Vec<f64> = pop.paths().iter().map(|p| fitness(p, &g)).collect();
        assert_eq!(pop.fitness(), recomputed.as_slice());
    }

    #[test]
    fn test_best_index_first_on_ties() {
        let g = sample_graph();
        let pop = Population::evaluate(vec![vec![0, 3, 6, 9, 10], vec![0, 5, 7, 8, 10], vec![0, 5, 6, 9, 10]], &g);
        assert_eq!(pop.best_index(), Some(1));
    }
}
