//! GA generational loop.
//!
//! [`GeneticRunner`] drives the whole pipeline:
//! prune → populate → (crossover → mutation → survivors → replenish) × N.

use super::config::GeneticConfig;
use super::operators::{crossover, mutate};
use super::population::{generate_population, random_path};
use super::selection::{roulette, sample_count, select};
use super::types::{Path, Population};
use crate::error::{PathError, Result};
use crate::graph::subgraph::prune;
use crate::graph::{check_node, GraphView};
use crate::random::rng_from_seed;
use rand::Rng;
use tracing::{debug, info};

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// `max_generations` reached.
    MaxGenerations,
    /// `max_stagnant_generations` consecutive generations without strict improvement.
    Stagnation,
    /// Survivor selection returned nobody.
    NoSurvivors,
}

/// Snapshot taken at the end of each generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// 1-based generation number.
    pub generation: usize,
    /// Lowest fitness in the population.
    pub best_fitness: f64,
    /// Mean of the finite fitness values.
    pub mean_fitness: f64,
    /// Population size after survivor selection and replenishing.
    pub population_size: usize,
    /// Children appended by crossover.
    pub offspring: usize,
    /// Paths actually changed by mutation.
    pub mutations: usize,
    /// Current stagnation counter.
    pub stagnation: usize,
}

/// Result of a GA run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneticResult {
    /// Cheapest path in the final population.
    pub best: Path,

    /// Cost of `best`.
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run was terminated due to stagnation.
    pub stagnated: bool,

    /// Why the run stopped.
    pub termination: Termination,

    /// Best fitness of the initial population, then at the end of each generation.
    pub fitness_history: Vec<f64>,

    /// Per-generation statistics.
    pub stats: Vec<GenerationStats>,

    /// Nodes that can reach the destination.
    pub pruned_nodes: usize,
}

/// Executes the GA loop.
///
/// # Usage
///
/// ```
/// use u_pathfind::ga::{GeneticConfig, GeneticRunner};
/// use u_pathfind::graph::Graph;
///
/// let graph = Graph::from_edges(
///     4,
///     &[(0, 1, 1.0), (1, 3, 1.0), (0, 2, 1.0), (2, 3, 5.0)],
///     true,
/// ).unwrap();
/// let config = GeneticConfig::fast().with_seed(42);
/// let result = GeneticRunner::run(&graph, 0, 3, &config).unwrap();
/// assert_eq!(result.best, vec![0, 1, 3]);
/// assert_eq!(result.best_fitness, 2.0);
/// ```
pub struct GeneticRunner;

impl GeneticRunner {
    /// Runs the GA with an RNG seeded from `config.seed`.
    ///
    /// # Errors
    /// - [`PathError::EmptyPopulation`] / [`PathError::InvalidConfig`] for a
    ///   bad configuration
    /// - [`PathError::NodeOutOfRange`] for an invalid endpoint
    /// - [`PathError::Unreachable`] if no path from `source` to
    ///   `destination` exists; detected before any path is generated
    pub fn run<G: GraphView + ?Sized>(
        graph: &G,
        source: usize,
        destination: usize,
        config: &GeneticConfig,
    ) -> Result<GeneticResult> {
        let mut rng = rng_from_seed(config.seed);
        evolve(graph, source, destination, config, &mut rng, |_| {})
    }

    /// Runs the GA, calling `observer` after every generation.
    ///
    /// # Errors
    /// Same as [`run`](Self::run).
    pub fn run_with_observer<G, F>(
        graph: &G,
        source: usize,
        destination: usize,
        config: &GeneticConfig,
        observer: F,
    ) -> Result<GeneticResult>
    where
        G: GraphView + ?Sized,
        F: FnMut(&GenerationStats),
    {
        let mut rng = rng_from_seed(config.seed);
        evolve(graph, source, destination, config, &mut rng, observer)
    }

    /// Runs the GA with a caller-supplied RNG; `config.seed` is ignored.
    ///
    /// # Errors
    /// Same as [`run`](Self::run).
    pub fn run_with_rng<G, R>(
        graph: &G,
        source: usize,
        destination: usize,
        config: &GeneticConfig,
        rng: &mut R,
    ) -> Result<GeneticResult>
    where
        G: GraphView + ?Sized,
        R: Rng,
    {
        evolve(graph, source, destination, config, rng, |_| {})
    }
}

fn evolve<G, R, F>(
    graph: &G,
    source: usize,
    destination: usize,
    config: &GeneticConfig,
    rng: &mut R,
    mut observer: F,
) -> Result<GeneticResult>
where
    G: GraphView + ?Sized,
    R: Rng,
    F: FnMut(&GenerationStats),
{
    config.validate()?;
    check_node(graph, source)?;

    // 1. Restrict to nodes that can reach the destination
    let sub = prune(graph, destination)?;
    if !sub.contains(source) {
        debug!(source, destination, "source cannot reach destination");
        return Err(PathError::Unreachable(source, destination));
    }

    // 2. Initial population
    let paths = generate_population(&sub, source, destination, config.population_size, rng)?;
    let mut population = Population::evaluate(paths, &sub);

    info!(
        source,
        destination,
        population = config.population_size,
        pruned_nodes = sub.len(),
        "starting path GA"
    );

    let mut previous_best = population.best_fitness();
    let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
    fitness_history.push(previous_best);
    let mut stats = Vec::with_capacity(config.max_generations);
    let mut stagnation = 0usize;
    let mut termination = Termination::MaxGenerations;

    // 3. Generational loop
    for generation in 1..=config.max_generations {
        // Crossover: reversed roulette, pairs of consecutive parents
        let parents = parent_pairs(population.fitness(), config.crossover_rate, rng);
        let mut offspring = 0;
        for pair in parents.chunks_exact(2) {
            let (a, b) = crossover(population.path(pair[0]), population.path(pair[1]), rng);
            population.push(a, &sub);
            population.push(b, &sub);
            offspring += 2;
        }

        // Mutation: plain roulette favours expensive paths; the elite is untouchable
        let elite = population.best_index().filter(|_| config.elitism);
        let targets = mutation_targets(population.fitness(), config.mutation_rate, elite, rng);
        let mut mutations = 0;
        for i in targets {
            let mut path = population.path(i).clone();
            if mutate(&mut path, &sub, rng) {
                population.replace(i, path, &sub);
                mutations += 1;
            }
        }

        // Survivors
        let keep = sample_count(population.len(), config.survival_rate).min(config.population_size);
        let survivors = config
            .survivor_selection
            .survivors(population.fitness(), keep, config.elitism, rng);
        let no_survivors = survivors.is_empty();
        if !no_survivors {
            population.retain_indices(&survivors);
            if config.replenish {
                while population.len() < config.population_size {
                    let path = random_path(&sub, source, destination, rng)?;
                    population.push(path, &sub);
                }
            }
        }

        // Convergence
        let best = population.best_fitness();
        if best < previous_best {
            stagnation = 0;
        } else {
            stagnation += 1;
        }
        previous_best = best;
        fitness_history.push(best);

        let snapshot = GenerationStats {
            generation,
            best_fitness: best,
            mean_fitness: population.mean_fitness(),
            population_size: population.len(),
            offspring,
            mutations,
            stagnation,
        };
        debug!(
            generation,
            best,
            mean = snapshot.mean_fitness,
            size = snapshot.population_size,
            stagnation,
            "generation complete"
        );
        observer(&snapshot);
        stats.push(snapshot);

        if no_survivors {
            termination = Termination::NoSurvivors;
            break;
        }
        if config.max_stagnant_generations > 0 && stagnation >= config.max_stagnant_generations {
            termination = Termination::Stagnation;
            break;
        }
    }

    let (best, best_fitness) = population
        .best()
        .map(|(path, fitness)| (path.clone(), fitness))
        .ok_or(PathError::EmptyPopulation)?;
    let generations = stats.len();

    info!(?termination, generations, best_fitness, "path GA finished");

    Ok(GeneticResult {
        best,
        best_fitness,
        generations,
        stagnated: termination == Termination::Stagnation,
        termination,
        fitness_history,
        stats,
        pruned_nodes: sub.len(),
    })
}

/// Crossover parents drawn by reversed roulette; an odd draw drops its last index.
fn parent_pairs<R: Rng>(fitness: &[f64], rate: f64, rng: &mut R) -> Vec<usize> {
    let mut parents = select(fitness, rate, true, rng);
    if parents.len() % 2 == 1 {
        parents.pop();
    }
    parents
}

/// Mutation targets drawn by plain roulette, never including `elite`.
fn mutation_targets<R: Rng>(fitness: &[f64], rate: f64, elite: Option<usize>, rng: &mut R) -> Vec<usize> {
    let count = sample_count(fitness.len(), rate);
    let candidates = (0..fitness.len()).filter(|&i| Some(i) != elite);
    roulette(fitness, candidates, count, false, rng)
}

// ============================================================================
// Tests
// ============================================================================
