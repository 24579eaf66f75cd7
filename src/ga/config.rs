//! GA configuration.
//!
//! [`GeneticConfig`] holds every parameter of the generational loop.

use super::selection::Selection;
use crate::error::{PathError, Result};

/// Configuration for the path GA.
///
/// Rates are fractions of the current population: `crossover_rate` picks
/// parents, `mutation_rate` picks mutation targets, `survival_rate` picks
/// the members carried to the next generation.
///
/// # Defaults
///
/// ```
/// use u_pathfind::ga::GeneticConfig;
///
/// let config = GeneticConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.max_generations, 200);
/// assert!(config.elitism);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_pathfind::ga::{GeneticConfig, Selection};
///
/// let config = GeneticConfig::default()
///     .with_population_size(80)
///     .with_survivor_selection(Selection::Truncation)
///     .with_mutation_rate(0.3)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneticConfig {
    /// Paths generated up front, and the cap on survivors per generation.
    pub population_size: usize,

    /// Hard bound on the number of generations.
    pub max_generations: usize,

    /// Fraction of the population drawn as crossover parents (0.0–1.0).
    ///
    /// An odd draw drops its last parent.
    pub crossover_rate: f64,

    /// Fraction of the population drawn for mutation (0.0–1.0).
    ///
    /// Draws favour expensive paths.
    pub mutation_rate: f64,

    /// Fraction of the grown population kept after each generation (0.0–1.0).
    pub survival_rate: f64,

    /// Generations without strict improvement before stopping.
    ///
    /// Set to 0 to disable stagnation-based termination.
    pub max_stagnant_generations: usize,

    /// Always keep the best path, and never mutate it.
    pub elitism: bool,

    /// How survivors are drawn.
    pub survivor_selection: Selection,

    /// Top the population back up to `population_size` with fresh random
    /// paths after survivor selection.
    pub replenish: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 200,
            crossover_rate: 0.8,
            mutation_rate: 0.2,
            survival_rate: 0.5,
            max_stagnant_generations: 20,
            elitism: true,
            survivor_selection: Selection::default(),
            replenish: true,
            seed: None,
        }
    }
}

impl GeneticConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the survival rate.
    pub fn with_survival_rate(mut self, rate: f64) -> Self {
        self.survival_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_max_stagnant_generations(mut self, limit: usize) -> Self {
        self.max_stagnant_generations = limit;
        self
    }

    /// Enables or disables elitism.
    pub fn with_elitism(mut self, elitism: bool) -> Self {
        self.elitism = elitism;
        self
    }

    /// Sets the survivor selection strategy.
    pub fn with_survivor_selection(mut self, selection: Selection) -> Self {
        self.survivor_selection = selection;
        self
    }

    /// Enables or disables replenishing.
    pub fn with_replenish(mut self, replenish: bool) -> Self {
        self.replenish = replenish;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for small graphs or quick answers.
    ///
    /// - Population: 30, Generations: 100
    /// - Stagnation limit: 15
    pub fn fast() -> Self {
        Self {
            population_size: 30,
            max_generations: 100,
            max_stagnant_generations: 15,
            ..Self::default()
        }
    }

    /// Preset for medium graphs.
    ///
    /// - Population: 60, Generations: 300
    /// - Stagnation limit: 30
    pub fn balanced() -> Self {
        Self {
            population_size: 60,
            max_generations: 300,
            max_stagnant_generations: 30,
            ..Self::default()
        }
    }

    /// Preset for large graphs where path quality matters more than time.
    ///
    /// - Population: 120, Generations: 600
    /// - Stagnation limit: 60, Mutation rate: 0.3
    pub fn thorough() -> Self {
        Self {
            population_size: 120,
            max_generations: 600,
            max_stagnant_generations: 60,
            mutation_rate: 0.3,
            ..Self::default()
        }
    }

    /// Picks a preset from the graph size.
    ///
    /// - `node_count < 50` → [`fast()`](Self::fast)
    /// - `50 ≤ node_count < 200` → [`balanced()`](Self::balanced)
    /// - `node_count ≥ 200` → [`thorough()`](Self::thorough)
    pub fn auto_select(node_count: usize) -> Self {
        if node_count < 50 {
            Self::fast()
        } else if node_count < 200 {
            Self::balanced()
        } else {
            Self::thorough()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// - [`PathError::EmptyPopulation`] if `population_size` is 0
    /// - [`PathError::InvalidConfig`] if `max_generations` is 0 or a rate
    ///   lies outside `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(PathError::EmptyPopulation);
        }
        if self.max_generations == 0 {
            return Err(PathError::InvalidConfig("max_generations must be at least 1".into()));
        }
        for (name, rate) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
            ("survival_rate", self.survival_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(PathError::InvalidConfig(format!("{name} must be in [0, 1], got {rate}")));
            }
        }
        Ok(())
    }
}
