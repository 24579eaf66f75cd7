//! Selection by fitness.
//!
//! Parents, mutation targets, and survivors are all drawn by roulette-wheel
//! sampling **without replacement**: each draw picks one index in
//! proportion to its weight and removes it from the wheel.
//!
//! Fitness is minimized. With `lower_is_better` the weight of index `i` is
//! `max(f) - f[i] + min(f)`, so the cheapest path gets the largest slice;
//! otherwise the raw fitness is used and expensive paths are favoured
//! (mutation targets). Infinite fitness always counts as the worst value.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel)
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms" (truncation)

use rand::Rng;

/// Smallest slice any index gets on the wheel.
const EPSILON: f64 = 1e-10;

/// Survivor selection strategy.
///
/// # Examples
///
/// ```
/// use u_pathfind::ga::Selection;
///
/// assert_eq!(Selection::default(), Selection::Roulette);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Weighted sampling without replacement, cheaper paths favoured.
    #[default]
    Roulette,

    /// Keep the cheapest paths outright.
    ///
    /// Strong pressure; diversity then comes only from offspring and
    /// replenished paths.
    Truncation,
}

impl Selection {
    /// Picks `count` survivor indices from `fitness`.
    ///
    /// With `elitism` the best index is always kept (even when `count`
    /// is 0). [`Selection::Truncation`] keeps the best by construction.
    pub fn survivors<R: Rng>(&self, fitness: &[f64], count: usize, elitism: bool, rng: &mut R) -> Vec<usize> {
        let best = best_index(fitness);
        match self {
            Selection::Truncation => {
                let mut ranked: Vec<usize> = (0..fitness.len()).collect();
                ranked.sort_by(|&a, &b| fitness[a].total_cmp(&fitness[b]));
                let keep = if elitism { count.max(1) } else { count };
                ranked.truncate(keep.min(fitness.len()));
                ranked
            }
            Selection::Roulette => match best.filter(|_| elitism) {
                Some(best) => {
                    let others = (0..fitness.len()).filter(|&i| i != best);
                    let mut chosen = vec![best];
                    chosen.extend(roulette(fitness, others, count.saturating_sub(1), true, rng));
                    chosen
                }
                None => roulette(fitness, 0..fitness.len(), count, true, rng),
            },
        }
    }
}

/// Number of draws for a rate: `ceil(len × rate)`, capped at `len`.
pub fn sample_count(len: usize, rate: f64) -> usize {
    if rate.is_nan() || rate <= 0.0 {
        return 0;
    }
    ((len as f64 * rate).ceil() as usize).min(len)
}

/// Draws `sample_count(fitness.len(), rate)` distinct indices by roulette.
///
/// # Examples
///
/// ```
/// use u_pathfind::ga::select;
/// use u_pathfind::random::create_rng;
///
/// let mut rng = create_rng(42);
/// let picked = select(&[12.0, 30.0, 14.0, 16.0], 0.5, true, &mut rng);
/// assert_eq!(picked.len(), 2);
/// assert_ne!(picked[0], picked[1]);
/// ```
pub fn select<R: Rng>(fitness: &[f64], rate: f64, lower_is_better: bool, rng: &mut R) -> Vec<usize> {
    let count = sample_count(fitness.len(), rate);
    roulette(fitness, 0..fitness.len(), count, lower_is_better, rng)
}

/// Roulette sampling without replacement over `candidates`.
///
/// Returns at most `count` indices, in draw order. Weights are computed
/// over the whole `fitness` table, not only the candidates.
pub fn roulette<R, I>(fitness: &[f64], candidates: I, count: usize, lower_is_better: bool, rng: &mut R) -> Vec<usize>
where
    R: Rng,
    I: IntoIterator<Item = usize>,
{
    let weights = sampling_weights(fitness, lower_is_better);
    let mut pool: Vec<usize> = candidates.into_iter().filter(|&i| i < fitness.len()).collect();
    let mut chosen = Vec::with_capacity(count.min(pool.len()));

    while chosen.len() < count && !pool.is_empty() {
        let total: f64 = pool.iter().map(|&i| weights[i]).sum();
        let pick = if total.is_finite() {
            let threshold = rng.random_range(0.0..total);
            let mut cumulative = 0.0;
            pool.iter()
                .position(|&i| {
                    cumulative += weights[i];
                    cumulative > threshold
                })
                .unwrap_or(pool.len() - 1) // floating-point fallback
        } else {
            rng.random_range(0..pool.len())
        };
        chosen.push(pool.remove(pick));
    }

    chosen
}

/// Roulette weight of every index; each is at least [`EPSILON`].
fn sampling_weights(fitness: &[f64], lower_is_better: bool) -> Vec<f64> {
    let (min, max) = fitness
        .iter()
        .copied()
        .filter(|f| f.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), f| (lo.min(f), hi.max(f)));

    if min > max {
        // nothing finite: uniform wheel
        return vec![EPSILON; fitness.len()];
    }

    fitness
        .iter()
        .map(|&f| {
            let w = match (f.is_finite(), lower_is_better) {
                (true, true) => max - f + min,
                (true, false) => f,
                (false, true) => 0.0,
                (false, false) => max + min,
            };
            w.max(EPSILON)
        })
        .collect()
}

fn best_index(fitness: &[f64]) -> Option<usize> {
    fitness
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
}
