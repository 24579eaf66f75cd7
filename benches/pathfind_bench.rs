//! Criterion benchmarks for u-pathfind search algorithms.
//!
//! Uses synthetic directed grids so that graph size is the only variable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_pathfind::ga::{GeneticConfig, GeneticRunner};
use u_pathfind::graph::subgraph::prune;
use u_pathfind::graph::Graph;
use u_pathfind::shortest::{a_star, a_star_with, dijkstra, Heuristic};

// ===========================================================================
// Grid graph: edges right and down, deterministic weights
// ===========================================================================

fn grid(k: usize) -> Graph {
    let mut edges = Vec::with_capacity(2 * k * k);
    for r in 0..k {
        for c in 0..k {
            let node = r * k + c;
            let w = ((r * 7 + c * 3) % 5 + 1) as f64;
            if c + 1 < k {
                edges.push((node, node + 1, w));
            }
            if r + 1 < k {
                edges.push((node, node + k, w + 0.5));
            }
        }
    }
    Graph::from_edges(k * k, &edges, true).expect("grid edges are in range")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_shortest(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_grid");

    for &k in &[10usize, 30, 60] {
        let graph = grid(k);
        let target = k * k - 1;
        group.bench_with_input(BenchmarkId::new("dijkstra", k), &graph, |b, g| {
            b.iter(|| black_box(dijkstra(black_box(g), 0, target)))
        });
        group.bench_with_input(BenchmarkId::new("a_star_hops", k), &graph, |b, g| {
            b.iter(|| black_box(a_star(black_box(g), 0, target)))
        });
        group.bench_with_input(BenchmarkId::new("a_star_min_weight", k), &graph, |b, g| {
            b.iter(|| black_box(a_star_with(black_box(g), 0, target, Heuristic::MinWeightHops)))
        });
    }
    group.finish();
}

fn bench_prune(c: &mut Criterion) {
    let mut group = c.benchmark_group("prune_grid");

    for &k in &[10usize, 30, 60] {
        let graph = grid(k);
        let target = k * k / 2;
        group.bench_with_input(BenchmarkId::from_parameter(k), &graph, |b, g| {
            b.iter(|| black_box(prune(black_box(g), target).map(|sub| sub.len())))
        });
    }
    group.finish();
}

fn bench_ga_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_grid");
    group.sample_size(10);

    for (k, pop, gen) in [(6usize, 30usize, 50usize), (10, 50, 50), (15, 80, 30)] {
        let graph = grid(k);
        let config = GeneticConfig {
            population_size: pop,
            max_generations: gen,
            max_stagnant_generations: 0,
            seed: Some(42),
            ..GeneticConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new(format!("k{}_p{}_g{}", k, pop, gen), k),
            &(graph, config),
            |b, (g, c)| {
                b.iter(|| {
                    let result = GeneticRunner::run(black_box(g), 0, k * k - 1, black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_shortest, bench_prune, bench_ga_grid);
criterion_main!(benches);
