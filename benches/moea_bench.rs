//! Criterion benchmarks for the moea selection core.
//!
//! Uses synthetic objective clouds to measure pure algorithm overhead
//! independent of any genome or problem code.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use moea::objective::{ObjectiveLayout, ObjectiveVector};
use moea::random::create_rng;
use moea::spea2::{archive, assign, partition, DistanceScratch, MultiObjective};
use rand::Rng;

#[derive(Clone)]
struct BenchInd {
    scores: ObjectiveVector,
}

impl MultiObjective for BenchInd {
    fn objectives(&self) -> &ObjectiveVector {
        &self.scores
    }
    fn set_objectives(&mut self, scores: ObjectiveVector) {
        self.scores = scores;
    }
}

/// Random cloud in the unit square: a mix of front and dominated points.
fn random_population(n: usize, seed: u64) -> Vec<BenchInd> {
    let layout = ObjectiveLayout::minimize(2);
    let mut rng = create_rng(seed);
    (0..n)
        .map(|_| BenchInd {
            scores: layout.scores(vec![
                rng.random_range(0.0..1.0),
                rng.random_range(0.0..1.0),
            ]),
        })
        .collect()
}

/// Mutually non-dominated points on the line x + y = 1: worst case for
/// archive truncation, since the whole population is the front.
fn front_population(n: usize, seed: u64) -> Vec<BenchInd> {
    let layout = ObjectiveLayout::minimize(2);
    let mut rng = create_rng(seed);
    (0..n)
        .map(|_| {
            let x: f64 = rng.random_range(0.0..1.0);
            BenchInd {
                scores: layout.scores(vec![x, 1.0 - x]),
            }
        })
        .collect()
}

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");
    group.sample_size(10);

    for n in [100usize, 500, 1000] {
        let pop = random_population(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &pop, |b, pop| {
            b.iter(|| black_box(partition(pop)));
        });
    }
    group.finish();
}

fn bench_fitness_assignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness_assign");
    group.sample_size(10);

    for n in [100usize, 300, 600] {
        let pop = random_population(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &pop, |b, pop| {
            let mut scratch = DistanceScratch::new();
            let mut rng = create_rng(7);
            b.iter(|| black_box(assign(pop, None, true, &mut scratch, &mut rng)));
        });
    }
    group.finish();
}

fn bench_archive_truncation(c: &mut Criterion) {
    let mut group = c.benchmark_group("archive_truncate");
    group.sample_size(10);

    for n in [100usize, 300] {
        let pop = front_population(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &pop, |b, pop| {
            let mut scratch = DistanceScratch::new();
            let mut rng = create_rng(7);
            let aux = assign(pop, None, true, &mut scratch, &mut rng);
            b.iter(|| {
                black_box(archive::build(pop, &aux, pop.len() / 2, true, &mut scratch))
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_partition,
    bench_fitness_assignment,
    bench_archive_truncation
);
criterion_main!(benches);
