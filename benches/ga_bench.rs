//! Criterion benchmarks for the GA engine.
//!
//! Uses synthetic problems (OneMax, shifted sphere) to measure loop and
//! operator overhead independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use soft_ga::ga::{
    BinaryChromosome, BinaryDomain, Chromosome, CrossoverMethod, GaConfig, GaEngine,
    RealChromosome, RealDomain, Replacement, Selection,
};

// ===========================================================================
// Problems
// ===========================================================================

fn onemax(c: &BinaryChromosome) -> f64 {
    c.count_ones() as f64
}

/// Maximize -(sum (x_i - 1)^2).
fn sphere(c: &RealChromosome) -> f64 {
    -c.genes().iter().map(|x| (x - 1.0).powi(2)).sum::<f64>()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_onemax_crossover(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_onemax");
    group.sample_size(10);

    for method in [
        CrossoverMethod::OnePoint,
        CrossoverMethod::TwoPoint,
        CrossoverMethod::Uniform,
    ] {
        let config = GaConfig::default()
            .with_population_size(100)
            .with_chromosome_length(64)
            .with_generations(50)
            .with_crossover(method)
            .with_selection(Selection::Tournament)
            .with_replacement(Replacement::Elitism)
            .with_report_interval(0)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new("crossover", format!("{method:?}")),
            &config,
            |b, cfg| {
                b.iter(|| {
                    let mut engine = GaEngine::builder(cfg.clone(), BinaryDomain)
                        .fitness(onemax)
                        .build()
                        .unwrap();
                    black_box(engine.run().unwrap())
                })
            },
        );
    }
    group.finish();
}

fn bench_sphere_replacement(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_sphere");
    group.sample_size(10);

    for (dim, replacement) in [
        (10usize, Replacement::Generational),
        (10, Replacement::SteadyState),
        (50, Replacement::Generational),
        (50, Replacement::SteadyState),
    ] {
        let config = GaConfig::default()
            .with_population_size(100)
            .with_chromosome_length(dim)
            .with_generations(30)
            .with_replacement(replacement)
            .with_selection(Selection::Tournament)
            .with_report_interval(0)
            .with_seed(42);
        let domain = RealDomain::new(-5.0, 5.0).unwrap();
        group.bench_with_input(
            BenchmarkId::new(format!("{replacement:?}"), dim),
            &config,
            |b, cfg| {
                b.iter(|| {
                    let mut engine = GaEngine::builder(cfg.clone(), domain)
                        .fitness(sphere)
                        .build()
                        .unwrap();
                    black_box(engine.run().unwrap())
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_onemax_crossover, bench_sphere_replacement);
criterion_main!(benches);
