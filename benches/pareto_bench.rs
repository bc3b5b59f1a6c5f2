//! Criterion benchmarks for u-pareto.
//!
//! Uses synthetic random products to compare the pairwise and skyline
//! dominance strategies and to measure full evaluation overhead.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_pareto::criteria;
use u_pareto::dominance::DominanceStrategy;
use u_pareto::engine::{EngineConfig, ParetoEngine};
use u_pareto::matrix::{AttributeMatrix, ItemRecord};

// ===========================================================================
// Synthetic products
// ===========================================================================

const ATTRIBUTES: [&str; 4] = ["price", "rating", "battery", "weight"];

fn products(n: usize, seed: u64) -> Vec<ItemRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            ItemRecord::new()
                .with("price", rng.random_range(50..2000i64))
                .with("rating", (rng.random_range(10..50i64) as f64) / 10.0)
                .with("battery", rng.random_range(2000.0..6000.0f64))
                .with("weight", rng.random_range(120.0..260.0f64))
        })
        .collect()
}

fn product_criteria() -> Vec<criteria::Criterion> {
    vec![
        criteria::Criterion::minimize(ATTRIBUTES[0]).with_weight(2.0),
        criteria::Criterion::maximize(ATTRIBUTES[1]),
        criteria::Criterion::maximize(ATTRIBUTES[2]),
        criteria::Criterion::minimize(ATTRIBUTES[3]).with_weight(0.5),
    ]
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_dominance(c: &mut Criterion) {
    let mut group = c.benchmark_group("dominance");
    group.sample_size(20);

    let crit = product_criteria();
    for &n in &[100usize, 1000, 5000] {
        let oriented = AttributeMatrix::build(&products(n, 42), &crit).oriented(&crit);
        for strategy in [DominanceStrategy::Pairwise, DominanceStrategy::Skyline] {
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), n),
                &oriented,
                |b, m| b.iter(|| black_box(strategy.evaluate(black_box(m)))),
            );
        }
    }
    group.finish();
}

fn bench_calculate(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate");
    group.sample_size(20);

    for &n in &[100usize, 1000] {
        let items = products(n, 7);
        let engine = ParetoEngine::with_config(product_criteria(), EngineConfig::default())
            .expect("default config is valid");
        group.bench_with_input(BenchmarkId::from_parameter(n), &items, |b, items| {
            b.iter(|| black_box(engine.calculate(black_box(items))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dominance, bench_calculate);
criterion_main!(benches);
