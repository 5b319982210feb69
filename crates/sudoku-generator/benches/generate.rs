//! Benchmarks for puzzle generation.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generate
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use sudoku_generator::{GeneratorConfig, GeneratorMode, generate};

const SEEDS: [u64; 3] = [0, 1, 2];

fn bench_generate_first(c: &mut Criterion) {
    for (i, &seed) in SEEDS.iter().enumerate() {
        c.bench_with_input(
            BenchmarkId::new("generate_first", format!("seed_{i}")),
            &seed,
            |b, &seed| {
                b.iter_batched(
                    || hint::black_box(Pcg64::seed_from_u64(seed)),
                    |mut rng| generate(9, GeneratorMode::First, GeneratorConfig::default(), &mut rng),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generate_unique(c: &mut Criterion) {
    let config = GeneratorConfig { empty_rate: 0.3 };
    for (i, &seed) in SEEDS.iter().enumerate() {
        c.bench_with_input(
            BenchmarkId::new("generate_unique", format!("seed_{i}")),
            &seed,
            |b, &seed| {
                b.iter_batched(
                    || hint::black_box(Pcg64::seed_from_u64(seed)),
                    |mut rng| generate(9, GeneratorMode::Unique, config, &mut rng),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(benches, bench_generate_first, bench_generate_unique);
criterion_main!(benches);
