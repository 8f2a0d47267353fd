//! Benchmarks for CPU-side point cloud generation.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use stardrift::galaxy::{self, GalaxyParams};
use stardrift::starfield::Starfield;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("galaxy_generate");

    for count in [1_000, 10_000, 70_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let params = GalaxyParams {
                count,
                ..GalaxyParams::default()
            };
            let mut rng = SmallRng::seed_from_u64(42);
            b.iter(|| black_box(galaxy::generate(&params, &mut rng)))
        });
    }

    group.finish();
}

fn bench_jitter_power(c: &mut Criterion) {
    let mut group = c.benchmark_group("jitter_power");

    // Higher powers cost an extra powi but shouldn't move the needle much.
    for power in [1, 5, 10] {
        group.bench_with_input(BenchmarkId::from_parameter(power), &power, |b, &power| {
            let params = GalaxyParams {
                count: 10_000,
                randomness_power: power,
                ..GalaxyParams::default()
            };
            let mut rng = SmallRng::seed_from_u64(42);
            b.iter(|| black_box(galaxy::generate(&params, &mut rng)))
        });
    }

    group.finish();
}

fn bench_scatter(c: &mut Criterion) {
    c.bench_function("scatter_one_galaxy", |b| {
        let mut rng = SmallRng::seed_from_u64(42);
        b.iter(|| black_box(galaxy::scatter(&mut rng)))
    });
}

fn bench_starfield(c: &mut Criterion) {
    c.bench_function("starfield_new", |b| {
        let mut rng = SmallRng::seed_from_u64(42);
        b.iter(|| black_box(Starfield::new(&mut rng)))
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_jitter_power,
    bench_scatter,
    bench_starfield
);
criterion_main!(benches);
