use criterion::{criterion_group, criterion_main, Criterion};
use oil_survey::prelude::{generator, Clusterer, Grid, IndexedClusterer, LruClusterer};
use rand::{rngs::StdRng, SeedableRng};

fn criterion_benchmark(c: &mut Criterion) {
    let checkerboard = generator::checkerboard(128, 128);
    let islands = generator::islands(1024);
    let noise = generator::noise(128, 128, 6, &mut StdRng::seed_from_u64(42)).unwrap();
    let large_islands: Grid = include_str!("../data/surveys/larger/large-islands.txt")
        .lines()
        .collect();

    for (name, grid) in [
        ("checkerboard", &checkerboard),
        ("islands", &islands),
        ("noise 6/16", &noise),
        ("large islands", &large_islands),
    ] {
        let mut group = c.benchmark_group(name);
        group.sample_size(10);
        group.bench_function("indexed", |b| b.iter(|| IndexedClusterer.cluster(grid)));
        group.bench_function("lru", |b| b.iter(|| LruClusterer.cluster(grid)));
        group.finish();
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
