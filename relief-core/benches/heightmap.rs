#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use relief_core::terrain::{NoiseSettings, TerrainSettings, regenerate};
use std::hint::black_box;

// ── Full pipeline ───────────────────────────────────────────────────────────

fn bench_default_settings(c: &mut Criterion) {
    let settings = TerrainSettings::default();

    c.bench_function("regenerate_default_513", |b| {
        b.iter(|| black_box(regenerate(black_box(&settings)).expect("generation failed")));
    });
}

fn bench_by_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("regenerate_by_resolution");
    for resolution in [65u32, 129, 257, 513] {
        let settings = TerrainSettings {
            resolution,
            ..TerrainSettings::default()
        };
        group.throughput(Throughput::Elements(
            u64::from(resolution) * u64::from(resolution),
        ));
        group.bench_with_input(
            BenchmarkId::from_parameter(resolution),
            &settings,
            |b, settings| {
                b.iter(|| black_box(regenerate(settings).expect("generation failed")));
            },
        );
    }
    group.finish();
}

fn bench_by_octaves(c: &mut Criterion) {
    let mut group = c.benchmark_group("regenerate_by_octaves");
    for octaves in [1u32, 5, 8] {
        let settings = TerrainSettings {
            resolution: 257,
            noise: NoiseSettings {
                octaves,
                ..NoiseSettings::default()
            },
            ..TerrainSettings::default()
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(octaves),
            &settings,
            |b, settings| {
                b.iter(|| black_box(regenerate(settings).expect("generation failed")));
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_default_settings,
    bench_by_resolution,
    bench_by_octaves,
);
criterion_main!(benches);
