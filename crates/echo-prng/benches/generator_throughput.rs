// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Benchmark: draw throughput per engine.
//!
//! Measures `uniform` and `rand_range` over a batch of 1024 draws so the
//! per-iteration overhead of the harness stays small relative to the work.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use echo_prng::{EngineKind, Generator};

const BATCH: u64 = 1024;

fn bench_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniform");
    group.throughput(Throughput::Elements(BATCH));
    for kind in EngineKind::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, &kind| {
            let mut rng = Generator::with_kind(kind, 42);
            b.iter(|| {
                let mut acc = 0.0;
                for _ in 0..BATCH {
                    acc += rng.uniform();
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

fn bench_rand_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("rand_range");
    group.throughput(Throughput::Elements(BATCH));
    for kind in EngineKind::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, &kind| {
            let mut rng = Generator::with_kind(kind, 42);
            b.iter(|| {
                let mut acc = 0_i64;
                for _ in 0..BATCH {
                    acc += i64::from(rng.rand_range(black_box(1), black_box(7)));
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_uniform, bench_rand_range);
criterion_main!(benches);
