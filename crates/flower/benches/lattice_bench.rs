//! Criterion benchmarks for lattice growth and flower composition.
//! Focus sizes: rings n in {2, 3, 4, 5}.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use flower::prelude::*;

fn bench_rings(c: &mut Criterion) {
    let cfg = GeomCfg::default();
    let mut group = c.benchmark_group("lattice");
    for &n in &[2i32, 3, 4, 5] {
        group.bench_with_input(BenchmarkId::new("generate_ring", n), &n, |b, &n| {
            b.iter(|| generate_ring(n, &cfg))
        });
    }
    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let cfg = GeomCfg::default();
    let pattern = FlowerPattern::new(&cfg).unwrap();
    c.bench_function("draw_flower_of_life", |b| {
        b.iter(|| {
            let mut rec = Recorder::new();
            draw_flower_of_life(
                &mut rec,
                &pattern,
                Vec2::new(6.0, 4.5),
                3.0,
                Color::BLACK,
                &cfg,
            )
            .unwrap();
            rec
        })
    });
}

criterion_group!(benches, bench_rings, bench_compose);
criterion_main!(benches);
