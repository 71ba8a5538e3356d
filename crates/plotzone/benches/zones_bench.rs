//! Criterion benchmarks for the raster zone-area engine.
//! Focus sizes: raster side in {256, 551, 1024}, synthetic boundaries with 12 vertices.
//! Results: by default under target/criterion; to store elsewhere, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p plotzone

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use plotzone::analysis::{analyze, AnalysisCfg, PlotInput};
use plotzone::geom::rand::{draw_boundary_radial, RadialCfg, ReplayToken};
use plotzone::raster::{compute_zone_areas, fill_polygon};

fn cfg_for_side(side: u32) -> RadialCfg {
    let half = side as f64 / 2.0;
    RadialCfg {
        base_radius: half * 0.7,
        center: Vector2::new(half, half),
        ..RadialCfg::default()
    }
}

fn bench_zones(c: &mut Criterion) {
    let mut group = c.benchmark_group("zones");
    for &side in &[256u32, 551, 1024] {
        let cfg = cfg_for_side(side);
        group.bench_with_input(BenchmarkId::new("fill_polygon", side), &side, |b, &side| {
            b.iter_batched(
                || draw_boundary_radial(cfg, ReplayToken { seed: 41, index: 0 }),
                |poly| {
                    let _m = fill_polygon(side as usize, side as usize, &poly.points);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(
            BenchmarkId::new("compute_zone_areas", side),
            &side,
            |b, &side| {
                b.iter_batched(
                    || draw_boundary_radial(cfg, ReplayToken { seed: 42, index: 1 }),
                    |poly| {
                        let _a = compute_zone_areas(&poly, Some(cfg.center), 12.5, side, side)
                            .unwrap();
                    },
                    BatchSize::SmallInput,
                )
            },
        );
    }

    let cfg = RadialCfg::default();
    let (w, h) = cfg.raster_extent();
    group.bench_function(BenchmarkId::new("analyze", "default"), |b| {
        b.iter_batched(
            || {
                let poly = draw_boundary_radial(cfg, ReplayToken { seed: 43, index: 2 });
                PlotInput::new(poly, -20.0, (w, h))
            },
            |input| {
                let _r = analyze(&input, &AnalysisCfg::default()).unwrap();
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_zones);
criterion_main!(benches);
