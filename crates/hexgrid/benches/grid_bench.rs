//! Criterion microbenches for grid construction and reachability.
//!
//! - Construction: square grids of 16², 64², 256² cells.
//! - Flood: whole-grid flood and same-label regions on a 64² grid.
//! - Probe: `is_disconnected_partition` over every cell of a labeled 64² grid.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hexgrid::api::{
    build_grid, count_split_cells, draw_labels, draw_labels_replay, flood, CellId, LabelReplay,
};

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for side in [16usize, 64, 256] {
        group.bench_with_input(BenchmarkId::new("build_grid", side), &side, |b, &side| {
            b.iter(|| build_grid(side, side).unwrap())
        });
    }
    group.finish();
}

fn bench_flood(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood");
    let grid = build_grid(64, 64).unwrap();
    group.bench_function(BenchmarkId::new("flood_all", "64x64"), |b| {
        b.iter(|| flood(&grid, CellId(0), |_| true).len())
    });
    group.bench_function(BenchmarkId::new("flood_same_label", "64x64/k2"), |b| {
        b.iter_batched(
            || {
                let tok = LabelReplay { seed: 7, index: 3 };
                draw_labels_replay(grid.cell_count(), 2, tok).unwrap()
            },
            |labels| {
                let key = labels[0];
                flood(&grid, CellId(0), |n| labels[n.0] == key).len()
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_probe(c: &mut Criterion) {
    let mut group = c.benchmark_group("probe");
    let grid = build_grid(64, 64).unwrap();
    for values in [2u32, 3, 6] {
        let labels = draw_labels(grid.cell_count(), values, 11).unwrap();
        group.bench_with_input(
            BenchmarkId::new("count_split_cells", values),
            &labels,
            |b, labels| b.iter(|| count_split_cells(&grid, labels)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_flood, bench_probe);
criterion_main!(benches);
