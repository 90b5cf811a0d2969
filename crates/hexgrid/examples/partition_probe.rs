//! Split-cell timing probe for a single labeled grid.
//!
//! Purpose
//! - Provide a reproducible data point for "how long does it take to build a
//!   grid and probe every cell for a split same-label neighborhood?"
//!
//! Shape
//! - One 128x96 grid, labeled with three values from a fixed replay token.
//! - Build time and probe time are reported separately.

use std::time::Instant;

use hexgrid::api::{build_grid, count_split_cells, draw_labels_replay, flood, CellId, LabelReplay};

fn main() {
    let (width, height) = (128, 96);

    let build_start = Instant::now();
    let grid = build_grid(width, height).expect("grid dimensions are positive");
    let build_elapsed = build_start.elapsed().as_secs_f64() * 1e3;

    let labels = draw_labels_replay(grid.cell_count(), 3, LabelReplay { seed: 2025, index: 0 })
        .expect("at least one label value");

    let probe_start = Instant::now();
    let split = count_split_cells(&grid, &labels);
    let probe_elapsed = probe_start.elapsed().as_secs_f64() * 1e3;

    let key = labels[0];
    let region = flood(&grid, CellId(0), |c| labels[c.0] == key);

    println!(
        "grid={width}x{height} cells={} vertices={} edges={}",
        grid.cell_count(),
        grid.vertices().len(),
        grid.edges().len()
    );
    println!(
        "split_cells={split} split_fraction={:.4} region_of_origin={}",
        split as f64 / grid.cell_count() as f64,
        region.len()
    );
    println!("build_time_ms={build_elapsed:.3}");
    println!("probe_time_ms={probe_elapsed:.3}");
}
