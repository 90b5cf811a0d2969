//! JSON-serializable summaries printed by the commands.

use anyhow::{Context, Result};
use hexgrid::api::{count_split_cells, draw_labels, flood, Grid};
use serde::Serialize;

use crate::provenance::GridShape;

#[derive(Debug, Serialize)]
pub struct GridSummary {
    pub grid: GridShape,
    pub cells: usize,
    pub vertices: usize,
    pub edges: usize,
    pub boundary_edges: usize,
    pub x_dimension: f64,
    pub y_dimension: f64,
}

impl GridSummary {
    pub fn of(grid: &Grid) -> Self {
        Self {
            grid: shape(grid),
            cells: grid.cell_count(),
            vertices: grid.vertices().len(),
            edges: grid.edges().len(),
            boundary_edges: grid.boundary_edges().count(),
            x_dimension: grid.x_dimension(),
            y_dimension: grid.y_dimension(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FloodReport {
    pub grid: GridShape,
    pub start: (usize, usize),
    pub label: u32,
    pub region_size: usize,
}

/// Flood from `(x, y)` through cells carrying the start cell's label.
pub fn flood_region(grid: &Grid, x: usize, y: usize, values: u32, seed: u64) -> Result<FloodReport> {
    let start = grid
        .cell_id(x, y)
        .with_context(|| format!("start cell ({x}, {y})"))?;
    let labels = draw_labels(grid.cell_count(), values, seed)?;
    let label = labels[start.0];
    let region = flood(grid, start, |c| labels[c.0] == label);
    Ok(FloodReport {
        grid: shape(grid),
        start: (x, y),
        label,
        region_size: region.len(),
    })
}

#[derive(Debug, Serialize)]
pub struct ProbeReport {
    pub grid: GridShape,
    pub values: u32,
    pub seed: u64,
    pub split_cells: usize,
    pub split_fraction: f64,
}

/// Count cells whose same-label neighborhood is split under a seeded labeling.
pub fn probe_splits(grid: &Grid, values: u32, seed: u64) -> Result<ProbeReport> {
    let labels = draw_labels(grid.cell_count(), values, seed)?;
    let split_cells = count_split_cells(grid, &labels);
    Ok(ProbeReport {
        grid: shape(grid),
        values,
        seed,
        split_cells,
        split_fraction: split_cells as f64 / grid.cell_count() as f64,
    })
}

fn shape(grid: &Grid) -> GridShape {
    GridShape {
        width: grid.width(),
        height: grid.height(),
    }
}
