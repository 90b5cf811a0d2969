use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use hexgrid::api::{build_grid, Grid};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod report;

use provenance::{GridShape, Payload};
use report::{flood_region, probe_splits, GridSummary};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Build hex grids and probe their connectivity")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Clone, Copy)]
struct Dims {
    #[arg(long)]
    width: usize,
    #[arg(long)]
    height: usize,
}

#[derive(Subcommand)]
enum Action {
    /// Build a grid and print its element counts and extent
    Build {
        #[command(flatten)]
        dims: Dims,
    },
    /// Flood from one cell through cells sharing its random label
    Flood {
        #[command(flatten)]
        dims: Dims,
        #[arg(long)]
        x: usize,
        #[arg(long)]
        y: usize,
        #[arg(long, default_value_t = 2)]
        values: u32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Count cells whose same-label neighborhood is split
    Probe {
        #[command(flatten)]
        dims: Dims,
        #[arg(long, default_value_t = 2)]
        values: u32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Also write the report here, with a provenance sidecar next to it
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Build { dims } => build(dims),
        Action::Flood {
            dims,
            x,
            y,
            values,
            seed,
        } => flood(dims, x, y, values, seed),
        Action::Probe {
            dims,
            values,
            seed,
            out,
        } => probe(dims, values, seed, out),
    }
}

fn grid_for(dims: Dims) -> Result<Grid> {
    build_grid(dims.width, dims.height)
        .with_context(|| format!("building {}x{} grid", dims.width, dims.height))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn build(dims: Dims) -> Result<()> {
    tracing::info!(width = dims.width, height = dims.height, "build");
    let grid = grid_for(dims)?;
    let summary = GridSummary::of(&grid);
    tracing::info!(
        cells = summary.cells,
        vertices = summary.vertices,
        edges = summary.edges,
        "grid_counts"
    );
    print_json(&summary)
}

fn flood(dims: Dims, x: usize, y: usize, values: u32, seed: u64) -> Result<()> {
    tracing::info!(width = dims.width, height = dims.height, x, y, values, seed, "flood");
    let grid = grid_for(dims)?;
    let report = flood_region(&grid, x, y, values, seed)?;
    tracing::info!(label = report.label, region_size = report.region_size, "flood_region");
    print_json(&report)
}

fn probe(dims: Dims, values: u32, seed: u64, out: Option<PathBuf>) -> Result<()> {
    tracing::info!(width = dims.width, height = dims.height, values, seed, out = ?out, "probe");
    let grid = grid_for(dims)?;
    let report = probe_splits(&grid, values, seed)?;
    tracing::info!(split_cells = report.split_cells, "probe_result");

    if let Some(out) = out {
        provenance::ensure_parent(&out)?;
        std::fs::write(&out, serde_json::to_vec_pretty(&report)?)
            .with_context(|| format!("writing {}", out.display()))?;
        let shape = GridShape {
            width: dims.width,
            height: dims.height,
        };
        let sidecar = provenance::write_sidecar(
            &out,
            Payload::new(shape, json!({ "values": values, "seed": seed })),
        )?;
        tracing::info!(sidecar = %sidecar.display(), "provenance_written");
    }
    print_json(&report)
}
