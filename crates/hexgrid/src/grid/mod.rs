//! Hex grid topology: cells, shared corners, shared sides.
//!
//! Purpose
//! - Build the full adjacency graph of a rectangular, flat offset-row hex grid
//!   wrapped into a horizontal cylinder (x wraps, y does not).
//! - Represent every corner and every side exactly once, however many cells
//!   reference it.
//!
//! Layout
//! - `types.rs` (ids and entities), `build.rs` (the four construction passes),
//!   `layout.rs` (the built `Grid` and its read surface).

mod build;
mod layout;
mod types;

pub use build::build_grid;
pub use layout::Grid;
pub use types::{Cell, CellId, Edge, EdgeId, GridCoord, Vertex, VertexId};
