//! Hex grid topology and reachability.
//!
//! Builds the adjacency graph of a rectangular, flat offset-row hex grid (x wraps,
//! y does not) with every corner and side stored once, and runs flood fills over
//! any neighbor graph.
//!
//! API Policy
//! - Arena ids (`CellId`, `VertexId`, `EdgeId`) are only meaningful for the grid
//!   that produced them.
//! - A `Grid` is never observable half-built: `Grid::new` either returns a
//!   complete grid or an error.

pub mod api;
pub mod direction;
pub mod error;
pub mod flood;
pub mod geometry;
pub mod grid;
pub mod labels;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use direction::Direction;
pub use error::GridError;
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::direction::Direction;
    pub use crate::error::GridError;
    pub use crate::flood::{flood, is_disconnected_partition, Neighbors};
    pub use crate::grid::{build_grid, Cell, CellId, Edge, EdgeId, Grid, Vertex, VertexId};
    pub use nalgebra::Vector2 as Vec2;
}
