//! The built, read-only grid.
//!
//! Cells are stored row-major (`index = y * width + x`). Vertices and edges live
//! in their own arenas and are shared by id between the cells that meet there.

use std::ops::Index;

use crate::error::GridError;
use crate::flood::Neighbors;
use crate::geometry::{HEX_SIDE, HEX_WIDTH};

use super::build::build_grid;
use super::types::{Cell, CellId, Edge, EdgeId, Vertex, VertexId};

/// Hex grid of `width` x `height` cells, wrapped on the x-axis.
///
/// Invariants (established by `build_grid`):
/// - `cells.len() == width * height`, every vertex and edge slot filled.
/// - `cells[a].neighbor(d) == Some(b)` iff `cells[b].neighbor(d.opposite()) == Some(a)`,
///   and both hold the same edge id in those slots.
/// - Each edge is in `edges` exactly once.
#[derive(Clone, Debug)]
pub struct Grid {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) cells: Vec<Cell>,
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) edges: Vec<Edge>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        build_grid(width, height)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
    #[inline]
    pub fn hex_side(&self) -> f64 {
        HEX_SIDE
    }
    /// Overall extent along x.
    pub fn x_dimension(&self) -> f64 {
        self.width as f64 * HEX_WIDTH
    }
    /// Overall extent along y.
    pub fn y_dimension(&self) -> f64 {
        (self.height as f64 + 1.0 / 3.0) * 1.5 * HEX_SIDE
    }

    pub fn cell_id(&self, x: usize, y: usize) -> Result<CellId, GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(CellId(y * self.width + x))
    }

    pub fn cell_at(&self, x: usize, y: usize) -> Result<&Cell, GridError> {
        let id = self.cell_id(x, y)?;
        Ok(&self.cells[id.0])
    }

    #[inline]
    pub fn get_cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.0)
    }

    /// All cells, row-major.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    pub fn cell_ids(&self) -> impl Iterator<Item = CellId> {
        (0..self.cells.len()).map(CellId)
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> {
        (0..self.edges.len()).map(EdgeId)
    }

    pub fn boundary_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edge_ids().filter(|&e| self[e].is_boundary())
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Edge separating `a` from `b`, if they are neighbors.
    pub fn edge_between(&self, a: CellId, b: CellId) -> Option<EdgeId> {
        self.get_cell(a)?.edge_towards(b)
    }

    /// Cells having `vertex` as one of their corners. Linear scan.
    pub fn cells_at_vertex(&self, vertex: VertexId) -> Vec<CellId> {
        self.cell_ids()
            .filter(|&c| self[c].vertices().any(|v| v == vertex))
            .collect()
    }
}

impl Index<CellId> for Grid {
    type Output = Cell;
    #[inline]
    fn index(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }
}

impl Index<VertexId> for Grid {
    type Output = Vertex;
    #[inline]
    fn index(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.0]
    }
}

impl Index<EdgeId> for Grid {
    type Output = Edge;
    #[inline]
    fn index(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }
}

impl Neighbors for Grid {
    type Node = CellId;

    fn neighbors(&self, node: CellId) -> impl Iterator<Item = CellId> + '_ {
        self.cells[node.0].neighbors()
    }
}
