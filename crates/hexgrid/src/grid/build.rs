//! Grid construction: cells, neighbor links, shared corners, shared sides.
//!
//! Each pass visits every cell in row-major order (y outer, x inner). Later
//! passes read what earlier passes wrote, and the corner pass also relies on
//! cells above and to the west having been visited first, so the order is fixed.

use crate::direction::Direction;
use crate::error::GridError;
use crate::geometry::{cell_center, corner_offset};

use super::layout::Grid;
use super::types::{CellId, CellSlots, Edge, EdgeId, GridCoord, Vertex, VertexId};

/// Build a `width` x `height` grid. Both dimensions must be positive.
pub fn build_grid(width: usize, height: usize) -> Result<Grid, GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::InvalidDimensions { width, height });
    }
    let _span = tracing::debug_span!("build_grid", width, height).entered();

    let mut builder = GridBuilder::new(width, height);
    builder.for_each_cell(GridBuilder::create_cell)?;
    builder.for_each_cell(GridBuilder::designate_neighbors)?;
    builder.for_each_cell(GridBuilder::add_vertices)?;
    builder.for_each_cell(GridBuilder::create_edges)?;
    let grid = builder.finish()?;

    tracing::debug!(
        cells = grid.cells.len(),
        vertices = grid.vertices.len(),
        edges = grid.edges.len(),
        "grid built"
    );
    Ok(grid)
}

type Pass = fn(&mut GridBuilder, usize, usize) -> Result<(), GridError>;

struct GridBuilder {
    width: usize,
    height: usize,
    cells: Vec<CellSlots>,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl GridBuilder {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: Vec::with_capacity(width * height),
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    fn for_each_cell(&mut self, pass: Pass) -> Result<(), GridError> {
        for y in 0..self.height {
            for x in 0..self.width {
                pass(self, x, y)?;
            }
        }
        Ok(())
    }

    #[inline]
    fn id(&self, x: usize, y: usize) -> CellId {
        CellId(y * self.width + x)
    }

    /// Cell at `(x, y)` with x wrapping around the cylinder; `None` past the top
    /// or bottom row.
    fn wrapped(&self, x: usize, y: Option<usize>) -> Option<CellId> {
        let y = y.filter(|&y| y < self.height)?;
        Some(self.id(x % self.width, y))
    }

    fn broken(&self, cell: CellId, reason: &'static str) -> GridError {
        let GridCoord { x, y } = self.cells[cell.0].coord;
        GridError::BrokenTopology { x, y, reason }
    }

    fn create_cell(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        debug_assert_eq!(self.cells.len(), y * self.width + x);
        self.cells
            .push(CellSlots::new(GridCoord { x, y }, cell_center(x, y)));
        Ok(())
    }

    fn designate_neighbors(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        let odd = y % 2;
        let cell = self.id(x, y);
        let outward = [
            self.wrapped(x + odd, y.checked_sub(1)),
            self.wrapped(x + 1, Some(y)),
            self.wrapped(x + odd, Some(y + 1)),
        ];
        for (dir, other) in Direction::OUTWARD.into_iter().zip(outward) {
            self.mark_as_neighbors(cell, other, dir);
        }
        Ok(())
    }

    fn mark_as_neighbors(&mut self, cell: CellId, other: Option<CellId>, dir: Direction) {
        // A one-wide grid wraps east onto itself; that is not a neighbor.
        if let Some(other) = other.filter(|&o| o != cell) {
            self.cells[cell.0].add_neighbor(other, dir);
            self.cells[other.0].add_neighbor(cell, dir.opposite());
        }
    }

    fn add_vertices(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        use Direction::*;

        let cell = self.id(x, y);
        let odd = y % 2 == 1;
        let first_row = y == 0;
        let last_row = y + 1 == self.height;
        let first_col = x == 0;
        let last_col = x + 1 == self.width;

        let up = self.new_corner(cell, NorthEast);
        let down = self.new_corner(cell, SouthWest);

        // Upper-right corner: the north-east neighbor's bottom, already placed.
        if first_row || (last_col && odd) {
            self.new_corner(cell, East);
        } else {
            let ne = self.required_neighbor(cell, NorthEast)?;
            self.cells[ne.0].add_vertex(up, West);
        }

        // Upper-left corner.
        if first_row {
            if first_col {
                self.new_corner(cell, NorthWest);
            } else {
                self.share_west_corner(cell, East, NorthWest)?;
            }
        } else if first_col && !odd {
            self.new_corner(cell, NorthWest);
        } else {
            let nw = self.required_neighbor(cell, NorthWest)?;
            self.cells[nw.0].add_vertex(up, SouthEast);
        }

        // Lower-right corner.
        if last_row || (last_col && odd) {
            self.new_corner(cell, SouthEast);
        } else {
            let se = self.required_neighbor(cell, SouthEast)?;
            self.cells[se.0].add_vertex(down, NorthWest);
        }

        // Lower-left corner.
        if last_row {
            if first_col {
                self.new_corner(cell, West);
            } else {
                self.share_west_corner(cell, SouthEast, West)?;
            }
        } else if first_col && !odd {
            self.new_corner(cell, West);
        } else {
            let sw = self.required_neighbor(cell, SouthWest)?;
            self.cells[sw.0].add_vertex(down, East);
        }
        Ok(())
    }

    fn new_corner(&mut self, cell: CellId, dir: Direction) -> VertexId {
        let pos = self.cells[cell.0].center + corner_offset(dir);
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex { pos });
        self.cells[cell.0].add_vertex(id, dir);
        id
    }

    /// Along the first and last rows the west neighbor has no row above or below
    /// to hand corners over, so copy its corner `from` into our corner `to`.
    fn share_west_corner(
        &mut self,
        cell: CellId,
        from: Direction,
        to: Direction,
    ) -> Result<(), GridError> {
        let west = self.required_neighbor(cell, Direction::West)?;
        let vertex = self.required_vertex(west, from)?;
        self.cells[cell.0].add_vertex(vertex, to);
        Ok(())
    }

    fn required_neighbor(&self, cell: CellId, dir: Direction) -> Result<CellId, GridError> {
        self.cells[cell.0]
            .neighbor(dir)
            .ok_or_else(|| self.broken(cell, "corner pass expected a neighbor"))
    }

    fn required_vertex(&self, cell: CellId, dir: Direction) -> Result<VertexId, GridError> {
        self.cells[cell.0]
            .vertex(dir)
            .ok_or_else(|| self.broken(cell, "corner read before it was placed"))
    }

    fn create_edges(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        let cell = self.id(x, y);
        for dir in Direction::OUTWARD {
            self.create_edge(cell, dir)?;
        }
        // Inward sides with a neighbor were already created from its side.
        for dir in Direction::OUTWARD.map(Direction::opposite) {
            if self.cells[cell.0].neighbor(dir).is_none() {
                self.create_edge(cell, dir)?;
            }
        }
        Ok(())
    }

    fn create_edge(&mut self, cell: CellId, dir: Direction) -> Result<EdgeId, GridError> {
        let neighbor = self.cells[cell.0].neighbor(dir);
        let vertex1 = self.required_vertex(cell, dir)?;
        let vertex2 = self.required_vertex(cell, dir.clockwise())?;
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge {
            cell1: cell,
            cell2: neighbor,
            vertex1,
            vertex2,
        });
        self.cells[cell.0].add_edge(id, dir);
        if let Some(n) = neighbor {
            self.cells[n.0].add_edge(id, dir.opposite());
        }
        Ok(id)
    }

    fn finish(self) -> Result<Grid, GridError> {
        let cells = self
            .cells
            .into_iter()
            .map(|slots| {
                let GridCoord { x, y } = slots.coord;
                slots.finish().ok_or(GridError::BrokenTopology {
                    x,
                    y,
                    reason: "vertex or edge slot left empty",
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Grid {
            width: self.width,
            height: self.height,
            cells,
            vertices: self.vertices,
            edges: self.edges,
        })
    }
}
