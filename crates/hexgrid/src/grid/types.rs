//! Entity types for the hex grid: ids, vertices, cells, edges.
//!
//! Everything is addressed by index into the arenas owned by `Grid`, so shared
//! corners and sides are plain `Copy` ids instead of shared references.

use nalgebra::Vector2;

use crate::direction::Direction;

/// Identifier types for clarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

/// Position of a cell in the grid matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCoord {
    pub x: usize,
    pub y: usize,
}

/// Corner point. Two vertices with equal coordinates are still distinct; the
/// builder decides which cells share an id.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub pos: Vector2<f64>,
}

impl Vertex {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            pos: Vector2::new(x, y),
        }
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }
}

/// Side segment between `cell1` and `cell2`; `cell2` is `None` on the outer
/// boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub cell1: CellId,
    pub cell2: Option<CellId>,
    pub vertex1: VertexId,
    pub vertex2: VertexId,
}

impl Edge {
    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.cell2.is_none()
    }

    /// The cell on the other side from `cell`, if `cell` touches this edge at all.
    pub fn other(&self, cell: CellId) -> Option<CellId> {
        if self.cell1 == cell {
            self.cell2
        } else if self.cell2 == Some(cell) {
            Some(self.cell1)
        } else {
            None
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = CellId> {
        std::iter::once(self.cell1).chain(self.cell2)
    }
}

/// A hexagonal cell of a built grid. Every vertex and edge slot is filled.
#[derive(Clone, Debug)]
pub struct Cell {
    pub(crate) coord: GridCoord,
    pub(crate) center: Vector2<f64>,
    pub(crate) neighbors: [Option<CellId>; 6],
    pub(crate) vertices: [VertexId; 6],
    pub(crate) edges: [EdgeId; 6],
}

impl Cell {
    #[inline]
    pub fn coord(&self) -> GridCoord {
        self.coord
    }
    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        self.center
    }
    #[inline]
    pub fn neighbor(&self, dir: Direction) -> Option<CellId> {
        self.neighbors[dir.index()]
    }
    #[inline]
    pub fn vertex(&self, dir: Direction) -> VertexId {
        self.vertices[dir.index()]
    }
    #[inline]
    pub fn edge(&self, dir: Direction) -> EdgeId {
        self.edges[dir.index()]
    }

    /// Present neighbors only, in direction order.
    pub fn neighbors(&self) -> impl Iterator<Item = CellId> + '_ {
        self.neighbors.iter().flatten().copied()
    }

    /// Present neighbors together with the side they sit on.
    pub fn neighbors_with_direction(&self) -> impl Iterator<Item = (Direction, CellId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.neighbors[d.index()].map(|n| (d, n)))
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().copied()
    }

    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.iter().copied()
    }

    /// Edge in the first slot whose neighbor is `neighbor`; `None` if not adjacent.
    pub fn edge_towards(&self, neighbor: CellId) -> Option<EdgeId> {
        self.neighbors
            .iter()
            .position(|n| *n == Some(neighbor))
            .map(|i| self.edges[i])
    }

    /// Side on which this cell holds `edge`.
    pub fn direction_of_edge(&self, edge: EdgeId) -> Option<Direction> {
        self.edges
            .iter()
            .position(|e| *e == edge)
            .map(Direction::wrapping)
    }
}

/// Builder-stage cell: slots are optional and write-once.
#[derive(Clone, Debug)]
pub(crate) struct CellSlots {
    pub(crate) coord: GridCoord,
    pub(crate) center: Vector2<f64>,
    neighbors: [Option<CellId>; 6],
    vertices: [Option<VertexId>; 6],
    edges: [Option<EdgeId>; 6],
}

impl CellSlots {
    pub(crate) fn new(coord: GridCoord, center: Vector2<f64>) -> Self {
        Self {
            coord,
            center,
            neighbors: [None; 6],
            vertices: [None; 6],
            edges: [None; 6],
        }
    }

    pub(crate) fn add_neighbor(&mut self, cell: CellId, dir: Direction) {
        let slot = &mut self.neighbors[dir.index()];
        debug_assert!(
            slot.is_none(),
            "neighbor slot {dir} of {:?} written twice",
            self.coord
        );
        *slot = Some(cell);
    }

    pub(crate) fn add_vertex(&mut self, vertex: VertexId, dir: Direction) {
        let slot = &mut self.vertices[dir.index()];
        debug_assert!(
            slot.is_none(),
            "vertex slot {dir} of {:?} written twice",
            self.coord
        );
        *slot = Some(vertex);
    }

    pub(crate) fn add_edge(&mut self, edge: EdgeId, dir: Direction) {
        let slot = &mut self.edges[dir.index()];
        debug_assert!(
            slot.is_none(),
            "edge slot {dir} of {:?} written twice",
            self.coord
        );
        *slot = Some(edge);
    }

    #[inline]
    pub(crate) fn neighbor(&self, dir: Direction) -> Option<CellId> {
        self.neighbors[dir.index()]
    }

    #[inline]
    pub(crate) fn vertex(&self, dir: Direction) -> Option<VertexId> {
        self.vertices[dir.index()]
    }

    /// Freeze into a `Cell`; `None` if a vertex or edge slot is still empty.
    pub(crate) fn finish(self) -> Option<Cell> {
        let mut vertices = [VertexId(0); 6];
        let mut edges = [EdgeId(0); 6];
        for i in 0..6 {
            vertices[i] = self.vertices[i]?;
            edges[i] = self.edges[i]?;
        }
        Some(Cell {
            coord: self.coord,
            center: self.center,
            neighbors: self.neighbors,
            vertices,
            edges,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_other_side() {
        let inner = Edge {
            cell1: CellId(0),
            cell2: Some(CellId(1)),
            vertex1: VertexId(0),
            vertex2: VertexId(1),
        };
        assert_eq!(inner.other(CellId(0)), Some(CellId(1)));
        assert_eq!(inner.other(CellId(1)), Some(CellId(0)));
        assert_eq!(inner.other(CellId(2)), None);
        assert!(!inner.is_boundary());
        assert_eq!(inner.cells().count(), 2);

        let outer = Edge {
            cell2: None,
            ..inner
        };
        assert!(outer.is_boundary());
        assert_eq!(outer.other(CellId(0)), None);
        assert_eq!(outer.cells().collect::<Vec<_>>(), vec![CellId(0)]);
    }

    #[test]
    fn slots_finish_only_when_complete() {
        let coord = GridCoord { x: 0, y: 0 };
        let mut slots = CellSlots::new(coord, Vector2::zeros());
        for d in Direction::ALL {
            slots.add_vertex(VertexId(d.index()), d);
        }
        assert!(slots.clone().finish().is_none());
        for d in Direction::ALL {
            slots.add_edge(EdgeId(10 + d.index()), d);
        }
        slots.add_neighbor(CellId(7), Direction::West);
        let cell = slots.finish().unwrap();
        assert_eq!(cell.vertex(Direction::SouthWest), VertexId(3));
        assert_eq!(cell.neighbors().collect::<Vec<_>>(), vec![CellId(7)]);
        assert_eq!(cell.edge_towards(CellId(7)), Some(EdgeId(14)));
        assert_eq!(cell.edge_towards(CellId(8)), None);
        assert_eq!(cell.direction_of_edge(EdgeId(12)), Some(Direction::SouthEast));
        assert_eq!(cell.direction_of_edge(EdgeId(99)), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "written twice")]
    fn double_write_trips_debug_assertion() {
        let mut slots = CellSlots::new(GridCoord { x: 0, y: 0 }, Vector2::zeros());
        slots.add_neighbor(CellId(1), Direction::East);
        slots.add_neighbor(CellId(2), Direction::East);
    }
}
