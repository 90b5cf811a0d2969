//! The six sides (and corners) of a hexagonal cell.
//!
//! Directions run clockwise starting at the north-east side of the offset-row
//! layout. The same index doubles as a corner index: corner `d` is where side `d`
//! starts when walking clockwise, so side `d` spans corners `d` and
//! `d.clockwise()`.
//!
//! | index | side       | corner      |
//! |-------|------------|-------------|
//! | 0     | north-east | top         |
//! | 1     | east       | upper-right |
//! | 2     | south-east | lower-right |
//! | 3     | south-west | bottom      |
//! | 4     | west       | lower-left  |
//! | 5     | north-west | upper-left  |

use std::fmt;

use crate::error::GridError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    NorthEast = 0,
    East = 1,
    SouthEast = 2,
    SouthWest = 3,
    West = 4,
    NorthWest = 5,
}

impl Direction {
    /// All directions in clockwise order, indexed by `Direction::index`.
    pub const ALL: [Direction; 6] = [
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Directions a cell links and edges outward during construction; the other
    /// three are filled from the neighbor's side.
    pub const OUTWARD: [Direction; 3] = [
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Modulo-6 conversion. Call sites that compute `d + 3` or similar on raw
    /// indices rely on this wrapping.
    #[inline]
    pub fn wrapping(index: usize) -> Self {
        Self::ALL[index % 6]
    }

    /// Strict conversion; indices outside `0..6` are an error.
    pub fn try_from_index(index: usize) -> Result<Self, GridError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(GridError::DirectionOutOfRange { index })
    }

    #[inline]
    pub fn opposite(self) -> Self {
        Self::wrapping(self.index() + 3)
    }

    #[inline]
    pub fn clockwise(self) -> Self {
        Self::wrapping(self.index() + 1)
    }

    #[inline]
    pub fn counter_clockwise(self) -> Self {
        Self::wrapping(self.index() + 5)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::NorthEast => "north-east",
            Direction::East => "east",
            Direction::SouthEast => "south-east",
            Direction::SouthWest => "south-west",
            Direction::West => "west",
            Direction::NorthWest => "north-west",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_three_steps_and_an_involution() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().index(), (d.index() + 3) % 6);
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn wrapping_accepts_unnormalized_indices() {
        assert_eq!(Direction::wrapping(2 + 3), Direction::NorthWest);
        assert_eq!(Direction::wrapping(6), Direction::NorthEast);
        assert_eq!(Direction::wrapping(13), Direction::East);
    }

    #[test]
    fn strict_conversion_rejects_out_of_range() {
        assert_eq!(Direction::try_from_index(4).unwrap(), Direction::West);
        assert!(matches!(
            Direction::try_from_index(6),
            Err(GridError::DirectionOutOfRange { index: 6 })
        ));
    }

    #[test]
    fn rotation_round_trips() {
        for d in Direction::ALL {
            assert_eq!(d.clockwise().counter_clockwise(), d);
        }
        assert_eq!(Direction::NorthWest.clockwise(), Direction::NorthEast);
    }
}
