//! Fixed hex measurements for the flat offset-row layout.
//!
//! Screen convention: x grows to the east, y grows to the south, so "north" is
//! the smaller y. Even rows start at `x = w/2`, odd rows are shifted east by half
//! a hex width.

use nalgebra::Vector2;

use crate::direction::Direction;

/// Side length of every hexagon.
pub const HEX_SIDE: f64 = 1.0;
/// Distance between two parallel sides, `s * sqrt(3)`.
pub const HEX_WIDTH: f64 = HEX_SIDE * 1.732_050_807_568_877_2;
pub const HALF_SIDE: f64 = HEX_SIDE / 2.0;

/// Center of the cell at grid position `(x, y)`.
#[inline]
pub fn cell_center(x: usize, y: usize) -> Vector2<f64> {
    let shift = 0.5 * (y % 2) as f64;
    Vector2::new(
        (x as f64 + 0.5 + shift) * HEX_WIDTH,
        (3 * y + 2) as f64 * HALF_SIDE,
    )
}

/// Offset from a cell's center to its corner `dir`.
pub fn corner_offset(dir: Direction) -> Vector2<f64> {
    let half_w = 0.5 * HEX_WIDTH;
    match dir {
        Direction::NorthEast => Vector2::new(0.0, -HEX_SIDE),
        Direction::East => Vector2::new(half_w, -HALF_SIDE),
        Direction::SouthEast => Vector2::new(half_w, HALF_SIDE),
        Direction::SouthWest => Vector2::new(0.0, HEX_SIDE),
        Direction::West => Vector2::new(-half_w, HALF_SIDE),
        Direction::NorthWest => Vector2::new(-half_w, -HALF_SIDE),
    }
}

/// Offset from a cell's center to the center of its neighbor across side `dir`,
/// ignoring the x seam.
pub fn neighbor_offset(dir: Direction) -> Vector2<f64> {
    let half_w = 0.5 * HEX_WIDTH;
    let row = 3.0 * HALF_SIDE;
    match dir {
        Direction::NorthEast => Vector2::new(half_w, -row),
        Direction::East => Vector2::new(HEX_WIDTH, 0.0),
        Direction::SouthEast => Vector2::new(half_w, row),
        Direction::SouthWest => Vector2::new(-half_w, row),
        Direction::West => Vector2::new(-HEX_WIDTH, 0.0),
        Direction::NorthWest => Vector2::new(-half_w, -row),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_width_matches_sqrt3() {
        assert!((HEX_WIDTH - 3f64.sqrt() * HEX_SIDE).abs() < 1e-15);
    }

    #[test]
    fn corners_are_one_side_from_center() {
        for d in Direction::ALL {
            assert!((corner_offset(d).norm() - HEX_SIDE).abs() < 1e-12);
        }
    }

    #[test]
    fn neighbor_centers_are_one_width_apart() {
        for d in Direction::ALL {
            assert!((neighbor_offset(d).norm() - HEX_WIDTH).abs() < 1e-12);
            assert!((neighbor_offset(d) + neighbor_offset(d.opposite())).norm() < 1e-12);
        }
    }

    #[test]
    fn odd_rows_shift_half_a_width() {
        let even = cell_center(0, 0);
        let odd = cell_center(0, 1);
        assert!((even.x - 0.5 * HEX_WIDTH).abs() < 1e-12);
        assert!((odd.x - HEX_WIDTH).abs() < 1e-12);
        assert!((odd.y - even.y - 1.5 * HEX_SIDE).abs() < 1e-12);
        // Moving one step south-west from an odd row lands on the even-row cell below.
        let below = cell_center(0, 2);
        assert!((odd + neighbor_offset(Direction::SouthWest) - below).norm() < 1e-12);
    }
}
