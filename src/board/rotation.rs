//! Logical-to-physical coordinate rotation.
//!
//! Every move is resolved as a slide toward column 0 of a *logical* grid.
//! The logical grid is the physical grid rotated by the direction's angle:
//!
//! ```text
//! phys_row = off_row + col * sin + row * cos
//! phys_col = off_col + col * cos - row * sin
//! ```
//!
//! with `off_row = N - 1` except at 90 degrees (0) and `off_col = N - 1`
//! except at 270 degrees (0). At 0 degrees the mapping is the identity.

use super::grid::Cell;
use crate::core::Direction;

/// Coordinate mapping for one quarter-turn angle on an NxN grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation {
    side: usize,
    cos: isize,
    sin: isize,
    off_row: isize,
    off_col: isize,
}

impl Rotation {
    /// Rotation for an angle in degrees.
    ///
    /// Panics unless `angle` is one of 0, 90, 180, 270.
    #[must_use]
    pub fn new(angle: u16, side: usize) -> Self {
        let (cos, sin) = match angle {
            0 => (1, 0),
            90 => (0, 1),
            180 => (-1, 0),
            270 => (0, -1),
            _ => panic!("Invalid rotation angle {angle}"),
        };
        let last = side as isize - 1;
        let (off_row, off_col) = match angle {
            0 => (0, 0),
            90 => (0, last),
            270 => (last, 0),
            _ => (last, last),
        };
        Self {
            side,
            cos,
            sin,
            off_row,
            off_col,
        }
    }

    /// Rotation that turns a slide in `direction` into a left slide.
    #[must_use]
    pub fn for_direction(direction: Direction, side: usize) -> Self {
        Self::new(direction.angle(), side)
    }

    /// Map a logical `(row, col)` to the physical cell it addresses.
    #[must_use]
    pub fn physical(&self, row: usize, col: usize) -> Cell {
        debug_assert!(row < self.side && col < self.side);
        let (row, col) = (row as isize, col as isize);
        let phys_row = self.off_row + col * self.sin + row * self.cos;
        let phys_col = self.off_col + col * self.cos - row * self.sin;
        Cell::new(phys_row as usize, phys_col as usize)
    }

    /// Physical cells of logical row `row`, near edge first.
    pub fn line(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..self.side).map(move |col| self.physical(row, col))
    }
}
