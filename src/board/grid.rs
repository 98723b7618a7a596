//! Square tile grid.
//!
//! ## Grid
//!
//! Row-major `Vec<Tile>` of side `N`, where `N` comes from `GridSize`.
//! A cell holds 0 when empty, otherwise a power of two from 2 up to
//! `MAX_TILE`.
//!
//! ## Cell
//!
//! Physical `(row, col)` address. Out-of-range addresses are caller bugs
//! and panic rather than returning an error.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameRng, GridSize, SPAWN_VALUE};

/// Tile value. 0 means empty.
pub type Tile = u32;

/// Largest tile a cell may hold. Tiles of this value never merge.
pub const MAX_TILE: Tile = 1 << 30;

/// Returns true for values a cell may hold: 0 or a power of two in
/// `2..=MAX_TILE`.
#[must_use]
pub const fn is_valid_tile(value: Tile) -> bool {
    value == 0 || (value >= 2 && value <= MAX_TILE && value.is_power_of_two())
}

/// Physical cell address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Create a new cell address.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// NxN board of tile values.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    size: GridSize,
    cells: Vec<Tile>,
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![0; size.cell_count()],
        }
    }

    /// Build a grid from rows of values.
    ///
    /// Panics if the rows are not `size` x `size` or hold an invalid value.
    /// Intended for tests and fixtures; decoding untrusted input goes
    /// through `save::codec`.
    #[must_use]
    pub fn from_rows(size: GridSize, rows: &[&[Tile]]) -> Self {
        assert_eq!(rows.len(), size.side(), "Expected {} rows", size.side());
        let mut grid = Self::new(size);
        for (row, values) in rows.iter().enumerate() {
            assert_eq!(values.len(), size.side(), "Row {row} has wrong length");
            for (col, &value) in values.iter().enumerate() {
                grid.set(row, col, value);
            }
        }
        grid
    }

    /// Board size.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Side length in cells.
    #[must_use]
    pub fn side(&self) -> usize {
        self.size.side()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        let side = self.side();
        assert!(
            row < side && col < side,
            "Cell ({row}, {col}) out of range for {} grid",
            self.size
        );
        row * side + col
    }

    /// Read a cell.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.cells[self.index(row, col)]
    }

    /// Write a cell.
    pub fn set(&mut self, row: usize, col: usize, value: Tile) {
        assert!(is_valid_tile(value), "Invalid tile value {value}");
        let index = self.index(row, col);
        self.cells[index] = value;
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.side())
    }

    /// All empty cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<Cell> {
        let side = self.side();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, value)| **value == 0)
            .map(|(i, _)| Cell::new(i / side, i % side))
            .collect()
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&0)
    }

    /// True when every cell is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&value| value == 0)
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&value| value != 0).count()
    }

    /// Sum of all tile values.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.cells.iter().map(|&value| u64::from(value)).sum()
    }

    /// Cell count matches the size and every cell holds a valid value.
    ///
    /// Always true for grids built through this API; deserialized grids
    /// are checked with it before use.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.cells.len() == self.size.cell_count() && self.cells.iter().all(|&value| is_valid_tile(value))
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Place a spawn tile on a uniformly chosen empty cell.
    ///
    /// The choice is drawn from the current empty set, so it terminates
    /// even with a single empty cell left. Returns `None` and leaves the
    /// grid untouched when the grid is full.
    pub fn spawn_random_tile(&mut self, rng: &mut GameRng) -> Option<Cell> {
        let empty = self.empty_cells();
        let cell = *rng.choose(&empty)?;
        self.set(cell.row, cell.col, SPAWN_VALUE);
        debug!(%cell, remaining = empty.len() - 1, "spawned tile");
        Some(cell)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|v| format!("{v:>5}")).collect();
            writeln!(f, "{}", line.join(""))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(GridSize::FIVE);
        assert_eq!(grid.side(), 5);
        assert!(grid.is_empty());
        assert_eq!(grid.empty_cells().len(), 25);
        assert!(!grid.is_full());
    }

    #[test]
    fn test_get_set() {
        let mut grid = Grid::new(GridSize::FOUR);
        grid.set(1, 2, 8);
        assert_eq!(grid.get(1, 2), 8);
        assert_eq!(grid.get(2, 1), 0);
        assert!(!grid.empty_cells().contains(&Cell::new(1, 2)));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_out_of_range() {
        let grid = Grid::new(GridSize::FOUR);
        let _ = grid.get(4, 0);
    }

    #[test]
    #[should_panic(expected = "Invalid tile value")]
    fn test_set_rejects_non_power_of_two() {
        let mut grid = Grid::new(GridSize::FOUR);
        grid.set(0, 0, 6);
    }

    #[test]
    #[should_panic(expected = "Invalid tile value")]
    fn test_set_rejects_one() {
        let mut grid = Grid::new(GridSize::FOUR);
        grid.set(0, 0, 1);
    }

    #[test]
    fn test_spawn_fills_empty_cell() {
        let mut grid = Grid::new(GridSize::FOUR);
        let mut rng = GameRng::new(1);

        let cell = grid.spawn_random_tile(&mut rng).unwrap();
        assert_eq!(grid.get(cell.row, cell.col), SPAWN_VALUE);
        assert_eq!(grid.empty_cells().len(), 15);
        assert_eq!(grid.total(), 2);
    }

    #[test]
    fn test_spawn_last_empty_cell() {
        let mut grid = Grid::new(GridSize::FOUR);
        for row in 0..4 {
            for col in 0..4 {
                grid.set(row, col, 4);
            }
        }
        grid.set(3, 1, 0);

        let mut rng = GameRng::new(9);
        assert_eq!(grid.spawn_random_tile(&mut rng), Some(Cell::new(3, 1)));
        assert!(grid.is_full());
    }

    #[test]
    fn test_spawn_on_full_grid_is_noop() {
        let mut grid = Grid::from_rows(
            GridSize::FOUR,
            &[&[2, 4, 2, 4], &[4, 2, 4, 2], &[2, 4, 2, 4], &[4, 2, 4, 2]],
        );
        let before = grid.clone();
        let mut rng = GameRng::new(5);

        assert_eq!(grid.spawn_random_tile(&mut rng), None);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_total() {
        let grid = Grid::from_rows(
            GridSize::FOUR,
            &[&[2, 0, 0, 0], &[0, 16, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 4]],
        );
        assert_eq!(grid.total(), 22);
    }

    #[test]
    fn test_tile_validity_is_capped() {
        assert!(is_valid_tile(0));
        assert!(is_valid_tile(2));
        assert!(is_valid_tile(MAX_TILE));
        assert!(!is_valid_tile(1));
        assert!(!is_valid_tile(6));
        assert!(!is_valid_tile(1 << 31));
    }

    #[test]
    #[should_panic(expected = "Invalid tile value")]
    fn test_set_above_cap_panics() {
        let mut grid = Grid::new(GridSize::FOUR);
        grid.set(0, 0, MAX_TILE * 2);
    }

    #[test]
    fn test_clear() {
        let mut grid = Grid::from_rows(
            GridSize::FOUR,
            &[&[2, 0, 0, 0], &[0, 16, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 4]],
        );
        grid.clear();
        assert!(grid.is_empty());
    }
}
