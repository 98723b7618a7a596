//! Game-over detection.

use super::grid::Grid;
use super::resolver::merged_value;

/// True when no move can change the grid.
///
/// A grid with any empty cell always has a legal move. A full grid is
/// over unless some cell has an orthogonal neighbor of equal value that
/// it can merge with.
#[must_use]
pub fn is_game_over(grid: &Grid) -> bool {
    if !grid.is_full() {
        return false;
    }
    !has_adjacent_pair(grid)
}

/// Can any cell merge with the cell to its right or below?
///
/// Checking two neighbors per cell covers all four adjacency directions.
fn has_adjacent_pair(grid: &Grid) -> bool {
    let side = grid.side();
    for row in 0..side {
        for col in 0..side {
            let value = grid.get(row, col);
            if merged_value(value).is_none() {
                continue;
            }
            if col + 1 < side && grid.get(row, col + 1) == value {
                return true;
            }
            if row + 1 < side && grid.get(row + 1, col) == value {
                return true;
            }
        }
    }
    false
}
