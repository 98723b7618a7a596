//! Move resolution: slide and merge every line toward the near edge.
//!
//! One routine, [`compact_line`], handles a single logical row. The four
//! directions reuse it by reading and writing each line through a
//! [`Rotation`].
//!
//! ## Merge rules
//!
//! Over the non-empty values of a line, near edge first:
//! - Two consecutive equal values merge into one tile of double value.
//!   Both sources are consumed.
//! - A merged tile is never merged again in the same move.
//! - Otherwise the first value is emitted as is and the second is
//!   compared with the next one.
//! - Tiles of `MAX_TILE` do not merge.
//!
//! ```
//! use tile_merge::board::compact_line;
//!
//! assert_eq!(compact_line(&[2, 2, 2, 2]).tiles.as_slice(), &[4, 4, 0, 0]);
//! assert_eq!(compact_line(&[4, 2, 2, 4]).tiles.as_slice(), &[4, 4, 4, 0]);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::grid::{Grid, Tile, MAX_TILE};
use super::rotation::Rotation;
use crate::core::Direction;

/// Inline buffer sized for the largest supported board.
pub type LineBuf = SmallVec<[Tile; 6]>;

/// Result of compacting a single line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineOutcome {
    /// Compacted line, same length as the input.
    pub tiles: LineBuf,
    /// Sum of all tiles produced by merges.
    pub score_gained: u64,
    /// Largest tile produced by a merge (0 if none).
    pub max_merged: Tile,
}

impl LineOutcome {
    /// Did compaction change anything relative to `original`?
    #[must_use]
    pub fn differs_from(&self, original: &[Tile]) -> bool {
        self.tiles.as_slice() != original
    }
}

/// Result of resolving one move over the whole grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Any cell differs from before the move.
    pub changed: bool,
    /// Sum of all merged tile values.
    pub score_gained: u64,
    /// A merge produced a value at or above the win target.
    pub reached_target: bool,
}

impl MoveOutcome {
    /// Outcome of a move that did nothing.
    pub const UNCHANGED: MoveOutcome = MoveOutcome {
        changed: false,
        score_gained: 0,
        reached_target: false,
    };
}

/// Value two equal tiles of `value` merge into, if they may merge.
#[must_use]
pub(crate) fn merged_value(value: Tile) -> Option<Tile> {
    value.checked_mul(2).filter(|&merged| merged <= MAX_TILE)
}

/// Compact one line toward index 0, merging equal neighbors once.
#[must_use]
pub fn compact_line(line: &[Tile]) -> LineOutcome {
    let mut tiles = LineBuf::with_capacity(line.len());
    let mut score_gained = 0u64;
    let mut max_merged = 0;

    let mut values = line.iter().copied().filter(|&value| value != 0).peekable();
    while let Some(value) = values.next() {
        match merged_value(value) {
            Some(merged) if values.peek() == Some(&value) => {
                values.next();
                score_gained += u64::from(merged);
                max_merged = max_merged.max(merged);
                tiles.push(merged);
            }
            _ => tiles.push(value),
        }
    }
    tiles.resize(line.len(), 0);

    LineOutcome {
        tiles,
        score_gained,
        max_merged,
    }
}

/// Slide every line of `grid` in `direction`, merging equal tiles.
///
/// Mutates the grid in place. Never spawns tiles.
pub fn resolve_move(grid: &mut Grid, direction: Direction, win_target: Tile) -> MoveOutcome {
    let side = grid.side();
    let rotation = Rotation::for_direction(direction, side);
    let mut outcome = MoveOutcome::UNCHANGED;

    for row in 0..side {
        let original: LineBuf = rotation.line(row).map(|cell| grid.get(cell.row, cell.col)).collect();
        let line = compact_line(&original);

        outcome.score_gained += line.score_gained;
        if line.max_merged >= win_target {
            outcome.reached_target = true;
        }
        if !line.differs_from(&original) {
            continue;
        }

        outcome.changed = true;
        for (cell, &value) in rotation.line(row).zip(line.tiles.iter()) {
            grid.set(cell.row, cell.col, value);
        }
    }

    outcome
}
