//! Board engine: grid storage, coordinate rotation, move resolution and
//! game-over detection.
//!
//! Nothing in this module tracks score or phase; see `game` for that.

pub mod detector;
pub mod grid;
pub mod resolver;
pub mod rotation;

pub use detector::is_game_over;
pub use grid::{is_valid_tile, Cell, Grid, Tile, MAX_TILE};
pub use resolver::{compact_line, resolve_move, LineBuf, LineOutcome, MoveOutcome};
pub use rotation::Rotation;
