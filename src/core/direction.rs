//! Move directions.
//!
//! Input layers (keyboard, swipe, agents) resolve their gestures into a
//! `Direction` before calling the engine.

use serde::{Deserialize, Serialize};

/// A direction to slide and merge tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// All four directions in rotation order.
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];

    /// Rotation angle in degrees that maps this direction onto a left slide.
    #[must_use]
    pub const fn angle(self) -> u16 {
        match self {
            Direction::Left => 0,
            Direction::Up => 90,
            Direction::Right => 180,
            Direction::Down => 270,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}
