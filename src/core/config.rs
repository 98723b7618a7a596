//! Game configuration types.
//!
//! A game is configured at start by providing:
//! - `GridSize`: Side length of the square board (4, 5 or 6)
//! - `GameConfig`: Grid size, win target and RNG seed
//!
//! The engine never reads global layout state - everything a game needs
//! is passed in through `GameConfig`.

use serde::{Deserialize, Serialize};

use crate::board::Tile;

/// Value placed on the board by every random spawn.
pub const SPAWN_VALUE: Tile = 2;

/// Default tile value that wins the game once produced by a merge.
pub const DEFAULT_WIN_TARGET: Tile = 2048;

/// Side length of a square board.
///
/// Only the sizes offered by the game are representable: 4, 5 and 6.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct GridSize(usize);

impl GridSize {
    /// Classic 4x4 board.
    pub const FOUR: GridSize = GridSize(4);
    /// 5x5 board.
    pub const FIVE: GridSize = GridSize(5);
    /// 6x6 board.
    pub const SIX: GridSize = GridSize(6);

    /// Every supported size, smallest first.
    pub const ALL: [GridSize; 3] = [Self::FOUR, Self::FIVE, Self::SIX];

    /// Create a grid size, returning `None` for unsupported side lengths.
    #[must_use]
    pub const fn new(side: usize) -> Option<Self> {
        match side {
            4..=6 => Some(Self(side)),
            _ => None,
        }
    }

    /// Side length in cells.
    #[must_use]
    pub const fn side(self) -> usize {
        self.0
    }

    /// Total number of cells on the board.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.0 * self.0
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::FOUR
    }
}

impl TryFrom<usize> for GridSize {
    type Error = String;

    fn try_from(side: usize) -> Result<Self, Self::Error> {
        Self::new(side).ok_or_else(|| format!("unsupported grid size {side}"))
    }
}

impl From<GridSize> for usize {
    fn from(size: GridSize) -> Self {
        size.0
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// Complete game configuration.
///
/// Passed explicitly into `Game::new` and `Game::new_game`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length.
    pub size: GridSize,

    /// Tile value that wins the game when produced by a merge.
    ///
    /// Always a power of two, at least 4 (a merge of two spawned tiles).
    pub win_target: Tile,

    /// Seed for tile spawning.
    /// Same seed and same moves produce identical games.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: GridSize::FOUR,
            win_target: DEFAULT_WIN_TARGET,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Create a configuration for the given size with default target and seed.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Set the grid size.
    #[must_use]
    pub fn with_size(mut self, size: GridSize) -> Self {
        self.size = size;
        self
    }

    /// Set the win target.
    #[must_use]
    pub fn with_win_target(mut self, target: Tile) -> Self {
        assert!(
            target >= 4 && target.is_power_of_two(),
            "Win target must be a power of two >= 4"
        );
        self.win_target = target;
        self
    }

    /// Set the spawn seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
