//! Exact checkpoints of a game.
//!
//! The string save format only keeps the grid and scores. A snapshot also
//! captures the phase, configuration and RNG position, so a restored game
//! spawns exactly the tiles the original would have.

use serde::{Deserialize, Serialize};

use super::machine::Game;
use super::phase::{GamePhase, ScoreState};
use crate::board::Grid;
use crate::core::{GameConfig, GameRng, GameRngState};

/// Reasons a snapshot cannot be restored.
#[derive(thiserror::Error, Debug)]
pub enum SnapshotError {
    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),
    #[error("grid is {found} but config expects {expected}")]
    SizeMismatch { expected: String, found: String },
    #[error("grid holds invalid cells")]
    InvalidGrid,
}

/// Complete, serializable game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: GameConfig,
    pub grid: Grid,
    pub scores: ScoreState,
    pub phase: GamePhase,
    pub rng: GameRngState,
}

impl GameSnapshot {
    /// Capture the current state of `game`.
    #[must_use]
    pub fn capture(game: &Game) -> Self {
        Self {
            config: *game.config(),
            grid: game.grid().clone(),
            scores: game.scores(),
            phase: game.phase(),
            rng: game.rng().state(),
        }
    }

    /// Rebuild a game from this snapshot. Observers are not restored.
    pub fn restore(&self) -> Result<Game, SnapshotError> {
        if self.grid.size() != self.config.size {
            return Err(SnapshotError::SizeMismatch {
                expected: self.config.size.to_string(),
                found: self.grid.size().to_string(),
            });
        }
        if !self.grid.is_well_formed() {
            return Err(SnapshotError::InvalidGrid);
        }
        Ok(Game::from_parts(
            self.config,
            self.grid.clone(),
            self.scores,
            self.phase,
            GameRng::from_state(&self.rng),
        ))
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
