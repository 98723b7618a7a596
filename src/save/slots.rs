//! Per-size save slots.
//!
//! Each grid size has its own three keys, so a 4x4 game and a 6x6 game
//! keep independent progress and best scores:
//!
//! | value     | key                   |
//! |-----------|-----------------------|
//! | score     | `Layout{N}Score`      |
//! | bestScore | `Layout{N}BestScore`  |
//! | tilesGrid | `Layout{N}TilesValues`|

use tracing::debug;

use super::codec::encode_grid;
use super::store::{KeyValueStore, SaveError};
use crate::core::GridSize;
use crate::game::{Game, GamePhase, ScoreState};

/// Key names for one grid size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveKeys {
    pub score: String,
    pub best_score: String,
    pub tiles: String,
}

impl SaveKeys {
    /// Keys for the given size.
    #[must_use]
    pub fn for_size(size: GridSize) -> Self {
        let n = size.side();
        Self {
            score: format!("Layout{n}Score"),
            best_score: format!("Layout{n}BestScore"),
            tiles: format!("Layout{n}TilesValues"),
        }
    }
}

/// Typed access to save slots over a key-value store.
#[derive(Clone, Debug, Default)]
pub struct GameSave<S> {
    store: S,
}

impl<S: KeyValueStore> GameSave<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwrap the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Persisted score and best score for `size` (0 when absent).
    pub fn load_scores(&self, size: GridSize) -> Result<ScoreState, SaveError> {
        let keys = SaveKeys::for_size(size);
        Ok(ScoreState {
            score: self.store.get_int(&keys.score)?,
            best_score: self.store.get_int(&keys.best_score)?,
        })
    }

    /// Raw persisted grid text for `size`, `None` when nothing is saved.
    pub fn load_grid_text(&self, size: GridSize) -> Result<Option<String>, SaveError> {
        let keys = SaveKeys::for_size(size);
        Ok(self.store.get_string(&keys.tiles)?.filter(|text| !text.is_empty()))
    }

    /// Persist the game's progress into its size's slot.
    ///
    /// A game in progress stores its score and grid. Any other phase
    /// stores score 0 and clears the grid, so a finished game is not
    /// resumed. The best score is always written.
    pub fn save_progress(&mut self, game: &Game) -> Result<(), SaveError> {
        let keys = SaveKeys::for_size(game.size());
        let (score, tiles) = if game.phase() == GamePhase::Started {
            (game.score(), encode_grid(game.grid()))
        } else {
            (0, String::new())
        };
        debug!(size = %game.size(), score, phase = %game.phase(), "saving progress");

        self.store.set_int(&keys.score, score)?;
        self.store.set_int(&keys.best_score, score.max(game.best_score()))?;
        self.store.set_string(&keys.tiles, &tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, GameConfig};
    use crate::save::MemoryStore;

    #[test]
    fn test_keys_per_size() {
        let keys = SaveKeys::for_size(GridSize::FIVE);
        assert_eq!(keys.score, "Layout5Score");
        assert_eq!(keys.best_score, "Layout5BestScore");
        assert_eq!(keys.tiles, "Layout5TilesValues");
    }

    #[test]
    fn test_save_started_game() {
        let mut save = GameSave::new(MemoryStore::new());
        let mut game = Game::new(GameConfig::default().with_seed(1));
        game.start_new_game();
        game.restore_scores(12, 40);

        save.save_progress(&game).unwrap();

        let scores = save.load_scores(GridSize::FOUR).unwrap();
        assert_eq!(scores, ScoreState { score: 12, best_score: 40 });
        assert_eq!(save.load_grid_text(GridSize::FOUR).unwrap(), Some(game.serialize_grid()));
        // Other sizes untouched.
        assert_eq!(save.load_grid_text(GridSize::SIX).unwrap(), None);
    }

    #[test]
    fn test_save_finished_game_clears_grid() {
        let mut save = GameSave::new(MemoryStore::new());
        let mut game = Game::new(GameConfig::default());
        assert!(game.load_grid("1024,1024,0,0;0,0,0,0;0,0,0,0;0,0,0,0"));
        game.move_tiles(Direction::Left);
        assert_eq!(game.phase(), GamePhase::Won);

        save.save_progress(&game).unwrap();

        let scores = save.load_scores(GridSize::FOUR).unwrap();
        assert_eq!(scores.score, 0);
        assert_eq!(scores.best_score, 2048);
        assert_eq!(save.load_grid_text(GridSize::FOUR).unwrap(), None);
    }
}
