//! A game bound to a save store.
//!
//! `Session` reproduces the app flow around the engine: pick a grid size
//! (resuming its saved game when there is one), start new games, and save
//! progress after every move that changes the board.
//!
//! ```
//! use tile_merge::{Direction, GameConfig, GamePhase, GridSize, Session};
//! use tile_merge::save::MemoryStore;
//!
//! let mut session = Session::open(GameConfig::default(), MemoryStore::new()).unwrap();
//! assert_eq!(session.game().phase(), GamePhase::NotStarted);
//!
//! session.new_game().unwrap();
//! session.move_tiles(Direction::Left).unwrap();
//! session.move_tiles(Direction::Right).unwrap();
//!
//! session.select_size(GridSize::FIVE).unwrap();
//! assert_eq!(session.game().phase(), GamePhase::NotStarted);
//! session.select_size(GridSize::FOUR).unwrap();
//! assert_eq!(session.game().phase(), GamePhase::Started);
//! ```

use tracing::{info, instrument};

use crate::board::MoveOutcome;
use crate::core::{Direction, GameConfig, GridSize};
use crate::game::Game;
use crate::save::{GameSave, KeyValueStore, SaveError};

/// A `Game` plus the store its progress lives in.
#[derive(Debug)]
pub struct Session<S> {
    game: Game,
    save: GameSave<S>,
}

impl<S: KeyValueStore> Session<S> {
    /// Create a session and resume whatever is saved for `config.size`.
    pub fn open(config: GameConfig, store: S) -> Result<Self, SaveError> {
        let mut session = Self {
            game: Game::new(config),
            save: GameSave::new(store),
        };
        session.resume()?;
        Ok(session)
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Mutable access, e.g. to subscribe observers.
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn store(&self) -> &S {
        self.save.store()
    }

    /// Close the session, returning the store. Progress is not saved.
    pub fn into_store(self) -> S {
        self.save.into_inner()
    }

    /// Switch to another grid size.
    ///
    /// The unsaved in-memory game is dropped. Returns true if a saved game
    /// for the new size was resumed. Selecting the current size is a no-op.
    #[instrument(skip(self), fields(from = %self.game.size()))]
    pub fn select_size(&mut self, size: GridSize) -> Result<bool, SaveError> {
        if size == self.game.size() {
            return Ok(false);
        }
        self.game.switch_size(size);
        self.resume()
    }

    /// Load scores and grid for the current size.
    ///
    /// A corrupted grid is treated as absent.
    fn resume(&mut self) -> Result<bool, SaveError> {
        let size = self.game.size();
        let scores = self.save.load_scores(size)?;
        self.game.restore_scores(scores.score, scores.best_score);

        let text = self.save.load_grid_text(size)?.unwrap_or_default();
        let resumed = self.game.load_grid(&text);
        info!(%size, resumed, "resumed save slot");
        Ok(resumed)
    }

    /// Save the current game, then start a new one.
    pub fn new_game(&mut self) -> Result<(), SaveError> {
        self.save.save_progress(&self.game)?;
        self.game.start_new_game();
        Ok(())
    }

    /// Apply a move and save progress if it changed the board.
    ///
    /// A move that ends the game clears the slot.
    pub fn move_tiles(&mut self, direction: Direction) -> Result<MoveOutcome, SaveError> {
        let outcome = self.game.move_tiles(direction);
        if outcome.changed {
            self.save.save_progress(&self.game)?;
        }
        Ok(outcome)
    }

    /// Persist the current game into its size's slot.
    pub fn save(&mut self) -> Result<(), SaveError> {
        self.save.save_progress(&self.game)
    }
}
