//! Game state machine.
//!
//! ## Phases
//!
//! ```text
//! NotStarted --new game / load--> Started --merge >= target--> Won
//!                                    |
//!                                    +--full, no pair--> Over
//! ```
//!
//! Any phase goes back to `Started` through a new game. Switching the grid
//! size drops the in-memory game and returns to `NotStarted`.

use tracing::{debug, info, instrument, warn};

use super::event::{GameEvent, GameObserver};
use super::phase::{GamePhase, ScoreState};
use crate::board::{is_game_over, resolve_move, Grid, MoveOutcome, Tile};
use crate::core::{Direction, GameConfig, GameRng, GridSize};
use crate::save::codec::{decode_grid, encode_grid};

/// One player's game: grid, score and phase.
pub struct Game {
    config: GameConfig,
    grid: Grid,
    scores: ScoreState,
    phase: GamePhase,
    rng: GameRng,
    observers: Vec<Box<dyn GameObserver>>,
}

impl Game {
    /// Create a game in `NotStarted` with an empty grid.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            grid: Grid::new(config.size),
            scores: ScoreState::default(),
            phase: GamePhase::NotStarted,
            rng: GameRng::new(config.seed),
            observers: Vec::new(),
        }
    }

    pub(crate) fn from_parts(config: GameConfig, grid: Grid, scores: ScoreState, phase: GamePhase, rng: GameRng) -> Self {
        Self {
            config,
            grid,
            scores,
            phase,
            rng,
            observers: Vec::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.config.size
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.scores.score
    }

    #[must_use]
    pub fn best_score(&self) -> u64 {
        self.scores.best_score
    }

    #[must_use]
    pub fn scores(&self) -> ScoreState {
        self.scores
    }

    pub(crate) fn rng(&self) -> &GameRng {
        &self.rng
    }

    // === Observers ===

    /// Register an observer for all future events.
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }

    fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        self.phase = to;
        info!(%from, %to, "phase changed");
        self.emit(GameEvent::PhaseChanged { from, to });
    }

    fn emit_scores(&mut self) {
        let ScoreState { score, best_score } = self.scores;
        self.emit(GameEvent::ScoreChanged { score, best_score });
    }

    fn spawn(&mut self) {
        if let Some(cell) = self.grid.spawn_random_tile(&mut self.rng) {
            let value: Tile = self.grid.get(cell.row, cell.col);
            self.emit(GameEvent::TileSpawned { cell, value });
        }
    }

    // === Lifecycle ===

    /// Apply a new configuration and start a fresh game with it.
    ///
    /// The best score survives only if the grid size is unchanged, since
    /// best scores are tracked per size. A new seed reseeds the RNG.
    pub fn new_game(&mut self, config: GameConfig) {
        if config.size != self.config.size {
            self.switch_size(config.size);
        }
        if config.seed != self.config.seed {
            self.rng = GameRng::new(config.seed);
        }
        self.config = config;
        self.start_new_game();
    }

    /// Clear the grid, spawn two tiles and reset the score.
    ///
    /// Each game draws its spawns from a fresh fork of the RNG.
    #[instrument(skip(self), fields(size = %self.config.size))]
    pub fn start_new_game(&mut self) {
        self.rng = self.rng.fork();
        debug!(seed = self.rng.seed(), "forked spawn stream");
        self.grid.clear();
        self.scores.reset();
        self.emit(GameEvent::NewGame { size: self.config.size });
        self.spawn();
        self.spawn();
        self.emit_scores();
        self.set_phase(GamePhase::Started);
    }

    /// Drop the in-memory game and prepare an empty grid of `size`.
    ///
    /// Does nothing if the size is unchanged.
    pub fn switch_size(&mut self, size: GridSize) {
        if size == self.config.size {
            return;
        }
        debug!(from = %self.config.size, to = %size, "switching grid size");
        self.config.size = size;
        self.grid = Grid::new(size);
        self.scores = ScoreState::default();
        self.set_phase(GamePhase::NotStarted);
    }

    /// Seed score and best score from persisted values.
    ///
    /// The best score only ever rises.
    pub fn restore_scores(&mut self, score: u64, best_score: u64) {
        self.scores.score = score;
        self.scores.raise_best(best_score.max(score));
        self.emit_scores();
    }

    // === Moves ===

    /// Slide tiles in `direction` and advance the phase.
    ///
    /// Outside `Started` this does nothing and reports an unchanged move.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn move_tiles(&mut self, direction: Direction) -> MoveOutcome {
        if !self.phase.accepts_moves() {
            return MoveOutcome::UNCHANGED;
        }

        let outcome = resolve_move(&mut self.grid, direction, self.config.win_target);
        debug!(changed = outcome.changed, gained = outcome.score_gained, "move resolved");
        if !outcome.changed {
            return outcome;
        }

        self.scores.add(outcome.score_gained);
        self.emit(GameEvent::MoveResolved { direction, outcome });
        if outcome.score_gained > 0 {
            self.emit_scores();
        }

        if outcome.reached_target {
            self.set_phase(GamePhase::Won);
            return outcome;
        }

        if !self.grid.is_full() {
            self.spawn();
        }
        if self.grid.is_full() && is_game_over(&self.grid) {
            self.set_phase(GamePhase::Over);
        }
        outcome
    }

    // === Persistence ===

    /// Encode the grid in the persisted `tilesGrid` format.
    #[must_use]
    pub fn serialize_grid(&self) -> String {
        encode_grid(&self.grid)
    }

    /// Load a persisted grid for the current size.
    ///
    /// On success the game resumes in `Started`. An empty string or a
    /// corrupted save leaves an empty grid in `NotStarted` and returns
    /// false.
    #[instrument(skip(self, encoded), fields(size = %self.config.size))]
    pub fn load_grid(&mut self, encoded: &str) -> bool {
        match decode_grid(encoded, self.config.size) {
            Ok(Some(grid)) => {
                self.grid = grid;
                self.set_phase(GamePhase::Started);
                true
            }
            Ok(None) => {
                self.grid.clear();
                self.set_phase(GamePhase::NotStarted);
                false
            }
            Err(err) => {
                warn!(error = %err, "discarding corrupted grid save");
                self.grid.clear();
                self.set_phase(GamePhase::NotStarted);
                false
            }
        }
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("config", &self.config)
            .field("grid", &self.grid)
            .field("scores", &self.scores)
            .field("phase", &self.phase)
            .field("observers", &self.observers.len())
            .finish()
    }
}
