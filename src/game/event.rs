//! Events emitted by a running game.
//!
//! Front-ends subscribe a [`GameObserver`] and re-render from the events
//! they receive; the engine has no dependency on any UI toolkit.
//!
//! ```
//! use tile_merge::game::{EventLog, Game, GameEvent};
//! use tile_merge::GameConfig;
//!
//! let log = EventLog::new();
//! let mut game = Game::new(GameConfig::default());
//! game.subscribe(Box::new(log.clone()));
//! game.start_new_game();
//!
//! assert!(matches!(log.events()[0], GameEvent::NewGame { .. }));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::phase::GamePhase;
use crate::board::{Cell, MoveOutcome, Tile};
use crate::core::{Direction, GridSize};

/// Something that happened in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The grid was cleared for a new game.
    NewGame { size: GridSize },
    /// A tile was placed on an empty cell.
    TileSpawned { cell: Cell, value: Tile },
    /// A move was applied and changed the grid.
    MoveResolved { direction: Direction, outcome: MoveOutcome },
    /// Score or best score changed.
    ScoreChanged { score: u64, best_score: u64 },
    /// The game phase changed.
    PhaseChanged { from: GamePhase, to: GamePhase },
}

/// Receives game events as they happen.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

/// Observer that records every event.
///
/// Clones share the same buffer, so one handle can be given to the game
/// while another is kept for reading.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all events recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Remove and return all recorded events.
    pub fn drain(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// True when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl GameObserver for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
