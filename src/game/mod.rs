//! Game state machine, events and snapshots.
//!
//! `Game` owns one grid for the duration of a game and turns move
//! outcomes into score and phase transitions.

pub mod event;
pub mod machine;
pub mod phase;
pub mod snapshot;

pub use event::{EventLog, GameEvent, GameObserver};
pub use machine::Game;
pub use phase::{GamePhase, ScoreState};
pub use snapshot::{GameSnapshot, SnapshotError};
