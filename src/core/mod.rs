//! Core engine types: configuration, directions, RNG.
//!
//! These are the building blocks shared by the board, the state machine
//! and the save layer.

pub mod config;
pub mod direction;
pub mod rng;

pub use config::{GameConfig, GridSize, DEFAULT_WIN_TARGET, SPAWN_VALUE};
pub use direction::Direction;
pub use rng::{GameRng, GameRngState};
