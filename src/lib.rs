//! # tile-merge
//!
//! Rule engine for sliding-tile merge puzzles (the 2048 family) on square
//! grids of side 4, 5 or 6.
//!
//! ## Design Principles
//!
//! 1. **One Algorithm, Four Directions**: Every move is a slide toward the
//!    near edge of a rotated grid. A single line-compaction routine does
//!    all the work.
//!
//! 2. **Configuration Over Globals**: Grid size and win target come from
//!    `GameConfig`, passed explicitly when a game starts.
//!
//! 3. **UI-Agnostic**: The engine consumes resolved `Direction`s and emits
//!    `GameEvent`s. Rendering, input and storage backends live outside.
//!
//! ## Modules
//!
//! - `core`: Configuration, directions, deterministic RNG
//! - `board`: Grid, rotation, move resolution, game-over detection
//! - `game`: State machine, events, snapshots
//! - `save`: Persisted grid codec, key-value store seam, save slots
//! - `session`: A game bound to its save store
//! - `style`: Tile colour palette
//!
//! ```
//! use tile_merge::{Direction, Game, GameConfig, GamePhase};
//!
//! let mut game = Game::new(GameConfig::default().with_seed(7));
//! game.start_new_game();
//! assert_eq!(game.phase(), GamePhase::Started);
//!
//! let outcome = game.move_tiles(Direction::Up);
//! assert!(game.score() >= outcome.score_gained);
//! ```

pub mod board;
pub mod core;
pub mod game;
pub mod save;
pub mod session;
pub mod style;

// Re-export commonly used types
pub use crate::core::{Direction, GameConfig, GameRng, GameRngState, GridSize, DEFAULT_WIN_TARGET, SPAWN_VALUE};

pub use crate::board::{compact_line, is_game_over, resolve_move, Cell, Grid, LineOutcome, MoveOutcome, Rotation, Tile, MAX_TILE};

pub use crate::game::{EventLog, Game, GameEvent, GameObserver, GamePhase, GameSnapshot, ScoreState, SnapshotError};

pub use crate::save::{decode_grid, encode_grid, CodecError, GameSave, KeyValueStore, MemoryStore, SaveError, SaveKeys};

pub use crate::session::Session;

pub use crate::style::{tile_style, Rgb, TileStyle};
