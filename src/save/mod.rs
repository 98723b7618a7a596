//! Persistence: the `tilesGrid` codec, the key-value store seam and
//! per-size save slots.

pub mod codec;
pub mod slots;
pub mod store;

pub use codec::{decode_grid, encode_grid, CodecError, COLUMN_DELIMITER, ROW_DELIMITER};
pub use slots::{GameSave, SaveKeys};
pub use store::{KeyValueStore, MemoryStore, SaveError};
