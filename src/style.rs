//! Tile colour palette.
//!
//! Front-ends draw tiles however they like; this table keeps the classic
//! look consistent between them. Values above the table reuse its last
//! entry.

use serde::{Deserialize, Serialize};

use crate::board::{is_valid_tile, Tile};

/// 24-bit colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    const fn hex(value: u32) -> Self {
        Self((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Colours for one tile value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileStyle {
    /// Text colour, `None` for the empty cell (no label).
    pub foreground: Option<Rgb>,
    pub background: Rgb,
}

const DARK_TEXT: Rgb = Rgb::hex(0x776e65);
const LIGHT_TEXT: Rgb = Rgb::hex(0xf9f6f2);

// Indexed by log2(value); index 0 is the empty cell.
// Values above 2048 reuse the 2048 entry instead of the empty-cell colour.
const BACKGROUNDS: [u32; 12] = [
    0xcdc1b4, // empty
    0xeee4da, // 2
    0xede0c8, // 4
    0xf2b179, // 8
    0xf59563, // 16
    0xf67c5f, // 32
    0xf65e3b, // 64
    0xedcf72, // 128
    0xedcc61, // 256
    0xedc850, // 512
    0xedc53f, // 1024
    0xedc22e, // 2048
];

/// Style for a tile value.
///
/// Panics on a value no cell can hold.
#[must_use]
pub fn tile_style(value: Tile) -> TileStyle {
    assert!(is_valid_tile(value), "Invalid tile value {value}");
    if value == 0 {
        return TileStyle {
            foreground: None,
            background: Rgb::hex(BACKGROUNDS[0]),
        };
    }

    let index = (value.trailing_zeros() as usize).min(BACKGROUNDS.len() - 1);
    let foreground = if value <= 4 { DARK_TEXT } else { LIGHT_TEXT };
    TileStyle {
        foreground: Some(foreground),
        background: Rgb::hex(BACKGROUNDS[index]),
    }
}
