//! Persisted grid format.
//!
//! Rows are joined by `;`, cells within a row by `,`, values are plain
//! decimal with 0 for empty. No leading or trailing delimiter:
//!
//! ```text
//! 2,0,0,0;0,4,0,0;0,0,0,0;0,0,0,2
//! ```
//!
//! An empty string means "no saved grid", which is distinct from an
//! all-zero grid.

use std::num::ParseIntError;

use crate::board::{is_valid_tile, Grid, Tile};
use crate::core::GridSize;

/// Separates rows.
pub const ROW_DELIMITER: char = ';';

/// Separates cells within a row.
pub const COLUMN_DELIMITER: char = ',';

/// Reasons a persisted grid string is rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("invalid token {token:?} at ({row}, {col}): {source}")]
    InvalidToken {
        row: usize,
        col: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row}: expected {expected} cells, found {found}")]
    RowLength { row: usize, expected: usize, found: usize },
    #[error("invalid tile value {value} at ({row}, {col})")]
    InvalidTile { row: usize, col: usize, value: Tile },
}

/// Encode a grid as `tilesGrid` text.
#[must_use]
pub fn encode_grid(grid: &Grid) -> String {
    let delimiter = COLUMN_DELIMITER.to_string();
    grid.rows()
        .map(|row| row.iter().map(Tile::to_string).collect::<Vec<_>>().join(&delimiter))
        .collect::<Vec<_>>()
        .join(&ROW_DELIMITER.to_string())
}

/// Decode `tilesGrid` text for a board of the given size.
///
/// Returns `Ok(None)` for the empty string (nothing saved).
pub fn decode_grid(encoded: &str, size: GridSize) -> Result<Option<Grid>, CodecError> {
    if encoded.is_empty() {
        return Ok(None);
    }

    let side = size.side();
    let rows: Vec<&str> = encoded.split(ROW_DELIMITER).collect();
    if rows.len() != side {
        return Err(CodecError::RowCount {
            expected: side,
            found: rows.len(),
        });
    }

    let mut grid = Grid::new(size);
    for (row, text) in rows.into_iter().enumerate() {
        let tokens: Vec<&str> = text.split(COLUMN_DELIMITER).collect();
        if tokens.len() != side {
            return Err(CodecError::RowLength {
                row,
                expected: side,
                found: tokens.len(),
            });
        }
        for (col, token) in tokens.into_iter().enumerate() {
            let value: Tile = token.parse().map_err(|source| CodecError::InvalidToken {
                row,
                col,
                token: token.to_string(),
                source,
            })?;
            if !is_valid_tile(value) {
                return Err(CodecError::InvalidTile { row, col, value });
            }
            grid.set(row, col, value);
        }
    }
    Ok(Some(grid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_layout() {
        let grid = Grid::from_rows(
            GridSize::FOUR,
            &[&[2, 0, 0, 0], &[0, 4, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 2]],
        );
        assert_eq!(encode_grid(&grid), "2,0,0,0;0,4,0,0;0,0,0,0;0,0,0,2");
    }

    #[test]
    fn test_empty_grid_is_not_absent() {
        let encoded = encode_grid(&Grid::new(GridSize::FOUR));
        assert_eq!(encoded, "0,0,0,0;0,0,0,0;0,0,0,0;0,0,0,0");

        let decoded = decode_grid(&encoded, GridSize::FOUR).unwrap();
        assert_eq!(decoded, Some(Grid::new(GridSize::FOUR)));
    }

    #[test]
    fn test_absent() {
        assert_eq!(decode_grid("", GridSize::FIVE), Ok(None));
    }

    #[test]
    fn test_malformed_token() {
        let err = decode_grid("2,0,x,0;0,0,0,0;0,0,0,0;0,0,0,0", GridSize::FOUR).unwrap_err();
        assert!(matches!(err, CodecError::InvalidToken { row: 0, col: 2, .. }));
    }

    #[test]
    fn test_negative_token() {
        let err = decode_grid("-2,0,0,0;0,0,0,0;0,0,0,0;0,0,0,0", GridSize::FOUR).unwrap_err();
        assert!(matches!(err, CodecError::InvalidToken { .. }));
    }

    #[test]
    fn test_trailing_delimiter() {
        let err = decode_grid("0,0,0,0;0,0,0,0;0,0,0,0;0,0,0,0;", GridSize::FOUR).unwrap_err();
        assert_eq!(err, CodecError::RowCount { expected: 4, found: 5 });
    }

    #[test]
    fn test_wrong_row_length() {
        let err = decode_grid("0,0,0;0,0,0,0;0,0,0,0;0,0,0,0", GridSize::FOUR).unwrap_err();
        assert_eq!(err, CodecError::RowLength { row: 0, expected: 4, found: 3 });
    }

    #[test]
    fn test_size_mismatch() {
        let encoded = encode_grid(&Grid::new(GridSize::FIVE));
        assert!(decode_grid(&encoded, GridSize::FOUR).is_err());
    }

    #[test]
    fn test_invalid_tile_value() {
        let err = decode_grid("3,0,0,0;0,0,0,0;0,0,0,0;0,0,0,0", GridSize::FOUR).unwrap_err();
        assert_eq!(err, CodecError::InvalidTile { row: 0, col: 0, value: 3 });
    }

    #[test]
    fn test_tile_above_cap_rejected() {
        let err = decode_grid("2147483648,2147483648,0,0;0,0,0,0;0,0,0,0;0,0,0,0", GridSize::FOUR).unwrap_err();
        assert_eq!(err, CodecError::InvalidTile { row: 0, col: 0, value: 1 << 31 });

        let capped = decode_grid("1073741824,0,0,0;0,0,0,0;0,0,0,0;0,0,0,0", GridSize::FOUR).unwrap();
        assert_eq!(capped.map(|grid| grid.get(0, 0)), Some(1 << 30));
    }

    #[test]
    fn test_error_message() {
        let err = CodecError::RowCount { expected: 6, found: 2 };
        assert_eq!(err.to_string(), "expected 6 rows, found 2");
    }
}
