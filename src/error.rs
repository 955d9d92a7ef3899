use crate::engine::Move;

/// Errors that can occur while parsing level data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LevelError {
    #[error("expected {expected} rows of level data, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} tiles, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("'{symbol}' is not a valid tile symbol (row {row}, column {col})")]
    UnknownSymbol { symbol: char, row: usize, col: usize },
}

/// Raised when a move fails the transition-boundary validation: the source
/// cell does not hold a mobile tile, or the destination is not reachable by
/// an unobstructed horizontal slide.
///
/// Moves produced by `Board::moves` always pass validation, so seeing this
/// error means a caller constructed a move by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("illegal move {0}")]
pub struct IllegalMove(pub Move);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_error_display() {
        let err = LevelError::RowCount {
            expected: 12,
            found: 3,
        };
        assert_eq!(err.to_string(), "expected 12 rows of level data, found 3");

        let err = LevelError::UnknownSymbol {
            symbol: 'X',
            row: 4,
            col: 7,
        };
        assert_eq!(
            err.to_string(),
            "'X' is not a valid tile symbol (row 4, column 7)"
        );
    }

    #[test]
    fn test_illegal_move_display() {
        let err = IllegalMove(Move {
            row: 5,
            from_col: 2,
            to_col: 4,
        });
        assert_eq!(err.to_string(), "illegal move (2,5) -> (4,5)");
    }
}
