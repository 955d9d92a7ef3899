use crate::engine::{Board, Tile, FIELD_H, FIELD_W};
use crate::error::LevelError;

/// The classic documented level layout (level 93 of the original game),
/// used by tests and printed by `level_solver` when handed bad input.
pub const SAMPLE_LEVEL: &str = "\
PPPPPPPPPPPP
PPPPPPPPPPPP
PPPPP##PPPPP
PPPP#.R#PPPP
PPP#..2R#PPP
PP#...S2F#PP
PP#...FS1#PP
PPP#..1R#PPP
PPPP#.F#PPPP
PPPPP##PPPPP
PPPPPPPPPPPP
PPPPPPPPPPPP
";

/// Parses an array of string slices into a `Board`.
///
/// Each string slice represents one row, starting from the top. Exactly
/// `FIELD_H` rows of exactly `FIELD_W` symbols are required; the symbol
/// table is the one documented on [`Tile::to_char`].
///
/// # Arguments
/// * `s`: A slice of string slices (`&[&str]`) representing the rows of
///   the board, top row first.
///
/// # Returns
/// * `Ok(Board)` if parsing is successful.
/// * `Err(LevelError)` on a row/column count mismatch or a character
///   outside the symbol table.
///
/// # Examples
/// ```
/// use pupu_solver::utils::{board_from_str, SAMPLE_LEVEL};
/// use pupu_solver::engine::Tile;
///
/// let board = board_from_str(SAMPLE_LEVEL).unwrap();
/// assert_eq!(board.get(6, 3), Tile::Ring);
/// assert_eq!(board.get(0, 0), Tile::Pattern);
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board, LevelError> {
    if s.len() != FIELD_H {
        return Err(LevelError::RowCount {
            expected: FIELD_H,
            found: s.len(),
        });
    }

    let mut board = Board::new_empty();
    for (y, row_str) in s.iter().enumerate() {
        let width = row_str.chars().count();
        if width != FIELD_W {
            return Err(LevelError::RowWidth {
                row: y,
                expected: FIELD_W,
                found: width,
            });
        }

        for (x, c) in row_str.chars().enumerate() {
            match Tile::from_char(c) {
                Some(tile) => board.set(x, y, tile),
                None => {
                    return Err(LevelError::UnknownSymbol {
                        symbol: c,
                        row: y,
                        col: x,
                    })
                }
            }
        }
    }
    Ok(board)
}

/// Parses level data from a single string: one line per row, surrounding
/// whitespace trimmed, blank lines skipped. Dimension and symbol rules
/// are those of [`board_from_str_array`].
pub fn board_from_str(text: &str) -> Result<Board, LevelError> {
    let lines: Vec<&str> = text
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();
    board_from_str_array(&lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_level_parses() {
        let board = board_from_str(SAMPLE_LEVEL).unwrap();
        assert_eq!(board.get(0, 0), Tile::Pattern);
        assert_eq!(board.get(5, 2), Tile::Wall);
        assert_eq!(board.get(5, 3), Tile::Empty);
        assert_eq!(board.get(6, 3), Tile::Ring);
        assert_eq!(board.get(6, 4), Tile::CrossB);
        assert_eq!(board.get(6, 5), Tile::Sandglass);
        assert_eq!(board.get(8, 5), Tile::Frame);
        assert_eq!(board.get(8, 6), Tile::CrossA);
        assert_eq!(board.get(6, 8), Tile::Frame);
    }

    #[test]
    fn test_board_from_str_array_wrong_row_count() {
        let rows = vec!["............"; FIELD_H - 1];
        let result = board_from_str_array(&rows);
        assert_eq!(
            result.unwrap_err(),
            LevelError::RowCount {
                expected: FIELD_H,
                found: FIELD_H - 1,
            }
        );

        let rows = vec!["............"; FIELD_H + 2];
        assert!(board_from_str_array(&rows).is_err());
    }

    #[test]
    fn test_board_from_str_array_wrong_row_width() {
        let mut rows = vec!["............"; FIELD_H];
        rows[4] = "........";
        let result = board_from_str_array(&rows);
        assert_eq!(
            result.unwrap_err(),
            LevelError::RowWidth {
                row: 4,
                expected: FIELD_W,
                found: 8,
            }
        );
    }

    #[test]
    fn test_board_from_str_array_unknown_symbol() {
        let mut rows = vec!["............"; FIELD_H];
        rows[2] = ".....X......";
        let result = board_from_str_array(&rows);
        assert_eq!(
            result.unwrap_err(),
            LevelError::UnknownSymbol {
                symbol: 'X',
                row: 2,
                col: 5,
            }
        );
    }

    #[test]
    fn test_board_from_str_trims_and_skips_blank_lines() {
        let mut text = String::from("\n\n");
        for _ in 0..FIELD_H {
            text.push_str("  ............  \n\n");
        }
        let board = board_from_str(&text).unwrap();
        assert!(board.is_solved());
    }

    #[test]
    fn test_board_from_str_rejects_interior_spaces() {
        let mut rows = vec!["............"; FIELD_H];
        rows[0] = "..... ......";
        let result = board_from_str_array(&rows);
        assert_eq!(
            result.unwrap_err(),
            LevelError::UnknownSymbol {
                symbol: ' ',
                row: 0,
                col: 5,
            }
        );
    }
}
