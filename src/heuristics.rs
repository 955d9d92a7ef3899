use crate::engine::{Board, ERASABLE_KINDS, FIELD_H, FIELD_W};

/// Counts how many tiles of each erasable kind remain on the board.
///
/// Glass blocks and the immobile kinds are not counted.
///
/// # Arguments
/// * `board`: A reference to the `Board` to analyze.
///
/// # Returns
/// An array indexed by `Tile::erasable_index`, one count per kind.
pub fn kind_counts(board: &Board) -> [u32; ERASABLE_KINDS] {
    let mut counts = [0u32; ERASABLE_KINDS];
    for y in 0..FIELD_H {
        for x in 0..FIELD_W {
            if let Some(k) = board.get(x, y).erasable_index() {
                counts[k] += 1;
            }
        }
    }
    counts
}

/// Cheap necessary-condition test used to prune dead search branches.
///
/// A kind with exactly one tile left can never be matched away, since
/// matches need two or more touching tiles and no transition ever adds
/// tiles, so such a board can never be cleared. The converse does not
/// hold: a `true` result is no guarantee that a clearing sequence exists.
///
/// # Arguments
/// * `board`: A reference to the `Board` to analyze.
///
/// # Returns
/// `false` if some erasable kind has a count of exactly 1, `true` otherwise.
pub fn is_solvable(board: &Board) -> bool {
    kind_counts(board).iter().all(|&n| n != 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_from_str_array;

    #[test]
    fn test_kind_counts() {
        let board = board_from_str_array(&[
            "............",
            "............",
            "............",
            "............",
            "............",
            "............",
            "............",
            "............",
            "............",
            "....G.......",
            "..H.T...#...",
            "..H.T.T.D..P",
        ])
        .unwrap();
        let counts = kind_counts(&board);
        assert_eq!(counts[0], 2); // Hearts
        assert_eq!(counts[1], 1); // Diamonds
        assert_eq!(counts[2], 3); // Triangles
        assert_eq!(counts[3..].iter().sum::<u32>(), 0);
    }

    #[test]
    fn test_singleton_kind_is_unsolvable() {
        let board = board_from_str_array(&[
            "............",
            "............",
            "............",
            "............",
            "............",
            "............",
            "............",
            "............",
            "............",
            "............",
            "............",
            "..H.H...D...",
        ])
        .unwrap();
        assert!(!is_solvable(&board));
    }

    #[test]
    fn test_paired_kinds_are_solvable() {
        let board = board_from_str_array(&[
            "............",
            "............",
            "............",
            "............",
            "............",
            "............",
            "............",
            "............",
            "............",
            "............",
            "..D.....D...",
            "..H.H...S.S.",
        ])
        .unwrap();
        assert!(is_solvable(&board));
    }

    #[test]
    fn test_board_without_erasable_tiles_is_solvable() {
        // Zero of every kind: vacuously solvable (and already solved).
        let board = board_from_str_array(&[
            "PPPPPPPPPPPP",
            "PPPPPPPPPPPP",
            "PPPPPPPPPPPP",
            "PPPP####PPPP",
            "PPPP#..#PPPP",
            "PPPP#.G#PPPP",
            "PPPP####PPPP",
            "PPPPPPPPPPPP",
            "PPPPPPPPPPPP",
            "PPPPPPPPPPPP",
            "PPPPPPPPPPPP",
            "PPPPPPPPPPPP",
        ])
        .unwrap();
        assert!(is_solvable(&board));
        assert!(board.is_solved());
    }
}
