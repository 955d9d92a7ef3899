use crate::engine::{Board, Grid, Move};
use crate::error::IllegalMove;
use crate::heuristics::is_solvable;
use log::{debug, info};
use std::collections::{HashSet, VecDeque};

// TODO: store grids in a flat arena and keep (predecessor index, move)
// instead of a full Vec<Move> per frontier board if per-clone cost ever
// shows up in profiles; the visited set dominates memory either way.

/// How many dequeued boards between progress log lines.
const PROGRESS_INTERVAL: u64 = 100_000;

/// Represents a clearing sequence found by the solver.
#[derive(Clone, Debug)]
pub struct Solution {
    /// The moves leading from the initial board to the cleared board.
    pub moves: Vec<Move>,
    /// The final, fully settled board with no erasable tiles left.
    pub final_board: Board,
}

/// Outcome of a search: the first solution discovered in breadth-first
/// order, or `None` if the reachable state space was exhausted, plus a
/// diagnostic count of boards dequeued along the way.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    pub solution: Option<Solution>,
    pub boards_examined: u64,
}

/// Searches breadth-first for a move sequence that clears the board.
///
/// The frontier is a FIFO queue of boards; a visited set keyed by raw
/// grid content guarantees each distinct board is expanded at most once,
/// collapsing move histories that converge on the same layout. A
/// candidate's key is inserted before any further checks so sibling moves
/// in the same expansion batch cannot re-derive it; candidates failing
/// the solvability pruning test are discarded without being enqueued.
/// The first candidate with no erasable tiles left ends the search.
///
/// Since exploration is first-in-first-out, the returned solution is the
/// first one reachable, not necessarily the shortest.
///
/// # Arguments
/// * `start`: The initial board. A board that is already clear yields an
///   immediate solution with an empty move list.
///
/// # Returns
/// * `Ok(SearchOutcome)`: Solution or exhaustion, with the dequeue count.
/// * `Err(IllegalMove)`: Only possible if move generation and validation
///   disagree, which would be a bug in the engine itself.
pub fn solve_bfs(start: &Board) -> Result<SearchOutcome, IllegalMove> {
    if start.is_solved() {
        return Ok(SearchOutcome {
            solution: Some(Solution {
                moves: Vec::new(),
                final_board: start.clone(),
            }),
            boards_examined: 0,
        });
    }

    let mut visited: HashSet<Grid> = HashSet::new();
    let mut frontier: VecDeque<Board> = VecDeque::new();
    visited.insert(*start.grid());
    frontier.push_back(start.clone());

    let mut examined: u64 = 0;

    while let Some(board) = frontier.pop_front() {
        examined += 1;
        if examined % PROGRESS_INTERVAL == 0 {
            debug!(
                "{} boards examined, current queue size {}",
                examined,
                frontier.len()
            );
        }

        for mv in board.moves() {
            let candidate = board.apply(mv)?;

            if !visited.insert(*candidate.grid()) {
                // already processed or in queue
                continue;
            }

            if !is_solvable(&candidate) {
                continue;
            }

            if candidate.is_solved() {
                info!("solution found after {} boards", examined);
                return Ok(SearchOutcome {
                    solution: Some(Solution {
                        moves: candidate.path().to_vec(),
                        final_board: candidate,
                    }),
                    boards_examined: examined,
                });
            }

            frontier.push_back(candidate);
        }
    }

    info!("state space exhausted after {} boards, no solution", examined);
    Ok(SearchOutcome {
        solution: None,
        boards_examined: examined,
    })
}

/// Replays a move sequence from `start`, returning every intermediate
/// board: the start board first, then one settled board per move.
///
/// This is the sequence a step-through viewer consumes. Replaying a
/// solution's moves reproduces the solver's final board exactly.
pub fn replay(start: &Board, moves: &[Move]) -> Result<Vec<Board>, IllegalMove> {
    let mut boards = Vec::with_capacity(moves.len() + 1);
    let mut current = start.clone();
    for &mv in moves {
        let next = current.apply(mv)?;
        boards.push(current);
        current = next;
    }
    boards.push(current);
    Ok(boards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{board_from_str, board_from_str_array, SAMPLE_LEVEL};

    #[test]
    fn test_solve_already_cleared_board() {
        let board = board_from_str_array(&[
            "PPPPPPPPPPPP",
            "PPPPPPPPPPPP",
            "PPPP####PPPP",
            "PPPP#..#PPPP",
            "PPPP#..#PPPP",
            "PPPP####PPPP",
            "PPPPPPPPPPPP",
            "PPPPPPPPPPPP",
            "PPPPPPPPPPPP",
            "PPPPPPPPPPPP",
            "PPPPPPPPPPPP",
            "PPPPPPPPPPPP",
        ])
        .unwrap();

        let outcome = solve_bfs(&board).unwrap();
        assert_eq!(outcome.boards_examined, 0);
        let solution = outcome.solution.expect("cleared board must be a solution");
        assert!(solution.moves.is_empty());
        assert_eq!(solution.final_board.grid(), board.grid());
    }

    #[test]
    fn test_solve_single_move_pair() {
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
            "..S.S.......",
        ])
        .unwrap();

        let outcome = solve_bfs(&board).unwrap();
        assert_eq!(outcome.boards_examined, 1);
        let solution = outcome.solution.expect("gap-of-one pair must be solvable");
        assert_eq!(solution.moves.len(), 1);
        assert!(solution.final_board.is_solved());
    }

    #[test]
    fn test_solve_prunes_singleton_kind() {
        // The lone Diamond can never match, so every candidate is pruned
        // at insertion and the frontier drains without a solution.
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

        let outcome = solve_bfs(&board).unwrap();
        assert!(outcome.solution.is_none());
        assert_eq!(outcome.boards_examined, 1);
    }

    #[test]
    fn test_unsolvable_board_stays_unsolvable() {
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

        for mv in board.moves() {
            let next = board.apply(mv).unwrap();
            assert!(!is_solvable(&next), "move {} revived a dead board", mv);
        }
    }

    #[test]
    fn test_solve_two_kinds_and_replay_consistency() {
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
            "H.H...S.S...",
        ])
        .unwrap();

        let outcome = solve_bfs(&board).unwrap();
        let solution = outcome.solution.expect("two separated pairs are solvable");
        assert_eq!(solution.moves.len(), 2);

        let boards = replay(&board, &solution.moves).unwrap();
        assert_eq!(boards.len(), solution.moves.len() + 1);
        assert_eq!(boards[0].grid(), board.grid());
        let last = boards.last().unwrap();
        assert!(last.is_solved());
        assert_eq!(last.grid(), solution.final_board.grid());
    }

    #[test]
    fn test_solve_sample_level() {
        let board = board_from_str(SAMPLE_LEVEL).unwrap();
        let outcome = solve_bfs(&board).unwrap();
        assert!(outcome.boards_examined > 0);

        let solution = outcome.solution.expect("the sample level is solvable");
        assert!(!solution.moves.is_empty());
        assert!(solution.final_board.is_solved());

        let boards = replay(&board, &solution.moves).unwrap();
        assert_eq!(
            boards.last().unwrap().grid(),
            solution.final_board.grid(),
            "replaying the solution must reproduce the solved board"
        );
    }

    #[test]
    fn test_replay_rejects_garbage_moves() {
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
            "..S.S.......",
        ])
        .unwrap();
        let garbage = Move {
            row: 0,
            from_col: 0,
            to_col: 5,
        };
        assert!(replay(&board, &[garbage]).is_err());
    }
}
