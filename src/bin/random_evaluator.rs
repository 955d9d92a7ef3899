use pupu_solver::engine::Board;
use pupu_solver::solver::solve_bfs;

const NUM_RANDOM_BOARDS: usize = 10;
const START_SEED: u64 = 0;
const PAIRS_PER_BOARD: usize = 3;

fn main() {
    env_logger::init();

    println!(
        "Solving {} random boards ({} tile pairs each)...",
        NUM_RANDOM_BOARDS, PAIRS_PER_BOARD
    );

    let mut solved_count = 0usize;
    let mut total_examined = 0u64;
    let mut solved_move_counts: Vec<usize> = Vec::new();

    for board_idx in 0..NUM_RANDOM_BOARDS {
        let seed = START_SEED + board_idx as u64;
        let mut board = Board::new_random_with_seed(seed, PAIRS_PER_BOARD);
        // Dropped pairs may already touch; settle so the search starts
        // from a stable board, the way a level loader would hand one over.
        board.settle();

        let outcome = match solve_bfs(&board) {
            Ok(outcome) => outcome,
            Err(e) => {
                eprintln!("Board {} (seed {}): search failed: {}", board_idx, seed, e);
                continue;
            }
        };
        total_examined += outcome.boards_examined;

        match outcome.solution {
            Some(solution) => {
                solved_count += 1;
                solved_move_counts.push(solution.moves.len());
                println!(
                    "Board {:>2} (seed {:>3}): solved in {} moves, {} boards examined",
                    board_idx,
                    seed,
                    solution.moves.len(),
                    outcome.boards_examined
                );
            }
            None => {
                println!(
                    "Board {:>2} (seed {:>3}): no solution, {} boards examined",
                    board_idx, seed, outcome.boards_examined
                );
            }
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!(
        "Solved {}/{} boards, {} boards examined in total",
        solved_count, NUM_RANDOM_BOARDS, total_examined
    );
    if !solved_move_counts.is_empty() {
        let total_moves: usize = solved_move_counts.iter().sum();
        println!(
            "Average solution length: {:.2} moves",
            total_moves as f64 / solved_move_counts.len() as f64
        );
    }
}
