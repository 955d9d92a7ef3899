use clap::Parser;
use pupu_solver::engine::{Board, FIELD_H, FIELD_W};
use pupu_solver::solver::{replay, solve_bfs};
use pupu_solver::utils::{board_from_str, SAMPLE_LEVEL};
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Inline level data (12 rows of 12 symbols)
    #[clap(short, long)]
    level: Option<String>,

    /// Print the board after every move of the solution
    #[clap(long)]
    show_steps: bool,

    /// Path to the level file (12x12 grid format)
    level_file: Option<PathBuf>,
}

fn read_level(args: &Args) -> Result<Board, String> {
    if let Some(data) = &args.level {
        return board_from_str(data).map_err(|e| format!("Bad level data: {}", e));
    }
    if let Some(path) = &args.level_file {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        return board_from_str(&content).map_err(|e| format!("Bad level data: {}", e));
    }
    Err("Either a level file or --level needs to be given.".to_string())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let board = match read_level(&args) {
        Ok(board) => board,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!(
                "\nLevel data needs to be {} lines of {} symbols per line. Example (level 93):\n\n{}",
                FIELD_H, FIELD_W, SAMPLE_LEVEL
            );
            process::exit(1);
        }
    };

    println!("Initial board state:\n{}\n", board);
    println!("Searching for a clearing sequence...\n");

    let outcome = match solve_bfs(&board) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Search failed: {}", e);
            process::exit(2);
        }
    };

    println!("{} boards analyzed.", outcome.boards_examined);

    let solution = match outcome.solution {
        Some(solution) => solution,
        None => {
            println!("No solution found.");
            return;
        }
    };

    println!("Solution found ({} moves):", solution.moves.len());
    for (i, mv) in solution.moves.iter().enumerate() {
        println!("  Step {}: {}", i + 1, mv);
    }

    if args.show_steps {
        match replay(&board, &solution.moves) {
            Ok(boards) => {
                for (i, step) in boards.iter().enumerate() {
                    if i == 0 {
                        println!("\nStart:\n{}", step);
                    } else {
                        println!("\nAfter step {} ({}):\n{}", i, solution.moves[i - 1], step);
                    }
                }
            }
            Err(e) => {
                eprintln!("Replay failed: {}", e);
                process::exit(2);
            }
        }
    } else {
        println!("\nFinal board state:\n{}", solution.final_board);
    }
}
