use pupu_solver::engine::Board;
use pupu_solver::utils::{board_from_str, SAMPLE_LEVEL};
use std::io::{self, Write}; // For input/output
use std::{env, fs, process};

fn load_start_board() -> Board {
    match env::args().nth(1) {
        Some(path) => {
            let content = fs::read_to_string(&path).unwrap_or_else(|e| {
                eprintln!("Failed to read {}: {}", path, e);
                process::exit(1);
            });
            board_from_str(&content).unwrap_or_else(|e| {
                eprintln!("Bad level data in {}: {}", path, e);
                process::exit(1);
            })
        }
        // No level given: play the built-in sample level.
        None => board_from_str(SAMPLE_LEVEL).expect("sample level is valid"),
    }
}

fn main() {
    env_logger::init();

    // The full history of boards, newest last; popping undoes a move.
    let mut history = vec![load_start_board()];
    println!("Welcome to the Pupu puzzle!");

    loop {
        let board = history.last().expect("history is never empty").clone();

        println!("---------------------");
        println!("Moves played: {}", board.path().len());
        println!("{}", board);

        if board.is_solved() {
            println!();
            println!("---------------------");
            println!("🎉 BOARD CLEARED! 🎉");
            println!("Total moves: {}", board.path().len());
            println!("---------------------");
            break;
        }

        let moves = board.moves();
        if moves.is_empty() {
            println!();
            println!("No moves left and tiles remain. You are stuck.");
            break;
        }

        println!("Available moves:");
        for (i, mv) in moves.iter().enumerate() {
            println!("  {:>3}: {}", i, mv);
        }

        print!("Enter a move number, 'u' to undo, or 'q' to quit: ");
        io::stdout().flush().unwrap(); // Ensure prompt is shown before input

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Error reading input. Please try again.");
            continue;
        }

        let trimmed_input = input.trim();

        if trimmed_input == "q" {
            println!("Thanks for playing!");
            break;
        }

        if trimmed_input == "u" {
            if history.len() > 1 {
                history.pop();
                println!("Move undone.");
            } else {
                println!("Cannot undo further (already at initial state).");
            }
            continue;
        }

        match trimmed_input.parse::<usize>() {
            Ok(i) if i < moves.len() => match board.apply(moves[i]) {
                Ok(next) => history.push(next),
                Err(e) => println!("Rejected: {}", e),
            },
            Ok(_) => {
                println!(
                    "Invalid move number: must be between 0 and {}.",
                    moves.len() - 1
                );
            }
            Err(_) => {
                println!("Invalid input format. Use a move number, 'u', or 'q'.");
            }
        }
    }
}
