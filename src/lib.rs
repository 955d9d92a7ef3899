//! # Pupu Solver Library
//!
//! This library provides the core game logic for the Pupu sliding-tile
//! puzzle and a breadth-first search solver that finds a sequence of
//! moves clearing every erasable tile from a level.
//!
//! It is used by three binaries:
//! - `human_player`: Allows interactive gameplay via the command line.
//! - `level_solver`: Takes a level file (or inline level data) and
//!   outputs the move sequence that clears the board, if one exists.
//! - `random_evaluator`: Solves a batch of seeded random boards and
//!   reports aggregate search statistics.
//!
//! ## Modules
//! - `engine`: Contains the board representation (`Board`), tile types (`Tile`),
//!   move generation, and the gravity/removal transition mechanics.
//! - `solver`: Provides the `solve_bfs` function for finding clearing
//!   sequences, plus `replay` for reconstructing the board after each move.
//! - `heuristics`: Board-analysis helpers, including the solvability
//!   pruning test used by the search.
//! - `utils`: Provides utility functions, such as parsing level data from strings.
//! - `error`: Typed errors for level parsing and move validation.

pub mod engine;
pub mod error;
pub mod heuristics;
pub mod solver;
pub mod utils;

// Items from sub-modules, if public, should be accessed via their full
// path, e.g., `pupu_solver::solver::solve_bfs()`. This keeps the
// top-level library namespace cleaner.
