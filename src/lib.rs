//! # 8-Puzzle Solver Library
//!
//! This library provides the core search machinery for solving the 8-puzzle
//! (3x3 sliding tile board): a state-transition model for the board, an
//! explicit search tree, a frontier supporting both FIFO and cost-ordered
//! insertion, and the breadth-first and A* driving loops built on top.
//!
//! It is used by three binaries:
//! - `solve`: Reads initial and goal boards from files and solves with the
//!   selected algorithm(s).
//! - `interactive`: Prompts for both boards on the console, then runs A*
//!   followed by BFS and reports each solution.
//! - `benchmark`: Generates seeded random scrambles and compares the two
//!   strategies over a batch of boards.
//!
//! ## Modules
//! - `engine`: Board representation (`Board`), blank movements (`Move`),
//!   the Manhattan-distance heuristic, and board display.
//! - `tree`: The arena-backed search tree (`SearchTree`, `SearchNode`) with
//!   node expansion and solution-path reconstruction.
//! - `frontier`: The open list (`Frontier`) with FIFO batch append for BFS
//!   and cost-ordered insertion for A*.
//! - `solver`: The `solve` entry points, search strategies, and per-run
//!   statistics (`SearchStats`).
//! - `utils`: Board parsing and validation, the solvability parity test,
//!   and seeded scramble generation.

pub mod engine;
pub mod frontier;
pub mod solver;
pub mod tree;
pub mod utils;
