use clap::{Parser, ValueEnum};
use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::solver::{solve_with_limit, SearchOutcome, Strategy};
use eight_puzzle_solver::utils::{board_from_str_rows, is_solvable};
use std::fs;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// Breadth-first search only
    Bfs,
    /// A* with the Manhattan-distance heuristic only
    Astar,
    /// Run A* first, then BFS, and report both
    Both,
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Which search algorithm(s) to run
    #[clap(short, long, value_enum, default_value = "both")]
    algorithm: Algorithm,

    /// Refuse to expand nodes at this depth or deeper
    #[clap(short, long)]
    max_depth: Option<u32>,

    /// Path to the initial board file (3 rows of the digits 0-8, 0 = blank)
    initial_file: PathBuf,

    /// Path to the goal board file (same format)
    goal_file: PathBuf,
}

fn read_board_file(path: &PathBuf) -> Result<Board, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    board_from_str_rows(&lines).map_err(|e| format!("Invalid board format: {}", e))
}

fn print_report(outcome: &SearchOutcome) {
    match &outcome.solution {
        None => {
            println!("No solution found.");
        }
        Some(solution) if solution.moves.is_empty() => {
            println!("No moves needed. The initial state is already the goal state.");
        }
        Some(solution) => {
            println!("SOLUTION: (Relative to the space character)");
            for (i, mv) in solution.moves.iter().enumerate() {
                println!("{}. Move {}", i + 1, mv);
            }
            println!(
                "DETAILS:\n\
                 - Solution length : {}\n\
                 - Nodes expanded  : {}\n\
                 - Nodes generated : {}\n\
                 - Runtime         : {:.3} milliseconds\n\
                 - Memory used     : {} bytes",
                outcome.stats.solution_length,
                outcome.stats.nodes_expanded,
                outcome.stats.nodes_generated,
                outcome.stats.runtime.as_secs_f64() * 1000.0,
                outcome.stats.memory_estimate()
            );
        }
    }
}

fn main() {
    let args = Args::parse();

    let initial = read_board_file(&args.initial_file)
        .unwrap_or_else(|e| panic!("{}: {}", args.initial_file.display(), e));
    let goal = read_board_file(&args.goal_file)
        .unwrap_or_else(|e| panic!("{}: {}", args.goal_file.display(), e));

    println!("INITIAL BOARD STATE:\n{}\n", initial);
    println!("GOAL BOARD STATE:\n{}\n", goal);

    if !is_solvable(&initial, &goal) {
        println!("WARNING: this pairing fails the parity test; no solution exists.");
        if args.max_depth.is_none() {
            println!("Refusing to start an unbounded search. Pass --max-depth to force one.");
            return;
        }
    }

    if args.algorithm != Algorithm::Bfs {
        println!("-------------------------- USING A* ALGORITHM --------------------------");
        let outcome = solve_with_limit(&initial, &goal, Strategy::AStar, args.max_depth);
        print_report(&outcome);
    }

    if args.algorithm != Algorithm::Astar {
        println!("------------------------- USING BFS ALGORITHM --------------------------");
        let outcome = solve_with_limit(&initial, &goal, Strategy::BreadthFirst, args.max_depth);
        print_report(&outcome);
    }
}
