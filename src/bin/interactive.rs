use eight_puzzle_solver::engine::{Board, BOARD_SIZE};
use eight_puzzle_solver::solver::{solve, SearchOutcome, Strategy};
use eight_puzzle_solver::utils::{board_from_grid, is_solvable};
use std::io::{self, Write};

fn print_welcome() {
    // style from: http://patorjk.com/software/taag/#p=display&f=Standard&t=8-Puzzle%20Solver
    println!(
        r#"
   ___        ____                _        ____        _
  ( _ )      |  _ \ _   _ _______| | ___  / ___|  ___ | |_   _____ _ __
  / _ \ _____| |_) | | | |_  /_  / |/ _ \ \___ \ / _ \| \ \ / / _ \ '__|
 | (_) |_____|  __/| |_| |/ / / /| |  __/  ___) | (_) | |\ V /  __/ |
  \___/      |_|    \__,_/___/___|_|\___| |____/ \___/|_| \_/ \___|_|
"#
    );
    println!("------------------------------------------------------------------------");
    println!("Instructions:");
    println!("    Enter the initial and goal state of the 8-puzzle board. Input");
    println!("    integers 0-8, 0 representing the blank, to assign a symbol to");
    println!("    each board[row][col].");
    println!("------------------------------------------------------------------------");
}

/// Prompts for all nine cells of one board, re-prompting on invalid or
/// repeated digits until the board is complete.
fn input_board() -> Board {
    let mut grid = [[0u8; BOARD_SIZE]; BOARD_SIZE];
    let mut used = [false; BOARD_SIZE * BOARD_SIZE];

    for row in 0..BOARD_SIZE {
        let mut col = 0;
        while col < BOARD_SIZE {
            print!("    board[{}][{}]: ", row, col);
            io::stdout().flush().expect("failed to flush stdout");

            let mut input = String::new();
            if io::stdin().read_line(&mut input).is_err() {
                println!("    ERROR: Failed to read input. Try again.");
                continue;
            }

            match input.trim().parse::<usize>() {
                Ok(symbol) if symbol < BOARD_SIZE * BOARD_SIZE => {
                    if used[symbol] {
                        println!(
                            "    ERROR: Number {} is already used. Try again with different input.",
                            symbol
                        );
                    } else {
                        grid[row][col] = symbol as u8;
                        used[symbol] = true;
                        col += 1;
                    }
                }
                _ => {
                    println!("    ERROR: Invalid input. Enter a number from 0 to 8.");
                }
            }
        }
    }
    println!();

    // Nine distinct digits were enforced cell by cell, so this cannot fail.
    board_from_grid(grid).expect("validated input produced an invalid board")
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
    print_welcome();

    println!("INITIAL STATE:");
    let initial = input_board();

    println!("GOAL STATE:");
    let goal = input_board();

    println!("INITIAL BOARD STATE:\n{}\n", initial);
    println!("GOAL BOARD STATE:\n{}\n", goal);

    if !is_solvable(&initial, &goal) {
        println!("No solution exists: the two boards fail the parity test.");
        return;
    }

    println!("-------------------------- USING A* ALGORITHM --------------------------");
    print_report(&solve(&initial, &goal, Strategy::AStar));

    println!("------------------------- USING BFS ALGORITHM --------------------------");
    print_report(&solve(&initial, &goal, Strategy::BreadthFirst));
}
