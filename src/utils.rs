//! Board parsing, validation, and generation helpers.
//!
//! Everything here sits outside the search itself: the binaries use these
//! functions to turn user input into validated `Board`s, to warn about
//! unsolvable pairings before starting an unbounded search, and to produce
//! reproducible scrambles for benchmarking.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::engine::{Board, Move, BLANK, BOARD_SIZE};

/// Validates a raw grid and wraps it in a `Board` with no action tag.
///
/// # Arguments
/// * `grid`: A 3x3 array of tile symbols.
///
/// # Returns
/// * `Ok(Board)` when every cell holds a digit 0-8 and all nine digits are
///   distinct (which also guarantees exactly one blank).
/// * `Err(String)` describing the first violation otherwise.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::utils::board_from_grid;
///
/// assert!(board_from_grid([[1, 2, 3], [4, 0, 5], [6, 7, 8]]).is_ok());
/// assert!(board_from_grid([[1, 1, 3], [4, 0, 5], [6, 7, 8]]).is_err());
/// assert!(board_from_grid([[1, 2, 3], [4, 9, 5], [6, 7, 8]]).is_err());
/// ```
pub fn board_from_grid(grid: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Result<Board, String> {
    let mut used = [false; BOARD_SIZE * BOARD_SIZE];
    for (r, row) in grid.iter().enumerate() {
        for (c, &tile) in row.iter().enumerate() {
            if tile as usize >= used.len() {
                return Err(format!(
                    "Invalid symbol {} at row {} col {}. Expected a digit from 0 to 8",
                    tile, r, c
                ));
            }
            if used[tile as usize] {
                return Err(format!(
                    "Symbol {} appears more than once (second time at row {} col {})",
                    tile, r, c
                ));
            }
            used[tile as usize] = true;
        }
    }
    Ok(Board::from_grid(grid))
}

/// Parses an array of string slices into a validated `Board`.
///
/// Each string represents one row, top to bottom. A row must contain
/// exactly three digit symbols; whitespace between symbols is ignored, so
/// both `"123"` and `"1 2 3"` parse. The digit 0 stands for the blank.
///
/// # Returns
/// * `Ok(Board)` with `action` unset, ready to use as an initial or goal
///   board.
/// * `Err(String)` if the row count or a row length is wrong, a symbol is
///   not a digit 0-8, or a digit repeats.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::utils::board_from_str_rows;
///
/// let board = board_from_str_rows(&["1 2 3", "4 0 5", "6 7 8"]).unwrap();
/// assert_eq!(board.tile(1, 1), 0);
/// assert_eq!(board.tile(2, 2), 8);
///
/// assert!(board_from_str_rows(&["123", "405"]).is_err());
/// assert!(board_from_str_rows(&["123", "495", "678"]).is_err());
/// ```
pub fn board_from_str_rows(rows: &[&str]) -> Result<Board, String> {
    if rows.len() != BOARD_SIZE {
        return Err(format!(
            "Invalid number of rows. Expected {}, found {}",
            BOARD_SIZE,
            rows.len()
        ));
    }

    let mut grid = [[0u8; BOARD_SIZE]; BOARD_SIZE];
    for (r, row_str) in rows.iter().enumerate() {
        let symbols: Vec<char> = row_str.chars().filter(|ch| !ch.is_whitespace()).collect();
        if symbols.len() != BOARD_SIZE {
            return Err(format!(
                "Row {} has {} symbols. Expected exactly {}",
                r,
                symbols.len(),
                BOARD_SIZE
            ));
        }
        for (c, &ch) in symbols.iter().enumerate() {
            match ch.to_digit(10) {
                Some(digit) if digit < (BOARD_SIZE * BOARD_SIZE) as u32 => {
                    grid[r][c] = digit as u8;
                }
                _ => {
                    return Err(format!(
                        "Unrecognized symbol '{}' in row {} col {}. Expected a digit from 0 to 8",
                        ch, r, c
                    ));
                }
            }
        }
    }

    board_from_grid(grid)
}

/// Tests whether `goal` is reachable from `initial` at all.
///
/// Classic parity argument: relabel the non-blank tiles of `initial` by
/// their order of appearance in `goal` and count inversions. For an
/// odd-width board a slide never changes the parity of that count, so the
/// pairing is solvable exactly when the count is even.
///
/// The search itself never consults this; it exists so callers can refuse
/// an unsolvable pairing instead of launching a search that cannot
/// terminate.
pub fn is_solvable(initial: &Board, goal: &Board) -> bool {
    // Rank of each non-blank symbol in the goal's row-major order.
    let mut rank = [0usize; BOARD_SIZE * BOARD_SIZE];
    let mut next_rank = 0;
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            let tile = goal.tile(r, c);
            if tile != BLANK {
                rank[tile as usize] = next_rank;
                next_rank += 1;
            }
        }
    }

    let mut sequence = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE - 1);
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            let tile = initial.tile(r, c);
            if tile != BLANK {
                sequence.push(rank[tile as usize]);
            }
        }
    }

    let mut inversions = 0usize;
    for i in 0..sequence.len() {
        for j in (i + 1)..sequence.len() {
            if sequence[i] > sequence[j] {
                inversions += 1;
            }
        }
    }

    inversions % 2 == 0
}

/// Produces a solvable board by walking `moves` random slides away from
/// `goal`.
///
/// The walk is seeded, so the same `(moves, seed)` pair always yields the
/// same board. Immediate reversals are skipped, matching the pruning rule
/// used during search, though the walk may still wander back towards the
/// goal; `moves` is therefore an upper bound on the solution length, not
/// the exact distance. The returned board has its action tag cleared, like
/// any other user-supplied initial state.
pub fn scrambled_board(goal: &Board, moves: u32, seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut current = goal.clone();

    let mut applied = 0;
    while applied < moves {
        let mv = Move::ALL[rng.gen_range(0..Move::ALL.len())];
        if current.action().map(Move::opposite) == Some(mv) {
            continue;
        }
        if let Some(next) = current.apply(mv) {
            current = next;
            applied += 1;
        }
    }

    Board::from_grid(*current.grid())
}
