//! Core board model for the 8-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Move`: the four blank movements, plus their reverse relationship.
//! - `Board`: an immutable 3x3 tile arrangement tagged with the move that
//!   produced it, with methods for applying moves and testing content
//!   equality.
//! - `manhattan_distance`: the heuristic used by the A* strategy.

use std::fmt;

/// Width and height of the puzzle board. The board is always 3x3.
pub const BOARD_SIZE: usize = 3;

/// The symbol representing the blank (empty) cell.
pub const BLANK: u8 = 0;

/// A movement of the blank cell, relative to the blank itself.
///
/// `Move::Up` slides the tile above the blank down into the blank's cell,
/// i.e. the blank travels up. The other variants behave symmetrically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All moves in the fixed expansion order: up, down, left, right.
    ///
    /// Node expansion and scramble generation both iterate in this order,
    /// which fixes the tie-break order seen downstream.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Returns the move that undoes `self`.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Move;
    /// assert_eq!(Move::Up.opposite(), Move::Down);
    /// assert_eq!(Move::Left.opposite(), Move::Right);
    /// ```
    pub fn opposite(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    /// Row and column deltas applied to the blank's coordinates.
    fn delta(self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Up => "UP",
            Move::Down => "DOWN",
            Move::Left => "LEFT",
            Move::Right => "RIGHT",
        };
        write!(f, "{}", name)
    }
}

/// A 3x3 arrangement of the tiles 0-8 (0 = blank), tagged with the move
/// that produced it from its predecessor.
///
/// Boards are never mutated after creation: applying a move yields a new
/// `Board`. The `action` tag is `None` only for user-supplied initial and
/// goal boards; every board produced by [`Board::apply`] carries the move
/// that created it.
///
/// The derived `PartialEq` compares both tiles and action tag. Goal testing
/// should use [`Board::same_tiles`], which ignores the tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    tiles: [[u8; BOARD_SIZE]; BOARD_SIZE],
    action: Option<Move>,
}

impl Board {
    /// Creates a board from a raw grid with no action tag.
    ///
    /// The grid is not validated here; use `utils::board_from_grid` when the
    /// tiles come from an untrusted source.
    pub fn from_grid(tiles: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Board {
            tiles,
            action: None,
        }
    }

    /// Returns the tile at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside `0..BOARD_SIZE`.
    pub fn tile(&self, r: usize, c: usize) -> u8 {
        self.tiles[r][c]
    }

    /// Returns an immutable reference to the underlying grid.
    pub fn grid(&self) -> &[[u8; BOARD_SIZE]; BOARD_SIZE] {
        &self.tiles
    }

    /// Returns the move that produced this board, or `None` for a
    /// user-supplied board.
    pub fn action(&self) -> Option<Move> {
        self.action
    }

    /// Returns the `(row, col)` coordinates of the blank cell.
    pub fn blank_position(&self) -> (usize, usize) {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if self.tiles[r][c] == BLANK {
                    return (r, c);
                }
            }
        }
        unreachable!("board invariant violated: no blank cell present")
    }

    /// Applies `mv` to this board, returning the resulting board.
    ///
    /// The blank is swapped with the adjacent tile in the direction of `mv`,
    /// and the result is tagged with `Some(mv)`. Returns `None` when the
    /// move would take the blank outside the board; this is the normal
    /// "direction unavailable" signal consumed during node expansion, not an
    /// error.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::{Board, Move};
    ///
    /// let board = Board::from_grid([[1, 2, 3], [4, 0, 5], [6, 7, 8]]);
    /// let moved = board.apply(Move::Up).unwrap();
    /// assert_eq!(moved.tile(0, 1), 0);
    /// assert_eq!(moved.tile(1, 1), 2);
    /// assert_eq!(moved.action(), Some(Move::Up));
    ///
    /// let corner = Board::from_grid([[0, 1, 2], [3, 4, 5], [6, 7, 8]]);
    /// assert!(corner.apply(Move::Up).is_none());
    /// ```
    pub fn apply(&self, mv: Move) -> Option<Board> {
        let (row, col) = self.blank_position();
        let (dr, dc) = mv.delta();
        let target_row = row as isize + dr;
        let target_col = col as isize + dc;

        if target_row < 0
            || target_row >= BOARD_SIZE as isize
            || target_col < 0
            || target_col >= BOARD_SIZE as isize
        {
            return None;
        }

        let (tr, tc) = (target_row as usize, target_col as usize);
        let mut tiles = self.tiles;
        tiles[row][col] = tiles[tr][tc];
        tiles[tr][tc] = BLANK;

        Some(Board {
            tiles,
            action: Some(mv),
        })
    }

    /// Tests cell-wise equality with `other`, ignoring the action tag.
    ///
    /// This is the goal test: two boards reached by different moves still
    /// match if their tiles agree.
    pub fn same_tiles(&self, other: &Board) -> bool {
        self.tiles == other.tiles
    }
}

impl fmt::Display for Board {
    /// Renders the board as a bordered grid, one cell per tile.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.tiles {
            writeln!(f, "+---+---+---+")?;
            for &tile in row {
                write!(f, "| {} ", tile)?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "+---+---+---+")
    }
}

/// Sums the Manhattan (L1) grid distance of every symbol between its
/// position in `curr` and its position in `goal`.
///
/// All 9 symbols contribute, the blank included. The result is symmetric in
/// its arguments and zero exactly when the two boards have identical tile
/// contents (action tags are irrelevant).
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::{manhattan_distance, Board, Move};
///
/// let goal = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
/// assert_eq!(manhattan_distance(&goal, &goal), 0);
///
/// // One tile moved one cell, and so did the blank.
/// let shifted = goal.apply(Move::Up).unwrap();
/// assert_eq!(manhattan_distance(&shifted, &goal), 2);
/// ```
pub fn manhattan_distance(curr: &Board, goal: &Board) -> u32 {
    // Index the goal positions once so each symbol lookup is O(1).
    let mut goal_pos = [(0usize, 0usize); BOARD_SIZE * BOARD_SIZE];
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            goal_pos[goal.tiles[r][c] as usize] = (r, c);
        }
    }

    let mut sum = 0u32;
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            let (gr, gc) = goal_pos[curr.tiles[r][c] as usize];
            sum += r.abs_diff(gr) as u32 + c.abs_diff(gc) as u32;
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center_blank() -> Board {
        Board::from_grid([[1, 2, 3], [4, 0, 5], [6, 7, 8]])
    }

    #[test]
    fn test_apply_moves_blank_in_every_direction() {
        let board = center_blank();

        let up = board.apply(Move::Up).unwrap();
        assert_eq!(up.blank_position(), (0, 1));
        assert_eq!(up.tile(1, 1), 2);

        let down = board.apply(Move::Down).unwrap();
        assert_eq!(down.blank_position(), (2, 1));
        assert_eq!(down.tile(1, 1), 7);

        let left = board.apply(Move::Left).unwrap();
        assert_eq!(left.blank_position(), (1, 0));
        assert_eq!(left.tile(1, 1), 4);

        let right = board.apply(Move::Right).unwrap();
        assert_eq!(right.blank_position(), (1, 2));
        assert_eq!(right.tile(1, 1), 5);
    }

    #[test]
    fn test_apply_out_of_bounds_returns_none() {
        let top_left = Board::from_grid([[0, 1, 2], [3, 4, 5], [6, 7, 8]]);
        assert!(top_left.apply(Move::Up).is_none());
        assert!(top_left.apply(Move::Left).is_none());
        assert!(top_left.apply(Move::Down).is_some());
        assert!(top_left.apply(Move::Right).is_some());

        let bottom_right = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
        assert!(bottom_right.apply(Move::Down).is_none());
        assert!(bottom_right.apply(Move::Right).is_none());
    }

    #[test]
    fn test_apply_does_not_mutate_the_source_board() {
        let board = center_blank();
        let snapshot = board.clone();
        let _ = board.apply(Move::Up).unwrap();
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_apply_then_reverse_restores_tile_content() {
        let board = center_blank();
        for mv in Move::ALL {
            let there = board.apply(mv).unwrap();
            let back = there.apply(mv.opposite()).unwrap();
            assert!(back.same_tiles(&board), "round trip failed for {:?}", mv);
            // The action tag records the return move, so full equality fails.
            assert_ne!(back, board);
        }
    }

    #[test]
    fn test_same_tiles_ignores_action_tag() {
        let board = center_blank();
        let round_trip = board
            .apply(Move::Up)
            .unwrap()
            .apply(Move::Down)
            .unwrap();
        assert!(board.same_tiles(&round_trip));
        assert_eq!(round_trip.action(), Some(Move::Down));
    }

    #[test]
    fn test_manhattan_distance_zero_on_identical_content() {
        let board = center_blank();
        assert_eq!(manhattan_distance(&board, &board), 0);

        let relabeled = board.apply(Move::Up).unwrap().apply(Move::Down).unwrap();
        assert_eq!(manhattan_distance(&board, &relabeled), 0);
    }

    #[test]
    fn test_manhattan_distance_is_symmetric() {
        let a = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
        let b = Board::from_grid([[0, 8, 7], [6, 5, 4], [3, 2, 1]]);
        assert_eq!(manhattan_distance(&a, &b), manhattan_distance(&b, &a));
        assert!(manhattan_distance(&a, &b) > 0);
    }

    #[test]
    fn test_manhattan_distance_counts_every_symbol() {
        let goal = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
        // One move away: the slid tile and the blank each moved one cell.
        let one_away = goal.apply(Move::Up).unwrap();
        assert_eq!(manhattan_distance(&one_away, &goal), 2);
    }

    #[test]
    fn test_display_renders_bordered_grid() {
        let text = center_blank().to_string();
        assert!(text.starts_with("+---+---+---+"));
        assert!(text.contains("| 1 | 2 | 3 |"));
        assert!(text.contains("| 4 | 0 | 5 |"));
    }
}
