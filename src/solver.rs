//! The search engine: breadth-first and A* driving loops.
//!
//! Both strategies share one loop: pop a node, goal-test it, expand it, and
//! insert the children back into the frontier. They differ only in the
//! frontier discipline used for the children, and therefore in which node is
//! popped next (shallowest-first for BFS, lowest-total-cost-first for A*).

use std::mem;
use std::time::{Duration, Instant};

use crate::engine::{Board, Move};
use crate::frontier::Frontier;
use crate::tree::{SearchNode, SearchTree};

/// The frontier discipline to search with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Uninformed breadth-first search: level-order FIFO frontier.
    BreadthFirst,
    /// Informed best-first search ordered by depth plus Manhattan distance.
    AStar,
}

/// Counters accumulated during a single search run.
///
/// These are informational for reporting; they are not part of the search's
/// correctness contract. Each call to [`solve`] returns a fresh set.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchStats {
    /// Number of expansion calls (once per expanded node, not per child).
    pub nodes_expanded: u32,
    /// Number of nodes created, the root included.
    pub nodes_generated: u32,
    /// Moves in the solution; 0 when no solution was found or none needed.
    pub solution_length: u32,
    /// Wall-clock time spent inside the search loop.
    pub runtime: Duration,
}

impl SearchStats {
    /// Estimated memory consumed by the generated tree, in bytes.
    ///
    /// Only node records are counted, matching what the arena holds.
    pub fn memory_estimate(&self) -> usize {
        self.nodes_generated as usize * mem::size_of::<SearchNode>()
    }
}

/// A solution found by a search run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Moves from the initial board to the goal, in forward order. Empty
    /// means the initial board already matched the goal.
    pub moves: Vec<Move>,
}

/// The result of one search run: the solution, if any, plus run statistics.
///
/// Statistics are populated whether or not a solution was found.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    pub solution: Option<Solution>,
    pub stats: SearchStats,
}

/// Searches from `initial` to `goal` with the given strategy.
///
/// The search runs to completion: either the goal is found or the frontier
/// is exhausted. Note that an unsolvable pairing makes the unbounded search
/// run until memory is exhausted, since solvability is not pre-checked; use
/// [`solve_with_limit`] or `utils::is_solvable` to guard against that.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::{Board, Move};
/// use eight_puzzle_solver::solver::{solve, Strategy};
///
/// let initial = Board::from_grid([[1, 2, 3], [4, 5, 6], [0, 7, 8]]);
/// let goal = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
///
/// let outcome = solve(&initial, &goal, Strategy::AStar);
/// assert_eq!(outcome.solution.unwrap().moves, vec![Move::Right]);
/// ```
pub fn solve(initial: &Board, goal: &Board, strategy: Strategy) -> SearchOutcome {
    solve_with_limit(initial, goal, strategy, None)
}

/// Searches from `initial` to `goal`, optionally refusing to expand nodes
/// at `max_depth` or deeper.
///
/// With a depth limit the frontier can drain without reaching the goal even
/// on solvable boards; the outcome then carries `solution: None` and the
/// statistics of the bounded run. The entire generated tree is released in
/// one teardown when the run returns, whatever the outcome.
pub fn solve_with_limit(
    initial: &Board,
    goal: &Board,
    strategy: Strategy,
    max_depth: Option<u32>,
) -> SearchOutcome {
    let start = Instant::now();

    let mut tree = SearchTree::new();
    let root = tree.seed_root(initial.clone(), goal);

    let mut frontier = Frontier::new();
    frontier.push_back_batch(&[root]);

    let mut stats = SearchStats::default();
    let mut goal_node = None;

    while let Some(id) = frontier.pop() {
        if tree.get(id).state.same_tiles(goal) {
            goal_node = Some(id);
            break;
        }

        if max_depth.map_or(false, |limit| tree.get(id).depth >= limit) {
            continue;
        }

        let children = tree.expand(id, goal);
        stats.nodes_expanded += 1;

        match strategy {
            Strategy::BreadthFirst => frontier.push_back_batch(&children),
            Strategy::AStar => frontier.push_sorted(&children, &tree),
        }
    }

    stats.runtime = start.elapsed();
    stats.nodes_generated = tree.len() as u32;

    let solution = goal_node.map(|id| {
        let moves = tree.solution_path(id);
        stats.solution_length = moves.len() as u32;
        Solution { moves }
    });

    // `tree` drops here, releasing every generated node at once.
    SearchOutcome { solution, stats }
}
