//! The explicit search tree built during a run.
//!
//! Nodes live in an arena owned by [`SearchTree`]; everything else holds
//! plain [`NodeId`] indices into it. The whole tree is the unit of
//! deallocation: dropping the `SearchTree` releases every node and its board
//! at once, and no node is ever freed individually.

use crate::engine::{manhattan_distance, Board, Move};

/// Index of a node inside a [`SearchTree`].
///
/// Ids are only meaningful for the tree that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId(usize);

/// A single node of the search tree.
///
/// `depth` doubles as the path cost from the root, since every move costs 1.
/// `h_cost` is the Manhattan distance to the goal, computed once at creation
/// and never recomputed.
#[derive(Clone, Debug)]
pub struct SearchNode {
    /// Number of moves from the root; also the node's path cost.
    pub depth: u32,
    /// Manhattan distance from this node's state to the goal.
    pub h_cost: u32,
    /// The board reached at this node.
    pub state: Board,
    /// Parent node, `None` for the root.
    pub parent: Option<NodeId>,
    /// Children registered by expansion, in generation order.
    pub children: Vec<NodeId>,
}

/// Arena-backed search tree.
///
/// The arena length is also the "nodes generated" statistic: every created
/// node stays in the arena until the whole tree is dropped.
#[derive(Debug, Default)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        SearchTree { nodes: Vec::new() }
    }

    /// Allocates a node with no children and returns its id.
    pub fn create_node(
        &mut self,
        depth: u32,
        h_cost: u32,
        state: Board,
        parent: Option<NodeId>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            depth,
            h_cost,
            state,
            parent,
            children: Vec::new(),
        });
        id
    }

    /// Seeds the tree with a root node at depth 0, its heuristic computed
    /// against `goal`.
    pub fn seed_root(&mut self, state: Board, goal: &Board) -> NodeId {
        let h = manhattan_distance(&state, goal);
        self.create_node(0, h, state, None)
    }

    /// Returns the node with the given id.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this tree.
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    /// The node's evaluation cost for A*: path cost plus heuristic.
    pub fn total_cost(&self, id: NodeId) -> u32 {
        let node = &self.nodes[id.0];
        node.depth + node.h_cost
    }

    /// Number of nodes generated so far, the root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no nodes yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Expands `id`, generating one child per legal move and returning the
    /// children in generation order.
    ///
    /// Moves are tried in the fixed order up, down, left, right, skipping
    /// the exact reverse of the move that produced this node (no immediate
    /// backtracking) and any move that would leave the board. Each child is
    /// registered both in the parent's child list (tree ownership) and in
    /// the returned batch (frontier insertion).
    pub fn expand(&mut self, id: NodeId, goal: &Board) -> Vec<NodeId> {
        let parent_depth = self.nodes[id.0].depth;
        let forbidden = self.nodes[id.0].state.action().map(Move::opposite);

        // At most 3 children survive the reverse-move pruning.
        let mut batch = Vec::with_capacity(3);
        for mv in Move::ALL {
            if forbidden == Some(mv) {
                continue;
            }
            let child_state = match self.nodes[id.0].state.apply(mv) {
                Some(state) => state,
                None => continue,
            };
            let h = manhattan_distance(&child_state, goal);
            let child = self.create_node(parent_depth + 1, h, child_state, Some(id));
            self.nodes[id.0].children.push(child);
            batch.push(child);
        }
        batch
    }

    /// Reconstructs the forward move sequence from the root to `id`.
    ///
    /// Walks parent links collecting each node's action in reverse, then
    /// reverses the result. The root carries no action and contributes
    /// nothing, so the path length equals the number of moves.
    pub fn solution_path(&self, id: NodeId) -> Vec<Move> {
        let mut moves = Vec::new();
        let mut cursor = Some(id);
        while let Some(curr) = cursor {
            let node = &self.nodes[curr.0];
            if let Some(mv) = node.state.action() {
                moves.push(mv);
            }
            cursor = node.parent;
        }
        moves.reverse();
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Board;

    fn goal() -> Board {
        Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]])
    }

    #[test]
    fn test_seed_root_has_depth_zero_and_no_parent() {
        let mut tree = SearchTree::new();
        let start = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
        let root = tree.seed_root(start, &goal());

        let node = tree.get(root);
        assert_eq!(node.depth, 0);
        assert!(node.parent.is_none());
        assert!(node.children.is_empty());
        // Tile 8 and the blank are each one cell from home.
        assert_eq!(node.h_cost, 2);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_expand_generates_all_legal_moves_from_center() {
        let mut tree = SearchTree::new();
        let start = Board::from_grid([[1, 2, 3], [4, 0, 5], [6, 7, 8]]);
        let root = tree.seed_root(start, &goal());

        let batch = tree.expand(root, &goal());
        // Center blank on a root node: all four directions are legal.
        assert_eq!(batch.len(), 4);
        assert_eq!(tree.get(root).children, batch);
        assert_eq!(tree.len(), 5);

        let actions: Vec<Move> = batch
            .iter()
            .map(|&id| tree.get(id).state.action().unwrap())
            .collect();
        assert_eq!(actions, [Move::Up, Move::Down, Move::Left, Move::Right]);
    }

    #[test]
    fn test_expand_skips_the_reverse_move() {
        let mut tree = SearchTree::new();
        let start = Board::from_grid([[1, 2, 3], [4, 0, 5], [6, 7, 8]]);
        let moved = start.apply(Move::Up).unwrap();
        let root = tree.seed_root(moved, &goal());

        let batch = tree.expand(root, &goal());
        for &id in &batch {
            assert_ne!(
                tree.get(id).state.action(),
                Some(Move::Down),
                "expansion produced the immediate reverse of the last move"
            );
        }
        // Blank at (0, 1): up is out of bounds, down is the reverse.
        assert_eq!(batch.len(), 2);
    }

    #[test]
    fn test_expand_sets_child_depth_and_parent() {
        let mut tree = SearchTree::new();
        let start = Board::from_grid([[1, 2, 3], [4, 0, 5], [6, 7, 8]]);
        let root = tree.seed_root(start, &goal());
        let batch = tree.expand(root, &goal());

        for &child in &batch {
            let node = tree.get(child);
            assert_eq!(node.depth, 1);
            assert_eq!(node.parent, Some(root));
        }

        let grandchildren = tree.expand(batch[0], &goal());
        for &child in &grandchildren {
            assert_eq!(tree.get(child).depth, 2);
        }
    }

    #[test]
    fn test_corner_blank_yields_two_children() {
        let mut tree = SearchTree::new();
        let start = Board::from_grid([[0, 1, 2], [3, 4, 5], [6, 7, 8]]);
        let root = tree.seed_root(start, &goal());
        let batch = tree.expand(root, &goal());
        assert_eq!(batch.len(), 2);
    }

    #[test]
    fn test_total_cost_is_depth_plus_heuristic() {
        let mut tree = SearchTree::new();
        let start = Board::from_grid([[1, 2, 3], [4, 0, 5], [6, 7, 8]]);
        let root = tree.seed_root(start, &goal());
        let batch = tree.expand(root, &goal());

        for &id in &batch {
            let node = tree.get(id);
            assert_eq!(tree.total_cost(id), node.depth + node.h_cost);
        }
    }

    #[test]
    fn test_solution_path_excludes_the_root_action() {
        let mut tree = SearchTree::new();
        let start = Board::from_grid([[1, 2, 3], [4, 0, 5], [6, 7, 8]]);
        let root = tree.seed_root(start, &goal());
        assert!(tree.solution_path(root).is_empty());

        let first = tree.expand(root, &goal());
        let down = first
            .iter()
            .copied()
            .find(|&id| tree.get(id).state.action() == Some(Move::Down))
            .unwrap();
        let second = tree.expand(down, &goal());
        let right = second
            .iter()
            .copied()
            .find(|&id| tree.get(id).state.action() == Some(Move::Right))
            .unwrap();

        assert_eq!(tree.solution_path(right), vec![Move::Down, Move::Right]);
    }
}
