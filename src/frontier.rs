//! The open list of generated-but-not-yet-expanded nodes.
//!
//! The frontier holds [`NodeId`]s only; the nodes themselves stay owned by
//! the [`SearchTree`]. Two insertion disciplines share one structure: FIFO
//! batch append for breadth-first search, and cost-ordered insertion for A*.
//! Removal always happens at the front, and an id is never reinserted once
//! popped.

use std::collections::VecDeque;

use crate::tree::{NodeId, SearchTree};

/// Ordered sequence of node ids awaiting expansion.
#[derive(Debug, Default)]
pub struct Frontier {
    entries: VecDeque<NodeId>,
}

impl Frontier {
    /// Creates an empty frontier.
    pub fn new() -> Self {
        Frontier {
            entries: VecDeque::new(),
        }
    }

    /// Whether no ids are queued.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of queued ids.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Removes and returns the id at the removal end.
    ///
    /// An empty frontier yields `None`; this is the normal "search space
    /// exhausted" signal, not an error.
    pub fn pop(&mut self) -> Option<NodeId> {
        self.entries.pop_front()
    }

    /// Appends a freshly expanded batch at the generated end.
    ///
    /// With removal at the front this gives level-order FIFO semantics: the
    /// batch is popped in its own generation order, after every previously
    /// queued id.
    pub fn push_back_batch(&mut self, batch: &[NodeId]) {
        self.entries.extend(batch.iter().copied());
    }

    /// Inserts each id of `batch` at the position keeping the frontier
    /// ascending by total cost, so popping always yields a minimum-cost id.
    ///
    /// Insertion is stable: a new id lands after every queued entry of equal
    /// cost, and the batch is processed in generation order. Among equal
    /// costs, ids queued earlier are therefore popped first.
    pub fn push_sorted(&mut self, batch: &[NodeId], tree: &SearchTree) {
        for &id in batch {
            let cost = tree.total_cost(id);
            let at = self
                .entries
                .partition_point(|&queued| tree.total_cost(queued) <= cost);
            self.entries.insert(at, id);
        }
    }
}
