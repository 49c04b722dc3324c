//! Cost-ordered frontier with stable ties.
//!
//! Pops the node with the lowest `total_cost`; among equal costs, the one
//! inserted first. That is exactly the order a stable sort of the whole
//! frontier followed by taking the head would produce, without re-sorting
//! on every pop.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use agent_core::{cost_order, SearchNode};

/// The frontier ordering key: `(total_cost, insertion sequence)`.
#[derive(Debug, Clone, Copy)]
struct FrontierKey {
    cost: f64,
    seq: u64,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        cost_order(self.cost, other.cost).then(self.seq.cmp(&other.seq))
    }
}

/// `BinaryHeap` is a max-heap, so entries hold `Reverse<FrontierKey>` to pop
/// the lowest key first.
#[derive(Debug)]
struct FrontierEntry<S, M> {
    key: Reverse<FrontierKey>,
    node: SearchNode<S, M>,
}

impl<S, M> PartialEq for FrontierEntry<S, M> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S, M> Eq for FrontierEntry<S, M> {}

impl<S, M> PartialOrd for FrontierEntry<S, M> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, M> Ord for FrontierEntry<S, M> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Best-first frontier.
#[derive(Debug)]
pub struct CostFrontier<S, M> {
    heap: BinaryHeap<FrontierEntry<S, M>>,
    next_seq: u64,
    high_water: usize,
}

impl<S, M> CostFrontier<S, M> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
            high_water: 0,
        }
    }

    pub fn push(&mut self, node: SearchNode<S, M>) {
        let key = FrontierKey {
            cost: node.total_cost,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node,
        });
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Remove the cheapest node (earliest inserted on ties).
    pub fn pop(&mut self) -> Option<SearchNode<S, M>> {
        self.heap.pop().map(|e| e.node)
    }

    /// The node [`CostFrontier::pop`] would return next.
    pub fn peek(&self) -> Option<&SearchNode<S, M>> {
        self.heap.peek().map(|e| &e.node)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier reached.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

impl<S, M> Default for CostFrontier<S, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, M> Extend<SearchNode<S, M>> for CostFrontier<S, M> {
    fn extend<I: IntoIterator<Item = SearchNode<S, M>>>(&mut self, iter: I) {
        for node in iter {
            self.push(node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_node(cost: f64, tag: u32) -> SearchNode<u32, u32> {
        SearchNode {
            state: tag,
            depth: 1,
            total_cost: cost,
            root_action: tag,
        }
    }

    #[test]
    fn pop_returns_lowest_cost_first() {
        let mut frontier = CostFrontier::new();
        frontier.push(make_node(10.0, 0));
        frontier.push(make_node(5.0, 1));
        frontier.push(make_node(15.0, 2));

        assert_eq!(frontier.peek().map(|n| n.state), Some(1));
        assert_eq!(frontier.pop().unwrap().state, 1);
        assert_eq!(frontier.pop().unwrap().state, 0);
        assert_eq!(frontier.pop().unwrap().state, 2);
        assert!(frontier.pop().is_none());
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut frontier = CostFrontier::new();
        frontier.extend([make_node(2.0, 0), make_node(1.0, 1), make_node(2.0, 2)]);
        frontier.push(make_node(1.0, 3));
        frontier.push(make_node(2.0, 4));

        let order: Vec<u32> = std::iter::from_fn(|| frontier.pop()).map(|n| n.state).collect();
        assert_eq!(order, vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn matches_stable_resort_order() {
        // Reference: stable sort of the whole list before each pop, then append children.
        let costs = [3.0, 1.0, 1.0, -2.0, 3.0, 0.5];
        let mut reference: Vec<(f64, u32)> = Vec::new();
        let mut frontier = CostFrontier::new();
        let mut popped_ref = Vec::new();
        let mut popped = Vec::new();

        for (i, cost) in costs.iter().enumerate() {
            reference.push((*cost, i as u32));
            frontier.push(make_node(*cost, i as u32));
            if i % 2 == 1 {
                reference.sort_by(|a, b| a.0.total_cmp(&b.0));
                popped_ref.push(reference.remove(0).1);
                popped.push(frontier.pop().unwrap().state);
            }
        }
        assert_eq!(popped, popped_ref);
    }

    #[test]
    fn high_water_tracks_max_size() {
        let mut frontier = CostFrontier::new();
        frontier.push(make_node(1.0, 0));
        frontier.push(make_node(2.0, 1));
        frontier.push(make_node(3.0, 2));
        let _ = frontier.pop();
        assert_eq!(frontier.high_water(), 3);
        assert_eq!(frontier.len(), 2);
    }
}
