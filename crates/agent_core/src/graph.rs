//! Explicit state-graph adapter.
//!
//! States are plain `u32` ids and every transition is listed by hand. Used to
//! pin down agent behavior on small hand-built graphs, and handy for any host
//! whose game tree is small enough to enumerate.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::adapter::GameAdapter;
use crate::error::OracleError;

/// State id inside a [`GraphGame`].
pub type NodeId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Edge {
    To(NodeId),
    Sentinel,
    Fault,
}

/// A hand-built game graph with ordered moves per state.
#[derive(Debug, Clone)]
pub struct GraphGame<M> {
    edges: BTreeMap<NodeId, Vec<(M, Edge)>>,
    wins: BTreeSet<NodeId>,
    loses: BTreeSet<NodeId>,
}

impl<M> Default for GraphGame<M> {
    fn default() -> Self {
        Self {
            edges: BTreeMap::new(),
            wins: BTreeSet::new(),
            loses: BTreeSet::new(),
        }
    }
}

impl<M> GraphGame<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `from --mv--> to`. Moves are enumerated in insertion order.
    pub fn edge(mut self, from: NodeId, mv: M, to: NodeId) -> Self {
        self.edges.entry(from).or_default().push((mv, Edge::To(to)));
        self
    }

    /// Adds a move whose successor is the "no further successor" sentinel.
    pub fn sentinel(mut self, from: NodeId, mv: M) -> Self {
        self.edges.entry(from).or_default().push((mv, Edge::Sentinel));
        self
    }

    /// Adds a move whose successor generation fails with an [`OracleError`].
    pub fn fault(mut self, from: NodeId, mv: M) -> Self {
        self.edges.entry(from).or_default().push((mv, Edge::Fault));
        self
    }

    pub fn win(mut self, node: NodeId) -> Self {
        self.wins.insert(node);
        self
    }

    pub fn lose(mut self, node: NodeId) -> Self {
        self.loses.insert(node);
        self
    }
}

impl<M> GameAdapter for GraphGame<M>
where
    M: Clone + PartialEq + fmt::Debug,
{
    type State = NodeId;
    type Move = M;

    fn legal_moves(&self, state: &NodeId) -> Vec<M> {
        self.edges
            .get(state)
            .map(|edges| edges.iter().map(|(mv, _)| mv.clone()).collect())
            .unwrap_or_default()
    }

    fn successor(&self, state: &NodeId, mv: &M) -> Result<Option<NodeId>, OracleError> {
        let edge = self
            .edges
            .get(state)
            .and_then(|edges| edges.iter().find(|(m, _)| m == mv))
            .map(|(_, edge)| edge);
        match edge {
            Some(Edge::To(to)) => Ok(Some(*to)),
            Some(Edge::Sentinel) => Ok(None),
            Some(Edge::Fault) => Err(OracleError::new(format!("successor of {state} via {mv:?} failed"))),
            None => Err(OracleError::new(format!("{mv:?} is not legal in state {state}"))),
        }
    }

    fn is_win(&self, state: &NodeId) -> bool {
        self.wins.contains(state)
    }

    fn is_lose(&self, state: &NodeId) -> bool {
        self.loses.contains(state)
    }
}

/// Direction-like move token for hand-built graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    Up,
    Down,
    Left,
    Right,
    Stop,
}
