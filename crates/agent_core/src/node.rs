//! Search nodes and the expansion helpers shared by every frontier search.

use std::cmp::Ordering;

use tracing::trace;

use crate::adapter::{GameAdapter, Heuristic};
use crate::error::{AgentError, OracleError};

/// An immutable frontier or explored entry.
///
/// `root_action` is the depth-1 move this path started with. It is copied
/// unchanged into every descendant and is the only thing an agent returns.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchNode<S, M> {
    pub state: S,
    /// Distance from the root state (root children = 1).
    pub depth: u32,
    /// `depth + heuristic(state)`.
    pub total_cost: f64,
    pub root_action: M,
}

impl<S, M: Clone> SearchNode<S, M> {
    /// A depth-1 node reached by playing `root_action` from the root state.
    pub fn root_child<H>(state: S, root_action: M, heuristic: &H) -> Result<Self, OracleError>
    where
        H: Heuristic<S> + ?Sized,
    {
        let total_cost = heuristic.estimate(&state)? + 1.0;
        Ok(Self {
            state,
            depth: 1,
            total_cost,
            root_action,
        })
    }

    /// A child one level deeper, inheriting this node's root action.
    pub fn child<H>(&self, state: S, heuristic: &H) -> Result<Self, OracleError>
    where
        H: Heuristic<S> + ?Sized,
    {
        let depth = self.depth + 1;
        let total_cost = f64::from(depth) + heuristic.estimate(&state)?;
        Ok(Self {
            state,
            depth,
            total_cost,
            root_action: self.root_action.clone(),
        })
    }
}

/// Total order on costs; NaN sorts after every real number.
pub fn cost_order(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// The cheapest node, taking the earliest one on ties.
pub fn cheapest<'a, S, M, I>(nodes: I) -> Option<&'a SearchNode<S, M>>
where
    I: IntoIterator<Item = &'a SearchNode<S, M>>,
    S: 'a,
    M: 'a,
{
    nodes
        .into_iter()
        .min_by(|a, b| cost_order(a.total_cost, b.total_cost))
}

/// Outcome of expanding the root state.
#[derive(Debug)]
pub enum Seeded<S, M> {
    /// One depth-1 node per legal root move, in enumeration order.
    Frontier(Vec<SearchNode<S, M>>),
    /// Successor generation ran dry while seeding; this is the decision.
    Decided(M),
}

/// Expands the root state into depth-1 nodes.
///
/// Losing successors are kept at this level. If the adapter answers the
/// sentinel for some root move, seeding stops and the cheapest node built
/// so far wins, or that root move itself when nothing was built yet.
pub fn seed<G, H>(game: &G, heuristic: &H, root: &G::State) -> Result<Seeded<G::State, G::Move>, AgentError>
where
    G: GameAdapter + ?Sized,
    H: Heuristic<G::State> + ?Sized,
{
    let moves = game.legal_moves(root);
    if moves.is_empty() {
        return Err(AgentError::NoLegalMoves);
    }

    let mut frontier = Vec::with_capacity(moves.len());
    for mv in moves {
        match game.successor(root, &mv)? {
            Some(state) => frontier.push(SearchNode::root_child(state, mv, heuristic)?),
            None => {
                trace!(root_move = ?mv, seeded = frontier.len(), "sentinel while seeding");
                let action = cheapest(&frontier).map_or(mv, |node| node.root_action.clone());
                return Ok(Seeded::Decided(action));
            }
        }
    }
    Ok(Seeded::Frontier(frontier))
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod node_tests;
