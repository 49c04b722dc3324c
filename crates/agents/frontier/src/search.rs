//! Frontier search shared by the breadth-first and depth-first agents.
//!
//! The two agents differ only in where new children go: BFS appends them
//! to the back of the frontier, DFS pushes each one onto the front. Nodes
//! are always taken from the front, and the frontier is never reordered by
//! cost. Costs matter only when the search ends: the decision is the root
//! action of the cheapest explored node.

use std::collections::VecDeque;

use agent_core::{
    cheapest, seed, AgentError, Decision, GameAdapter, Heuristic, SearchLimits, SearchNode, Seeded,
};
use tracing::trace;

/// Where freshly generated children enter the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    /// Append at the back: first in, first out.
    Queue,
    /// Push onto the front, one child at a time: last in, first out.
    Stack,
}

impl Discipline {
    fn insert<T>(self, frontier: &mut VecDeque<T>, item: T) {
        match self {
            Discipline::Queue => frontier.push_back(item),
            Discipline::Stack => frontier.push_front(item),
        }
    }
}

/// Runs one frontier search from `root` and returns the chosen move.
///
/// The search ends when:
/// - a successor comes back as the "no further successor" sentinel, or
/// - `limits` cut it short before the next expansion;
///
/// in both cases the cheapest explored node decides (the cheapest frontier
/// node if nothing was explored yet). Losing successors are dropped. If the
/// frontier empties first, the search failed to reach a decision.
pub fn frontier_search<G, H>(
    game: &G,
    heuristic: &H,
    root: &G::State,
    limits: &SearchLimits,
    discipline: Discipline,
) -> Result<Decision<G::Move>, AgentError>
where
    G: GameAdapter + ?Sized,
    H: Heuristic<G::State> + ?Sized,
{
    limits.start();

    let mut frontier: VecDeque<SearchNode<G::State, G::Move>> = match seed(game, heuristic, root)? {
        Seeded::Frontier(nodes) => nodes.into(),
        Seeded::Decided(action) => return Ok(Decision::immediate(action)),
    };
    let mut explored: Vec<SearchNode<G::State, G::Move>> = Vec::new();
    let mut expanded: u64 = 0;
    let mut max_depth: u32 = 1;

    loop {
        if limits.should_stop(expanded) {
            trace!(expanded, explored = explored.len(), "search cut off by limits");
            return finish(&explored, &frontier, expanded, max_depth, true);
        }
        let Some(node) = frontier.pop_front() else {
            break;
        };
        expanded += 1;

        let mut children = Vec::new();
        let mut hit_sentinel = false;
        for mv in game.legal_moves(&node.state) {
            match game.successor(&node.state, &mv)? {
                None => {
                    hit_sentinel = true;
                    break;
                }
                Some(next) if game.is_lose(&next) => {}
                Some(next) => children.push(node.child(next, heuristic)?),
            }
        }
        explored.push(node);

        if hit_sentinel {
            trace!(expanded, explored = explored.len(), "no further successor");
            return finish(&explored, &frontier, expanded, max_depth, false);
        }
        for child in children {
            max_depth = max_depth.max(child.depth);
            discipline.insert(&mut frontier, child);
        }
    }

    Err(AgentError::SearchExhausted { expanded })
}

fn finish<S, M: Clone>(
    explored: &[SearchNode<S, M>],
    frontier: &VecDeque<SearchNode<S, M>>,
    expanded: u64,
    max_depth: u32,
    stopped: bool,
) -> Result<Decision<M>, AgentError> {
    let best = cheapest(explored)
        .or_else(|| cheapest(frontier))
        .ok_or(AgentError::SearchExhausted { expanded })?;
    Ok(Decision {
        action: best.root_action.clone(),
        expanded,
        max_depth,
        stopped,
    })
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
