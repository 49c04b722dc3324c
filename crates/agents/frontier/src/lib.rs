//! Breadth-first and depth-first maze agents.
//!
//! Both run the same cost-aware frontier search (see [`frontier_search`])
//! and differ only in frontier discipline:
//! - [`BfsAgent`] expands in first-in-first-out order
//! - [`DfsAgent`] expands the most recently generated child first

mod search;

use agent_core::{Agent, AgentError, Decision, GameAdapter, Heuristic, SearchLimits};
use tracing::debug;

pub use search::{frontier_search, Discipline};

/// Breadth-first search agent.
#[derive(Debug, Clone)]
pub struct BfsAgent<H> {
    heuristic: H,
}

impl<H> BfsAgent<H> {
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }
}

impl<G, H> Agent<G> for BfsAgent<H>
where
    G: GameAdapter,
    H: Heuristic<G::State> + Send,
{
    fn decide(
        &mut self,
        game: &G,
        state: &G::State,
        limits: &SearchLimits,
    ) -> Result<Decision<G::Move>, AgentError> {
        let decision = frontier_search(game, &self.heuristic, state, limits, Discipline::Queue)?;
        debug!(
            agent = "bfs",
            action = ?decision.action,
            expanded = decision.expanded,
            max_depth = decision.max_depth,
            stopped = decision.stopped,
            "decided"
        );
        Ok(decision)
    }

    fn name(&self) -> &str {
        "BFS"
    }
}

/// Depth-first search agent.
#[derive(Debug, Clone)]
pub struct DfsAgent<H> {
    heuristic: H,
}

impl<H> DfsAgent<H> {
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }
}

impl<G, H> Agent<G> for DfsAgent<H>
where
    G: GameAdapter,
    H: Heuristic<G::State> + Send,
{
    fn decide(
        &mut self,
        game: &G,
        state: &G::State,
        limits: &SearchLimits,
    ) -> Result<Decision<G::Move>, AgentError> {
        let decision = frontier_search(game, &self.heuristic, state, limits, Discipline::Stack)?;
        debug!(
            agent = "dfs",
            action = ?decision.action,
            expanded = decision.expanded,
            max_depth = decision.max_depth,
            stopped = decision.stopped,
            "decided"
        );
        Ok(decision)
    }

    fn name(&self) -> &str {
        "DFS"
    }
}
