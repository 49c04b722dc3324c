//! Builds agents from their configured kind.

use agent_core::{Agent, AgentKind, GameAdapter, Heuristic};
use astar_agent::AStarAgent;
use frontier_agent::{BfsAgent, DfsAgent};
use lookahead_agent::OneStepLookAheadAgent;
use random_agent::RandomAgent;

/// Create a boxed agent of `kind`.
///
/// Agents that draw random numbers use `seed` when given and OS entropy
/// otherwise; the search agents are deterministic and ignore it.
pub fn build_agent<G, H>(kind: AgentKind, heuristic: H, seed: Option<u64>) -> Box<dyn Agent<G>>
where
    G: GameAdapter + 'static,
    H: Heuristic<G::State> + Send + 'static,
{
    match kind {
        AgentKind::Random => match seed {
            Some(seed) => Box::new(RandomAgent::with_seed(seed)),
            None => Box::new(RandomAgent::new()),
        },
        AgentKind::Greedy => match seed {
            Some(seed) => Box::new(OneStepLookAheadAgent::with_seed(heuristic, seed)),
            None => Box::new(OneStepLookAheadAgent::new(heuristic)),
        },
        AgentKind::Bfs => Box::new(BfsAgent::new(heuristic)),
        AgentKind::Dfs => Box::new(DfsAgent::new(heuristic)),
        AgentKind::Astar => Box::new(AStarAgent::new(heuristic)),
    }
}
