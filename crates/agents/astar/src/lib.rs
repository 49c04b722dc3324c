//! A*-style best-first maze agent.
//!
//! The game has no goal state known in advance, so the goal test is
//! "a successor of the node being expanded is a win, or the adapter has no
//! further successor to give". Either way the agent plays the root action
//! of the node being expanded.

mod frontier;

use agent_core::{
    seed, Agent, AgentError, Decision, GameAdapter, Heuristic, SearchLimits, Seeded,
};
use tracing::{debug, trace};

pub use frontier::CostFrontier;

/// Best-first search agent ordered by `depth + heuristic`.
#[derive(Debug, Clone)]
pub struct AStarAgent<H> {
    heuristic: H,
}

impl<H> AStarAgent<H> {
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }
}

impl<G, H> Agent<G> for AStarAgent<H>
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
        let decision = astar_search(game, &self.heuristic, state, limits)?;
        debug!(
            agent = "astar",
            action = ?decision.action,
            expanded = decision.expanded,
            max_depth = decision.max_depth,
            stopped = decision.stopped,
            "decided"
        );
        Ok(decision)
    }

    fn name(&self) -> &str {
        "A*"
    }
}

/// Runs one best-first search from `root`.
///
/// Repeatedly expands the cheapest frontier node (earliest generated on
/// ties). Losing successors are dropped. When `limits` cut the search short,
/// the cheapest frontier node decides.
pub fn astar_search<G, H>(
    game: &G,
    heuristic: &H,
    root: &G::State,
    limits: &SearchLimits,
) -> Result<Decision<G::Move>, AgentError>
where
    G: GameAdapter + ?Sized,
    H: Heuristic<G::State> + ?Sized,
{
    limits.start();

    let mut frontier = CostFrontier::new();
    match seed(game, heuristic, root)? {
        Seeded::Frontier(nodes) => frontier.extend(nodes),
        Seeded::Decided(action) => return Ok(Decision::immediate(action)),
    }
    let mut expanded: u64 = 0;
    let mut max_depth: u32 = 1;

    loop {
        if limits.should_stop(expanded) {
            trace!(expanded, frontier = frontier.len(), "search cut off by limits");
            let best = frontier
                .peek()
                .ok_or(AgentError::SearchExhausted { expanded })?;
            return Ok(Decision {
                action: best.root_action.clone(),
                expanded,
                max_depth,
                stopped: true,
            });
        }
        let Some(current) = frontier.pop() else {
            break;
        };
        expanded += 1;

        for mv in game.legal_moves(&current.state) {
            let next = match game.successor(&current.state, &mv)? {
                Some(next) if !game.is_win(&next) => next,
                outcome => {
                    trace!(expanded, depth = current.depth, win = outcome.is_some(), "goal test passed");
                    return Ok(Decision {
                        action: current.root_action,
                        expanded,
                        max_depth,
                        stopped: false,
                    });
                }
            };
            if game.is_lose(&next) {
                continue;
            }
            let child = current.child(next, heuristic)?;
            max_depth = max_depth.max(child.depth);
            frontier.push(child);
        }
    }

    Err(AgentError::SearchExhausted { expanded })
}
