//! Random Move Agent
//!
//! Picks uniformly at random among the legal moves. Useful for:
//! - Testing the host turn loop before any search is wired in
//! - Baseline comparisons (any search agent should easily beat this)

use agent_core::{Agent, AgentError, Decision, GameAdapter, SearchLimits};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;


/// An agent that plays random legal moves.
///
/// No evaluation and no search; limits are ignored.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: StdRng,
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomAgent {
    /// Entropy-seeded agent.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible agent: the same seed replays the same choices.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<G: GameAdapter> Agent<G> for RandomAgent {
    fn decide(
        &mut self,
        game: &G,
        state: &G::State,
        _limits: &SearchLimits,
    ) -> Result<Decision<G::Move>, AgentError> {
        let moves = game.legal_moves(state);
        let action = moves
            .choose(&mut self.rng)
            .cloned()
            .ok_or(AgentError::NoLegalMoves)?;

        debug!(agent = "random", choices = moves.len(), ?action, "decided");
        Ok(Decision::immediate(action))
    }

    fn name(&self) -> &str {
        "Random"
    }
}
