//! One-Step Lookahead Agent
//!
//! Generates the successor of every legal move, scores each candidate and
//! plays one of the best-scoring moves, breaking ties uniformly at random.
//!
//! By default every candidate is scored with the heuristic of the state
//! *before* the move, so all candidates tie and the choice is effectively
//! random among legal moves. That behavior is kept on purpose; scoring the
//! successors instead is available as an explicit opt-in through
//! [`LookaheadScoring::Successor`].

use agent_core::{Agent, AgentError, Decision, GameAdapter, Heuristic, SearchLimits};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;


/// Which state a candidate move is scored by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookaheadScoring {
    /// `heuristic(state)` for every candidate.
    #[default]
    PreMove,
    /// `heuristic(successor)`; a sentinel successor falls back to the
    /// pre-move score.
    Successor,
}

/// Greedy agent that looks exactly one move ahead.
#[derive(Debug, Clone)]
pub struct OneStepLookAheadAgent<H> {
    heuristic: H,
    scoring: LookaheadScoring,
    rng: StdRng,
}

impl<H> OneStepLookAheadAgent<H> {
    pub fn new(heuristic: H) -> Self {
        Self {
            heuristic,
            scoring: LookaheadScoring::default(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible tie-breaking.
    pub fn with_seed(heuristic: H, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ..Self::new(heuristic)
        }
    }

    pub fn scoring(mut self, scoring: LookaheadScoring) -> Self {
        self.scoring = scoring;
        self
    }
}

impl<G, H> Agent<G> for OneStepLookAheadAgent<H>
where
    G: GameAdapter,
    H: Heuristic<G::State> + Send,
{
    fn decide(
        &mut self,
        game: &G,
        state: &G::State,
        _limits: &SearchLimits,
    ) -> Result<Decision<G::Move>, AgentError> {
        let legal = game.legal_moves(state);
        if legal.is_empty() {
            return Err(AgentError::NoLegalMoves);
        }

        let pre_move = self.heuristic.estimate(state)?;
        let mut scored = Vec::with_capacity(legal.len());
        for mv in legal {
            let successor = game.successor(state, &mv)?;
            let score = match (self.scoring, successor) {
                (LookaheadScoring::Successor, Some(next)) => self.heuristic.estimate(&next)?,
                _ => pre_move,
            };
            scored.push((score, mv));
        }

        let best_score = scored
            .iter()
            .map(|(score, _)| *score)
            .min_by(f64::total_cmp)
            .ok_or(AgentError::NoLegalMoves)?;
        let best: Vec<G::Move> = scored
            .into_iter()
            .filter(|(score, _)| score.total_cmp(&best_score).is_eq())
            .map(|(_, mv)| mv)
            .collect();
        let action = best
            .choose(&mut self.rng)
            .cloned()
            .ok_or(AgentError::NoLegalMoves)?;

        debug!(agent = "greedy", best_score, tied = best.len(), ?action, "decided");
        Ok(Decision::immediate(action))
    }

    fn name(&self) -> &str {
        "OneStepLookAhead"
    }
}
