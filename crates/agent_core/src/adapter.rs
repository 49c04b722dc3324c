//! The boundary between the agents and the host game engine.
//!
//! Agents see a game only through [`GameAdapter`] and score states only
//! through [`Heuristic`]. Both are treated as pure: calling them twice with
//! the same input must give the same answer, and no input is mutated.

use std::fmt;

use crate::error::OracleError;

/// Pure-functional view of a turn-based game, as seen by a single actor.
pub trait GameAdapter {
    /// A game position. Owned by whoever generated it; never mutated by agents.
    type State;
    /// One legal action. Only equality and enumeration matter to the agents.
    type Move: Clone + PartialEq + fmt::Debug;

    /// Legal moves for the controlled actor, in a stable order.
    ///
    /// Under normal play this is never empty (a "stop" move is always legal).
    fn legal_moves(&self, state: &Self::State) -> Vec<Self::Move>;

    /// The state reached by playing `mv` from `state`.
    ///
    /// `Ok(None)` is the "no further successor" sentinel: the adapter cannot
    /// or will not generate this state (for instance because its successor
    /// budget for the turn is spent). Agents treat it as a termination signal.
    fn successor(
        &self,
        state: &Self::State,
        mv: &Self::Move,
    ) -> Result<Option<Self::State>, OracleError>;

    fn is_win(&self, state: &Self::State) -> bool;

    fn is_lose(&self, state: &Self::State) -> bool;
}

/// Cost-style desirability estimate. Lower is better; any sign or magnitude.
pub trait Heuristic<S> {
    fn estimate(&self, state: &S) -> Result<f64, OracleError>;
}

impl<S, H: Heuristic<S> + ?Sized> Heuristic<S> for &H {
    fn estimate(&self, state: &S) -> Result<f64, OracleError> {
        (**self).estimate(state)
    }
}

/// Adapts an infallible closure into a [`Heuristic`].
#[derive(Clone, Copy)]
pub struct FnHeuristic<F>(F);

impl<F> fmt::Debug for FnHeuristic<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnHeuristic")
    }
}

/// Wraps `f` so it can be handed to any agent as a heuristic oracle.
pub fn heuristic_fn<S, F>(f: F) -> FnHeuristic<F>
where
    F: Fn(&S) -> f64,
{
    FnHeuristic(f)
}

impl<S, F> Heuristic<S> for FnHeuristic<F>
where
    F: Fn(&S) -> f64,
{
    fn estimate(&self, state: &S) -> Result<f64, OracleError> {
        Ok((self.0)(state))
    }
}
