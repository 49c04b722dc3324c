//! Per-turn successor budget.
//!
//! Wraps any adapter so that, once `limit` successors have been generated,
//! every further `successor` call answers the "no further successor"
//! sentinel. This is how a host forces frontier searches to resolve quickly:
//! the sentinel is their termination signal. The host calls
//! [`SuccessorBudget::reset`] at the start of each turn.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::adapter::GameAdapter;
use crate::error::OracleError;

#[derive(Debug)]
pub struct SuccessorBudget<G> {
    inner: G,
    limit: u64,
    calls: AtomicU64,
}

impl<G> SuccessorBudget<G> {
    pub fn new(inner: G, limit: u64) -> Self {
        Self {
            inner,
            limit,
            calls: AtomicU64::new(0),
        }
    }

    /// Refill the budget for a new turn.
    pub fn reset(&self) {
        self.calls.store(0, Ordering::Relaxed);
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Successors actually generated since the last reset.
    pub fn used(&self) -> u64 {
        self.calls.load(Ordering::Relaxed).min(self.limit)
    }

    pub fn is_spent(&self) -> bool {
        self.calls.load(Ordering::Relaxed) >= self.limit
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }
}

impl<G: GameAdapter> GameAdapter for SuccessorBudget<G> {
    type State = G::State;
    type Move = G::Move;

    fn legal_moves(&self, state: &G::State) -> Vec<G::Move> {
        self.inner.legal_moves(state)
    }

    fn successor(&self, state: &G::State, mv: &G::Move) -> Result<Option<G::State>, OracleError> {
        if self.calls.fetch_add(1, Ordering::Relaxed) >= self.limit {
            return Ok(None);
        }
        self.inner.successor(state, mv)
    }

    fn is_win(&self, state: &G::State) -> bool {
        self.inner.is_win(state)
    }

    fn is_lose(&self, state: &G::State) -> bool {
        self.inner.is_lose(state)
    }
}
