//! Error types surfaced by agents to the host turn loop.

use thiserror::Error;

/// Failure reported by the game adapter or the heuristic oracle.
///
/// Agents never retry; the error travels to the caller unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("oracle failure: {message}")]
pub struct OracleError {
    pub message: String,
}

impl OracleError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Everything that can stop an agent from producing a move.
#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum AgentError {
    /// The adapter offered no legal move where one was required.
    #[error("no legal moves available at the decision point")]
    NoLegalMoves,

    /// The frontier emptied without reaching a sentinel, win or cutoff.
    #[error("search exhausted without a decision after {expanded} expansions")]
    SearchExhausted { expanded: u64 },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

/// Returned when a configuration string names no known agent kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown agent kind '{0}' (expected one of: random, greedy, bfs, dfs, astar)")]
pub struct ParseAgentKindError(pub String);
