//! Shared building blocks for maze agents.
//!
//! Agents see the game only through [`GameAdapter`] and score states only
//! through [`Heuristic`]. Each call to [`Agent::decide`] plans from a single
//! state and returns one move; nothing carries over between calls.

pub mod adapter;
pub mod budget;
pub mod error;
pub mod graph;
pub mod node;
pub mod time_control;

pub use adapter::*;
pub use budget::SuccessorBudget;
pub use error::*;
pub use node::*;
pub use time_control::*;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// Agent trait: implemented by every decision procedure
// =============================================================================

/// Result of one decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision<M> {
    /// The move to play
    pub action: M,
    /// Number of nodes expanded (zero for agents that do not search)
    pub expanded: u64,
    /// Deepest node created during the search
    pub max_depth: u32,
    /// Whether search limits cut the search short
    pub stopped: bool,
}

impl<M> Decision<M> {
    /// A decision reached without any expansion.
    pub fn immediate(action: M) -> Self {
        Self {
            action,
            expanded: 0,
            max_depth: 1,
            stopped: false,
        }
    }
}

/// Trait that all agents implement.
///
/// Hosts hold agents as `Box<dyn Agent<G>>` and switch between strategies by
/// configuration.
pub trait Agent<G: GameAdapter>: Send {
    /// Choose one move for `state`.
    ///
    /// # Errors
    /// [`AgentError::NoLegalMoves`] when the adapter offers nothing to play,
    /// [`AgentError::SearchExhausted`] when a search runs dry without a
    /// decision, and [`AgentError::Oracle`] for adapter or heuristic faults.
    fn decide(
        &mut self,
        game: &G,
        state: &G::State,
        limits: &SearchLimits,
    ) -> Result<Decision<G::Move>, AgentError>;

    /// Human-readable agent name for logs and reports.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}

/// The agent strategies a host can select by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Random,
    Greedy,
    Bfs,
    Dfs,
    #[serde(alias = "a*")]
    Astar,
}

impl AgentKind {
    pub const ALL: [AgentKind; 5] = [
        AgentKind::Random,
        AgentKind::Greedy,
        AgentKind::Bfs,
        AgentKind::Dfs,
        AgentKind::Astar,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Random => "random",
            AgentKind::Greedy => "greedy",
            AgentKind::Bfs => "bfs",
            AgentKind::Dfs => "dfs",
            AgentKind::Astar => "astar",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentKind {
    type Err = ParseAgentKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(AgentKind::Random),
            "greedy" | "lookahead" | "onestep" => Ok(AgentKind::Greedy),
            "bfs" => Ok(AgentKind::Bfs),
            "dfs" => Ok(AgentKind::Dfs),
            "astar" | "a*" => Ok(AgentKind::Astar),
            _ => Err(ParseAgentKindError(s.to_string())),
        }
    }
}
