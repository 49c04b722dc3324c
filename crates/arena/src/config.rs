//! Arena configuration, loaded from TOML.
//!
//! ```toml
//! agents = ["bfs", "astar"]
//! games = 5
//! max_turns = 200
//! seed = 7
//! successor_budget = 40
//! heuristic = "nearest-food"
//!
//! [limits]
//! max_expansions = 10000
//! move_time_ms = 100
//!
//! [layout]
//! builtin = "small"        # or: path = "mazes/big.txt", inline = "..."
//! ```
//!
//! Every field is optional.

use std::path::{Path, PathBuf};
use std::time::Duration;

use agent_core::{AgentKind, SearchLimits};
use maze_core::{HeuristicKind, Layout};
use serde::{Deserialize, Serialize};

use crate::error::ArenaError;

/// Full arena configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArenaConfig {
    /// Agents to evaluate, each playing `games` games
    pub agents: Vec<AgentKind>,
    /// Games per agent
    pub games: u32,
    /// Turns per game before it is called off
    pub max_turns: u32,
    /// Base seed for agent randomness (game `i` uses `seed + i`)
    pub seed: Option<u64>,
    /// Successor generations per turn before the adapter answers "no further successor"
    pub successor_budget: u64,
    pub heuristic: HeuristicKind,
    pub limits: LimitsConfig,
    pub layout: LayoutSource,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            agents: AgentKind::ALL.to_vec(),
            games: 10,
            max_turns: 200,
            seed: None,
            successor_budget: 100,
            heuristic: HeuristicKind::default(),
            limits: LimitsConfig::default(),
            layout: LayoutSource::default(),
        }
    }
}

/// Per-decision search limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LimitsConfig {
    pub max_expansions: Option<u64>,
    pub move_time_ms: Option<u64>,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_expansions: Some(10_000),
            move_time_ms: None,
        }
    }
}

impl LimitsConfig {
    /// Fresh limits for one decision (each gets its own clock).
    pub fn search_limits(&self) -> SearchLimits {
        let move_time = self.move_time_ms.map(Duration::from_millis);
        match (self.max_expansions, move_time) {
            (Some(max), Some(time)) => SearchLimits::expansions_and_time(max, time),
            (Some(max), None) => SearchLimits::expansions(max),
            (None, Some(time)) => SearchLimits::time(time),
            (None, None) => SearchLimits::unbounded(),
        }
    }
}

/// Where the maze comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutSource {
    /// A layout shipped with `maze_core` ("tiny" or "small")
    Builtin(String),
    /// A layout file, relative to the working directory
    Path(PathBuf),
    /// Layout text embedded in the config
    Inline(String),
}

impl Default for LayoutSource {
    fn default() -> Self {
        LayoutSource::Builtin("small".to_string())
    }
}

impl LayoutSource {
    pub fn load(&self) -> Result<Layout, ArenaError> {
        match self {
            LayoutSource::Builtin(name) => Ok(Layout::builtin(name)?),
            LayoutSource::Inline(text) => Ok(Layout::parse(text)?),
            LayoutSource::Path(path) => {
                let text = std::fs::read_to_string(path)
                    .map_err(|e| ArenaError::io("read layout", path, e))?;
                Ok(Layout::parse(&text)?)
            }
        }
    }
}

impl ArenaConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ArenaError> {
        let text =
            std::fs::read_to_string(path).map_err(|e| ArenaError::io("read config", path, e))?;
        text.parse()
    }

    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.agents.is_empty() {
            return Err(ArenaError::InvalidConfig("no agents configured".to_string()));
        }
        if self.max_turns == 0 {
            return Err(ArenaError::InvalidConfig("max_turns must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Seed for game number `game`, if the config is seeded.
    pub fn game_seed(&self, game: u32) -> Option<u64> {
        self.seed.map(|s| s.wrapping_add(u64::from(game)))
    }
}

impl std::str::FromStr for ArenaConfig {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: ArenaConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
