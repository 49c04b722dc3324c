//! Cost-style heuristics over maze states (lower is better).

use std::fmt;
use std::str::FromStr;

use agent_core::{Heuristic, OracleError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::{MazeGame, MazeState};

/// The heuristics a host can pick by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicKind {
    /// Pellets left on the board. Never overestimates the moves to win.
    #[default]
    Food,
    /// Pellets left plus the distance to the nearest one.
    NearestFood,
    /// Always zero: turns every search into plain depth ordering.
    Zero,
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HeuristicKind::Food => "food",
            HeuristicKind::NearestFood => "nearest-food",
            HeuristicKind::Zero => "zero",
        })
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown heuristic '{0}' (expected food, nearest-food or zero)")]
pub struct ParseHeuristicError(pub String);

impl FromStr for HeuristicKind {
    type Err = ParseHeuristicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food" | "food-count" => Ok(HeuristicKind::Food),
            "nearest-food" | "nearest" => Ok(HeuristicKind::NearestFood),
            "zero" | "none" => Ok(HeuristicKind::Zero),
            _ => Err(ParseHeuristicError(s.to_string())),
        }
    }
}

/// A heuristic bound to one maze (distances need the layout).
#[derive(Debug, Clone)]
pub struct MazeHeuristic {
    kind: HeuristicKind,
    width: usize,
}

impl MazeHeuristic {
    pub fn new(kind: HeuristicKind, game: &MazeGame) -> Self {
        Self {
            kind,
            width: game.layout().width(),
        }
    }

    pub fn kind(&self) -> HeuristicKind {
        self.kind
    }

    fn nearest_food(&self, state: &MazeState) -> usize {
        state
            .food_cells()
            .map(|i| {
                let (x, y) = (i % self.width, i / self.width);
                state.player.x.abs_diff(x) + state.player.y.abs_diff(y)
            })
            .min()
            .unwrap_or(0)
    }
}

impl Heuristic<MazeState> for MazeHeuristic {
    fn estimate(&self, state: &MazeState) -> Result<f64, OracleError> {
        let food = state.food_left() as f64;
        let value = match self.kind {
            HeuristicKind::Food => food,
            HeuristicKind::NearestFood => food + self.nearest_food(state) as f64,
            HeuristicKind::Zero => 0.0,
        };
        Ok(value)
    }
}
