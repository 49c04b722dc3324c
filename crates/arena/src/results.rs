//! Arena results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::runner::AgentRun;

/// Complete arena results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaResults {
    /// Configuration used
    pub config: ArenaConfig,
    /// One entry per configured agent, in configuration order
    pub runs: Vec<AgentRun>,
}

impl ArenaResults {
    pub fn new(config: ArenaConfig) -> Self {
        Self {
            config,
            runs: Vec::new(),
        }
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), ArenaError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| ArenaError::io("write results", path, e))
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, ArenaError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ArenaError::io("read results", path, e))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str("=== Maze Arena ===\n\n");
        report.push_str(&format!(
            "Config: {} games/agent, {} max turns, {} successors/turn, heuristic {}\n\n",
            self.config.games,
            self.config.max_turns,
            self.config.successor_budget,
            self.config.heuristic
        ));

        report.push_str(&format!(
            "{:<18} {:>5} {:>5} {:>5} {:>10} {:>10} {:>9}\n",
            "Agent", "W", "L", "T", "Avg score", "Expanded", "Fallback"
        ));
        report.push_str(&"-".repeat(72));
        report.push('\n');

        for run in &self.runs {
            report.push_str(&format!(
                "{:<18} {:>5} {:>5} {:>5} {:>10.1} {:>10} {:>9}\n",
                run.name,
                run.wins(),
                run.losses(),
                run.turn_limits(),
                run.average_score(),
                run.total_expanded(),
                run.total_fallbacks()
            ));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
