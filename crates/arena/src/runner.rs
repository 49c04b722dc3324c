//! Game runner for playing maze games with configured agents

use agent_core::{Agent, AgentKind, GameAdapter, SuccessorBudget};
use maze_core::{Direction, Layout, MazeGame, MazeHeuristic, MazeState};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::registry::build_agent;
use crate::results::ArenaResults;

/// The adapter agents see: the maze behind a per-turn successor budget.
pub type BudgetedMaze = SuccessorBudget<MazeGame>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    Win,
    Lose,
    /// `max_turns` ran out before the game ended
    TurnLimit,
}

/// Summary of one finished game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    pub score: i32,
    pub turns: u32,
    /// Turns where the agent failed and `Stop` was played instead
    pub fallbacks: u32,
    /// Nodes expanded across all decisions
    pub expanded: u64,
    pub seed: Option<u64>,
}

/// All games one agent played
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRun {
    pub kind: AgentKind,
    pub name: String,
    pub games: Vec<GameRecord>,
}

impl AgentRun {
    pub fn wins(&self) -> usize {
        self.count(GameOutcome::Win)
    }

    pub fn losses(&self) -> usize {
        self.count(GameOutcome::Lose)
    }

    pub fn turn_limits(&self) -> usize {
        self.count(GameOutcome::TurnLimit)
    }

    fn count(&self, outcome: GameOutcome) -> usize {
        self.games.iter().filter(|g| g.outcome == outcome).count()
    }

    pub fn average_score(&self) -> f64 {
        if self.games.is_empty() {
            return 0.0;
        }
        let total: i64 = self.games.iter().map(|g| i64::from(g.score)).sum();
        total as f64 / self.games.len() as f64
    }

    pub fn total_expanded(&self) -> u64 {
        self.games.iter().map(|g| g.expanded).sum()
    }

    pub fn total_fallbacks(&self) -> u32 {
        self.games.iter().map(|g| g.fallbacks).sum()
    }
}

/// Runs games for the agents named in an [`ArenaConfig`]
pub struct GameRunner {
    config: ArenaConfig,
    game: MazeGame,
}

impl GameRunner {
    pub fn new(config: ArenaConfig, layout: Layout) -> Self {
        Self {
            config,
            game: MazeGame::new(layout),
        }
    }

    /// Validate `config` and load its layout.
    pub fn from_config(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        let layout = config.layout.load()?;
        Ok(Self::new(config, layout))
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn game(&self) -> &MazeGame {
        &self.game
    }

    /// Play every configured agent and collect the results.
    pub fn run_all(&self) -> Result<ArenaResults, ArenaError> {
        let mut results = ArenaResults::new(self.config.clone());
        for &kind in &self.config.agents {
            let run = self.run_agent(kind)?;
            info!(
                agent = %kind,
                wins = run.wins(),
                losses = run.losses(),
                average_score = run.average_score(),
                "agent finished"
            );
            results.runs.push(run);
        }
        Ok(results)
    }

    /// Play `games` games with a fresh agent of `kind` for each.
    pub fn run_agent(&self, kind: AgentKind) -> Result<AgentRun, ArenaError> {
        let mut games = Vec::with_capacity(self.config.games as usize);
        let mut name = kind.to_string();

        for game_num in 0..self.config.games {
            let seed = self.config.game_seed(game_num);
            let heuristic = MazeHeuristic::new(self.config.heuristic, &self.game);
            let mut agent = build_agent::<BudgetedMaze, _>(kind, heuristic, seed);
            name = agent.name().to_string();

            let record = self.play_game(agent.as_mut(), seed)?;
            info!(
                agent = %name,
                game = game_num + 1,
                of = self.config.games,
                outcome = ?record.outcome,
                score = record.score,
                turns = record.turns,
                "game over"
            );
            games.push(record);
        }

        Ok(AgentRun { kind, name, games })
    }

    /// Play a single game from the layout's start.
    ///
    /// The successor budget is refilled before every decision and each
    /// decision gets fresh limits. A failed decision is logged and replaced
    /// by `Stop` so the game always advances.
    pub fn play_game(
        &self,
        agent: &mut dyn Agent<BudgetedMaze>,
        seed: Option<u64>,
    ) -> Result<GameRecord, ArenaError> {
        let budgeted = SuccessorBudget::new(self.game.clone(), self.config.successor_budget);
        let mut state = self.game.initial_state();
        let mut turns = 0;
        let mut fallbacks = 0;
        let mut expanded = 0;
        agent.new_game();

        while turns < self.config.max_turns && !self.game.is_terminal(&state) {
            budgeted.reset();
            let limits = self.config.limits.search_limits();

            let action = match agent.decide(&budgeted, &state, &limits) {
                Ok(decision) => {
                    expanded += decision.expanded;
                    decision.action
                }
                Err(e) => {
                    warn!(agent = agent.name(), turn = turns, error = %e, "decision failed, playing Stop");
                    fallbacks += 1;
                    Direction::Stop
                }
            };

            state = self.advance(&state, action, &mut fallbacks)?;
            turns += 1;
            debug!(turn = turns, %action, player = %state.player, score = state.score, "move played");
        }

        Ok(GameRecord {
            outcome: self.outcome(&state),
            score: state.score,
            turns,
            fallbacks,
            expanded,
            seed,
        })
    }

    fn advance(
        &self,
        state: &MazeState,
        action: Direction,
        fallbacks: &mut u32,
    ) -> Result<MazeState, ArenaError> {
        match self.game.apply(state, action) {
            Ok(next) => Ok(next),
            Err(e) if action != Direction::Stop => {
                warn!(%action, error = %e, "move rejected, playing Stop");
                *fallbacks += 1;
                Ok(self.game.apply(state, Direction::Stop)?)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn outcome(&self, state: &MazeState) -> GameOutcome {
        if self.game.is_win(state) {
            GameOutcome::Win
        } else if self.game.is_lose(state) {
            GameOutcome::Lose
        } else {
            GameOutcome::TurnLimit
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
