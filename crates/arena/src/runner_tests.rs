use super::*;
use agent_core::{AgentError, Decision, SearchLimits};
use maze_core::{FOOD_REWARD, LOSE_PENALTY, STEP_COST, TINY, WIN_REWARD};

use crate::config::LayoutSource;

const CORRIDOR: &str = "%%%%%\n%P .%\n%%%%%";

/// Plays the same move every turn
struct Scripted(Direction);

impl Agent<BudgetedMaze> for Scripted {
    fn decide(
        &mut self,
        _game: &BudgetedMaze,
        _state: &MazeState,
        _limits: &SearchLimits,
    ) -> Result<Decision<Direction>, AgentError> {
        Ok(Decision::immediate(self.0))
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

/// Never manages to decide
struct Broken;

impl Agent<BudgetedMaze> for Broken {
    fn decide(
        &mut self,
        _game: &BudgetedMaze,
        _state: &MazeState,
        _limits: &SearchLimits,
    ) -> Result<Decision<Direction>, AgentError> {
        Err(AgentError::SearchExhausted { expanded: 0 })
    }

    fn name(&self) -> &str {
        "Broken"
    }
}

fn runner(layout: &str, max_turns: u32) -> GameRunner {
    let config = ArenaConfig {
        max_turns,
        ..Default::default()
    };
    GameRunner::new(config, Layout::parse(layout).unwrap())
}

#[test]
fn test_game_ends_on_win() {
    let runner = runner(CORRIDOR, 10);
    let record = runner.play_game(&mut Scripted(Direction::East), None).unwrap();

    assert_eq!(record.outcome, GameOutcome::Win);
    assert_eq!(record.turns, 2);
    assert_eq!(record.fallbacks, 0);
    assert_eq!(record.score, -2 * STEP_COST + FOOD_REWARD + WIN_REWARD);
}

#[test]
fn test_game_ends_on_ghost() {
    let runner = runner(TINY, 10);
    let record = runner.play_game(&mut Scripted(Direction::East), None).unwrap();

    assert_eq!(record.outcome, GameOutcome::Lose);
    assert_eq!(record.turns, 4);
    assert_eq!(record.score, -4 * STEP_COST + FOOD_REWARD - LOSE_PENALTY);
}

#[test]
fn test_failed_decisions_fall_back_to_stop() {
    let runner = runner(CORRIDOR, 5);
    let record = runner.play_game(&mut Broken, None).unwrap();

    assert_eq!(record.outcome, GameOutcome::TurnLimit);
    assert_eq!(record.turns, 5);
    assert_eq!(record.fallbacks, 5);
    assert_eq!(record.score, -5 * STEP_COST);
}

#[test]
fn test_illegal_move_falls_back_to_stop() {
    // north of the start is wall
    let runner = runner(CORRIDOR, 3);
    let record = runner.play_game(&mut Scripted(Direction::North), None).unwrap();

    assert_eq!(record.outcome, GameOutcome::TurnLimit);
    assert_eq!(record.fallbacks, 3);
    assert_eq!(record.turns, 3);
}

#[test]
fn test_run_all_records_every_game() {
    let config = ArenaConfig {
        agents: vec![AgentKind::Random, AgentKind::Bfs],
        games: 2,
        max_turns: 10,
        seed: Some(1),
        layout: LayoutSource::Builtin("tiny".to_string()),
        ..Default::default()
    };
    let runner = GameRunner::from_config(config).unwrap();
    let results = runner.run_all().unwrap();

    assert_eq!(results.runs.len(), 2);
    assert_eq!(results.runs[0].name, "Random");
    assert_eq!(results.runs[1].name, "BFS");
    for run in &results.runs {
        assert_eq!(run.games.len(), 2);
        assert_eq!(run.games[0].seed, Some(1));
        assert_eq!(run.games[1].seed, Some(2));
        assert_eq!(run.wins() + run.losses() + run.turn_limits(), 2);
        assert!(run.games.iter().all(|g| g.turns <= 10));
    }
    assert_eq!(results.runs[0].total_expanded(), 0);
}

#[test]
fn test_seeded_runs_repeat() {
    let config = ArenaConfig {
        agents: vec![AgentKind::Random],
        games: 3,
        max_turns: 20,
        seed: Some(42),
        layout: LayoutSource::Builtin("tiny".to_string()),
        ..Default::default()
    };
    let runner = GameRunner::from_config(config).unwrap();
    let first = runner.run_agent(AgentKind::Random).unwrap();
    let second = runner.run_agent(AgentKind::Random).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_run_summary() {
    let record = |outcome, score| GameRecord {
        outcome,
        score,
        turns: 1,
        fallbacks: 1,
        expanded: 10,
        seed: None,
    };
    let run = AgentRun {
        kind: AgentKind::Astar,
        name: "A*".to_string(),
        games: vec![
            record(GameOutcome::Win, 500),
            record(GameOutcome::Lose, -500),
            record(GameOutcome::Win, 300),
        ],
    };
    assert_eq!(run.wins(), 2);
    assert_eq!(run.losses(), 1);
    assert_eq!(run.turn_limits(), 0);
    assert!((run.average_score() - 100.0).abs() < 1e-9);
    assert_eq!(run.total_expanded(), 30);
    assert_eq!(run.total_fallbacks(), 3);
}
