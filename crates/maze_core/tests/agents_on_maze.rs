//! Every agent driven through the reference maze.
//!
//! These tests play short games end to end: a fresh successor budget per
//! turn, one decision per turn, the decision applied with the real rules.

use agent_core::{Agent, GameAdapter, SearchLimits, SuccessorBudget};
use astar_agent::AStarAgent;
use frontier_agent::{BfsAgent, DfsAgent};
use lookahead_agent::OneStepLookAheadAgent;
use maze_core::{HeuristicKind, Layout, MazeGame, MazeHeuristic, MazeState, SMALL, TINY};
use random_agent::RandomAgent;

type Budgeted = SuccessorBudget<MazeGame>;

fn all_agents(game: &MazeGame) -> Vec<Box<dyn Agent<Budgeted>>> {
    let h = || MazeHeuristic::new(HeuristicKind::Food, game);
    vec![
        Box::new(RandomAgent::with_seed(1)),
        Box::new(OneStepLookAheadAgent::with_seed(h(), 1)),
        Box::new(BfsAgent::new(h())),
        Box::new(DfsAgent::new(h())),
        Box::new(AStarAgent::new(h())),
    ]
}

/// Plays up to `turns` moves and returns the final state.
fn play(agent: &mut dyn Agent<Budgeted>, budgeted: &Budgeted, turns: usize) -> MazeState {
    let game = budgeted.inner();
    let mut state = game.initial_state();
    for _ in 0..turns {
        if game.is_terminal(&state) {
            break;
        }
        budgeted.reset();
        let legal = game.legal_moves(&state);
        let decision = agent
            .decide(budgeted, &state, &SearchLimits::unbounded())
            .unwrap_or_else(|e| panic!("{} failed: {e}", agent.name()));
        assert!(
            legal.contains(&decision.action),
            "{} chose illegal {:?}",
            agent.name(),
            decision.action
        );
        state = game.apply(&state, decision.action).unwrap();
    }
    state
}

#[test]
fn every_agent_plays_legal_moves_on_tiny() {
    let game = MazeGame::new(Layout::parse(TINY).unwrap());
    let budgeted = SuccessorBudget::new(game.clone(), 30);

    for mut agent in all_agents(&game) {
        let end = play(agent.as_mut(), &budgeted, 40);
        assert!(end.steps <= 40);
    }
}

#[test]
fn every_agent_plays_legal_moves_on_small() {
    let game = MazeGame::new(Layout::parse(SMALL).unwrap());
    let budgeted = SuccessorBudget::new(game.clone(), 60);

    for mut agent in all_agents(&game) {
        play(agent.as_mut(), &budgeted, 60);
    }
}

#[test]
fn astar_steps_toward_adjacent_win() {
    // one pellet two cells east; A* sees the win one level below East
    let game = MazeGame::new(Layout::parse("%%%%%\n%P .%\n%%%%%").unwrap());
    let budgeted = SuccessorBudget::new(game.clone(), 100);
    let mut agent = AStarAgent::new(MazeHeuristic::new(HeuristicKind::NearestFood, &game));

    let decision = agent
        .decide(&budgeted, &game.initial_state(), &SearchLimits::unbounded())
        .unwrap();
    assert_eq!(decision.action, maze_core::Direction::East);
}

#[test]
fn frontier_agents_stop_within_expansion_limit() {
    let game = MazeGame::new(Layout::parse(SMALL).unwrap());
    let h = MazeHeuristic::new(HeuristicKind::NearestFood, &game);
    let limits = SearchLimits::expansions(25);
    let state = game.initial_state();

    // unbudgeted game: only the limit can end these searches
    let bfs = BfsAgent::new(h.clone()).decide(&game, &state, &limits).unwrap();
    let dfs = DfsAgent::new(h.clone()).decide(&game, &state, &limits).unwrap();
    let astar = AStarAgent::new(h).decide(&game, &state, &limits).unwrap();

    for decision in [bfs, dfs, astar] {
        assert!(decision.stopped);
        assert_eq!(decision.expanded, 25);
        assert!(game.legal_moves(&state).contains(&decision.action));
    }
}
