use super::*;
use agent_core::graph::{GraphGame, Step};
use agent_core::{heuristic_fn, SuccessorBudget};

fn flat(_: &u32) -> f64 {
    0.0
}

#[test]
fn test_losing_successors_are_never_expanded() {
    // the only sentinel sits behind a losing state
    let game = GraphGame::new()
        .edge(0, Step::Up, 1)
        .edge(1, Step::Up, 2)
        .sentinel(2, Step::Up)
        .lose(2);
    let h = heuristic_fn(flat);

    for discipline in [Discipline::Queue, Discipline::Stack] {
        let result = frontier_search(&game, &h, &0, &SearchLimits::unbounded(), discipline);
        assert_eq!(result, Err(AgentError::SearchExhausted { expanded: 1 }));
    }
}

#[test]
fn test_exhaustion_without_sentinel_is_an_error() {
    let game = GraphGame::new()
        .edge(0, Step::Left, 1)
        .edge(0, Step::Right, 2)
        .edge(1, Step::Left, 3);
    let h = heuristic_fn(flat);

    let result = frontier_search(&game, &h, &0, &SearchLimits::unbounded(), Discipline::Queue);
    assert_eq!(result, Err(AgentError::SearchExhausted { expanded: 3 }));
}

#[test]
fn test_sentinel_returns_cheapest_explored() {
    // explored order: 1 (Up, cost 1 + 4), 2 (Down, cost 1 + 0), then 3 hits the sentinel
    let game = GraphGame::new()
        .edge(0, Step::Up, 1)
        .edge(0, Step::Down, 2)
        .edge(1, Step::Up, 3)
        .sentinel(3, Step::Up);
    let h = heuristic_fn(|s: &u32| if *s == 1 { 4.0 } else { 0.0 });

    let decision =
        frontier_search(&game, &h, &0, &SearchLimits::unbounded(), Discipline::Queue).unwrap();
    assert_eq!(decision.action, Step::Down);
    assert_eq!(decision.expanded, 3);
    assert_eq!(decision.max_depth, 2);
    assert!(!decision.stopped);
}

#[test]
fn test_equal_costs_resolve_to_first_explored() {
    let game = GraphGame::new()
        .edge(0, Step::Right, 1)
        .edge(0, Step::Left, 2)
        .sentinel(1, Step::Stop);
    let h = heuristic_fn(flat);

    let decision =
        frontier_search(&game, &h, &0, &SearchLimits::unbounded(), Discipline::Queue).unwrap();
    assert_eq!(decision.action, Step::Right);
}

#[test]
fn test_stack_discipline_reverses_siblings() {
    // root child 1 has children 3 (via Left) then 4 (via Right); DFS must
    // expand 4 first, and 4 hits the sentinel before 3 is ever explored
    let game = GraphGame::new()
        .edge(0, Step::Up, 1)
        .edge(0, Step::Down, 2)
        .edge(1, Step::Left, 3)
        .edge(1, Step::Right, 4)
        .sentinel(3, Step::Stop)
        .sentinel(4, Step::Stop);
    let h = heuristic_fn(flat);

    let decision =
        frontier_search(&game, &h, &0, &SearchLimits::unbounded(), Discipline::Stack).unwrap();
    assert_eq!(decision.expanded, 2);
    assert_eq!(decision.action, Step::Up);
}

#[test]
fn test_cyclic_graph_terminates_with_successor_budget() {
    let cycle = GraphGame::new()
        .edge(0, Step::Left, 1)
        .edge(0, Step::Right, 2)
        .edge(1, Step::Right, 0)
        .edge(2, Step::Left, 0);
    let h = heuristic_fn(|s: &u32| if *s == 2 { -1.0 } else { 0.0 });

    for discipline in [Discipline::Queue, Discipline::Stack] {
        let game = SuccessorBudget::new(cycle.clone(), 25);
        let decision =
            frontier_search(&game, &h, &0, &SearchLimits::unbounded(), discipline).unwrap();
        assert!(!decision.stopped);
        assert!(game.is_spent());
        assert!([Step::Left, Step::Right].contains(&decision.action));
    }
}

#[test]
fn test_expansion_limit_cuts_off_cycles() {
    let game = GraphGame::new()
        .edge(0, Step::Left, 1)
        .edge(0, Step::Right, 2)
        .edge(1, Step::Right, 0)
        .edge(2, Step::Left, 0);
    let h = heuristic_fn(|s: &u32| if *s == 2 { -1.0 } else { 0.0 });

    let decision =
        frontier_search(&game, &h, &0, &SearchLimits::expansions(10), Discipline::Queue).unwrap();
    assert!(decision.stopped);
    assert_eq!(decision.expanded, 10);
    // node 2 (Right) is the cheapest state anywhere in the graph
    assert_eq!(decision.action, Step::Right);
}

#[test]
fn test_zero_expansion_limit_falls_back_to_frontier() {
    let game = GraphGame::new()
        .edge(0, Step::Left, 1)
        .edge(0, Step::Right, 2);
    let h = heuristic_fn(|s: &u32| f64::from(*s) * -1.0);

    let decision =
        frontier_search(&game, &h, &0, &SearchLimits::expansions(0), Discipline::Stack).unwrap();
    assert!(decision.stopped);
    assert_eq!(decision.expanded, 0);
    assert_eq!(decision.action, Step::Right);
}

#[test]
fn test_seed_sentinel_decides_immediately() {
    let game = GraphGame::new().sentinel(0, Step::Stop);
    let h = heuristic_fn(flat);
    let decision =
        frontier_search(&game, &h, &0, &SearchLimits::unbounded(), Discipline::Queue).unwrap();
    assert_eq!(decision.action, Step::Stop);
    assert_eq!(decision.expanded, 0);
}

#[test]
fn test_oracle_failure_propagates() {
    let game = GraphGame::new().edge(0, Step::Up, 1).fault(1, Step::Up);
    let h = heuristic_fn(flat);
    let result = frontier_search(&game, &h, &0, &SearchLimits::unbounded(), Discipline::Queue);
    assert!(matches!(result, Err(AgentError::Oracle(_))));
}
