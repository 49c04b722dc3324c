//! Maze rules and the [`GameAdapter`] implementation.
//!
//! Scoring: every move costs one point, each pellet is worth ten, clearing
//! the maze adds 500 and walking into a ghost subtracts 500. A game is won
//! when no food is left and lost when the player stands on a ghost.

use std::fmt;
use std::sync::Arc;

use agent_core::{GameAdapter, OracleError};
use serde::{Deserialize, Serialize};

use crate::layout::{Layout, Pos};

pub const STEP_COST: i32 = 1;
pub const FOOD_REWARD: i32 = 10;
pub const WIN_REWARD: i32 = 500;
pub const LOSE_PENALTY: i32 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl Direction {
    /// Enumeration order of legal moves.
    pub const ALL: [Direction; 5] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Stop,
    ];

    /// The cell reached from `pos`, or None when it would leave the grid.
    pub fn step(self, pos: Pos) -> Option<Pos> {
        match self {
            Direction::North => pos.y.checked_sub(1).map(|y| Pos::new(pos.x, y)),
            Direction::South => Some(Pos::new(pos.x, pos.y + 1)),
            Direction::East => Some(Pos::new(pos.x + 1, pos.y)),
            Direction::West => pos.x.checked_sub(1).map(|x| Pos::new(x, pos.y)),
            Direction::Stop => Some(pos),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
            Direction::Stop => "Stop",
        };
        f.write_str(name)
    }
}

/// One position of a maze game. Cheap to compare; cloned on every move.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MazeState {
    pub player: Pos,
    food: Vec<bool>,
    remaining: usize,
    pub score: i32,
    pub steps: u32,
}

impl MazeState {
    pub fn food_left(&self) -> usize {
        self.remaining
    }

    pub fn has_food(&self, index: usize) -> bool {
        self.food.get(index).copied().unwrap_or(false)
    }

    /// Row-major indices of cells that still hold food.
    pub fn food_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.food
            .iter()
            .enumerate()
            .filter_map(|(i, &f)| f.then_some(i))
    }
}

/// The maze rules for a single layout.
#[derive(Debug, Clone)]
pub struct MazeGame {
    layout: Arc<Layout>,
}

impl MazeGame {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout: Arc::new(layout),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn initial_state(&self) -> MazeState {
        let food = self.layout.initial_food().to_vec();
        let remaining = food.iter().filter(|&&f| f).count();
        let mut state = MazeState {
            player: self.layout.start(),
            food,
            remaining,
            score: 0,
            steps: 0,
        };
        self.eat(&mut state);
        state
    }

    pub fn is_terminal(&self, state: &MazeState) -> bool {
        self.is_win(state) || self.is_lose(state)
    }

    /// Plays `mv` from `state`.
    ///
    /// # Errors
    /// Fails when the game is already over or `mv` runs into a wall.
    pub fn apply(&self, state: &MazeState, mv: Direction) -> Result<MazeState, OracleError> {
        if self.is_terminal(state) {
            return Err(OracleError::new(
                "cannot generate a successor of a terminal state",
            ));
        }
        let target = mv
            .step(state.player)
            .filter(|pos| !self.layout.is_wall(*pos))
            .ok_or_else(|| OracleError::new(format!("illegal move {mv} from {}", state.player)))?;

        let mut next = state.clone();
        next.player = target;
        next.steps += 1;
        next.score -= STEP_COST;
        self.eat(&mut next);

        if self.is_lose(&next) {
            next.score -= LOSE_PENALTY;
        } else if self.is_win(&next) {
            next.score += WIN_REWARD;
        }
        Ok(next)
    }

    fn eat(&self, state: &mut MazeState) {
        let Some(i) = self.layout.index(state.player) else {
            return;
        };
        if state.food[i] {
            state.food[i] = false;
            state.remaining -= 1;
            state.score += FOOD_REWARD;
        }
    }
}

impl GameAdapter for MazeGame {
    type State = MazeState;
    type Move = Direction;

    /// Every direction that does not run into a wall, then `Stop`.
    /// Terminal states have no legal moves.
    fn legal_moves(&self, state: &MazeState) -> Vec<Direction> {
        if self.is_terminal(state) {
            return Vec::new();
        }
        Direction::ALL
            .into_iter()
            .filter(|dir| {
                dir.step(state.player)
                    .is_some_and(|pos| !self.layout.is_wall(pos))
            })
            .collect()
    }

    fn successor(&self, state: &MazeState, mv: &Direction) -> Result<Option<MazeState>, OracleError> {
        self.apply(state, *mv).map(Some)
    }

    fn is_win(&self, state: &MazeState) -> bool {
        state.remaining == 0
    }

    fn is_lose(&self, state: &MazeState) -> bool {
        self.layout.is_ghost(state.player)
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
