//! ASCII maze layouts.
//!
//! ```text
//! %  wall        .  food pellet
//! P  start       G  ghost (stepping on it loses the game)
//!    (space) open floor
//! ```
//! Every row must have the same width and there must be exactly one `P`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A 5x7 maze with three pellets and one ghost.
pub const TINY: &str = "\
%%%%%%%
%P . G%
% %%% %
%.   .%
%%%%%%%";

/// A larger maze with a ghost guarding the lower corridor.
pub const SMALL: &str = "\
%%%%%%%%%%%%
%P   .    .%
% %%%% %%% %
% %.     % %
% %% %%G % %
%.   .    .%
%%%%%%%%%%%%";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum LayoutError {
    #[error("layout is empty")]
    Empty,

    #[error("row {row} has width {got}, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("unknown tile '{tile}' at row {row}, column {col}")]
    UnknownTile { tile: char, row: usize, col: usize },

    #[error("layout has no start position 'P'")]
    MissingStart,

    #[error("layout has more than one start position 'P' (second at row {row}, column {col})")]
    DuplicateStart { row: usize, col: usize },

    #[error("unknown built-in layout '{0}' (expected tiny or small)")]
    UnknownBuiltin(String),
}

/// A cell coordinate; `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn manhattan(self, other: Pos) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The immutable part of a maze: walls, ghosts, starting food and start cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    width: usize,
    height: usize,
    walls: Vec<bool>,
    ghosts: Vec<bool>,
    food: Vec<bool>,
    start: Pos,
}

impl Layout {
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .collect();
        let width = rows.first().map(|r| r.chars().count()).ok_or(LayoutError::Empty)?;
        let height = rows.len();

        let mut walls = Vec::with_capacity(width * height);
        let mut ghosts = Vec::with_capacity(width * height);
        let mut food = Vec::with_capacity(width * height);
        let mut start = None;

        for (row, line) in rows.iter().enumerate() {
            let got = line.chars().count();
            if got != width {
                return Err(LayoutError::Ragged {
                    row,
                    expected: width,
                    got,
                });
            }
            for (col, tile) in line.chars().enumerate() {
                let (wall, ghost, pellet) = match tile {
                    '%' => (true, false, false),
                    '.' => (false, false, true),
                    'G' => (false, true, false),
                    ' ' => (false, false, false),
                    'P' => {
                        if start.is_some() {
                            return Err(LayoutError::DuplicateStart { row, col });
                        }
                        start = Some(Pos::new(col, row));
                        (false, false, false)
                    }
                    _ => return Err(LayoutError::UnknownTile { tile, row, col }),
                };
                walls.push(wall);
                ghosts.push(ghost);
                food.push(pellet);
            }
        }

        Ok(Self {
            width,
            height,
            walls,
            ghosts,
            food,
            start: start.ok_or(LayoutError::MissingStart)?,
        })
    }

    /// One of the layouts shipped with the crate, by name.
    pub fn builtin(name: &str) -> Result<Self, LayoutError> {
        match name {
            "tiny" => Self::parse(TINY),
            "small" => Self::parse(SMALL),
            other => Err(LayoutError::UnknownBuiltin(other.to_string())),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Pos {
        self.start
    }

    /// Cells outside the grid count as walls.
    pub fn is_wall(&self, pos: Pos) -> bool {
        self.index(pos).map_or(true, |i| self.walls[i])
    }

    pub fn is_ghost(&self, pos: Pos) -> bool {
        self.index(pos).is_some_and(|i| self.ghosts[i])
    }

    /// Food present at the start of a game, one flag per cell in row-major order.
    pub fn initial_food(&self) -> &[bool] {
        &self.food
    }

    pub fn index(&self, pos: Pos) -> Option<usize> {
        (pos.x < self.width && pos.y < self.height).then(|| pos.y * self.width + pos.x)
    }

    pub fn pos_of(&self, index: usize) -> Pos {
        Pos::new(index % self.width, index / self.width)
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod layout_tests;
