//! Grid movement primitives
//!
//! Only the four cardinal directions exist. Horizontal movement wraps around
//! the maze edge; vertical movement never wraps.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::grid::Grid;

/// Integer grid coordinate (`x` = column, `y` = row, row 0 at the top)
pub type Position = IVec2;

/// Cardinal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    #[default]
    Left,
    Right,
}

impl Direction {
    /// Enumeration order used by every search; ties resolve to the earliest entry.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector for this direction
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Step one cell in `direction`, wrapping x into `[0, width)`.
///
/// y is left untouched, so the result may sit outside the maze vertically;
/// callers gate movement with [`can_move`].
#[inline]
pub fn translate(pos: Position, direction: Direction, width: i32) -> Position {
    let mut next = pos + direction.delta();
    if next.x < 0 {
        next.x = width - 1;
    } else if next.x >= width {
        next.x = 0;
    }
    next
}

/// True iff one step in `direction` lands on an in-bounds, non-wall cell
#[inline]
pub fn can_move(grid: &Grid, pos: Position, direction: Direction) -> bool {
    !grid.is_wall(translate(pos, direction, grid.width()))
}

/// Manhattan distance between two cells (no wrap-around shortcut)
#[inline]
pub fn manhattan(a: Position, b: Position) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
