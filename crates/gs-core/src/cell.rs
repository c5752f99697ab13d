//! Grid cell coordinates and the four movement directions.
//!
//! Coordinates are in **cell units**, not pixels.  `Cell` uses signed `i32`
//! so that stepping off the grid edge yields a representable (negative or
//! too-large) cell that bounds checks can reject, rather than wrapping.

use std::fmt;

// ── Cell ──────────────────────────────────────────────────────────────────────

/// One discrete grid position.
///
/// Ordering is lexicographic on `(x, y)`, which gives sorted collections of
/// cells a stable, coordinate-based order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent cell one step in `direction`.  Not bounds checked.
    #[inline]
    pub fn step(self, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell::new(self.x + dx, self.y + dy)
    }

    /// Manhattan (L1) distance in cells.
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// `true` if `other` is exactly one axis-aligned step away.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.manhattan(other) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Cell::new(x, y)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// An axis-aligned move.  There is no "none" variant: the snake
/// always moves.
///
/// `Up` decreases `y` (screen coordinates, origin at the top-left).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions in neighbor-expansion order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(dx, dy)` of one step.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up    => (0, -1),
            Direction::Down  => (0, 1),
            Direction::Left  => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up    => Direction::Down,
            Direction::Down  => Direction::Up,
            Direction::Left  => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The direction of a single step from `from` to `to`.
    ///
    /// Returns `None` unless the two cells are exactly one axis step apart.
    pub fn between(from: Cell, to: Cell) -> Option<Direction> {
        match (to.x - from.x, to.y - from.y) {
            (0, -1) => Some(Direction::Up),
            (0, 1)  => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0)  => Some(Direction::Right),
            _       => None,
        }
    }

    /// Human-readable label, used in CSV trace columns.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up    => "up",
            Direction::Down  => "down",
            Direction::Left  => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
