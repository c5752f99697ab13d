//! The `PathFinder` trait and its result type.
//!
//! # Pluggability
//!
//! `gs-sim` calls search through the [`PathFinder`] trait, so drivers can swap
//! the default [`AStarPathFinder`] for [`BreadthFirstPathFinder`] or their own
//! implementation without touching the simulation step.

use gs_core::{Cell, Grid, SearchKind, TieBreak};

use crate::{AStarPathFinder, BreadthFirstPathFinder, PathError, PathResult};

// ── Path ──────────────────────────────────────────────────────────────────────

/// The result of a search: the cells to walk, in order.
///
/// `cells` starts with the step *after* the start cell and ends with the
/// target.  It is empty when the target is unreachable or already reached.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub cells: Vec<Cell>,
    /// Number of cells expanded (closed) by the search.
    pub nodes_expanded: usize,
}

impl Path {
    /// The first move, if any.
    #[inline]
    pub fn first_step(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    /// Number of moves to the target.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The final cell.  `None` for an empty path.
    #[inline]
    pub fn destination(&self) -> Option<Cell> {
        self.cells.last().copied()
    }
}

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable grid search.
///
/// `blocked` reports cells the path may not enter.  The start cell is never
/// tested against it.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so that batch runs can move worlds
/// across Rayon worker threads.
pub trait PathFinder: Send + Sync {
    fn find_path(
        &self,
        grid:    &Grid,
        start:   Cell,
        target:  Cell,
        blocked: &dyn Fn(Cell) -> bool,
    ) -> PathResult<Path>;
}

impl<P: PathFinder + ?Sized> PathFinder for Box<P> {
    fn find_path(
        &self,
        grid:    &Grid,
        start:   Cell,
        target:  Cell,
        blocked: &dyn Fn(Cell) -> bool,
    ) -> PathResult<Path> {
        (**self).find_path(grid, start, target, blocked)
    }
}

/// Shared argument validation for the built-in finders.
pub(crate) fn check_endpoints(grid: &Grid, start: Cell, target: Cell) -> PathResult<()> {
    if !grid.in_bounds(start) {
        return Err(PathError::StartOutOfBounds(start));
    }
    if !grid.in_bounds(target) {
        return Err(PathError::TargetOutOfBounds(target));
    }
    Ok(())
}

// ── ConfiguredPathFinder ──────────────────────────────────────────────────────

/// A built-in finder selected at runtime from [`SearchKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfiguredPathFinder {
    AStar(AStarPathFinder),
    BreadthFirst(BreadthFirstPathFinder),
}

impl ConfiguredPathFinder {
    /// `tie_break` only affects A*.
    pub fn new(kind: SearchKind, tie_break: TieBreak) -> Self {
        match kind {
            SearchKind::AStar        => Self::AStar(AStarPathFinder::new(tie_break)),
            SearchKind::BreadthFirst => Self::BreadthFirst(BreadthFirstPathFinder),
        }
    }
}

impl Default for ConfiguredPathFinder {
    fn default() -> Self {
        Self::new(SearchKind::default(), TieBreak::default())
    }
}

impl PathFinder for ConfiguredPathFinder {
    fn find_path(
        &self,
        grid:    &Grid,
        start:   Cell,
        target:  Cell,
        blocked: &dyn Fn(Cell) -> bool,
    ) -> PathResult<Path> {
        match self {
            Self::AStar(f)        => f.find_path(grid, start, target, blocked),
            Self::BreadthFirst(f) => f.find_path(grid, start, target, blocked),
        }
    }
}
