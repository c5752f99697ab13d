//! `Body`: the snake's ordered segments.
//!
//! # Data layout
//!
//! Two structures are kept in lock-step:
//!
//! - `segments: VecDeque<Cell>`: head at the front, tail at the back.  One
//!   tick of motion is a `push_front` plus (unless growing) a `pop_back`.
//! - `occupied: FxHashSet<Cell>`: the same cells as a set, for O(1)
//!   "is this cell part of the body" queries from the search inner loop.
//!
//! Invariant: no cell appears twice and there is always at least one segment.
//! Every mutation goes through [`Body::advance`], which enforces both.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use gs_core::{Cell, Grid};

use crate::{BodyError, BodyResult};

// ── Collision ─────────────────────────────────────────────────────────────────

/// Why a proposed head position ends the run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Collision {
    /// The step leaves the grid.
    Wall,
    /// The step lands on the snake's own body.
    SelfIntersection,
}

impl Collision {
    pub fn as_str(self) -> &'static str {
        match self {
            Collision::Wall             => "wall",
            Collision::SelfIntersection => "self",
        }
    }
}

impl std::fmt::Display for Collision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Body ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Body {
    segments: VecDeque<Cell>,
    occupied: FxHashSet<Cell>,
}

impl Body {
    /// A one-segment body at `head`.
    pub fn new(head: Cell) -> Self {
        let mut occupied = FxHashSet::default();
        occupied.insert(head);
        Self { segments: VecDeque::from([head]), occupied }
    }

    /// Build a body from head-first cells.
    ///
    /// Rejects empty input, duplicates, and cells outside `grid`.  Cells need
    /// not be contiguous; scenario tests sometimes place bodies freely.
    pub fn from_cells<I>(grid: &Grid, cells: I) -> BodyResult<Self>
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut segments = VecDeque::new();
        let mut occupied = FxHashSet::default();
        for cell in cells {
            if !grid.in_bounds(cell) {
                return Err(BodyError::OutOfBounds(cell));
            }
            if !occupied.insert(cell) {
                return Err(BodyError::DuplicateCell(cell));
            }
            segments.push_back(cell);
        }
        if segments.is_empty() {
            return Err(BodyError::Empty);
        }
        Ok(Self { segments, occupied })
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn head(&self) -> Cell {
        self.segments[0]
    }

    #[inline]
    pub fn tail(&self) -> Cell {
        self.segments[self.segments.len() - 1]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`; a body has at least one segment.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments head-first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.segments.iter().copied()
    }

    /// Owned head-first copy of the segments.
    pub fn cells(&self) -> Vec<Cell> {
        self.segments.iter().copied().collect()
    }

    /// `true` if `cell` is part of the body.
    ///
    /// With `include_head = false` the head's own cell does not count.  The
    /// search uses that form: the head is where it starts from, not an
    /// obstacle.
    #[inline]
    pub fn occupies(&self, cell: Cell, include_head: bool) -> bool {
        self.occupied.contains(&cell) && (include_head || cell != self.head())
    }

    /// Classify a proposed new head position.
    ///
    /// Returns `None` if the move is legal.  The current tail cell is legal to
    /// enter: it is vacated on the same tick.  That cell can never hold the
    /// target, so entering it never coincides with growth.
    pub fn check_move(&self, grid: &Grid, candidate: Cell) -> Option<Collision> {
        if !grid.in_bounds(candidate) {
            return Some(Collision::Wall);
        }
        let vacating_tail = self.len() > 1 && candidate == self.tail();
        if self.occupies(candidate, false) && !vacating_tail {
            return Some(Collision::SelfIntersection);
        }
        None
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Move one cell forward: `new_head` becomes the head and, unless the
    /// snake `grew`, the tail is dropped.
    ///
    /// The tail is removed before the head is inserted so that stepping into
    /// the vacating tail cell keeps the occupancy set consistent.  Returns
    /// [`BodyError::DuplicateCell`] (leaving the body unchanged) if the move
    /// would overlap the body.
    pub fn advance(&mut self, new_head: Cell, grew: bool) -> BodyResult<()> {
        let vacated = if grew { None } else { self.segments.back().copied() };

        let overlaps = self.occupied.contains(&new_head) && vacated != Some(new_head);
        if overlaps {
            return Err(BodyError::DuplicateCell(new_head));
        }

        if let Some(tail) = vacated {
            self.segments.pop_back();
            self.occupied.remove(&tail);
        }
        self.segments.push_front(new_head);
        self.occupied.insert(new_head);
        Ok(())
    }
}
