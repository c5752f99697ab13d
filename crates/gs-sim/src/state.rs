//! Run state, per-tick frames, and end-of-run summaries.

use std::fmt;

use gs_body::Collision;
use gs_core::{Cell, Direction};

// ── SimState ──────────────────────────────────────────────────────────────────

/// Lifecycle of one run.  `Running` is the only non-terminal state.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimState {
    #[default]
    Running,
    /// The snake hit a wall or itself.
    Collided(Collision),
    /// The body covers the whole grid; there is nowhere left to put food.
    Filled,
}

impl SimState {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, SimState::Running)
    }

    /// Label used in CSV trace columns.
    pub fn as_str(self) -> &'static str {
        match self {
            SimState::Running                               => "running",
            SimState::Collided(Collision::Wall)             => "collided_wall",
            SimState::Collided(Collision::SelfIntersection) => "collided_self",
            SimState::Filled                                => "filled",
        }
    }
}

impl fmt::Display for SimState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Frame ─────────────────────────────────────────────────────────────────────

/// Everything a renderer needs after one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Ticks processed so far, including the one that produced this frame.
    pub tick:      u64,
    pub state:     SimState,
    pub head:      Cell,
    /// Head-first.
    pub body:      Vec<Cell>,
    /// `None` once the grid is full.
    pub target:    Option<Cell>,
    pub direction: Direction,
    pub score:     u32,
}

// ── RunSummary ────────────────────────────────────────────────────────────────

/// How a run ended.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunEnd {
    Collided(Collision),
    Filled,
    /// Still running when `SimConfig::max_ticks` was reached.
    TickLimit,
}

impl RunEnd {
    pub fn as_str(self) -> &'static str {
        match self {
            RunEnd::Collided(Collision::Wall)             => "collided_wall",
            RunEnd::Collided(Collision::SelfIntersection) => "collided_self",
            RunEnd::Filled                                => "filled",
            RunEnd::TickLimit                             => "tick_limit",
        }
    }
}

impl From<SimState> for RunEnd {
    fn from(state: SimState) -> Self {
        match state {
            SimState::Running     => RunEnd::TickLimit,
            SimState::Collided(c) => RunEnd::Collided(c),
            SimState::Filled      => RunEnd::Filled,
        }
    }
}

impl fmt::Display for RunEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    pub seed:   u64,
    pub ticks:  u64,
    pub score:  u32,
    /// Final body length.
    pub length: usize,
    pub end:    RunEnd,
}
