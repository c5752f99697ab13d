//! Run configuration.
//!
//! Typically loaded from a JSON file by the driver binary and passed to
//! `gs_sim::WorldBuilder`.  Every field has a default matching the classic
//! 600×400 px board with 20 px cells.

// ── GridConfig ────────────────────────────────────────────────────────────────

/// Board size in pixels plus the pixel size of one cell.
///
/// Pixel dimensions must be multiples of `cell_size`; see
/// [`Grid::from_config`][crate::Grid::from_config].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub width_px:  u32,
    pub height_px: u32,
    pub cell_size: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { width_px: 600, height_px: 400, cell_size: 20 }
    }
}

// ── Search policy ─────────────────────────────────────────────────────────────

/// Which path-search algorithm the agent uses.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SearchKind {
    /// Best-first search with the Manhattan heuristic.
    #[default]
    AStar,
    /// Unweighted breadth-first search.
    BreadthFirst,
}

/// How A* orders open nodes with equal `f_cost`.
///
/// Both policies return a shortest path; they differ in *which* one when
/// several exist.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TieBreak {
    /// First pushed, first popped.
    #[default]
    InsertionOrder,
    /// Smaller `h_cost` first, then insertion order.
    LowestHeuristic,
}

impl TieBreak {
    pub fn as_str(self) -> &'static str {
        match self {
            TieBreak::InsertionOrder  => "insertion_order",
            TieBreak::LowestHeuristic => "lowest_heuristic",
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level configuration for one run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    pub grid: GridConfig,

    /// Master RNG seed.  The same seed always produces the same run.
    pub seed: u64,

    /// Hard cap on ticks per run.  A snake that never dies can loop forever;
    /// the cap ends such runs.
    pub max_ticks: u64,

    /// Advisory pacing for real-time drivers.  The core never sleeps.
    pub tick_rate_hz: u32,

    /// Emit a frame to output observers every N ticks.  0 disables frames.
    pub output_interval_ticks: u64,

    pub search: SearchKind,

    pub tie_break: TieBreak,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid:                  GridConfig::default(),
            seed:                  42,
            max_ticks:             10_000,
            tick_rate_hz:          10,
            output_interval_ticks: 1,
            search:                SearchKind::AStar,
            tie_break:             TieBreak::InsertionOrder,
        }
    }
}

impl SimConfig {
    /// `true` if a frame should be emitted at `tick`.
    #[inline]
    pub fn is_output_tick(&self, tick: u64) -> bool {
        self.output_interval_ticks > 0 && tick.is_multiple_of(self.output_interval_ticks)
    }
}
