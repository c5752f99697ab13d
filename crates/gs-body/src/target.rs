//! Target (food) placement.
//!
//! Placement samples uniformly random cells and rejects occupied ones.  On a
//! mostly empty board that is a handful of draws.  Near full occupancy the
//! expected draw count grows as `cells / free`, so after a fixed budget of
//! rejections we switch to picking uniformly among the enumerated free cells.
//! Both phases draw from the same uniform distribution over free cells.

use tracing::warn;

use gs_core::{Cell, Grid, SimRng};

use crate::{Body, BodyError, BodyResult};

/// Rejections allowed per grid cell before falling back to enumeration.
const REJECTION_BUDGET_PER_CELL: usize = 4;

impl Body {
    /// Pick a uniformly random in-bounds cell the body does not occupy.
    ///
    /// Returns [`BodyError::GridExhausted`] when the body covers the whole
    /// grid.
    pub fn place_target(&self, grid: &Grid, rng: &mut SimRng) -> BodyResult<Cell> {
        let cells = grid.cell_count();
        if self.len() >= cells {
            return Err(BodyError::GridExhausted { cells });
        }

        for _ in 0..cells.saturating_mul(REJECTION_BUDGET_PER_CELL) {
            let cell = rng.random_cell(grid);
            if !self.occupies(cell, true) {
                return Ok(cell);
            }
        }

        let free: Vec<Cell> = grid.cells().filter(|&c| !self.occupies(c, true)).collect();
        warn!(
            body_len = self.len(),
            free = free.len(),
            "target sampling exceeded rejection budget; choosing from free cells"
        );
        rng.choose(&free)
            .copied()
            .ok_or(BodyError::GridExhausted { cells })
    }
}
