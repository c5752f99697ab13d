//! Grid geometry: bounds checks, neighbors, and dense cell indexing.
//!
//! `Grid` is a plain `Copy` value holding the dimensions in cells plus the
//! pixel size of one cell.  All methods are pure.
//!
//! # Dense indexing
//!
//! Search bookkeeping (closed sets, visited flags) uses flat `Vec`s indexed by
//! [`Grid::index`], row-major:
//!
//! ```text
//! index(x, y) = y * width + x
//! ```

use crate::{Cell, CoreError, CoreResult, Direction, GridConfig};

/// A fixed-size `width × height` grid of cells.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width:     u32,
    height:    u32,
    cell_size: u32,
}

impl Grid {
    /// Grid of `width × height` cells with a one-pixel cell size.
    ///
    /// Returns [`CoreError::EmptyGrid`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> CoreResult<Self> {
        Self::with_cell_size(width, height, 1)
    }

    pub fn with_cell_size(width: u32, height: u32, cell_size: u32) -> CoreResult<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::EmptyGrid { width, height });
        }
        if cell_size == 0 {
            return Err(CoreError::Config("cell_size must be positive".into()));
        }
        // Dense indices must fit comfortably in i32 coordinate space.
        if width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(CoreError::Config(format!(
                "grid {width}x{height} exceeds coordinate range"
            )));
        }
        Ok(Self { width, height, cell_size })
    }

    /// Derive the grid from pixel dimensions.
    ///
    /// Both pixel dimensions must be positive multiples of `cell_size`.
    pub fn from_config(config: &GridConfig) -> CoreResult<Self> {
        let GridConfig { width_px, height_px, cell_size } = *config;
        if cell_size == 0 {
            return Err(CoreError::Config("cell_size must be positive".into()));
        }
        if width_px % cell_size != 0 || height_px % cell_size != 0 {
            return Err(CoreError::NotCellAligned { width_px, height_px, cell_size });
        }
        Self::with_cell_size(width_px / cell_size, height_px / cell_size, cell_size)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The cell at the centre of the grid (rounded down).
    pub fn center(&self) -> Cell {
        Cell::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    // ── Geometry ──────────────────────────────────────────────────────────

    /// `true` if `cell` lies within `[0, width) × [0, height)`.
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as u32) < self.width
            && (cell.y as u32) < self.height
    }

    /// In-bounds neighbors of `cell`, in the fixed order Up, Down, Left, Right.
    ///
    /// The order matters: it decides which of several equal-cost paths a
    /// search returns.
    #[inline]
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = (Direction, Cell)> + '_ {
        Direction::ALL
            .into_iter()
            .map(move |d| (d, cell.step(d)))
            .filter(move |&(_, c)| self.in_bounds(c))
    }

    /// Row-major dense index of an in-bounds cell.
    ///
    /// Returns `None` for out-of-bounds cells.
    #[inline]
    pub fn index(&self, cell: Cell) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| cell.y as usize * self.width as usize + cell.x as usize)
    }

    /// Inverse of [`index`][Self::index].
    #[inline]
    pub fn cell_at(&self, index: usize) -> Option<Cell> {
        (index < self.cell_count()).then(|| {
            let w = self.width as usize;
            Cell::new((index % w) as i32, (index / w) as i32)
        })
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cell_count()).filter_map(move |i| self.cell_at(i))
    }

    /// Top-left pixel of `cell`, for the rendering collaborator.
    #[inline]
    pub fn to_pixels(&self, cell: Cell) -> (i64, i64) {
        let s = self.cell_size as i64;
        (cell.x as i64 * s, cell.y as i64 * s)
    }
}
