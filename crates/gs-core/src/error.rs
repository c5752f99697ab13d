//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where grid construction can fail.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("grid must have at least one cell (got {width}x{height})")]
    EmptyGrid { width: u32, height: u32 },

    #[error("board {width_px}x{height_px} px is not a multiple of cell size {cell_size} px")]
    NotCellAligned {
        width_px:  u32,
        height_px: u32,
        cell_size: u32,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `gs-core`.
pub type CoreResult<T> = Result<T, CoreError>;
