//! Body error type.

use thiserror::Error;

use gs_core::Cell;

/// Errors produced by `gs-body`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BodyError {
    #[error("a body needs at least one cell")]
    Empty,

    #[error("cell {0} appears twice in the body")]
    DuplicateCell(Cell),

    #[error("cell {0} is outside the grid")]
    OutOfBounds(Cell),

    /// The body covers every cell, so there is nowhere to put a target.
    #[error("no free cell left on a grid of {cells} cells")]
    GridExhausted { cells: usize },
}

pub type BodyResult<T> = Result<T, BodyError>;
