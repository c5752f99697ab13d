//! Path-search error type.

use thiserror::Error;

use gs_core::Cell;

/// Errors produced by `gs-path`.
///
/// Both variants are caller contract violations.  A target that simply
/// cannot be reached is reported as an empty path, not an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("search start {0} is outside the grid")]
    StartOutOfBounds(Cell),

    #[error("search target {0} is outside the grid")]
    TargetOutOfBounds(Cell),
}

pub type PathResult<T> = Result<T, PathError>;
