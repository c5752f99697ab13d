use gs_body::BodyError;
use gs_core::{Cell, CoreError};
use gs_path::PathError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    /// A path step that is not a single axis move.  Only a faulty
    /// `PathFinder` can produce one.
    #[error("path step {from} -> {to} is not a single axis move")]
    NonAdjacentStep { from: Cell, to: Cell },

    #[error("grid error: {0}")]
    Core(#[from] CoreError),

    #[error("body error: {0}")]
    Body(#[from] BodyError),

    #[error("path search error: {0}")]
    Path(#[from] PathError),
}

pub type SimResult<T> = Result<T, SimError>;
