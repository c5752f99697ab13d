//! `gs-body` — the snake's body as an occupancy model.
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`body`]    | `Body` — ordered segments plus an occupancy set       |
//! | [`target`]  | `Body::place_target` — rejection-sampled food cell    |
//! | [`error`]   | `BodyError`, `BodyResult<T>`                          |

pub mod body;
pub mod error;
pub mod target;


pub use body::{Body, Collision};
pub use error::{BodyError, BodyResult};
