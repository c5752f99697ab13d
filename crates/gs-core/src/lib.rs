//! `gs-core` — foundational types for the `grid_snake` workspace.
//!
//! This crate is a dependency of every other `gs-*` crate.  It has no `gs-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`cell`]   | `Cell`, `Direction`                                       |
//! | [`grid`]   | `Grid` — bounds checks, neighbors, dense cell indexing    |
//! | [`config`] | `GridConfig`, `SimConfig`, `SearchKind`, `TieBreak`       |
//! | [`rng`]    | `SimRng` (seeded, per-world)                              |
//! | [`error`]  | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Cell, Direction};
pub use config::{GridConfig, SearchKind, SimConfig, TieBreak};
pub use error::{CoreError, CoreResult};
pub use grid::Grid;
pub use rng::SimRng;
