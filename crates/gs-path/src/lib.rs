//! `gs-path` — shortest-path search over the grid with dynamic obstacles.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`finder`]   | `PathFinder` trait, `Path`, `ConfiguredPathFinder`        |
//! | [`astar`]    | `AStarPathFinder` — Manhattan-heuristic best-first search |
//! | [`bfs`]      | `BreadthFirstPathFinder` — unweighted BFS                 |
//! | [`error`]    | `PathError`, `PathResult<T>`                              |
//!
//! Obstacles are supplied per query as a predicate, so the same finder serves
//! any occupancy model.  An unreachable target is not an error: the finder
//! returns an empty [`Path`].

pub mod astar;
pub mod bfs;
pub mod error;
pub mod finder;


pub use astar::AStarPathFinder;
pub use bfs::BreadthFirstPathFinder;
pub use error::{PathError, PathResult};
pub use finder::{ConfiguredPathFinder, Path, PathFinder};
