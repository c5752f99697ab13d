//! `gs-sim` — the per-tick simulation step for the grid_snake agent.
//!
//! # One tick
//!
//! ```text
//! step():
//!   ① Search   — PathFinder from head to target; blocked = body minus head.
//!   ② Plan     — first path cell → Direction (no reversal); no path → keep.
//!   ③ Move     — candidate = head + direction.
//!   ④ Collide  — wall or own body → Collided (terminal).
//!   ⑤ Advance  — grow iff candidate == target; on growth score += 1 and
//!                place a new target, or → Filled when no cell is free.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs [`run_batch`] games on Rayon's thread pool.       |
//! | `serde`    | Derives `Serialize`/`Deserialize` on frames/summaries. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gs_core::SimConfig;
//! use gs_sim::{NoopObserver, WorldBuilder};
//!
//! let mut world = WorldBuilder::new(SimConfig::default()).build()?;
//! let summary = world.run(&mut NoopObserver)?;
//! println!("{} after {} ticks, score {}", summary.end, summary.ticks, summary.score);
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod observer;
pub mod planner;
pub mod state;
pub mod world;

#[cfg(test)]
mod tests;

pub use batch::{BatchStats, run_batch};
pub use builder::WorldBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, WorldObserver};
pub use planner::plan_direction;
pub use state::{Frame, RunEnd, RunSummary, SimState};
pub use world::World;
