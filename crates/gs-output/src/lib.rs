//! `gs-output` — trace writers for grid_snake runs.
//!
//! | File         | One row per                                            |
//! |--------------|--------------------------------------------------------|
//! | `frames.csv` | emitted frame (every `output_interval_ticks` ticks)    |
//! | `runs.csv`   | finished run                                           |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`FrameOutputObserver`], which implements `gs_sim::WorldObserver`.  The
//! trace is write-only analysis output; nothing in the workspace reads it
//! back.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gs_output::{CsvWriter, FrameOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./trace"))?;
//! let mut obs = FrameOutputObserver::new(writer, config.seed);
//! world.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::FrameOutputObserver;
pub use row::{FrameRow, RunRow};
pub use writer::OutputWriter;
