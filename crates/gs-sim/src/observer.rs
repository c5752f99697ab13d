//! Observer trait for renderers, trace writers, and progress reporting.

use gs_core::Cell;

use crate::{Frame, RunSummary};

/// Callbacks invoked by [`World::run`][crate::World::run] and
/// [`World::run_ticks`][crate::World::run_ticks].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: score printer
///
/// ```rust,ignore
/// struct ScorePrinter;
///
/// impl WorldObserver for ScorePrinter {
///     fn on_target_eaten(&mut self, tick: u64, score: u32, _next: Option<Cell>) {
///         println!("tick {tick}: score {score}");
///     }
/// }
/// ```
pub trait WorldObserver {
    /// Called after every tick that falls on `SimConfig::output_interval_ticks`,
    /// and always for the tick that ends the run.
    fn on_frame(&mut self, _frame: &Frame) {}

    /// Called when the head reaches the target.  `next_target` is `None` when
    /// the grid is now full.
    fn on_target_eaten(&mut self, _tick: u64, _score: u32, _next_target: Option<Cell>) {}

    /// Called once when [`World::run`][crate::World::run] returns.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`WorldObserver`] that does nothing.
pub struct NoopObserver;

impl WorldObserver for NoopObserver {}
