//! The `World` struct and its simulation step.

use tracing::{debug, info, trace};

use gs_body::{Body, BodyError};
use gs_core::{Cell, Direction, Grid, SimConfig, SimRng};
use gs_path::{ConfiguredPathFinder, PathFinder};

use crate::{Frame, RunSummary, SimResult, SimState, WorldObserver, plan_direction};

/// All state of one run.
///
/// The world is single-threaded and owns everything it mutates: the body,
/// the target, the current direction, the score, and its RNG.  Each call to
/// [`step`][Self::step] is one atomic tick; the search finishes before any
/// state changes.
///
/// Create via [`WorldBuilder`][crate::WorldBuilder].
pub struct World<P: PathFinder = ConfiguredPathFinder> {
    pub config: SimConfig,

    pub(crate) grid:      Grid,
    pub(crate) body:      Body,
    /// Last placed target.  Stale once the state is `Filled`.
    pub(crate) target:    Cell,
    pub(crate) direction: Direction,
    pub(crate) score:     u32,
    pub(crate) state:     SimState,
    pub(crate) tick:      u64,
    pub(crate) rng:       SimRng,
    pub(crate) finder:    P,
}

impl<P: PathFinder> World<P> {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// The current target.  `None` once the grid is full.
    pub fn target(&self) -> Option<Cell> {
        (self.state != SimState::Filled).then_some(self.target)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    /// Ticks processed so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Snapshot of the current state for rendering.
    pub fn frame(&self) -> Frame {
        Frame {
            tick:      self.tick,
            state:     self.state,
            head:      self.body.head(),
            body:      self.body.cells(),
            target:    self.target(),
            direction: self.direction,
            score:     self.score,
        }
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            seed:   self.config.seed,
            ticks:  self.tick,
            score:  self.score,
            length: self.body.len(),
            end:    self.state.into(),
        }
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Process one tick and return the resulting frame.
    ///
    /// A terminal world is left untouched; the current frame is returned.
    pub fn step(&mut self) -> SimResult<Frame> {
        if self.state.is_terminal() {
            return Ok(self.frame());
        }

        // ── ① Search ─────────────────────────────────────────────────────
        let head = self.body.head();
        let body = &self.body;
        let path = self
            .finder
            .find_path(&self.grid, head, self.target, &|c| body.occupies(c, false))?;
        trace!(
            tick = self.tick,
            path_len = path.len(),
            expanded = path.nodes_expanded,
            "searched {head} -> {}",
            self.target
        );

        // ── ② Plan ───────────────────────────────────────────────────────
        //
        // With no path the snake carries on straight; there is nothing
        // better to go on.
        if let Some(next) = path.first_step() {
            self.direction = plan_direction(self.direction, head, next)?;
        }

        // ── ③ Move / ④ Collide ──────────────────────────────────────────
        let candidate = head.step(self.direction);
        self.tick += 1;
        if let Some(collision) = self.body.check_move(&self.grid, candidate) {
            self.state = SimState::Collided(collision);
            debug!(tick = self.tick, %candidate, %collision, "collision");
            return Ok(self.frame());
        }

        // ── ⑤ Advance ────────────────────────────────────────────────────
        let grew = candidate == self.target;
        self.body.advance(candidate, grew)?;
        if grew {
            self.score += 1;
            match self.body.place_target(&self.grid, &mut self.rng) {
                Ok(next) => {
                    self.target = next;
                    debug!(tick = self.tick, score = self.score, target = %next, "target eaten");
                }
                Err(BodyError::GridExhausted { cells }) => {
                    self.state = SimState::Filled;
                    debug!(tick = self.tick, score = self.score, cells, "grid filled");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(self.frame())
    }

    /// Step until the run ends or `config.max_ticks` is reached.
    pub fn run<O: WorldObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        while !self.state.is_terminal() && self.tick < self.config.max_ticks {
            self.step_observed(observer)?;
        }
        let summary = self.summary();
        info!(
            seed = summary.seed,
            ticks = summary.ticks,
            score = summary.score,
            length = summary.length,
            end = %summary.end,
            "run finished"
        );
        observer.on_run_end(&summary);
        Ok(summary)
    }

    /// Step at most `n` times, stopping early if the run ends.  Ignores
    /// `max_ticks` and does not call `on_run_end`.
    ///
    /// Useful for tests and for drivers that pace ticks themselves.
    pub fn run_ticks<O: WorldObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<SimState> {
        for _ in 0..n {
            if self.state.is_terminal() {
                break;
            }
            self.step_observed(observer)?;
        }
        Ok(self.state)
    }

    fn step_observed<O: WorldObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let score_before = self.score;
        let frame = self.step()?;
        if frame.score > score_before {
            observer.on_target_eaten(frame.tick, frame.score, frame.target);
        }
        if self.config.is_output_tick(frame.tick) || frame.state.is_terminal() {
            observer.on_frame(&frame);
        }
        Ok(())
    }
}
