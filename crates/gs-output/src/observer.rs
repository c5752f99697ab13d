//! `FrameOutputObserver<W>` — bridges `WorldObserver` to an `OutputWriter`.

use gs_sim::{Frame, RunSummary, WorldObserver};

use crate::row::{FrameRow, RunRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`WorldObserver`] that writes frames and run summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `WorldObserver`
/// methods have no return value.  After `world.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct FrameOutputObserver<W: OutputWriter> {
    writer:     W,
    seed:       u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> FrameOutputObserver<W> {
    /// `seed` labels every frame row, so several runs can share one file.
    pub fn new(writer: W, seed: u64) -> Self {
        Self { writer, seed, last_error: None }
    }

    /// Label subsequent frames with a different run seed.
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
    }

    /// Take the stored write error (if any).  `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to write extra rows after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> WorldObserver for FrameOutputObserver<W> {
    fn on_frame(&mut self, frame: &Frame) {
        let row = FrameRow::from_frame(self.seed, frame);
        let result = self.writer.write_frame(&row);
        self.store_err(result);
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        let result = self
            .writer
            .write_run(&RunRow::from(summary))
            .and_then(|()| self.writer.flush());
        self.store_err(result);
    }
}
