//! The `OutputWriter` trait implemented by trace backends.

use crate::{FrameRow, OutputResult, RunRow};

pub trait OutputWriter {
    fn write_frame(&mut self, row: &FrameRow) -> OutputResult<()>;

    fn write_run(&mut self, row: &RunRow) -> OutputResult<()>;

    /// Push buffered rows to the underlying files.  Safe to call more than
    /// once; writing may continue afterwards.
    fn flush(&mut self) -> OutputResult<()>;
}
