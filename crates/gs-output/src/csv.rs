//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `frames.csv`
//! - `runs.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{FrameRow, OutputResult, RunRow};

pub const FRAME_HEADERS: [&str; 10] = [
    "seed", "tick", "state", "head_x", "head_y", "target_x", "target_y", "direction", "score", "body",
];

pub const RUN_HEADERS: [&str; 5] = ["seed", "ticks", "score", "length", "end"];

/// Writes trace output to two CSV files.
pub struct CsvWriter {
    frames: Writer<File>,
    runs:   Writer<File>,
}

impl CsvWriter {
    /// Create the output directory if needed, open (truncating) both files,
    /// and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut frames = Writer::from_path(dir.join("frames.csv"))?;
        frames.write_record(FRAME_HEADERS)?;

        let mut runs = Writer::from_path(dir.join("runs.csv"))?;
        runs.write_record(RUN_HEADERS)?;

        Ok(Self { frames, runs })
    }
}

impl OutputWriter for CsvWriter {
    fn write_frame(&mut self, row: &FrameRow) -> OutputResult<()> {
        // Empty target columns once the grid is full.
        let (target_x, target_y) = match row.target {
            Some(t) => (t.x.to_string(), t.y.to_string()),
            None    => (String::new(), String::new()),
        };
        self.frames.write_record(&[
            row.seed.to_string(),
            row.tick.to_string(),
            row.state.to_owned(),
            row.head.x.to_string(),
            row.head.y.to_string(),
            target_x,
            target_y,
            row.direction.to_owned(),
            row.score.to_string(),
            row.body.clone(),
        ])?;
        Ok(())
    }

    fn write_run(&mut self, row: &RunRow) -> OutputResult<()> {
        self.runs.write_record(&[
            row.seed.to_string(),
            row.ticks.to_string(),
            row.score.to_string(),
            row.length.to_string(),
            row.end.to_owned(),
        ])?;
        Ok(())
    }

    fn flush(&mut self) -> OutputResult<()> {
        self.frames.flush()?;
        self.runs.flush()?;
        Ok(())
    }
}
