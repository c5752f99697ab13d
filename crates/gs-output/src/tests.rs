//! Tests for gs-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use gs_core::Cell;

    use crate::csv::{CsvWriter, FRAME_HEADERS, RUN_HEADERS};
    use crate::row::{FrameRow, RunRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn frame_row(tick: u64, target: Option<Cell>) -> FrameRow {
        FrameRow {
            seed:      9,
            tick,
            state:     "running",
            head:      Cell::new(3, 4),
            target,
            direction: "up",
            score:     2,
            body:      "3:4;3:5;3:6".into(),
        }
    }

    #[test]
    fn csv_files_created_in_new_directory() {
        let dir = tmp();
        let out = dir.path().join("nested").join("trace");
        let _w = CsvWriter::new(&out).unwrap();
        assert!(out.join("frames.csv").exists());
        assert!(out.join("runs.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.flush().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("frames.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, FRAME_HEADERS);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("runs.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, RUN_HEADERS);
    }

    #[test]
    fn frame_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_frame(&frame_row(1, Some(Cell::new(0, 7)))).unwrap();
        w.write_frame(&frame_row(2, None)).unwrap();
        w.flush().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("frames.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "1");     // tick
        assert_eq!(&rows[0][3], "3");     // head_x
        assert_eq!(&rows[0][4], "4");     // head_y
        assert_eq!(&rows[0][5], "0");     // target_x
        assert_eq!(&rows[0][6], "7");     // target_y
        assert_eq!(&rows[0][9], "3:4;3:5;3:6");
        assert_eq!(&rows[1][5], "");      // grid full: no target
        assert_eq!(&rows[1][6], "");
    }

    #[test]
    fn run_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let row = RunRow { seed: 1, ticks: 250, score: 12, length: 13, end: "collided_self" };
        w.write_run(&row).unwrap();
        w.flush().unwrap();
        // Flushing twice is harmless.
        w.flush().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("runs.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "250");
        assert_eq!(&rows[0][4], "collided_self");
    }
}

#[cfg(test)]
mod observer_tests {
    use gs_core::{GridConfig, SimConfig};
    use gs_sim::WorldBuilder;

    use crate::row::{FrameRow, RunRow};
    use crate::writer::OutputWriter;
    use crate::{CsvWriter, FrameOutputObserver, OutputResult};

    /// In-memory writer for observer tests.
    #[derive(Default)]
    struct MemWriter {
        frames:  Vec<FrameRow>,
        runs:    Vec<RunRow>,
        flushes: usize,
    }

    impl OutputWriter for MemWriter {
        fn write_frame(&mut self, row: &FrameRow) -> OutputResult<()> {
            self.frames.push(row.clone());
            Ok(())
        }

        fn write_run(&mut self, row: &RunRow) -> OutputResult<()> {
            self.runs.push(*row);
            Ok(())
        }

        fn flush(&mut self) -> OutputResult<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn observer_forwards_frames_and_summary() {
        let config = SimConfig { max_ticks: 50, seed: 5, ..SimConfig::default() };
        let mut world = WorldBuilder::new(config).build().unwrap();
        let mut obs = FrameOutputObserver::new(MemWriter::default(), 5);
        let summary = world.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert_eq!(w.frames.len() as u64, summary.ticks);
        assert!(w.frames.iter().all(|f| f.seed == 5));
        assert_eq!(w.frames.last().map(|f| f.score), Some(summary.score));
        assert_eq!(w.runs, vec![RunRow::from(&summary)]);
        assert_eq!(w.flushes, 1);
    }

    #[test]
    fn end_to_end_csv_trace() {
        let dir = tempfile::tempdir().unwrap();
        let config = SimConfig {
            grid: GridConfig { width_px: 10, height_px: 10, cell_size: 1 },
            max_ticks: 40,
            ..SimConfig::default()
        };
        let mut world = WorldBuilder::new(config.clone()).build().unwrap();
        let mut obs = FrameOutputObserver::new(CsvWriter::new(dir.path()).unwrap(), config.seed);
        let summary = world.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
        drop(obs);

        let mut frames = csv::Reader::from_path(dir.path().join("frames.csv")).unwrap();
        assert_eq!(frames.records().count() as u64, summary.ticks);

        let mut runs = csv::Reader::from_path(dir.path().join("runs.csv")).unwrap();
        let rows: Vec<_> = runs.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], summary.ticks.to_string().as_str());
        assert_eq!(&rows[0][4], summary.end.as_str());
    }
}
