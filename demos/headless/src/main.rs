//! headless — drives grid_snake games without a window.
//!
//! One run (`--runs 1`, the default) steps a single world, optionally
//! printing every emitted frame as ASCII and writing a CSV trace.  More runs
//! play independent seeded games (on Rayon's pool) and print aggregate
//! statistics.
//!
//! Log verbosity follows `RUST_LOG` (default `info`); `RUST_LOG=gs_sim=trace`
//! shows every search.

mod render;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use gs_core::{Cell, Grid, SearchKind, SimConfig, TieBreak};
use gs_output::{CsvWriter, FrameOutputObserver, OutputWriter, RunRow};
use gs_sim::{BatchStats, Frame, RunSummary, WorldBuilder, WorldObserver, run_batch};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON run configuration; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    seed: Option<u64>,

    /// Board width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Board height in pixels.
    #[arg(long)]
    height: Option<u32>,

    #[arg(long)]
    cell_size: Option<u32>,

    #[arg(long)]
    max_ticks: Option<u64>,

    #[arg(long, value_enum)]
    search: Option<SearchArg>,

    #[arg(long, value_enum)]
    tie_break: Option<TieBreakArg>,

    /// Emit a frame every N ticks.
    #[arg(long)]
    interval: Option<u64>,

    /// Number of independent games.
    #[arg(short, long, default_value_t = 1)]
    runs: u64,

    /// Directory for `frames.csv` / `runs.csv`.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Print each emitted frame as ASCII (single run only).
    #[arg(long)]
    ascii: bool,

    /// Pace ASCII frames at `tick_rate_hz`.
    #[arg(long)]
    realtime: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum SearchArg {
    AStar,
    BreadthFirst,
}

impl From<SearchArg> for SearchKind {
    fn from(arg: SearchArg) -> Self {
        match arg {
            SearchArg::AStar        => SearchKind::AStar,
            SearchArg::BreadthFirst => SearchKind::BreadthFirst,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum TieBreakArg {
    InsertionOrder,
    LowestHeuristic,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::InsertionOrder  => TieBreak::InsertionOrder,
            TieBreakArg::LowestHeuristic => TieBreak::LowestHeuristic,
        }
    }
}

impl Args {
    fn sim_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str::<SimConfig>(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => SimConfig::default(),
        };

        if let Some(v) = self.seed      { config.seed = v; }
        if let Some(v) = self.width     { config.grid.width_px = v; }
        if let Some(v) = self.height    { config.grid.height_px = v; }
        if let Some(v) = self.cell_size { config.grid.cell_size = v; }
        if let Some(v) = self.max_ticks { config.max_ticks = v; }
        if let Some(v) = self.search    { config.search = v.into(); }
        if let Some(v) = self.tie_break { config.tie_break = v.into(); }
        if let Some(v) = self.interval  { config.output_interval_ticks = v; }

        if config.output_interval_ticks == 0 {
            bail!("output interval must be at least 1 tick");
        }
        Ok(config)
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints frames and forwards them to the optional CSV trace.
struct DriverObserver {
    grid:  Grid,
    ascii: bool,
    pace:  Option<Duration>,
    trace: Option<FrameOutputObserver<CsvWriter>>,
}

impl WorldObserver for DriverObserver {
    fn on_frame(&mut self, frame: &Frame) {
        if self.ascii {
            println!("{}", render::render(&self.grid, frame));
            if let Some(pace) = self.pace {
                std::thread::sleep(pace);
            }
        }
        if let Some(trace) = &mut self.trace {
            trace.on_frame(frame);
        }
    }

    fn on_target_eaten(&mut self, tick: u64, score: u32, next_target: Option<Cell>) {
        match next_target {
            Some(t) => info!(tick, score, "target eaten, next at {t}"),
            None    => info!(tick, score, "target eaten, grid full"),
        }
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        if let Some(trace) = &mut self.trace {
            trace.on_run_end(summary);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = args.sim_config()?;
    info!(
        seed = config.seed,
        width_px = config.grid.width_px,
        height_px = config.grid.height_px,
        cell_size = config.grid.cell_size,
        search = ?config.search,
        tie_break = config.tie_break.as_str(),
        "configured"
    );

    if args.runs == 0 {
        bail!("--runs must be at least 1");
    }
    if args.runs == 1 {
        single_run(&args, config)
    } else {
        if args.ascii {
            warn!("--ascii is ignored for batch runs");
        }
        batch(&args, &config)
    }
}

fn single_run(args: &Args, config: SimConfig) -> Result<()> {
    let pace = (args.realtime && config.tick_rate_hz > 0)
        .then(|| Duration::from_secs_f64(1.0 / f64::from(config.tick_rate_hz)));
    let trace = match &args.out {
        Some(dir) => Some(FrameOutputObserver::new(CsvWriter::new(dir)?, config.seed)),
        None      => None,
    };

    let mut world = WorldBuilder::new(config).build()?;
    let mut observer = DriverObserver { grid: *world.grid(), ascii: args.ascii, pace, trace };

    let t0 = Instant::now();
    let summary = world.run(&mut observer)?;
    let elapsed = t0.elapsed();

    if let Some(mut trace) = observer.trace.take() {
        if let Some(e) = trace.take_error() {
            return Err(e).context("writing trace");
        }
    }

    println!(
        "seed {}: {} after {} ticks, score {}, length {} ({:.2?})",
        summary.seed, summary.end, summary.ticks, summary.score, summary.length, elapsed
    );
    Ok(())
}

fn batch(args: &Args, config: &SimConfig) -> Result<()> {
    let t0 = Instant::now();
    let summaries = run_batch(config, args.runs)?;
    let elapsed = t0.elapsed();

    if let Some(dir) = &args.out {
        let mut writer = CsvWriter::new(dir)?;
        for s in &summaries {
            writer.write_run(&RunRow::from(s))?;
        }
        writer.flush()?;
        info!(dir = %dir.display(), runs = summaries.len(), "wrote runs.csv");
    }

    let stats = BatchStats::from_summaries(&summaries);
    println!("=== {} runs in {:.2?} ===", stats.runs, elapsed);
    println!("score  mean {:.2}  max {}", stats.mean_score, stats.max_score);
    println!("ticks  mean {:.1}", stats.mean_ticks);
    println!(
        "end    wall {}  self {}  filled {}  tick_limit {}",
        stats.wall_collisions, stats.self_collisions, stats.filled, stats.tick_limit
    );
    Ok(())
}
