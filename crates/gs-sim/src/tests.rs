//! Integration tests for gs-sim.

use std::collections::HashSet;

use gs_body::Collision;
use gs_core::{Cell, Direction, GridConfig, SimConfig};

use crate::{Frame, NoopObserver, RunSummary, WorldBuilder, WorldObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Config for a `w × h` cell grid with 1 px cells.
fn test_config(w: u32, h: u32) -> SimConfig {
    SimConfig {
        grid: GridConfig { width_px: w, height_px: h, cell_size: 1 },
        seed: 7,
        max_ticks: 5_000,
        ..SimConfig::default()
    }
}

fn cells(list: &[(i32, i32)]) -> Vec<Cell> {
    list.iter().map(|&c| Cell::from(c)).collect()
}

/// Body invariants every frame must satisfy.
fn assert_frame_consistent(frame: &Frame, width: i32, height: i32) {
    let unique: HashSet<Cell> = frame.body.iter().copied().collect();
    assert_eq!(unique.len(), frame.body.len(), "duplicate body cell at tick {}", frame.tick);
    assert_eq!(frame.body[0], frame.head);
    for c in &frame.body {
        assert!((0..width).contains(&c.x) && (0..height).contains(&c.y), "{c} off grid");
    }
    for pair in frame.body.windows(2) {
        assert!(pair[0].is_adjacent(pair[1]), "body gap {} -> {}", pair[0], pair[1]);
    }
    if let Some(t) = frame.target {
        assert!(!unique.contains(&t), "target {t} on body");
    }
}

/// Observer that records every callback.
#[derive(Default)]
struct Recorder {
    frames:  Vec<Frame>,
    eaten:   Vec<(u64, u32)>,
    summary: Option<RunSummary>,
}

impl WorldObserver for Recorder {
    fn on_frame(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }

    fn on_target_eaten(&mut self, tick: u64, score: u32, _next: Option<Cell>) {
        self.eaten.push((tick, score));
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        assert!(self.summary.is_none(), "on_run_end called twice");
        self.summary = Some(*summary);
    }
}

// ── Direction planner ─────────────────────────────────────────────────────────

#[cfg(test)]
mod planner_tests {
    use super::*;
    use crate::{SimError, plan_direction};

    #[test]
    fn never_reverses() {
        let head = Cell::new(5, 5);
        for current in Direction::ALL {
            for wanted in Direction::ALL {
                let got = plan_direction(current, head, head.step(wanted)).unwrap();
                assert_ne!(got, current.opposite());
                if wanted == current.opposite() {
                    assert_eq!(got, current);
                } else {
                    assert_eq!(got, wanted);
                }
            }
        }
    }

    #[test]
    fn non_adjacent_step_is_an_error() {
        let r = plan_direction(Direction::Up, Cell::new(0, 0), Cell::new(1, 1));
        assert!(matches!(r, Err(SimError::NonAdjacentStep { .. })));
        let r = plan_direction(Direction::Up, Cell::new(0, 0), Cell::new(0, 0));
        assert!(r.is_err());
    }
}

// ── WorldBuilder ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::{SimError, SimState};

    #[test]
    fn defaults_place_one_cell_at_centre() {
        let world = WorldBuilder::new(SimConfig::default()).build().unwrap();
        assert_eq!(world.grid().width(), 30);
        assert_eq!(world.grid().height(), 20);
        assert_eq!(world.body().len(), 1);
        assert_eq!(world.body().head(), Cell::new(15, 10));
        assert_eq!(world.state(), SimState::Running);
        assert_eq!(world.tick(), 0);
        assert_eq!(world.score(), 0);
        let target = world.target().unwrap();
        assert_ne!(target, Cell::new(15, 10));
        assert!(world.grid().in_bounds(target));
    }

    #[test]
    fn same_seed_same_start() {
        let a = WorldBuilder::new(SimConfig::default()).build().unwrap();
        let b = WorldBuilder::new(SimConfig::default()).build().unwrap();
        assert_eq!(a.frame(), b.frame());
    }

    #[test]
    fn target_on_body_rejected() {
        let result = WorldBuilder::new(test_config(5, 5))
            .body(cells(&[(2, 2), (2, 1)]))
            .target(Cell::new(2, 1))
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn target_off_grid_rejected() {
        let result = WorldBuilder::new(test_config(5, 5)).target(Cell::new(9, 9)).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn invalid_body_rejected() {
        let result = WorldBuilder::new(test_config(5, 5))
            .body(cells(&[(1, 1), (1, 1)]))
            .build();
        assert!(matches!(result, Err(SimError::Body(_))));
    }

    #[test]
    fn unaligned_grid_rejected() {
        let config = SimConfig {
            grid: GridConfig { width_px: 605, height_px: 400, cell_size: 20 },
            ..SimConfig::default()
        };
        assert!(matches!(WorldBuilder::new(config).build(), Err(SimError::Core(_))));
    }

    #[test]
    fn single_cell_grid_starts_filled() {
        let mut world = WorldBuilder::new(test_config(1, 1)).build().unwrap();
        assert_eq!(world.state(), SimState::Filled);
        assert_eq!(world.target(), None);
        let summary = world.run(&mut NoopObserver).unwrap();
        assert_eq!(summary.ticks, 0);
        assert_eq!(summary.end, crate::RunEnd::Filled);
    }
}

// ── Single steps ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod step_tests {
    use super::*;
    use crate::{SimError, SimState};

    #[test]
    fn walks_to_target_and_grows() {
        let mut world = WorldBuilder::new(test_config(5, 1))
            .body(cells(&[(0, 0)]))
            .direction(Direction::Right)
            .target(Cell::new(2, 0))
            .build()
            .unwrap();

        let f1 = world.step().unwrap();
        assert_eq!(f1.tick, 1);
        assert_eq!(f1.head, Cell::new(1, 0));
        assert_eq!(f1.body.len(), 1);
        assert_eq!(f1.score, 0);

        let f2 = world.step().unwrap();
        assert_eq!(f2.head, Cell::new(2, 0));
        assert_eq!(f2.body, cells(&[(2, 0), (1, 0)]));
        assert_eq!(f2.score, 1);
        assert_eq!(f2.state, SimState::Running);
        let next = f2.target.unwrap();
        assert!([Cell::new(0, 0), Cell::new(3, 0), Cell::new(4, 0)].contains(&next));
    }

    #[test]
    fn refuses_to_reverse_and_hits_wall() {
        // Heading right with the target behind: the path says "left", which
        // would reverse, so the snake keeps going right into the wall.
        let mut world = WorldBuilder::new(test_config(5, 1))
            .body(cells(&[(2, 0)]))
            .direction(Direction::Right)
            .target(Cell::new(0, 0))
            .build()
            .unwrap();

        assert_eq!(world.step().unwrap().head, Cell::new(3, 0));
        assert_eq!(world.step().unwrap().head, Cell::new(4, 0));
        let last = world.step().unwrap();
        assert_eq!(last.state, SimState::Collided(Collision::Wall));
        assert_eq!(last.tick, 3);
        assert_eq!(last.head, Cell::new(4, 0));
        assert_eq!(world.direction(), Direction::Right);
    }

    #[test]
    fn no_path_keeps_direction_into_own_body() {
        // Head (0,0) boxed in by its own body; the target is unreachable.
        let mut world = WorldBuilder::new(test_config(3, 3))
            .body(cells(&[(0, 0), (1, 0), (1, 1), (0, 1)]))
            .direction(Direction::Right)
            .target(Cell::new(2, 2))
            .build()
            .unwrap();

        let frame = world.step().unwrap();
        assert_eq!(frame.state, SimState::Collided(Collision::SelfIntersection));
        assert_eq!(world.direction(), Direction::Right);

        // Terminal: further steps change nothing.
        let again = world.step().unwrap();
        assert_eq!(again, frame);
        assert_eq!(world.tick(), 1);
    }

    #[test]
    fn chasing_the_tail_is_legal() {
        let mut world = WorldBuilder::new(test_config(3, 3))
            .body(cells(&[(0, 0), (1, 0), (1, 1), (0, 1)]))
            .direction(Direction::Down)
            .target(Cell::new(2, 2))
            .build()
            .unwrap();

        let frame = world.step().unwrap();
        assert_eq!(frame.state, SimState::Running);
        assert_eq!(frame.body, cells(&[(0, 1), (0, 0), (1, 0), (1, 1)]));
    }

    #[test]
    fn eating_the_last_free_cell_fills_the_grid() {
        let mut world = WorldBuilder::new(test_config(2, 1))
            .body(cells(&[(0, 0)]))
            .direction(Direction::Right)
            .target(Cell::new(1, 0))
            .build()
            .unwrap();

        let frame = world.step().unwrap();
        assert_eq!(frame.state, SimState::Filled);
        assert_eq!(frame.score, 1);
        assert_eq!(frame.target, None);
        assert_eq!(frame.body.len(), 2);
        assert_eq!(world.summary().end, crate::RunEnd::Filled);
    }

    #[test]
    fn broken_finder_surfaces_non_adjacent_step() {
        use gs_core::Grid;
        use gs_path::{Path, PathFinder, PathResult};

        struct Teleport;

        impl PathFinder for Teleport {
            fn find_path(
                &self,
                _grid:    &Grid,
                _start:   Cell,
                target:   Cell,
                _blocked: &dyn Fn(Cell) -> bool,
            ) -> PathResult<Path> {
                Ok(Path { cells: vec![target], nodes_expanded: 0 })
            }
        }

        let mut world = WorldBuilder::new(test_config(5, 5))
            .body(cells(&[(0, 0)]))
            .target(Cell::new(4, 4))
            .path_finder(Teleport)
            .build()
            .unwrap();
        assert!(matches!(world.step(), Err(SimError::NonAdjacentStep { .. })));
    }
}

// ── Full runs ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;
    use crate::{RunEnd, SimState};

    #[test]
    fn full_runs_never_overlap_themselves() {
        for seed in 0..6 {
            let config = SimConfig { seed, max_ticks: 20_000, ..SimConfig::default() };
            let mut world = WorldBuilder::new(config).build().unwrap();
            let mut frame = world.frame();
            while frame.state == SimState::Running && frame.tick < 20_000 {
                frame = world.step().unwrap();
                assert_frame_consistent(&frame, 30, 20);
                assert_eq!(frame.body.len(), frame.score as usize + 1);
            }
            assert!(frame.state.is_terminal() || frame.tick == 20_000);
        }
    }

    #[test]
    fn run_stops_at_tick_limit() {
        // Three ticks from the centre of 30x20 cannot reach a wall or the body.
        let config = SimConfig { max_ticks: 3, ..SimConfig::default() };
        let mut world = WorldBuilder::new(config).build().unwrap();
        let summary = world.run(&mut NoopObserver).unwrap();
        assert_eq!(summary.ticks, 3);
        assert_eq!(summary.end, RunEnd::TickLimit);
        assert_eq!(summary.seed, 42);
    }

    #[test]
    fn run_ticks_counts_and_stops_early() {
        let mut world = WorldBuilder::new(SimConfig::default()).build().unwrap();
        world.run_ticks(5, &mut NoopObserver).unwrap();
        assert_eq!(world.tick(), 5);

        let mut boxed = WorldBuilder::new(test_config(3, 3))
            .body(cells(&[(0, 0), (1, 0), (1, 1), (0, 1)]))
            .direction(Direction::Right)
            .target(Cell::new(2, 2))
            .build()
            .unwrap();
        let state = boxed.run_ticks(10, &mut NoopObserver).unwrap();
        assert!(state.is_terminal());
        assert_eq!(boxed.tick(), 1);
    }

    #[test]
    fn observer_sees_every_frame_and_meal() {
        let config = SimConfig { max_ticks: 300, ..SimConfig::default() };
        let mut world = WorldBuilder::new(config).build().unwrap();
        let mut rec = Recorder::default();
        let summary = world.run(&mut rec).unwrap();

        assert_eq!(rec.frames.len() as u64, summary.ticks);
        assert_eq!(rec.eaten.len() as u32, summary.score);
        assert_eq!(rec.summary, Some(summary));
        for (i, (_, score)) in rec.eaten.iter().enumerate() {
            assert_eq!(*score, i as u32 + 1);
        }
        assert_eq!(rec.frames.last().map(|f| f.tick), Some(summary.ticks));
    }

    #[test]
    fn output_interval_thins_frames_but_keeps_the_last() {
        let config = SimConfig { max_ticks: 100, output_interval_ticks: 10, ..SimConfig::default() };
        let mut world = WorldBuilder::new(config).build().unwrap();
        let mut rec = Recorder::default();
        let summary = world.run(&mut rec).unwrap();

        let expected_regular = summary.ticks / 10;
        let last_on_interval = summary.ticks % 10 == 0;
        let expected = expected_regular + u64::from(!last_on_interval);
        assert_eq!(rec.frames.len() as u64, expected);
    }

    #[test]
    fn same_seed_same_run() {
        let config = SimConfig { max_ticks: 2_000, ..SimConfig::default() };
        let mut a = WorldBuilder::new(config.clone()).build().unwrap();
        let mut b = WorldBuilder::new(config).build().unwrap();
        let mut ra = Recorder::default();
        let mut rb = Recorder::default();
        assert_eq!(a.run(&mut ra).unwrap(), b.run(&mut rb).unwrap());
        assert_eq!(ra.frames, rb.frames);
    }

    #[test]
    fn breadth_first_finder_plays_too() {
        let config = SimConfig {
            max_ticks: 500,
            search: gs_core::SearchKind::BreadthFirst,
            ..SimConfig::default()
        };
        let mut world = WorldBuilder::new(config)
            .path_finder(gs_path::BreadthFirstPathFinder)
            .build()
            .unwrap();
        let summary = world.run(&mut NoopObserver).unwrap();
        assert!(summary.ticks > 0);
        assert_eq!(summary.length, summary.score as usize + 1);
    }
}

// ── Batch ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod batch_tests {
    use super::*;
    use crate::{BatchStats, run_batch};

    #[test]
    fn batch_is_reproducible_and_ordered() {
        let config = SimConfig { max_ticks: 1_000, ..SimConfig::default() };
        let a = run_batch(&config, 4).unwrap();
        let b = run_batch(&config, 4).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 4);
        let seeds: HashSet<u64> = a.iter().map(|s| s.seed).collect();
        assert_eq!(seeds.len(), 4);
        assert_eq!(a[2].seed, gs_core::SimRng::run_seed(config.seed, 2));
    }

    #[test]
    fn stats_account_for_every_run() {
        let config = SimConfig { max_ticks: 1_000, ..SimConfig::default() };
        let runs = run_batch(&config, 5).unwrap();
        let stats = BatchStats::from_summaries(&runs);
        assert_eq!(stats.runs, 5);
        assert_eq!(
            stats.wall_collisions + stats.self_collisions + stats.filled + stats.tick_limit,
            5
        );
        assert_eq!(stats.max_score, runs.iter().map(|r| r.score).max().unwrap());
        assert!(stats.mean_score <= stats.max_score as f64);
    }

    #[test]
    fn empty_batch_stats() {
        assert_eq!(BatchStats::from_summaries(&[]), BatchStats::default());
    }
}
