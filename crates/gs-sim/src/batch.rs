//! Many independent seeded runs, with aggregate statistics.
//!
//! Run `i` uses seed [`SimRng::run_seed`]`(config.seed, i)`.  With the
//! `parallel` feature the runs execute on Rayon's thread pool; each world is
//! self-contained, so the results are identical either way and always come
//! back in run order.

use gs_core::{SimConfig, SimRng};

use crate::{NoopObserver, RunEnd, RunSummary, SimResult, WorldBuilder};

/// Play `runs` independent games and return their summaries in run order.
pub fn run_batch(config: &SimConfig, runs: u64) -> SimResult<Vec<RunSummary>> {
    #[cfg(not(feature = "parallel"))]
    {
        (0..runs).map(|i| run_one(config, i)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        (0..runs).into_par_iter().map(|i| run_one(config, i)).collect()
    }
}

fn run_one(config: &SimConfig, index: u64) -> SimResult<RunSummary> {
    let config = SimConfig {
        seed: SimRng::run_seed(config.seed, index),
        ..config.clone()
    };
    WorldBuilder::new(config).build()?.run(&mut NoopObserver)
}

// ── BatchStats ────────────────────────────────────────────────────────────────

/// Aggregate outcome counts and scores over a batch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchStats {
    pub runs:            usize,
    pub mean_score:      f64,
    pub max_score:       u32,
    pub mean_ticks:      f64,
    pub wall_collisions: usize,
    pub self_collisions: usize,
    pub filled:          usize,
    pub tick_limit:      usize,
}

impl BatchStats {
    pub fn from_summaries(summaries: &[RunSummary]) -> Self {
        use gs_body::Collision;

        let mut stats = BatchStats { runs: summaries.len(), ..Default::default() };
        if summaries.is_empty() {
            return stats;
        }

        let mut score_sum = 0u64;
        let mut tick_sum = 0u64;
        for s in summaries {
            score_sum += s.score as u64;
            tick_sum += s.ticks;
            stats.max_score = stats.max_score.max(s.score);
            match s.end {
                RunEnd::Collided(Collision::Wall)             => stats.wall_collisions += 1,
                RunEnd::Collided(Collision::SelfIntersection) => stats.self_collisions += 1,
                RunEnd::Filled                                => stats.filled += 1,
                RunEnd::TickLimit                             => stats.tick_limit += 1,
            }
        }
        stats.mean_score = score_sum as f64 / summaries.len() as f64;
        stats.mean_ticks = tick_sum as f64 / summaries.len() as f64;
        stats
    }
}
