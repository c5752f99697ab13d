//! Plain data row types written by output backends.

use gs_core::Cell;
use gs_sim::{Frame, RunSummary};

/// One emitted frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRow {
    pub seed:      u64,
    pub tick:      u64,
    pub state:     &'static str,
    pub head:      Cell,
    /// `None` once the grid is full.
    pub target:    Option<Cell>,
    pub direction: &'static str,
    pub score:     u32,
    /// Head-first cells encoded as `x:y` pairs joined by `;`.
    pub body:      String,
}

impl FrameRow {
    pub fn from_frame(seed: u64, frame: &Frame) -> Self {
        Self {
            seed,
            tick:      frame.tick,
            state:     frame.state.as_str(),
            head:      frame.head,
            target:    frame.target,
            direction: frame.direction.as_str(),
            score:     frame.score,
            body:      encode_body(&frame.body),
        }
    }
}

/// Summary of one finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunRow {
    pub seed:   u64,
    pub ticks:  u64,
    pub score:  u32,
    pub length: usize,
    pub end:    &'static str,
}

impl From<&RunSummary> for RunRow {
    fn from(s: &RunSummary) -> Self {
        Self {
            seed:   s.seed,
            ticks:  s.ticks,
            score:  s.score,
            length: s.length,
            end:    s.end.as_str(),
        }
    }
}

fn encode_body(body: &[Cell]) -> String {
    body.iter()
        .map(|c| format!("{}:{}", c.x, c.y))
        .collect::<Vec<_>>()
        .join(";")
}
