//! Plain-text board rendering for terminal output.

use gs_core::Grid;
use gs_sim::Frame;

const EMPTY:  char = '.';
const HEAD:   char = '@';
const BODY:   char = 'o';
const TARGET: char = '*';

/// Draw `frame` as one line per grid row, top row first.
pub fn render(grid: &Grid, frame: &Frame) -> String {
    let width = grid.width() as usize;
    let mut rows = vec![vec![EMPTY; width]; grid.height() as usize];

    let mut put = |cell, ch| {
        if let Some(i) = grid.index(cell) {
            rows[i / width][i % width] = ch;
        }
    };
    if let Some(t) = frame.target {
        put(t, TARGET);
    }
    for &c in frame.body.iter().skip(1) {
        put(c, BODY);
    }
    put(frame.head, HEAD);

    let mut out = String::with_capacity((width + 1) * rows.len() + 64);
    out.push_str(&format!(
        "tick {}  score {}  {}  {}\n",
        frame.tick, frame.score, frame.direction, frame.state
    ));
    for row in rows {
        out.extend(row);
        out.push('\n');
    }
    out
}
