//! A* search with the Manhattan heuristic.
//!
//! On a 4-connected grid with unit step cost the Manhattan distance is
//! admissible and consistent, so the first time a cell is expanded it has
//! been reached by a shortest path.  That is what makes the simple closed-set
//! policy below correct: a closed cell is never reopened.
//!
//! # Node storage
//!
//! Search nodes live in a per-query arena (`Vec<SearchNode>`).  A node's
//! parent is an arena index, so the search tree needs no reference counting
//! and is dropped in one piece when the query returns.  The arena index
//! doubles as the insertion sequence number for tie-breaking.
//!
//! # Open list ordering
//!
//! The open list is a `BinaryHeap<Reverse<(f, tie, seq)>>`:
//!
//! | `TieBreak`         | `tie`      | Among equal `f`                    |
//! |--------------------|------------|------------------------------------|
//! | `InsertionOrder`   | `0`        | first pushed is popped first       |
//! | `LowestHeuristic`  | `h_cost`   | closer to target first, then FIFO  |
//!
//! Duplicate entries for a cell may coexist in the heap; the later ones are
//! skipped when popped because the cell is already closed.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use gs_core::{Cell, Grid, TieBreak};

use crate::finder::check_endpoints;
use crate::{Path, PathFinder, PathResult};

// ── SearchNode ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug)]
struct SearchNode {
    position: Cell,
    g_cost:   u32,
    h_cost:   u32,
    /// Arena index of the node this one was expanded from.  `None` for the root.
    parent:   Option<usize>,
}

impl SearchNode {
    #[inline]
    fn f_cost(&self) -> u32 {
        self.g_cost + self.h_cost
    }
}

/// Heap key: `(f_cost, tie key, arena index)`.
type OpenKey = Reverse<(u32, u32, usize)>;

// ── AStarPathFinder ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AStarPathFinder {
    pub tie_break: TieBreak,
}

impl AStarPathFinder {
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    #[inline]
    fn open_key(&self, node: &SearchNode, index: usize) -> OpenKey {
        let tie = match self.tie_break {
            TieBreak::InsertionOrder  => 0,
            TieBreak::LowestHeuristic => node.h_cost,
        };
        Reverse((node.f_cost(), tie, index))
    }
}

impl PathFinder for AStarPathFinder {
    fn find_path(
        &self,
        grid:    &Grid,
        start:   Cell,
        target:  Cell,
        blocked: &dyn Fn(Cell) -> bool,
    ) -> PathResult<Path> {
        check_endpoints(grid, start, target)?;
        if start == target {
            return Ok(Path::default());
        }

        let mut arena: Vec<SearchNode> = Vec::with_capacity(grid.cell_count());
        let mut closed = vec![false; grid.cell_count()];
        let mut open: BinaryHeap<OpenKey> = BinaryHeap::new();
        let mut expanded = 0usize;

        let root = SearchNode {
            position: start,
            g_cost:   0,
            h_cost:   start.manhattan(target),
            parent:   None,
        };
        open.push(self.open_key(&root, 0));
        arena.push(root);

        while let Some(Reverse((_, _, index))) = open.pop() {
            let node = arena[index];
            let Some(slot) = grid.index(node.position) else {
                continue;
            };
            if closed[slot] {
                continue;
            }
            if node.position == target {
                return Ok(reconstruct(&arena, index, expanded));
            }
            closed[slot] = true;
            expanded += 1;

            for (_, next) in grid.neighbors(node.position) {
                if blocked(next) {
                    continue;
                }
                let Some(next_slot) = grid.index(next) else {
                    continue;
                };
                if closed[next_slot] {
                    continue;
                }
                let child = SearchNode {
                    position: next,
                    g_cost:   node.g_cost + 1,
                    h_cost:   next.manhattan(target),
                    parent:   Some(index),
                };
                open.push(self.open_key(&child, arena.len()));
                arena.push(child);
            }
        }

        Ok(Path { cells: vec![], nodes_expanded: expanded })
    }
}

/// Walk parent links from `goal` back to the root and reverse.  The root
/// (start cell) is not part of the path.
fn reconstruct(arena: &[SearchNode], goal: usize, expanded: usize) -> Path {
    let mut cells = Vec::with_capacity(arena[goal].g_cost as usize);
    let mut cur = goal;
    while let Some(parent) = arena[cur].parent {
        cells.push(arena[cur].position);
        cur = parent;
    }
    cells.reverse();
    Path { cells, nodes_expanded: expanded }
}
