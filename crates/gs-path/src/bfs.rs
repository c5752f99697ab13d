//! Unweighted breadth-first search.
//!
//! Explores neighbors in the same Up, Down, Left, Right order as A*.  It is
//! the reference oracle for A*'s path lengths and a runtime alternative.

use std::collections::VecDeque;

use gs_core::{Cell, Grid};

use crate::finder::check_endpoints;
use crate::{Path, PathFinder, PathResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BreadthFirstPathFinder;

impl PathFinder for BreadthFirstPathFinder {
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

        let n = grid.cell_count();
        // prev[i] = cell we reached cell i from; None for unvisited cells and the start.
        let mut prev: Vec<Option<Cell>> = vec![None; n];
        let mut visited = vec![false; n];
        let mut queue = VecDeque::new();
        let mut expanded = 0usize;

        if let Some(i) = grid.index(start) {
            visited[i] = true;
        }
        queue.push_back(start);

        while let Some(cell) = queue.pop_front() {
            expanded += 1;
            for (_, next) in grid.neighbors(cell) {
                let Some(i) = grid.index(next) else {
                    continue;
                };
                if visited[i] || blocked(next) {
                    continue;
                }
                visited[i] = true;
                prev[i] = Some(cell);
                if next == target {
                    return Ok(reconstruct(grid, &prev, target, expanded));
                }
                queue.push_back(next);
            }
        }

        Ok(Path { cells: vec![], nodes_expanded: expanded })
    }
}

fn reconstruct(grid: &Grid, prev: &[Option<Cell>], target: Cell, expanded: usize) -> Path {
    let mut cells = Vec::new();
    let mut cur = target;
    loop {
        cells.push(cur);
        match grid.index(cur).and_then(|i| prev[i]) {
            Some(p) => cur = p,
            None    => break,
        }
    }
    // The walk ends at the start cell, which has no predecessor.
    cells.pop();
    cells.reverse();
    Path { cells, nodes_expanded: expanded }
}
