//! Depth-first search.

use mazerace_core::{MazeGrid, Point};

use crate::engine::{Advance, Exploration, Frontier};
use crate::neighbors::Neighbors;

/// Depth-first frontier: a LIFO stack, most-recently-pushed first.
///
/// Nodes are marked visited at *pop* time and unvisited neighbors are
/// pushed unconditionally, so the same cell may sit on the stack several
/// times; only its first pop is processed, the rest are consumed as stale
/// entries. The first push wins the parent slot — a later re-push of a
/// still-unprocessed cell does not rewrite where it was reached from.
pub struct Dfs {
    stack: Vec<Point>,
    nbuf: Neighbors,
}

impl Dfs {
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            nbuf: Neighbors::new(),
        }
    }
}

impl Default for Dfs {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontier for Dfs {
    fn seed(&mut self, start: Point, _goal: Point, _exp: &mut Exploration) {
        self.stack.push(start);
    }

    fn advance(&mut self, maze: &MazeGrid, goal: Point, exp: &mut Exploration) -> Advance {
        let Some(current) = self.stack.pop() else {
            return Advance::Exhausted;
        };
        if exp.visited.contains(&current) {
            return Advance::Skipped;
        }
        if current == goal {
            return Advance::At(current);
        }

        for &n in self.nbuf.open(maze, current, |n| !exp.visited.contains(&n)) {
            self.stack.push(n);
            exp.came_from.entry(n).or_insert(current);
        }
        Advance::At(current)
    }

    fn is_exhausted(&self) -> bool {
        self.stack.is_empty()
    }
}
