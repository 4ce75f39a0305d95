//! Heuristic best-first search (A*) with a Manhattan-distance estimate.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use mazerace_core::{MazeGrid, Point};

use crate::distance::manhattan;
use crate::engine::{Advance, Exploration, Frontier};
use crate::neighbors::Neighbors;
use crate::open::OpenEntry;

/// A* frontier: a min-heap keyed by `(g + h, g)` with insertion-order
/// tie-breaking — among equal f-scores the entry with fewer steps so far
/// wins.
///
/// The Manhattan heuristic never overestimates on a 4-directional grid
/// with unit edge costs, so the first pop of the goal carries an optimal
/// path.
pub struct Astar {
    open: BinaryHeap<Reverse<OpenEntry>>,
    g_score: HashMap<Point, i32>,
    seq: u64,
    nbuf: Neighbors,
}

impl Astar {
    pub fn new() -> Self {
        Self {
            open: BinaryHeap::new(),
            g_score: HashMap::new(),
            seq: 0,
            nbuf: Neighbors::new(),
        }
    }
}

impl Default for Astar {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontier for Astar {
    fn seed(&mut self, start: Point, goal: Point, _exp: &mut Exploration) {
        self.g_score.insert(start, 0);
        self.open.push(Reverse(OpenEntry {
            f: manhattan(start, goal),
            g: 0,
            seq: 0,
            pos: start,
        }));
        self.seq = 1;
    }

    fn advance(&mut self, maze: &MazeGrid, goal: Point, exp: &mut Exploration) -> Advance {
        let Some(Reverse(entry)) = self.open.pop() else {
            return Advance::Exhausted;
        };
        let current = entry.pos;
        if current == goal {
            return Advance::At(current);
        }
        if exp.visited.contains(&current) {
            return Advance::Skipped;
        }

        let tentative = entry.g + 1;
        for &n in self.nbuf.open(maze, current, |_| true) {
            if self.g_score.get(&n).is_none_or(|&g| tentative < g) {
                self.g_score.insert(n, tentative);
                exp.came_from.insert(n, current);
                let seq = self.seq;
                self.seq += 1;
                self.open.push(Reverse(OpenEntry {
                    f: tentative + manhattan(n, goal),
                    g: tentative,
                    seq,
                    pos: n,
                }));
            }
        }
        Advance::At(current)
    }

    fn is_exhausted(&self) -> bool {
        self.open.is_empty()
    }
}
