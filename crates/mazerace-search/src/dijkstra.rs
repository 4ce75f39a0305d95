//! Uniform-cost search (Dijkstra).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use mazerace_core::{MazeGrid, Point};

use crate::engine::{Advance, Exploration, Frontier};
use crate::neighbors::Neighbors;
use crate::open::OpenEntry;

/// Uniform-cost frontier: a min-heap keyed by accumulated distance, ties
/// broken by insertion order.
///
/// Nodes are finalized at pop time; a popped node that was already
/// finalized is a stale heap entry and consumes the tick as a no-op. A
/// neighbor's recorded distance and parent may be overwritten by a
/// cheaper path any time before the neighbor itself is finalized.
pub struct Dijkstra {
    open: BinaryHeap<Reverse<OpenEntry>>,
    dist: HashMap<Point, i32>,
    seq: u64,
    nbuf: Neighbors,
}

impl Dijkstra {
    pub fn new() -> Self {
        Self {
            open: BinaryHeap::new(),
            dist: HashMap::new(),
            seq: 0,
            nbuf: Neighbors::new(),
        }
    }
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontier for Dijkstra {
    fn seed(&mut self, start: Point, _goal: Point, _exp: &mut Exploration) {
        self.dist.insert(start, 0);
        self.open.push(Reverse(OpenEntry {
            f: 0,
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

        let next_dist = entry.f + 1;
        for &n in self.nbuf.open(maze, current, |_| true) {
            if self.dist.get(&n).is_none_or(|&d| next_dist < d) {
                self.dist.insert(n, next_dist);
                exp.came_from.insert(n, current);
                let seq = self.seq;
                self.seq += 1;
                self.open.push(Reverse(OpenEntry {
                    f: next_dist,
                    g: 0,
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
