//! Breadth-first search.

use std::collections::VecDeque;

use mazerace_core::{MazeGrid, Point};

use crate::engine::{Advance, Exploration, Frontier};
use crate::neighbors::Neighbors;

/// Breadth-first frontier: a FIFO queue processed in strict arrival
/// order.
///
/// Nodes are marked visited at *enqueue* time, so a cell can never be
/// queued twice and the first arrival fixes its parent permanently. This
/// is what produces BFS's even ring-by-ring exploration shape.
pub struct Bfs {
    queue: VecDeque<Point>,
    nbuf: Neighbors,
}

impl Bfs {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            nbuf: Neighbors::new(),
        }
    }
}

impl Default for Bfs {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontier for Bfs {
    fn seed(&mut self, start: Point, _goal: Point, exp: &mut Exploration) {
        exp.visited.insert(start);
        self.queue.push_back(start);
    }

    fn advance(&mut self, maze: &MazeGrid, goal: Point, exp: &mut Exploration) -> Advance {
        let Some(current) = self.queue.pop_front() else {
            return Advance::Exhausted;
        };
        if current == goal {
            return Advance::At(current);
        }

        for &n in self.nbuf.open(maze, current, |n| !exp.visited.contains(&n)) {
            exp.visited.insert(n);
            exp.came_from.insert(n, current);
            self.queue.push_back(n);
        }
        Advance::At(current)
    }

    fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazerace_core::CellState;

    fn open_grid(w: i32, h: i32) -> MazeGrid {
        let mut g = MazeGrid::new(w, h);
        for y in 0..h {
            for x in 0..w {
                g.set(Point::new(x, y), CellState::Open);
            }
        }
        g
    }

    #[test]
    fn marks_visited_at_enqueue() {
        let maze = open_grid(3, 3);
        let goal = Point::new(2, 2);
        let mut exp = Exploration::default();
        let mut b = Bfs::new();
        b.seed(Point::ZERO, goal, &mut exp);
        assert!(exp.visited.contains(&Point::ZERO));

        let Advance::At(p) = b.advance(&maze, goal, &mut exp) else {
            panic!("expected a node");
        };
        assert_eq!(p, Point::ZERO);
        // Neither neighbor has been processed, but both are already
        // visited and parented.
        assert!(exp.visited.contains(&Point::new(0, 1)));
        assert!(exp.visited.contains(&Point::new(1, 0)));
        assert_eq!(exp.came_from[&Point::new(0, 1)], Point::ZERO);
    }

    #[test]
    fn processes_in_arrival_order() {
        let maze = open_grid(3, 1);
        let goal = Point::new(2, 0);
        let mut exp = Exploration::default();
        let mut b = Bfs::new();
        b.seed(Point::ZERO, goal, &mut exp);

        let mut order = Vec::new();
        loop {
            match b.advance(&maze, goal, &mut exp) {
                Advance::At(p) => {
                    order.push(p);
                    if p == goal {
                        break;
                    }
                }
                Advance::Skipped => continue,
                Advance::Exhausted => break,
            }
        }
        assert_eq!(
            order,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
    }
}
