//! Maze generation for the race arena.
//!
//! The generator carves a randomized-backtracker maze on the sub-lattice
//! of even coordinates, forces the two race endpoints open, then punches
//! extra random openings so the arena has loops and alternate routes —
//! without them every strategy would file down the same single corridor.
//!
//! Connectivity between the endpoints is probabilistically high but not
//! verified; a disconnected arena simply produces a race nobody finishes.

use mazerace_core::{CellState, MazeGrid, Point};
use rand::{Rng, RngExt};

/// Two-step carve directions on the even sub-lattice.
const CARVE_DIRS: [Point; 4] = [
    Point::new(2, 0),
    Point::new(0, 2),
    Point::new(-2, 0),
    Point::new(0, -2),
];

/// One backtracker frame: a carved cell and the shuffled directions still
/// to try from it.
struct Frame {
    pos: Point,
    dirs: [Point; 4],
    next: usize,
}

/// Maze generator operating on a [`MazeGrid`].
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub grid: MazeGrid,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new generator over the given grid.
    pub fn with_grid(grid: MazeGrid, rng: R) -> Self {
        Self { rng, grid }
    }

    /// Carve a maze with iterative randomized backtracking.
    ///
    /// Starting from a random even coordinate (clamped into range), open
    /// the cell, then repeatedly pick a random untried two-step direction;
    /// if the cell two steps away is still blocked, open the connecting
    /// cell and descend into it. An explicit frame stack replaces the
    /// recursion so depth is bounded by the number of lattice cells.
    ///
    /// Returns the number of cells opened.
    pub fn backtracker_maze(&mut self) -> usize {
        let w = self.grid.width();
        let h = self.grid.height();
        if w == 0 || h == 0 {
            return 0;
        }

        let start = Point::new(
            (self.rng.random_range(0..(w + 1) / 2) * 2).min(w - 1),
            (self.rng.random_range(0..(h + 1) / 2) * 2).min(h - 1),
        );
        self.grid.set(start, CellState::Open);
        let mut carved = 1usize;

        let mut stack = vec![Frame {
            pos: start,
            dirs: self.shuffled_dirs(),
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            if frame.next >= frame.dirs.len() {
                stack.pop();
                continue;
            }
            let d = frame.dirs[frame.next];
            frame.next += 1;
            let pos = frame.pos;
            let target = pos + d;

            if self.grid.at(target) == Some(CellState::Blocked) {
                // Open the wall between the two lattice cells, then the
                // target itself.
                self.grid
                    .set(pos.shift(d.x / 2, d.y / 2), CellState::Open);
                self.grid.set(target, CellState::Open);
                carved += 2;
                let dirs = self.shuffled_dirs();
                stack.push(Frame {
                    pos: target,
                    dirs,
                    next: 0,
                });
            }
        }

        carved
    }

    /// Force both race endpoints open regardless of carve outcome.
    pub fn open_endpoints(&mut self, a: Point, b: Point) {
        self.grid.set(a, CellState::Open);
        self.grid.set(b, CellState::Open);
    }

    /// Punch `n` random interior openings to create loops.
    ///
    /// Targets are drawn from the interior (border excluded); hitting an
    /// already-open cell is fine, so fewer than `n` new cells may open.
    pub fn punch_openings(&mut self, n: usize) {
        let w = self.grid.width();
        let h = self.grid.height();
        if w < 3 || h < 3 {
            return;
        }
        for _ in 0..n {
            let p = Point::new(
                self.rng.random_range(1..w - 1),
                self.rng.random_range(1..h - 1),
            );
            self.grid.set(p, CellState::Open);
        }
    }

    fn shuffled_dirs(&mut self) -> [Point; 4] {
        let mut dirs = CARVE_DIRS;
        for i in (1..dirs.len()).rev() {
            let j = self.rng.random_range(0..=i);
            dirs.swap(i, j);
        }
        dirs
    }
}

/// Generate a complete race arena: backtracker maze, forced-open endpoints
/// at `(1, 1)` and `(width - 2, height - 2)`, and `width * height / 10`
/// extra openings.
pub fn generate(width: i32, height: i32, rng: impl Rng) -> MazeGrid {
    let mut mg = MazeGen::with_grid(MazeGrid::new(width, height), rng);
    mg.backtracker_maze();
    mg.open_endpoints(
        Point::new(1, 1),
        Point::new(width - 2, height - 2),
    );
    mg.punch_openings(((width * height) / 10).max(0) as usize);
    mg.grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn backtracker_carves_cells() {
        let mut mg = MazeGen::with_grid(MazeGrid::new(21, 15), SmallRng::seed_from_u64(1));
        let carved = mg.backtracker_maze();
        assert!(carved > 0);
        assert_eq!(mg.grid.count(CellState::Open), carved);
        // Every even-coordinate lattice cell is reachable from the carve
        // start, so all of them end up open.
        for y in (0..15i32).step_by(2) {
            for x in (0..21i32).step_by(2) {
                assert!(mg.grid.is_open(Point::new(x, y)));
            }
        }
    }

    #[test]
    fn endpoints_are_always_open() {
        for seed in 0..20 {
            let grid = generate(35, 25, SmallRng::seed_from_u64(seed));
            assert!(grid.is_open(Point::new(1, 1)));
            assert!(grid.is_open(Point::new(33, 23)));
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = generate(25, 19, SmallRng::seed_from_u64(42));
        let b = generate(25, 19, SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn openings_stay_in_bounds() {
        let grid = generate(9, 7, SmallRng::seed_from_u64(7));
        // The border may only be open where the backtracker lattice
        // touches it (even coordinates); punched openings are interior.
        assert_eq!(grid.at(Point::new(-1, 0)), None);
        assert_eq!(grid.count(CellState::Open) + grid.count(CellState::Blocked), 63);
    }

    #[test]
    fn degenerate_sizes_do_not_hang() {
        let mut mg = MazeGen::with_grid(MazeGrid::new(0, 0), SmallRng::seed_from_u64(3));
        assert_eq!(mg.backtracker_maze(), 0);
        let mut mg = MazeGen::with_grid(MazeGrid::new(1, 1), SmallRng::seed_from_u64(3));
        assert_eq!(mg.backtracker_maze(), 1);
        mg.punch_openings(100);
        assert_eq!(mg.grid.count(CellState::Open), 1);
    }
}
