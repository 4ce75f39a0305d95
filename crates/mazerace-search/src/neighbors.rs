use mazerace_core::{MazeGrid, Point};

/// Cached neighbor computation helper.
///
/// Enumerates the open cardinal neighbors of a cell in the race's
/// canonical order (down, right, up, left), filtered by a predicate.
/// Every strategy owns one so repeated queries reuse the buffer.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the in-bounds, open cardinal neighbors of `p` for which
    /// `keep` returns `true`.
    pub fn open(&mut self, maze: &MazeGrid, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for n in p.neighbors_4() {
            if maze.is_open(n) && keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazerace_core::CellState;

    #[test]
    fn open_filters_walls_and_bounds() {
        let mut maze = MazeGrid::new(3, 3);
        for p in [Point::new(1, 1), Point::new(1, 2), Point::new(2, 1)] {
            maze.set(p, CellState::Open);
        }
        let mut nb = Neighbors::new();
        // From the center: down and right are open, up is blocked,
        // left is blocked.
        assert_eq!(
            nb.open(&maze, Point::new(1, 1), |_| true),
            &[Point::new(1, 2), Point::new(2, 1)]
        );
        // Corner of the grid: nothing open around (0, 0).
        assert!(nb.open(&maze, Point::new(0, 0), |_| true).is_empty());
    }

    #[test]
    fn keep_predicate_filters() {
        let mut maze = MazeGrid::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                maze.set(Point::new(x, y), CellState::Open);
            }
        }
        let mut nb = Neighbors::new();
        let skip = Point::new(1, 0);
        let got = nb.open(&maze, Point::new(1, 1), |n| n != skip);
        assert!(!got.contains(&skip));
        assert_eq!(got.len(), 3);
    }
}
