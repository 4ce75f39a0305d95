//! The maze grid: a fixed-size rectangle of passable/blocked cells.
//!
//! A [`MazeGrid`] is mutated only while the generator carves it; once a
//! race starts it is shared read-only (typically behind an `Arc`) by
//! every search engine.

use crate::geom::Point;

/// The state of one maze cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Passable floor.
    Open,
    /// Impassable wall. Freshly created grids are all blocked.
    #[default]
    Blocked,
}

/// A fixed-size 2D grid of [`CellState`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeGrid {
    width: i32,
    height: i32,
    cells: Vec<CellState>,
}

impl MazeGrid {
    /// Create a new grid with every cell [`CellState::Blocked`].
    ///
    /// Non-positive dimensions yield an empty grid (zero cells); callers
    /// that need a usable race arena validate dimensions up front.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            width: w,
            height: h,
            cells: vec![CellState::default(); (w * h) as usize],
        }
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the point lies within grid bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<CellState> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Whether `p` is in bounds and open.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p) == Some(CellState::Open)
    }

    /// Set the cell at `p`. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, state: CellState) {
        if !self.contains(p) {
            return;
        }
        let idx = self.index(p);
        self.cells[idx] = state;
    }

    /// Count cells equal to `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Iterate over `(Point, CellState)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellState)> + '_ {
        self.cells.iter().enumerate().map(|(i, &c)| {
            let p = Point::new(i as i32 % self.width, i as i32 / self.width);
            (p, c)
        })
    }
}
