//! Min-heap entry for the weighted strategies.
//!
//! Entries order by `(f, g, seq)` ascending. The monotonically increasing
//! `seq` breaks ties by insertion order (FIFO among equal keys), which the
//! race's reproducibility guarantees depend on.

use mazerace_core::Point;

#[derive(Clone, Copy, Debug)]
pub(crate) struct OpenEntry {
    pub(crate) f: i32,
    pub(crate) g: i32,
    pub(crate) seq: u64,
    pub(crate) pos: Point,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.g == other.g && self.seq == other.seq
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Natural ordering; callers wrap in `Reverse` so the max-heap
        // `BinaryHeap` pops the smallest entry first.
        self.f
            .cmp(&other.f)
            .then(self.g.cmp(&other.g))
            .then(self.seq.cmp(&other.seq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    fn entry(f: i32, g: i32, seq: u64) -> OpenEntry {
        OpenEntry {
            f,
            g,
            seq,
            pos: Point::ZERO,
        }
    }

    #[test]
    fn pops_lowest_f_then_lowest_g_then_fifo() {
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(entry(5, 3, 0)));
        heap.push(Reverse(entry(2, 2, 1)));
        heap.push(Reverse(entry(2, 1, 2)));
        heap.push(Reverse(entry(2, 1, 3)));

        let order: Vec<u64> = std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.seq)).collect();
        assert_eq!(order, vec![2, 3, 1, 0]);
    }
}
