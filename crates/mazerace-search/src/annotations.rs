//! Shared per-cell race annotations.
//!
//! Every engine appends to one [`AnnotationStore`] as it explores: which
//! agents have touched a cell (with each agent's own step count at the
//! moment of arrival) and which agents' final paths cross it. Writes are
//! serialized through an interior lock; readers (typically a presentation
//! layer polling mid-tick) may observe a partially applied tick but never
//! a half-built entry. Entries are created lazily and never deleted for
//! the lifetime of a race.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use mazerace_core::Point;

/// One recorded arrival: which agent, and its step count at that moment.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Visit {
    agent: String,
    order: u32,
}

/// Annotations for one cell.
#[derive(Debug, Clone, Default)]
struct CellNote {
    /// Arrivals in append order.
    visits: Vec<Visit>,
    /// Agents whose reconstructed path crosses this cell.
    on_path: Vec<String>,
}

/// Process-shared, append-only store of per-cell race annotations.
#[derive(Debug, Default)]
pub struct AnnotationStore {
    cells: RwLock<HashMap<Point, CellNote>>,
}

impl AnnotationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<Point, CellNote>> {
        self.cells.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Point, CellNote>> {
        self.cells.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record that `agent` visited `pos` at agent-local step `order`.
    ///
    /// Idempotent per `(pos, agent)`: repeat calls leave the entry
    /// unchanged, so the first recorded order wins.
    pub fn record_visit(&self, pos: Point, agent: &str, order: u32) {
        let mut cells = self.write();
        let note = cells.entry(pos).or_default();
        if note.visits.iter().any(|v| v.agent == agent) {
            return;
        }
        note.visits.push(Visit {
            agent: agent.to_string(),
            order,
        });
    }

    /// Record that `agent`'s final path crosses `pos`. Idempotent per
    /// `(pos, agent)`.
    pub fn record_path(&self, pos: Point, agent: &str) {
        let mut cells = self.write();
        let note = cells.entry(pos).or_default();
        if note.on_path.iter().any(|a| a == agent) {
            return;
        }
        note.on_path.push(agent.to_string());
    }

    /// The agents that visited `pos`, sorted by their recorded visit
    /// order (earliest arrival in agent-local steps first). Empty if the
    /// cell was never visited.
    pub fn visitors_in_order(&self, pos: Point) -> Vec<String> {
        let cells = self.read();
        let Some(note) = cells.get(&pos) else {
            return Vec::new();
        };
        let mut visits: Vec<&Visit> = note.visits.iter().collect();
        visits.sort_by_key(|v| v.order);
        visits.into_iter().map(|v| v.agent.clone()).collect()
    }

    /// The step count `agent` had recorded when it first visited `pos`.
    pub fn visit_order(&self, pos: Point, agent: &str) -> Option<u32> {
        let cells = self.read();
        cells
            .get(&pos)?
            .visits
            .iter()
            .find(|v| v.agent == agent)
            .map(|v| v.order)
    }

    /// The agents whose final path crosses `pos`.
    pub fn path_agents(&self, pos: Point) -> Vec<String> {
        let cells = self.read();
        cells
            .get(&pos)
            .map(|note| note.on_path.clone())
            .unwrap_or_default()
    }

    /// Number of cells with at least one annotation.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether no cell has been annotated yet.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
