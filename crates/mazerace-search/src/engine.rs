//! The common stepping contract and per-agent bookkeeping.
//!
//! A strategy only decides *which node comes next* and how neighbors are
//! relaxed; everything else an agent carries through the race — step
//! counter, recent trail, finish detection, path reconstruction,
//! annotation recording — lives in [`Engine`] and is identical across the
//! four algorithms.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use mazerace_core::{Color, MazeGrid, Point};

use crate::annotations::AnnotationStore;
use crate::astar::Astar;
use crate::bfs::Bfs;
use crate::dfs::Dfs;
use crate::dijkstra::Dijkstra;

/// Maximum length of the presentation trail buffer.
pub const TRAIL_MAX: usize = 10;

/// Discovery state shared between a strategy and its engine.
///
/// `visited` marks finalized nodes; when that happens differs by strategy
/// (enqueue time for BFS, pop time for the rest). `came_from` maps each
/// discovered node to the node it was reached from and drives path
/// reconstruction.
#[derive(Debug, Default)]
pub struct Exploration {
    pub visited: HashSet<Point>,
    pub came_from: HashMap<Point, Point>,
}

/// Outcome of one frontier advance.
pub enum Advance {
    /// The frontier yielded this node for processing.
    At(Point),
    /// A stale (already finalized) entry was consumed; the tick is spent
    /// without movement.
    Skipped,
    /// The frontier is empty. The agent is stalled for the rest of the
    /// race.
    Exhausted,
}

/// One-step-at-a-time frontier behavior, implemented by each of the four
/// strategies.
pub trait Frontier: Send {
    /// Prime the frontier with the start node. Called exactly once.
    fn seed(&mut self, start: Point, goal: Point, exp: &mut Exploration);

    /// Remove one node from the frontier and relax its neighbors.
    ///
    /// Implementations return [`Advance::At`] for the goal node *without*
    /// relaxing it, so the engine can finish the race on that tick.
    fn advance(&mut self, maze: &MazeGrid, goal: Point, exp: &mut Exploration) -> Advance;

    /// Whether no frontier entries remain.
    fn is_exhausted(&self) -> bool;
}

/// The four race strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrategyKind {
    /// Dijkstra: min-priority frontier keyed by accumulated distance.
    UniformCost,
    /// A*: min-priority frontier keyed by distance plus Manhattan
    /// estimate.
    BestFirst,
    /// BFS: FIFO frontier, visited marked at enqueue.
    BreadthFirst,
    /// DFS: LIFO frontier, visited marked at pop.
    DepthFirst,
}

impl StrategyKind {
    /// Conventional display label for the strategy.
    pub fn label(self) -> &'static str {
        match self {
            Self::UniformCost => "Dijkstra",
            Self::BestFirst => "A*",
            Self::BreadthFirst => "BFS",
            Self::DepthFirst => "DFS",
        }
    }

    fn frontier(self) -> Box<dyn Frontier> {
        match self {
            Self::UniformCost => Box::new(Dijkstra::new()),
            Self::BestFirst => Box::new(Astar::new()),
            Self::BreadthFirst => Box::new(Bfs::new()),
            Self::DepthFirst => Box::new(Dfs::new()),
        }
    }
}

/// One racing agent: a strategy plus all per-agent race state.
///
/// Driven by [`step`](Self::step) once per tick; becomes effectively
/// read-only once [`is_finished`](Self::is_finished) reports `true`.
pub struct Engine {
    name: String,
    color: Color,
    kind: StrategyKind,
    maze: Arc<MazeGrid>,
    start: Point,
    goal: Point,
    frontier: Box<dyn Frontier>,
    exp: Exploration,
    current: Option<Point>,
    steps: u32,
    trail: Vec<Point>,
    finished: bool,
    finish_tick: Option<u64>,
    path: Vec<Point>,
}

impl Engine {
    /// Create an engine racing from `start` to `goal` on the shared maze.
    pub fn new(
        name: impl Into<String>,
        color: Color,
        kind: StrategyKind,
        maze: Arc<MazeGrid>,
        start: Point,
        goal: Point,
    ) -> Self {
        let mut exp = Exploration::default();
        let mut frontier = kind.frontier();
        frontier.seed(start, goal, &mut exp);
        Self {
            name: name.into(),
            color,
            kind,
            maze,
            start,
            goal,
            frontier,
            exp,
            current: None,
            steps: 0,
            trail: Vec::new(),
            finished: false,
            finish_tick: None,
            path: Vec::new(),
        }
    }

    /// Advance the search by one unit of work.
    ///
    /// A no-op once finished or after the frontier empties out. A stale
    /// frontier entry consumes the tick without moving the agent. When a
    /// productive step lands on a new node the step counter, trail and
    /// annotation store are updated; landing on the goal finishes the
    /// race for this agent, stamping `tick` as its finish time and
    /// reconstructing the final path.
    pub fn step(&mut self, tick: u64, notes: &AnnotationStore) {
        if self.finished {
            return;
        }
        let node = match self.frontier.advance(&self.maze, self.goal, &mut self.exp) {
            Advance::At(p) => p,
            Advance::Skipped | Advance::Exhausted => return,
        };

        self.current = Some(node);
        self.steps += 1;
        self.exp.visited.insert(node);
        if self.trail.len() == TRAIL_MAX {
            self.trail.remove(0);
        }
        self.trail.push(node);
        notes.record_visit(node, &self.name, self.steps);

        if node == self.goal {
            self.finished = true;
            self.finish_tick = Some(tick);
            self.path = self.reconstruct();
            for &p in &self.path {
                notes.record_path(p, &self.name);
            }
            log::debug!(
                "{} reached the goal at tick {tick} after {} steps",
                self.name,
                self.steps
            );
        }
    }

    /// Walk `came_from` backward from the goal and reverse.
    fn reconstruct(&self) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cur = self.goal;
        while let Some(&prev) = self.exp.came_from.get(&cur) {
            path.push(cur);
            cur = prev;
        }
        path.push(self.start);
        path.reverse();
        path
    }

    // -----------------------------------------------------------------------
    // Read accessors
    // -----------------------------------------------------------------------

    /// Agent display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Agent display color (opaque to the simulation).
    pub fn color(&self) -> Color {
        self.color
    }

    /// Which strategy this agent runs.
    pub fn kind(&self) -> StrategyKind {
        self.kind
    }

    /// The node processed on the most recent productive step, `None`
    /// before the first one.
    pub fn current_position(&self) -> Option<Point> {
        self.current
    }

    /// Whether the agent has reached the goal.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether the frontier emptied out before the goal was reached.
    /// A stalled agent stays unfinished for the rest of the race.
    pub fn is_stalled(&self) -> bool {
        !self.finished && self.frontier.is_exhausted()
    }

    /// The tick on which the agent finished, if it has.
    pub fn finish_tick(&self) -> Option<u64> {
        self.finish_tick
    }

    /// Productive steps taken so far.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// The last few positions processed, oldest first (at most
    /// [`TRAIL_MAX`]).
    pub fn trail(&self) -> &[Point] {
        &self.trail
    }

    /// Every node this agent has finalized.
    pub fn visited(&self) -> &HashSet<Point> {
        &self.exp.visited
    }

    /// The reconstructed start-to-goal path; empty until finished.
    pub fn path(&self) -> &[Point] {
        &self.path
    }
}
