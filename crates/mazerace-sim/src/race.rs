//! Race state and per-tick driving.

use std::fmt;
use std::sync::Arc;

use mazerace_core::{Color, MazeGrid, Point};
use mazerace_search::{AnnotationStore, Engine, StrategyKind};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::roster::{AgentSpec, default_roster};

/// Default arena width in cells.
pub const GRID_WIDTH: i32 = 35;
/// Default arena height in cells.
pub const GRID_HEIGHT: i32 = 25;

/// Generate a default-size arena with OS-seeded randomness, suitable for
/// [`RaceState::with_maze`].
pub fn generate_maze() -> MazeGrid {
    mazerace_gen::generate(GRID_WIDTH, GRID_HEIGHT, SmallRng::from_rng(&mut rand::rng()))
}

/// Errors from malformed race construction. Ticking a constructed race
/// never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RaceError {
    /// The grid has no usable cells for a race.
    EmptyGrid { width: i32, height: i32 },
    /// A race endpoint lies outside the grid.
    OutOfBounds(Point),
    /// No agents were supplied.
    EmptyRoster,
}

impl fmt::Display for RaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, height } => {
                write!(f, "grid {width}x{height} is too small to race on")
            }
            Self::OutOfBounds(p) => write!(f, "race endpoint {p} is outside the grid"),
            Self::EmptyRoster => write!(f, "a race needs at least one agent"),
        }
    }
}

impl std::error::Error for RaceError {}

/// One leaderboard row.
#[derive(Debug, Clone)]
pub struct AgentSummary {
    pub name: String,
    pub color: Color,
    pub kind: StrategyKind,
    pub finished: bool,
    pub finish_tick: Option<u64>,
    pub steps: u32,
    pub current: Option<Point>,
    pub path_len: usize,
}

/// A complete race: maze, shared annotations, agents and the tick
/// counter. Discard and rebuild to restart.
pub struct RaceState {
    maze: Arc<MazeGrid>,
    start: Point,
    goal: Point,
    notes: Arc<AnnotationStore>,
    engines: Vec<Engine>,
    ticks: u64,
}

impl RaceState {
    /// Generate a fresh maze of the given dimensions and field the
    /// default roster on it, racing from `(1, 1)` to
    /// `(width - 2, height - 2)`.
    pub fn new(width: i32, height: i32) -> Result<Self, RaceError> {
        if width < 2 || height < 2 {
            return Err(RaceError::EmptyGrid { width, height });
        }
        let maze = mazerace_gen::generate(width, height, SmallRng::from_rng(&mut rand::rng()));
        Self::with_maze(
            maze,
            Point::new(1, 1),
            Point::new(width - 2, height - 2),
            default_roster(),
        )
    }

    /// Build a race over a host-supplied maze.
    pub fn with_maze(
        maze: MazeGrid,
        start: Point,
        goal: Point,
        roster: Vec<AgentSpec>,
    ) -> Result<Self, RaceError> {
        if maze.is_empty() {
            return Err(RaceError::EmptyGrid {
                width: maze.width(),
                height: maze.height(),
            });
        }
        if !maze.contains(start) {
            return Err(RaceError::OutOfBounds(start));
        }
        if !maze.contains(goal) {
            return Err(RaceError::OutOfBounds(goal));
        }
        if roster.is_empty() {
            return Err(RaceError::EmptyRoster);
        }

        let maze = Arc::new(maze);
        let engines: Vec<Engine> = roster
            .into_iter()
            .map(|spec| {
                Engine::new(
                    spec.name,
                    spec.color,
                    spec.kind,
                    Arc::clone(&maze),
                    start,
                    goal,
                )
            })
            .collect();

        log::debug!(
            "new race on {}x{} arena, {} agents, {start} -> {goal}",
            maze.width(),
            maze.height(),
            engines.len()
        );

        Ok(Self {
            maze,
            start,
            goal,
            notes: Arc::new(AnnotationStore::new()),
            engines,
            ticks: 0,
        })
    }

    /// Advance the race by one tick: every engine steps exactly once, in
    /// roster order, regardless of finish state (finished engines no-op).
    pub fn tick(&mut self) {
        self.ticks += 1;
        let tick = self.ticks;
        for engine in &mut self.engines {
            engine.step(tick, &self.notes);
        }
    }

    /// Number of ticks driven so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The shared maze.
    pub fn maze(&self) -> &Arc<MazeGrid> {
        &self.maze
    }

    /// Race start cell.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Race goal cell.
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// The shared annotation store. Clone the `Arc` to read concurrently
    /// with ticking.
    pub fn annotations(&self) -> &Arc<AnnotationStore> {
        &self.notes
    }

    /// The racing agents, in roster order.
    pub fn agents(&self) -> &[Engine] {
        &self.engines
    }

    /// Whether every agent has reached the goal.
    pub fn all_finished(&self) -> bool {
        self.engines.iter().all(Engine::is_finished)
    }

    /// Leaderboard: finished agents by finish tick (ties by step count,
    /// then roster order), unfinished agents after all finished ones in
    /// roster order.
    pub fn ranking(&self) -> Vec<AgentSummary> {
        let mut rows: Vec<(usize, AgentSummary)> = self
            .engines
            .iter()
            .enumerate()
            .map(|(idx, e)| {
                (
                    idx,
                    AgentSummary {
                        name: e.name().to_string(),
                        color: e.color(),
                        kind: e.kind(),
                        finished: e.is_finished(),
                        finish_tick: e.finish_tick(),
                        steps: e.steps(),
                        current: e.current_position(),
                        path_len: e.path().len(),
                    },
                )
            })
            .collect();
        rows.sort_by_key(|(idx, s)| rank_key(s, *idx));
        rows.into_iter().map(|(_, s)| s).collect()
    }
}

/// Comparable ranking key: unfinished-last, then finish tick, then step
/// count, then roster order.
fn rank_key(s: &AgentSummary, idx: usize) -> (bool, u64, u32, usize) {
    (
        !s.finished,
        s.finish_tick.unwrap_or(u64::MAX),
        s.steps,
        idx,
    )
}
