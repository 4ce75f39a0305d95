//! Search engines for the maze race.
//!
//! Four classical graph-search strategies race through the same maze, each
//! advancing by exactly one dequeue per call to [`Engine::step`]:
//!
//! | Strategy | Frontier | Pop order | Visited marking |
//! |---|---|---|---|
//! | [`Dijkstra`] | min-heap (dist, seq) | lowest distance, then FIFO | at pop |
//! | [`Astar`] | min-heap (f, g, seq) | lowest f, then lowest g, then FIFO | at pop |
//! | [`Bfs`] | FIFO queue | arrival order | at enqueue |
//! | [`Dfs`] | LIFO stack | most recent push | at pop |
//!
//! The enqueue-vs-pop visited timing is what gives each algorithm its
//! characteristic exploration shape and duplicate handling, and is
//! preserved exactly.
//!
//! Strategies implement the small [`Frontier`] capability; the [`Engine`]
//! wrapper owns the per-agent bookkeeping (step counter, recent trail,
//! finish detection, path reconstruction) and records every visit into the
//! shared [`AnnotationStore`].

mod annotations;
mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod engine;
mod neighbors;
mod open;

pub use annotations::AnnotationStore;
pub use astar::Astar;
pub use bfs::Bfs;
pub use dfs::Dfs;
pub use dijkstra::Dijkstra;
pub use distance::manhattan;
pub use engine::{Advance, Engine, Exploration, Frontier, StrategyKind, TRAIL_MAX};
pub use neighbors::Neighbors;
