//! **mazerace-sim** — the race coordinator.
//!
//! A [`RaceState`] owns one generated maze, one shared annotation store
//! and one engine per strategy, all racing from the same start to the
//! same goal. The host drives it with [`RaceState::tick`] at whatever
//! pace it likes and reads agent state, per-cell annotations and the
//! leaderboard back out. Restarting means constructing a fresh
//! `RaceState`; nothing is reset in place.

mod race;
mod roster;

pub use race::{GRID_HEIGHT, GRID_WIDTH, AgentSummary, RaceError, RaceState, generate_maze};
pub use roster::{AgentSpec, default_roster};
