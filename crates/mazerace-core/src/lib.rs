//! **mazerace-core** — core types for the maze race simulation.
//!
//! This crate provides the foundational types shared across the *mazerace*
//! workspace: the integer [`Point`] geometry primitive, a packed-RGB
//! [`Color`] carried as an opaque display hint, and the [`MazeGrid`] of
//! [`CellState`] values that every search agent races through.

pub mod color;
pub mod geom;
pub mod grid;

pub use color::Color;
pub use geom::Point;
pub use grid::{CellState, MazeGrid};
