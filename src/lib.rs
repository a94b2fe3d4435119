//! Backtracking solver for edge-matching tile puzzles
//!
//! Square tiles carry four labeled, oriented edges. The solver places every
//! tile exactly once, under one of four rotations, so that each pair of
//! touching edges shares a label and has opposite polarity.

#![forbid(unsafe_code)]

/// Read-only validation of placed grids
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Edges, tiles and the tile pool
pub mod puzzle;
/// Backtracking placement search
pub mod solver;

pub use io::error::{PuzzleError, Result};
pub use puzzle::{Edge, Polarity, Puzzle, Rotation, Side, Tile, TileSet};
pub use solver::{SearchStats, Solution, SolveOutcome, Solver, solve};
