//! Backtracking placement search
//!
//! - Grid state, placements and finished solutions
//! - The depth-first solver itself

/// Depth-first search with paired acquire/release of tiles
pub mod backtrack;
/// Row-major placement grid and solution wrapper
pub mod grid;

pub use backtrack::{SearchStats, SolveOutcome, Solver, solve};
pub use grid::{Grid, Placement, Solution};
