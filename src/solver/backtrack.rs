//! Depth-first backtracking search over tile placements
//!
//! Cells are filled in row-major order. At each position every unused tile
//! is tried under each of its four rotations, ascending by id then by
//! rotation, so the first solution found is reproducible. A candidate is
//! checked only against its already placed left and top neighbors; each
//! interior adjacency is therefore validated exactly once, by the tile
//! placed later. Outer boundary edges carry no constraint.
//!
//! The search keeps one frame per filled position in a `Vec` instead of
//! recursing. A frame records the next (tile, rotation) to try and the tile
//! it currently holds, so backtracking pops the frame and undoes its
//! parent's placement.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, trace};

use crate::io::configuration::SIDE_COUNT;
use crate::io::error::Result;
use crate::puzzle::definition::Puzzle;
use crate::puzzle::tile::{Rotation, Side, Sides, Tile};
use crate::puzzle::tileset::TileSet;
use crate::solver::grid::{Grid, Placement, Solution};

/// Result of a completed search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome<S> {
    /// A fully filled grid satisfying every interior adjacency
    Solved(Solution<S>),
    /// The search space was exhausted without a solution
    Unsolvable,
    /// The cancellation flag was raised before the search finished
    Cancelled,
}

impl<S> SolveOutcome<S> {
    /// Test for [`SolveOutcome::Solved`]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    /// The solution, if one was found
    pub fn solution(self) -> Option<Solution<S>> {
        match self {
            Self::Solved(solution) => Some(solution),
            Self::Unsolvable | Self::Cancelled => None,
        }
    }
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidate (tile, rotation) pairs examined
    pub attempts: u64,
    /// Candidates that passed the neighbor check and were placed
    pub placements: u64,
    /// Placements undone after their subtree failed
    pub backtracks: u64,
}

// Result of a whole search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Found,
    Exhausted,
    Cancelled,
}

// Result of resuming one position's cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Advance {
    Placed,
    Exhausted,
    Cancelled,
}

// Search state of one grid position
#[derive(Debug, Clone, Copy, Default)]
struct Frame {
    // Next candidate to examine
    id: usize,
    rotation: usize,
    // Tile currently placed at this position
    placed: Option<usize>,
}

/// Backtracking solver owning the grid and tile pool of one puzzle
#[derive(Debug)]
pub struct Solver<S> {
    tiles: TileSet<S>,
    grid: Grid<S>,
    stats: SearchStats,
    cancel: Option<Arc<AtomicBool>>,
}

impl<S: Clone + PartialEq> Solver<S> {
    /// Create a solver for a validated puzzle
    pub fn new(puzzle: Puzzle<S>) -> Self {
        let ((rows, cols), tiles) = puzzle.into_parts();
        Self {
            tiles: TileSet::new(tiles),
            grid: Grid::with_dimensions(rows, cols),
            stats: SearchStats::default(),
            cancel: None,
        }
    }

    /// Poll `flag` once per candidate attempt and stop when it is set
    #[must_use]
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Grid dimensions (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// Tile pool with its current used marks
    pub const fn tiles(&self) -> &TileSet<S> {
        &self.tiles
    }

    /// Counters from the most recent search
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search for the first solution
    ///
    /// Each call starts from an empty grid with no used marks, so repeated
    /// calls yield the same outcome. The solver keeps nothing of a returned
    /// solution.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyUsed`, `NotUsed`, `InvalidTileId` or
    /// `InvalidPosition` only if the search bookkeeping is inconsistent.
    /// An unsolvable puzzle is reported as [`SolveOutcome::Unsolvable`].
    pub fn solve(&mut self) -> Result<SolveOutcome<S>> {
        self.reset();
        let (rows, cols) = self.dimensions();
        debug!(
            "Solving {rows}x{cols} puzzle with {} tiles",
            self.tiles.len()
        );

        let outcome = match self.search() {
            Ok(Step::Found) => {
                let grid =
                    std::mem::replace(&mut self.grid, Grid::with_dimensions(rows, cols));
                self.release();
                SolveOutcome::Solved(Solution::from_grid(grid))
            }
            // Every placement has already been undone on the way out
            Ok(Step::Exhausted) => SolveOutcome::Unsolvable,
            Ok(Step::Cancelled) => {
                self.release();
                SolveOutcome::Cancelled
            }
            Err(error) => {
                self.release();
                return Err(error);
            }
        };

        debug!(
            "Search finished: solved={}, attempts={}, placements={}, backtracks={}",
            outcome.is_solved(),
            self.stats.attempts,
            self.stats.placements,
            self.stats.backtracks
        );
        Ok(outcome)
    }

    // The top frame belongs to the position being searched
    fn search(&mut self) -> Result<Step> {
        let cells = self.grid.cell_count();
        let mut frames = vec![Frame::default()];

        while let Some(position) = frames.len().checked_sub(1) {
            if position == cells {
                return Ok(Step::Found);
            }
            let Some(frame) = frames.last_mut() else {
                break;
            };

            match self.place_next(position, frame)? {
                Advance::Placed => frames.push(Frame::default()),
                Advance::Cancelled => return Ok(Step::Cancelled),
                Advance::Exhausted => {
                    frames.pop();
                    if let Some(parent) = frames.last_mut() {
                        self.undo(position - 1, parent)?;
                    }
                }
            }
        }

        Ok(Step::Exhausted)
    }

    // Resume the frame's cursor: unused ids ascending, rotations 0..3
    fn place_next(&mut self, position: usize, frame: &mut Frame) -> Result<Advance> {
        let (row, col) = self.grid.coordinates(position);

        while frame.id < self.tiles.len() {
            if frame.rotation >= SIDE_COUNT || self.tiles.is_used(frame.id) {
                frame.id += 1;
                frame.rotation = 0;
                continue;
            }
            let id = frame.id;
            let rotation = Rotation::new(frame.rotation);
            frame.rotation += 1;

            if self.is_cancelled() {
                return Ok(Advance::Cancelled);
            }
            self.stats.attempts += 1;
            let sides = self.tiles.tile(id)?.rotated_sides(rotation);
            if !self.fits(row, col, &sides) {
                continue;
            }

            self.tiles.mark_used(id)?;
            self.grid
                .place(row, col, Placement::new(id, rotation, sides))?;
            frame.placed = Some(id);
            self.stats.placements += 1;
            trace!(
                "Placed tile {id} at ({row},{col}) rotated {}°",
                rotation.degrees()
            );
            return Ok(Advance::Placed);
        }

        Ok(Advance::Exhausted)
    }

    fn undo(&mut self, position: usize, frame: &mut Frame) -> Result<()> {
        let Some(id) = frame.placed.take() else {
            return Ok(());
        };
        let (row, col) = self.grid.coordinates(position);
        self.grid.clear(row, col);
        self.tiles.unmark(id)?;
        self.stats.backtracks += 1;
        trace!("Backtracked tile {id} from ({row},{col})");
        Ok(())
    }

    // Left and top neighbors only; right and bottom are still empty
    fn fits(&self, row: usize, col: usize, sides: &Sides<S>) -> bool {
        let left_fits = col == 0
            || self
                .grid
                .get(row, col - 1)
                .is_none_or(|left| left.edge(Side::Right).matches(&sides[Side::Left]));
        let top_fits = row == 0
            || self
                .grid
                .get(row - 1, col)
                .is_none_or(|top| top.edge(Side::Bottom).matches(&sides[Side::Top]));
        left_fits && top_fits
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    fn reset(&mut self) {
        self.release();
        self.stats = SearchStats::default();
    }

    fn release(&mut self) {
        self.grid.clear_all();
        self.tiles.reset();
    }
}

/// Validate a tile list against an N×N grid and search it
///
/// # Errors
///
/// Returns `SizeMismatch` if `tiles.len() != size * size` and
/// `InvalidParameter` if `size` is zero, both before any search
pub fn solve<S: Clone + PartialEq>(tiles: Vec<Tile<S>>, size: usize) -> Result<SolveOutcome<S>> {
    let puzzle = Puzzle::new(size, tiles)?;
    Solver::new(puzzle).solve()
}
