//! Placement grid addressed row-major
//!
//! Position `p` maps to `(p / cols, p % cols)`; for the usual N×N grid that
//! is `(p / N, p % N)`. Cells start empty and are filled one at a time by
//! the search.

use ndarray::Array2;

use crate::io::error::{PuzzleError, Result};
use crate::puzzle::edge::Edge;
use crate::puzzle::tile::{Rotation, Side, Sides};

/// A tile placed on the grid under a rotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement<S> {
    tile_id: usize,
    rotation: Rotation,
    sides: Sides<S>,
}

impl<S> Placement<S> {
    /// Create a placement from a tile id, rotation and the realized sides
    pub const fn new(tile_id: usize, rotation: Rotation, sides: Sides<S>) -> Self {
        Self {
            tile_id,
            rotation,
            sides,
        }
    }

    /// Stable id of the placed tile
    pub const fn tile_id(&self) -> usize {
        self.tile_id
    }

    /// Rotation the tile was placed under
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Edges as presented on the grid
    pub const fn sides(&self) -> &Sides<S> {
        &self.sides
    }

    /// Presented edge on one side
    pub fn edge(&self, side: Side) -> &Edge<S> {
        &self.sides[side]
    }
}

/// Grid of optional placements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<S> {
    cells: Array2<Option<Placement<S>>>,
}

impl<S> Grid<S> {
    /// Create an empty N×N grid
    pub fn new(size: usize) -> Self {
        Self::with_dimensions(size, size)
    }

    /// Create an empty `rows` × `cols` grid
    pub fn with_dimensions(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_shape_simple_fn((rows, cols), || None),
        }
    }

    /// Grid dimensions (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Row-major `(row, col)` of a position index
    pub fn coordinates(&self, position: usize) -> (usize, usize) {
        let cols = self.cols().max(1);
        (position / cols, position % cols)
    }

    /// Placement at `(row, col)`, `None` if empty or out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&Placement<S>> {
        self.cells.get((row, col)).and_then(Option::as_ref)
    }

    /// Write a placement into an empty or occupied cell
    ///
    /// # Errors
    ///
    /// Returns `InvalidPosition` if `(row, col)` lies outside the grid
    pub fn place(&mut self, row: usize, col: usize, placement: Placement<S>) -> Result<()> {
        let dimensions = self.dimensions();
        let cell = self
            .cells
            .get_mut((row, col))
            .ok_or(PuzzleError::InvalidPosition {
                row,
                col,
                dimensions,
            })?;
        *cell = Some(placement);
        Ok(())
    }

    /// Empty a cell, returning what it held
    pub fn clear(&mut self, row: usize, col: usize) -> Option<Placement<S>> {
        self.cells.get_mut((row, col)).and_then(Option::take)
    }

    /// Empty every cell
    pub fn clear_all(&mut self) {
        self.cells.map_inplace(|cell| *cell = None);
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Test whether every cell holds a placement
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Iterate `((row, col), placement)` over filled cells in row-major order
    pub fn placements(&self) -> impl Iterator<Item = ((usize, usize), &Placement<S>)> {
        self.cells
            .indexed_iter()
            .filter_map(|(index, cell)| cell.as_ref().map(|placement| (index, placement)))
    }
}

/// A completely filled grid satisfying the adjacency invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<S> {
    grid: Grid<S>,
}

impl<S> Solution<S> {
    /// Wrap a grid the solver has finished
    pub(crate) const fn from_grid(grid: Grid<S>) -> Self {
        Self { grid }
    }

    /// Grid dimensions (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// The filled grid
    pub const fn grid(&self) -> &Grid<S> {
        &self.grid
    }

    /// Placement at `(row, col)`, `None` only when out of bounds
    pub fn placement(&self, row: usize, col: usize) -> Option<&Placement<S>> {
        self.grid.get(row, col)
    }

    /// Tile ids laid out row by row
    pub fn tile_ids(&self) -> Vec<Vec<usize>> {
        self.by_row(Placement::tile_id)
    }

    /// Rotations laid out row by row
    pub fn rotations(&self) -> Vec<Vec<Rotation>> {
        self.by_row(Placement::rotation)
    }

    /// Consume the solution, returning the grid
    pub fn into_grid(self) -> Grid<S> {
        self.grid
    }

    fn by_row<T>(&self, project: impl Fn(&Placement<S>) -> T) -> Vec<Vec<T>> {
        self.grid
            .cells
            .rows()
            .into_iter()
            .map(|row| row.iter().flatten().map(&project).collect())
            .collect()
    }
}
