//! Immutable puzzle input: an ordered tile list and the grid dimensions

use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::puzzle::tile::Tile;

/// Validated puzzle definition
///
/// Holds exactly `rows * cols` tiles. Tile order defines stable ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle<S> {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile<S>>,
}

impl<S> Puzzle<S> {
    /// Create a puzzle for an N×N grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `size` is zero, or `SizeMismatch` if the
    /// tile count is not `size * size`
    pub fn new(size: usize, tiles: Vec<Tile<S>>) -> Result<Self> {
        Self::with_dimensions(size, size, tiles)
    }

    /// Create a puzzle for a `rows` × `cols` grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero, or
    /// `SizeMismatch` if the tile count is not `rows * cols`
    pub fn with_dimensions(rows: usize, cols: usize, tiles: Vec<Tile<S>>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(invalid_parameter(
                "size",
                &format!("{rows}x{cols}"),
                &"grid dimensions must be at least 1",
            ));
        }
        if rows.checked_mul(cols) != Some(tiles.len()) {
            return Err(PuzzleError::SizeMismatch {
                tiles: tiles.len(),
                rows,
                cols,
            });
        }
        Ok(Self { rows, cols, tiles })
    }

    /// Create a square puzzle, inferring N from a perfect-square tile count
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the tile count is zero or not a perfect
    /// square
    pub fn square(tiles: Vec<Tile<S>>) -> Result<Self> {
        let count = tiles.len();
        let size = count.isqrt();
        if count == 0 || size * size != count {
            return Err(invalid_parameter(
                "tiles",
                &count,
                &"tile count must be a non-zero perfect square",
            ));
        }
        Self::new(size, tiles)
    }

    /// Grid dimensions (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Test whether the grid is N×N
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Tiles in id order
    pub fn tiles(&self) -> &[Tile<S>] {
        &self.tiles
    }

    /// Consume the puzzle, returning its dimensions and tiles
    pub fn into_parts(self) -> ((usize, usize), Vec<Tile<S>>) {
        ((self.rows, self.cols), self.tiles)
    }
}
