//! Pool of tiles with per-run used marks
//!
//! Tile ids are positions in the input order. Used marks live in a bit
//! vector; every `mark_used` during search is paired with an `unmark` on
//! backtrack so a failed branch leaves the marks as it found them.

use bitvec::prelude::*;

use crate::io::error::{PuzzleError, Result};
use crate::puzzle::tile::Tile;

/// Fixed collection of tiles with used-mark tracking
#[derive(Debug, Clone)]
pub struct TileSet<S> {
    tiles: Vec<Tile<S>>,
    used: BitVec,
}

impl<S> TileSet<S> {
    /// Create a tile set; input order defines ids `0..len`
    pub fn new(tiles: Vec<Tile<S>>) -> Self {
        let used = bitvec![0; tiles.len()];
        Self { tiles, used }
    }

    /// Number of tiles in the set
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Test if the set holds no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All tiles in id order
    pub fn tiles(&self) -> &[Tile<S>] {
        &self.tiles
    }

    /// Look up a tile by id
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileId` if `id` is not in the set
    pub fn tile(&self, id: usize) -> Result<&Tile<S>> {
        self.tiles.get(id).ok_or(PuzzleError::InvalidTileId {
            id,
            count: self.len(),
        })
    }

    /// Ids not currently marked used, ascending
    pub fn available_ids(&self) -> Vec<usize> {
        self.used.iter_zeros().collect()
    }

    /// Test whether a tile is marked used
    ///
    /// Unknown ids are reported as unused.
    pub fn is_used(&self, id: usize) -> bool {
        self.used.get(id).as_deref() == Some(&true)
    }

    /// Number of tiles currently marked used
    pub fn used_count(&self) -> usize {
        self.used.count_ones()
    }

    /// Read-only view of the used marks, indexed by id
    pub fn used_marks(&self) -> &BitSlice {
        &self.used
    }

    /// Mark a tile as placed on the grid
    ///
    /// # Errors
    ///
    /// Returns `AlreadyUsed` if the tile is already marked, or
    /// `InvalidTileId` if `id` is not in the set
    pub fn mark_used(&mut self, id: usize) -> Result<()> {
        if self.replace_mark(id, true)? {
            return Err(PuzzleError::AlreadyUsed { id });
        }
        Ok(())
    }

    /// Release a tile after its placement is undone
    ///
    /// # Errors
    ///
    /// Returns `NotUsed` if the tile is not marked, or `InvalidTileId` if
    /// `id` is not in the set
    pub fn unmark(&mut self, id: usize) -> Result<()> {
        if !self.replace_mark(id, false)? {
            return Err(PuzzleError::NotUsed { id });
        }
        Ok(())
    }

    /// Clear every used mark
    pub fn reset(&mut self) {
        self.used.fill(false);
    }

    // Returns the previous mark
    fn replace_mark(&mut self, id: usize, value: bool) -> Result<bool> {
        let count = self.len();
        let mut bit = self
            .used
            .get_mut(id)
            .ok_or(PuzzleError::InvalidTileId { id, count })?;
        Ok(std::mem::replace(&mut *bit, value))
    }
}
