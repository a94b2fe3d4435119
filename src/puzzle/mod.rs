//! Puzzle data model
//!
//! This module contains the immutable puzzle pieces:
//! - Edges and the matching predicate
//! - Tiles and their rotated views
//! - The tile pool with used-mark tracking
//! - The validated puzzle definition

/// Validated puzzle input
pub mod definition;
/// Edge labels, polarity and matching
pub mod edge;
/// Tiles, sides and rotations
pub mod tile;
/// Tile pool with used-mark tracking
pub mod tileset;

pub use definition::Puzzle;
pub use edge::{Edge, Polarity};
pub use tile::{Rotation, Side, Sides, Tile};
pub use tileset::TileSet;
