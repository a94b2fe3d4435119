//! Square tiles with four oriented edges and their rotated views
//!
//! Sides are indexed clockwise from the top: 0=top, 1=right, 2=bottom,
//! 3=left. Rotating a tile never mutates it; a rotation only changes which
//! edge is presented on each side.

use std::ops::Index;

use crate::io::configuration::SIDE_COUNT;
use crate::io::error::{PuzzleError, Result};
use crate::puzzle::edge::Edge;

/// Position of an edge on a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    /// Side 0
    Top,
    /// Side 1
    Right,
    /// Side 2
    Bottom,
    /// Side 3
    Left,
}

impl Side {
    /// All sides in index order
    pub const ALL: [Self; SIDE_COUNT] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Convert a side index into a side
    ///
    /// # Errors
    ///
    /// Returns `InvalidSideIndex` for indices outside 0..=3
    pub fn from_index(index: usize) -> Result<Self> {
        match index {
            0 => Ok(Self::Top),
            1 => Ok(Self::Right),
            2 => Ok(Self::Bottom),
            3 => Ok(Self::Left),
            _ => Err(PuzzleError::InvalidSideIndex { index }),
        }
    }

    /// Side index in 0..=3
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Side of a neighbor that faces this side
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// Lowercase side name used in reports
    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

/// Clockwise quarter turns, normalised to 0..=3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rotation(u8);

impl Rotation {
    /// No rotation
    pub const IDENTITY: Self = Self(0);

    /// All rotations in ascending order
    pub const ALL: [Self; SIDE_COUNT] = [Self(0), Self(1), Self(2), Self(3)];

    /// Create a rotation of `quarter_turns` mod 4
    pub const fn new(quarter_turns: usize) -> Self {
        Self((quarter_turns % SIDE_COUNT) as u8)
    }

    /// Number of clockwise quarter turns in 0..=3
    pub const fn quarter_turns(self) -> usize {
        self.0 as usize
    }

    /// Rotation equivalent to applying `self` followed by `other`
    #[must_use]
    pub const fn then(self, other: Self) -> Self {
        Self::new(self.quarter_turns() + other.quarter_turns())
    }

    /// Rotation angle in degrees
    pub const fn degrees(self) -> u16 {
        self.0 as u16 * 90
    }
}

/// Exactly four edges addressed by [`Side`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sides<S>([Edge<S>; SIDE_COUNT]);

impl<S> Sides<S> {
    /// Create from edges in top, right, bottom, left order
    pub const fn new(edges: [Edge<S>; SIDE_COUNT]) -> Self {
        Self(edges)
    }

    /// Edges in side index order
    pub const fn as_array(&self) -> &[Edge<S>; SIDE_COUNT] {
        &self.0
    }

    /// Iterate `(side, edge)` pairs in side index order
    pub fn iter(&self) -> impl Iterator<Item = (Side, &Edge<S>)> {
        Side::ALL.into_iter().zip(self.0.iter())
    }

    /// Edge at a raw side index
    ///
    /// # Errors
    ///
    /// Returns `InvalidSideIndex` for indices outside 0..=3
    pub fn get(&self, index: usize) -> Result<&Edge<S>> {
        self.0
            .get(index)
            .ok_or(PuzzleError::InvalidSideIndex { index })
    }
}

impl<S: Clone> Sides<S> {
    /// View after rotating clockwise by `rotation`
    ///
    /// `rotated[s] = original[(s - k) mod 4]`
    #[must_use]
    pub fn rotated(&self, rotation: Rotation) -> Self {
        let mut edges = self.0.clone();
        edges.rotate_right(rotation.quarter_turns());
        Self(edges)
    }
}

impl<S> Index<Side> for Sides<S> {
    type Output = Edge<S>;

    fn index(&self, side: Side) -> &Self::Output {
        let [top, right, bottom, left] = &self.0;
        match side {
            Side::Top => top,
            Side::Right => right,
            Side::Bottom => bottom,
            Side::Left => left,
        }
    }
}

/// Immutable square tile
///
/// Equality is structural over the unrotated edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tile<S> {
    sides: Sides<S>,
}

impl<S> Tile<S> {
    /// Create a tile from its edges in top, right, bottom, left order
    pub const fn new(top: Edge<S>, right: Edge<S>, bottom: Edge<S>, left: Edge<S>) -> Self {
        Self::from_sides(Sides::new([top, right, bottom, left]))
    }

    /// Create a tile from a complete set of sides
    pub const fn from_sides(sides: Sides<S>) -> Self {
        Self { sides }
    }

    /// Edges as constructed
    pub const fn sides(&self) -> &Sides<S> {
        &self.sides
    }

    /// Edge at a raw side index
    ///
    /// # Errors
    ///
    /// Returns `InvalidSideIndex` for indices outside 0..=3
    pub fn side(&self, index: usize) -> Result<&Edge<S>> {
        self.sides.get(index)
    }

    /// Edge on a given side without rotation
    pub fn edge(&self, side: Side) -> &Edge<S> {
        &self.sides[side]
    }
}

impl<S: Clone> Tile<S> {
    /// Edges presented after rotating clockwise by `rotation`
    pub fn rotated_sides(&self, rotation: Rotation) -> Sides<S> {
        self.sides.rotated(rotation)
    }

    /// All four rotated views in ascending rotation order
    pub fn orientations(&self) -> [(Rotation, Sides<S>); SIDE_COUNT] {
        Rotation::ALL.map(|rotation| (rotation, self.rotated_sides(rotation)))
    }
}
