//! Independent re-check of every interior adjacency of a grid
//!
//! The solver validates placements as it goes and never calls into this
//! module. These checks exist for reporting and for verifying a grid
//! produced elsewhere.

use crate::puzzle::edge::Edge;
use crate::puzzle::tile::Side;
use crate::solver::grid::Grid;

/// Direction of an interior adjacency, seen from the upper-left cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `(row, col)` right side against `(row, col + 1)` left side
    Horizontal,
    /// `(row, col)` bottom side against `(row + 1, col)` top side
    Vertical,
}

impl Direction {
    /// Side of the first cell that faces the second
    pub const fn facing_side(self) -> Side {
        match self {
            Self::Horizontal => Side::Right,
            Self::Vertical => Side::Bottom,
        }
    }
}

/// One checked pair of touching edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyCheck<S> {
    /// Upper or left cell
    pub from: (usize, usize),
    /// Lower or right cell
    pub to: (usize, usize),
    /// Orientation of the pair
    pub direction: Direction,
    /// Tile id placed at `from`
    pub from_tile: usize,
    /// Tile id placed at `to`
    pub to_tile: usize,
    /// Edge presented by `from` toward `to`
    pub from_edge: Edge<S>,
    /// Edge presented by `to` toward `from`
    pub to_edge: Edge<S>,
    /// Whether the two edges match
    pub matches: bool,
}

/// Check every interior adjacency whose two cells are filled
///
/// Pairs are listed in row-major order of `from`, the horizontal pair of a
/// cell before its vertical pair. A full N×N grid yields `2 * (N² - N)`
/// checks.
pub fn check_adjacencies<S: Clone + PartialEq>(grid: &Grid<S>) -> Vec<AdjacencyCheck<S>> {
    let mut checks = Vec::new();
    for ((row, col), placement) in grid.placements() {
        let neighbors = [
            (Direction::Horizontal, (row, col + 1)),
            (Direction::Vertical, (row + 1, col)),
        ];
        for (direction, to) in neighbors {
            let Some(neighbor) = grid.get(to.0, to.1) else {
                continue;
            };
            let side = direction.facing_side();
            let from_edge = placement.edge(side).clone();
            let to_edge = neighbor.edge(side.opposite()).clone();
            checks.push(AdjacencyCheck {
                from: (row, col),
                to,
                direction,
                from_tile: placement.tile_id(),
                to_tile: neighbor.tile_id(),
                matches: from_edge.matches(&to_edge),
                from_edge,
                to_edge,
            });
        }
    }
    checks
}

/// Only the adjacencies that fail to match
pub fn find_mismatches<S: Clone + PartialEq>(grid: &Grid<S>) -> Vec<AdjacencyCheck<S>> {
    check_adjacencies(grid)
        .into_iter()
        .filter(|check| !check.matches)
        .collect()
}

/// Test that a grid is complete and every interior adjacency matches
pub fn is_valid_solution<S: Clone + PartialEq>(grid: &Grid<S>) -> bool {
    grid.is_complete() && find_mismatches(grid).is_empty()
}
