//! Text rendering of tiles, grids and adjacency reports
//!
//! Edges are written as their label followed by `1` for front or `0` for
//! back. A tile takes three lines: top edge centered, left and right edges
//! at either end, bottom edge centered.

use std::fmt::Display;

use crate::analysis::adjacency::{AdjacencyCheck, Direction};
use crate::io::configuration::{BACK_SUFFIX, FRONT_SUFFIX, RENDERED_TILE_WIDTH, TILE_SEPARATOR};
use crate::puzzle::edge::Edge;
use crate::puzzle::tile::{Side, Sides};
use crate::solver::grid::Grid;

/// Lines per rendered tile
const TILE_LINES: usize = 3;

/// Format a single edge, e.g. `R1`
pub fn format_edge<S: Display>(edge: &Edge<S>) -> String {
    let suffix = if edge.polarity().is_front() {
        FRONT_SUFFIX
    } else {
        BACK_SUFFIX
    };
    format!("{}{suffix}", edge.label())
}

/// Render one tile as three fixed-width lines
pub fn render_tile<S: Display>(sides: &Sides<S>) -> [String; TILE_LINES] {
    let width = RENDERED_TILE_WIDTH;
    let top = format_edge(&sides[Side::Top]);
    let right = format_edge(&sides[Side::Right]);
    let bottom = format_edge(&sides[Side::Bottom]);
    let left = format_edge(&sides[Side::Left]);
    let gap = width.saturating_sub(left.chars().count() + right.chars().count());
    [
        format!("{top:^width$}"),
        format!("{left}{:gap$}{right}", ""),
        format!("{bottom:^width$}"),
    ]
}

/// Render a grid row by row
///
/// Empty cells are drawn blank. Rows are separated by a dashed rule.
pub fn render_grid<S: Display>(grid: &Grid<S>) -> String {
    let (rows, cols) = grid.dimensions();
    let blank = " ".repeat(RENDERED_TILE_WIDTH);
    let rule = "-".repeat(cols * RENDERED_TILE_WIDTH + cols.saturating_sub(1) * TILE_SEPARATOR.len());

    let mut lines = Vec::new();
    for row in 0..rows {
        let rendered: Vec<Option<[String; TILE_LINES]>> = (0..cols)
            .map(|col| grid.get(row, col).map(|placement| render_tile(placement.sides())))
            .collect();

        for line in 0..TILE_LINES {
            let parts: Vec<&str> = rendered
                .iter()
                .map(|tile| {
                    tile.as_ref()
                        .and_then(|tile_lines| tile_lines.get(line))
                        .map_or(blank.as_str(), String::as_str)
                })
                .collect();
            lines.push(parts.join(TILE_SEPARATOR).trim_end().to_string());
        }

        if row + 1 < rows {
            lines.push(rule.clone());
        }
    }
    lines.into_iter().map(|line| line + "\n").collect()
}

/// Render one line per checked adjacency
///
/// ```text
/// ✅ (0,0) right R0 <-> (0,1) left R1
/// ```
pub fn render_adjacency_report<S: Display>(checks: &[AdjacencyCheck<S>]) -> String {
    checks
        .iter()
        .map(|check| {
            let status = if check.matches { "✅" } else { "❌" };
            let from_side = check.direction.facing_side();
            format!(
                "{status} ({},{}) {} {} <-> ({},{}) {} {}\n",
                check.from.0,
                check.from.1,
                from_side.name(),
                format_edge(&check.from_edge),
                check.to.0,
                check.to.1,
                from_side.opposite().name(),
                format_edge(&check.to_edge),
            )
        })
        .collect()
}

/// One-line summary of a report, e.g. `12 adjacencies checked, 0 mismatches`
pub fn summarize_adjacencies<S>(checks: &[AdjacencyCheck<S>]) -> String {
    let mismatches = checks.iter().filter(|check| !check.matches).count();
    let horizontal = checks
        .iter()
        .filter(|check| check.direction == Direction::Horizontal)
        .count();
    format!(
        "{} adjacencies checked ({horizontal} horizontal, {} vertical), {mismatches} mismatches",
        checks.len(),
        checks.len() - horizontal
    )
}
