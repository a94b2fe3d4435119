//! Plain-text puzzle loader
//!
//! One tile per line, four edge tokens in top, right, bottom, left order.
//! A token is a label followed by a polarity marker (`1`/`+` front,
//! `0`/`-` back). Blank lines and `#` comments are skipped and an optional
//! `size N` or `size RxC` line fixes the grid dimensions.
//!
//! ```text
//! # a 1x2 strip
//! size 1x2
//! R1 R0 R1 R0
//! R0 R1 R0 R1
//! ```

use std::path::Path;

use crate::io::configuration::{
    BACK_MARKERS, COMMENT_PREFIX, FRONT_MARKERS, MAX_GRID_DIMENSION, SIDE_COUNT, SIZE_DIRECTIVE,
};
use crate::io::error::{PuzzleError, Result, invalid_parameter, parse_error};
use crate::puzzle::definition::Puzzle;
use crate::puzzle::edge::{Edge, Polarity};
use crate::puzzle::tile::{Sides, Tile};

/// Read and parse a puzzle file
///
/// `dimensions` takes precedence over a `size` directive in the file.
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read, and any error of
/// [`parse_puzzle`]
pub fn load_puzzle(path: &Path, dimensions: Option<(usize, usize)>) -> Result<Puzzle<String>> {
    let text = std::fs::read_to_string(path).map_err(|source| PuzzleError::FileSystem {
        path: path.to_path_buf(),
        operation: "read puzzle",
        source,
    })?;
    parse_puzzle(&text, dimensions)
}

/// Parse puzzle text into a validated puzzle
///
/// # Errors
///
/// Returns `Parse` for malformed lines, `InvalidParameter` for a size above
/// the loader limit or a tile count that is not a perfect square when no
/// size is given, and `SizeMismatch` when the tile count disagrees with the
/// dimensions
pub fn parse_puzzle(text: &str, dimensions: Option<(usize, usize)>) -> Result<Puzzle<String>> {
    let mut declared_size = None;
    let mut tiles = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        if let Some(value) = line
            .strip_prefix(SIZE_DIRECTIVE)
            .filter(|rest| rest.starts_with(char::is_whitespace))
        {
            if declared_size.is_some() {
                return Err(parse_error(line_number, &"duplicate size directive"));
            }
            let parsed = parse_dimensions(value.trim())
                .map_err(|error| parse_error(line_number, &error))?;
            declared_size = Some(parsed);
            continue;
        }

        let edges: Vec<Edge<String>> = line
            .split_whitespace()
            .map(|token| parse_edge(token, line_number))
            .collect::<Result<_>>()?;
        let edges: [Edge<String>; SIDE_COUNT] = edges.try_into().map_err(|found: Vec<_>| {
            parse_error(
                line_number,
                &format!("expected {SIDE_COUNT} edges, found {}", found.len()),
            )
        })?;
        tiles.push(Tile::from_sides(Sides::new(edges)));
    }

    match dimensions.or(declared_size) {
        Some((rows, cols)) => {
            check_dimension(rows)?;
            check_dimension(cols)?;
            Puzzle::with_dimensions(rows, cols, tiles)
        }
        None => {
            let puzzle = Puzzle::square(tiles)?;
            check_dimension(puzzle.dimensions().0)?;
            Ok(puzzle)
        }
    }
}

/// Parse one edge token such as `R1`, `sky+` or `h01-`
///
/// # Errors
///
/// Returns `Parse` if the token has no label or no polarity marker
pub fn parse_edge(token: &str, line: usize) -> Result<Edge<String>> {
    let mut chars = token.chars();
    let marker = chars
        .next_back()
        .ok_or_else(|| parse_error(line, &"empty edge token"))?;
    let polarity = if FRONT_MARKERS.contains(&marker) {
        Polarity::Front
    } else if BACK_MARKERS.contains(&marker) {
        Polarity::Back
    } else {
        return Err(parse_error(
            line,
            &format!("edge '{token}' must end with a polarity marker (1, +, 0 or -)"),
        ));
    };

    let label = chars.as_str();
    if label.is_empty() {
        return Err(parse_error(line, &format!("edge '{token}' has no label")));
    }
    Ok(Edge::new(label.to_string(), polarity))
}

/// Parse grid dimensions written as `N` or `RxC`
///
/// # Errors
///
/// Returns `InvalidParameter` if a dimension is not a positive integer
pub fn parse_dimensions(value: &str) -> Result<(usize, usize)> {
    let parse_one = |part: &str| {
        part.trim()
            .parse::<usize>()
            .ok()
            .filter(|&dimension| dimension > 0)
            .ok_or_else(|| {
                invalid_parameter("size", &value, &"expected N or RxC with positive integers")
            })
    };
    match value.split_once(['x', 'X']) {
        Some((rows, cols)) => Ok((parse_one(rows)?, parse_one(cols)?)),
        None => parse_one(value).map(|size| (size, size)),
    }
}

fn check_dimension(size: usize) -> Result<()> {
    if size > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            "size",
            &size,
            &format!("grid dimension must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}
