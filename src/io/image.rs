//! PNG export of a solved grid
//!
//! Each cell is split along its diagonals into four triangles, one per side.
//! A triangle takes a color derived from its edge label; back-facing edges
//! use a darker shade of the same color so matching pairs read as one motif
//! split across the seam.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::io::configuration::LINE_COLOR;
use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::puzzle::edge::{Edge, Polarity};
use crate::puzzle::tile::Side;
use crate::solver::grid::{Grid, Solution};

/// Stable RGBA color for an edge
///
/// The hue comes from the label hash, so equal labels share a color. Back
/// polarity halves each channel.
pub fn edge_color<S: Hash>(edge: &Edge<S>) -> [u8; 4] {
    let mut hasher = DefaultHasher::new();
    edge.label().hash(&mut hasher);
    let [r, g, b, ..] = hasher.finish().to_le_bytes();
    // Keep channels away from the line color
    let lift = |channel: u8| channel / 2 + 96;
    let divisor = match edge.polarity() {
        Polarity::Front => 1,
        Polarity::Back => 2,
    };
    let [r, g, b] = [lift(r), lift(g), lift(b)].map(|channel| channel / divisor);
    [r, g, b, 255]
}

/// Side whose triangle contains local pixel `(x, y)` of a cell
///
/// Returns `None` for pixels on a diagonal or the cell border.
pub const fn triangle_side(x: u32, y: u32, cell_size: u32) -> Option<Side> {
    let last = cell_size.saturating_sub(1);
    if x == 0 || y == 0 || x == last || y == last {
        return None;
    }
    let below_main = y > x;
    let below_anti = x + y > last;
    if x == y || x + y == last {
        None
    } else if !below_main && !below_anti {
        Some(Side::Top)
    } else if !below_main && below_anti {
        Some(Side::Right)
    } else if below_main && below_anti {
        Some(Side::Bottom)
    } else {
        Some(Side::Left)
    }
}

/// Draw a grid into an RGBA image, `cell_size` pixels per cell
///
/// Empty cells are left transparent.
///
/// # Errors
///
/// Returns `InvalidParameter` if `cell_size` is below 3 pixels or the image
/// would overflow `u32` dimensions
pub fn render_grid_image<S: Hash>(grid: &Grid<S>, cell_size: u32) -> Result<RgbaImage> {
    if cell_size < 3 {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &"cells need at least 3 pixels per side",
        ));
    }
    let (rows, cols) = grid.dimensions();
    let overflow = || invalid_parameter("cell_size", &cell_size, &"image dimensions overflow");
    let width = u32::try_from(cols)
        .ok()
        .and_then(|cols| cols.checked_mul(cell_size))
        .ok_or_else(overflow)?;
    let height = u32::try_from(rows)
        .ok()
        .and_then(|rows| rows.checked_mul(cell_size))
        .ok_or_else(overflow)?;

    let mut img: RgbaImage = ImageBuffer::new(width, height);
    for ((row, col), placement) in grid.placements() {
        let colors = Side::ALL.map(|side| edge_color(placement.edge(side)));
        let origin_x = col as u32 * cell_size;
        let origin_y = row as u32 * cell_size;
        for y in 0..cell_size {
            for x in 0..cell_size {
                let color = triangle_side(x, y, cell_size)
                    .and_then(|side| colors.get(side.index()).copied())
                    .unwrap_or(LINE_COLOR);
                img.put_pixel(origin_x + x, origin_y + y, Rgba(color));
            }
        }
    }
    Ok(img)
}

/// Export a solution as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - `cell_size` is too small (see [`render_grid_image`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_solution_as_png<S: Hash>(
    solution: &Solution<S>,
    cell_size: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_grid_image(solution.grid(), cell_size)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PuzzleError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| PuzzleError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
