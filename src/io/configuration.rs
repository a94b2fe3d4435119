//! Solver constants and runtime configuration defaults

/// Number of sides on every tile
pub const SIDE_COUNT: usize = 4;

// Puzzle file syntax
/// Lines starting with this prefix are ignored by the loader
pub const COMMENT_PREFIX: &str = "#";
/// Directive fixing the grid dimension, e.g. `size 3`
pub const SIZE_DIRECTIVE: &str = "size";
/// Edge suffixes accepted for front polarity
pub const FRONT_MARKERS: [char; 2] = ['1', '+'];
/// Edge suffixes accepted for back polarity
pub const BACK_MARKERS: [char; 2] = ['0', '-'];

// Guards the loader against runaway allocations from malformed input
/// Maximum grid dimension accepted from a puzzle file
pub const MAX_GRID_DIMENSION: usize = 64;

// Text rendering
/// Suffix rendered after a front-facing edge label
pub const FRONT_SUFFIX: char = '1';
/// Suffix rendered after a back-facing edge label
pub const BACK_SUFFIX: char = '0';
/// Separator placed between tiles on the same row
pub const TILE_SEPARATOR: &str = " | ";
/// Width of one rendered tile in characters
pub const RENDERED_TILE_WIDTH: usize = 9;

// PNG export
/// Default edge length of one grid cell in pixels
pub const DEFAULT_CELL_SIZE_PX: u32 = 48;
/// Color used for cell borders and triangle diagonals
pub const LINE_COLOR: [u8; 4] = [32, 32, 32, 255];

// Progress display
/// Spinner refresh interval in milliseconds
pub const SPINNER_TICK_MS: u64 = 80;
