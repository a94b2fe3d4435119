/// Command-line interface and puzzle runner
pub mod cli;
/// Crate constants and defaults
pub mod configuration;
/// Error types and the crate result alias
pub mod error;
/// PNG export of solved grids
pub mod image;
/// Terminal spinner for solve runs
pub mod progress;
/// Plain-text puzzle loader
pub mod puzzle_file;
/// Text rendering of grids and adjacency reports
pub mod render;
