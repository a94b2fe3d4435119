/// Read-only adjacency validation of placed grids
pub mod adjacency;
