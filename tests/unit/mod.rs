//! Unit tests mirroring the `src/` layout, one file per source file

mod io;
mod puzzle;
