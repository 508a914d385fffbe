//! Cost grid.
//!
//! - [`Grid`]: immutable row-major cost matrix with zeroed start/end cells
//! - `Grid::build`: uniform random generation from an explicit RNG
//! - `Grid::from_text`: whitespace-separated matrix parsing

mod generate;
mod parse;
mod storage;

pub use storage::Grid;
