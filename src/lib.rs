//! # Marga: every minimum-cost path across a cost grid
//!
//! Given a rectangular grid of non-negative cell costs, Marga finds every
//! path from the top-left cell to the bottom-right cell that moves only
//! up/down/left/right, never revisits a cell, and has the minimum total cost.
//! A path's cost is the sum of the cells it passes through; the start and end
//! cells are always 0.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga::{Grid, PathSearch};
//!
//! let grid = Grid::from_matrix(vec![
//!     vec![1, 3, 2, 5, 9],
//!     vec![6, 5, 1, 3, 3],
//!     vec![4, 2, 1, 4, 5],
//!     vec![8, 2, 8, 4, 1],
//!     vec![7, 1, 2, 2, 3],
//! ]).unwrap();
//!
//! let result = PathSearch::with_defaults(&grid).solve().unwrap();
//! assert_eq!(result.min_cost(), Some(16));
//! assert_eq!(result.len(), 2);
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: `Position` and `Direction`
//! - [`grid`]: the immutable cost grid, random generation, text parsing
//! - [`search`]: minimum-cost path enumeration and the cached solver
//! - [`render`]: text output of grids and path overlays
//! - [`config`]: YAML configuration
//!
//! ## Search
//!
//! ```text
//!   Grid ──► best-first labelling ──► predecessor sets ──► backward DFS
//!            (cost + heuristic,        (every neighbor       (every simple
//!             queue drained)            at best cost)          path)
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod grid;
pub mod render;
pub mod search;

// Re-export main types at crate root
pub use config::{ConfigLoadError, MargaConfig};
pub use self::core::{Direction, Position};
pub use error::{Error, Result};
pub use grid::Grid;
pub use search::{
    CachedSolver, HeuristicKind, Path, PathSearch, ResultSet, SearchConfig, SearchStats, Solution,
    find_min_cost_paths,
};
