//! Minimum-cost path search.
//!
//! - **PathSearch**: enumerates every minimum-cost start->end path
//! - **CachedSolver**: owns a grid and caches its result set
//!
//! ```rust
//! use marga::{Grid, PathSearch};
//!
//! let grid = Grid::from_matrix(vec![
//!     vec![0, 1, 9],
//!     vec![1, 9, 1],
//!     vec![9, 1, 0],
//! ]).unwrap();
//!
//! let result = PathSearch::with_defaults(&grid).solve().unwrap();
//! for solution in result.iter() {
//!     println!("{} {}", solution.cost, solution.path);
//! }
//! ```

mod cached;
mod planner;
mod types;

pub use cached::CachedSolver;
pub use planner::PathSearch;
pub use types::{HeuristicKind, Path, ResultSet, SearchConfig, SearchStats, Solution};

use crate::error::Result;
use crate::grid::Grid;

/// Quick search with default configuration
pub fn find_min_cost_paths(grid: &Grid) -> Result<ResultSet> {
    PathSearch::with_defaults(grid).solve()
}
