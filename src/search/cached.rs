//! Grid owner with a lazily computed, cached result set.

use log::debug;

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::render;

use super::planner::PathSearch;
use super::types::{ResultSet, SearchConfig};

/// Owns a grid and the result of searching it.
///
/// The first [`solve`](Self::solve) runs the search; later calls return the
/// cached set until the grid or configuration is replaced.
///
/// # Example
/// ```rust
/// use marga::{CachedSolver, Grid, SearchConfig};
///
/// let grid = Grid::from_matrix(vec![vec![0, 5], vec![5, 0]]).unwrap();
/// let mut solver = CachedSolver::new(grid, SearchConfig::default());
/// assert_eq!(solver.solve().unwrap().len(), 2);
/// assert!(!solver.is_dirty());
/// ```
#[derive(Clone, Debug)]
pub struct CachedSolver {
    grid: Grid,
    config: SearchConfig,
    result: Option<ResultSet>,
    /// Set whenever the grid or config changes after a solve
    dirty: bool,
}

impl CachedSolver {
    /// Create a solver; nothing is computed until the first solve
    pub fn new(grid: Grid, config: SearchConfig) -> Self {
        Self {
            grid,
            config,
            result: None,
            dirty: true,
        }
    }

    /// Create with default search configuration
    pub fn with_defaults(grid: Grid) -> Self {
        Self::new(grid, SearchConfig::default())
    }

    /// Current grid
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current search configuration
    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// True if the next solve will recompute
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Cached result, if it is still valid
    pub fn cached(&self) -> Option<&ResultSet> {
        if self.dirty {
            None
        } else {
            self.result.as_ref()
        }
    }

    /// Replace the grid and invalidate the cache
    pub fn replace_grid(&mut self, grid: Grid) {
        debug!(
            "[CachedSolver] grid replaced ({}x{} -> {}x{}), cache invalidated",
            self.grid.rows(),
            self.grid.cols(),
            grid.rows(),
            grid.cols()
        );
        self.grid = grid;
        self.dirty = true;
    }

    /// Replace the search configuration and invalidate the cache
    pub fn set_config(&mut self, config: SearchConfig) {
        if config != self.config {
            self.config = config;
            self.dirty = true;
        }
    }

    /// Compute the result set, or return the cached one
    pub fn solve(&mut self) -> Result<&ResultSet> {
        let result = match self.result.take() {
            Some(cached) if !self.dirty => cached,
            _ => {
                debug!("[CachedSolver] cache miss, searching");
                PathSearch::new(&self.grid, self.config.clone()).solve()?
            }
        };
        self.dirty = false;
        Ok(self.result.insert(result))
    }

    /// Render the path overlay for solution `index`
    pub fn display_path(&mut self, index: usize) -> Result<String> {
        let result = self.solve()?;
        let solution = result.get(index).ok_or_else(|| {
            Error::InvalidArgument(format!(
                "solution index {} out of range (have {})",
                index,
                result.len()
            ))
        })?;
        let solution = solution.clone();
        render::render_path(&self.grid, &solution)
    }
}
