//! Randomized grid generation.

use std::ops::Range;

use log::trace;
use rand::Rng;

use super::Grid;
use crate::error::{Error, Result};

impl Grid {
    /// Fill a `width` x `height` grid with values drawn uniformly from
    /// `values` (inclusive lower, exclusive upper).
    ///
    /// The generator is passed explicitly; seed it for reproducible grids:
    ///
    /// ```rust
    /// use marga::Grid;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let grid = Grid::build(4, 3, 0..10, &mut rng).unwrap();
    /// assert_eq!((grid.rows(), grid.cols()), (3, 4));
    /// ```
    pub fn build<R: Rng>(
        width: usize,
        height: usize,
        values: Range<u32>,
        rng: &mut R,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let cell_count = width
            .checked_mul(height)
            .ok_or(Error::InvalidDimension { width, height })?;
        if values.is_empty() {
            return Err(Error::InvalidRange {
                low: values.start,
                high: values.end,
            });
        }

        trace!(
            "[Grid] build: {}x{} values [{}, {})",
            width, height, values.start, values.end
        );

        let cells = (0..cell_count)
            .map(|_| rng.random_range(values.clone()))
            .collect();

        Ok(Self::from_cells(cells, height, width))
    }
}
