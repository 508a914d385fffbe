//! Cost grid storage.

use crate::core::{Direction, Position};
use crate::error::{Error, Result};

/// Rectangular matrix of non-negative cell costs.
///
/// The start cell (0, 0) and the end cell (rows-1, cols-1) always hold 0,
/// whatever the caller supplied. A grid is immutable once built; callers that
/// want different costs build a new one.
///
/// Cells are stored row-major in a single contiguous array:
/// ```text
/// index = row * cols + col
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    /// Cell costs, row-major
    cells: Vec<u32>,
    /// Number of rows (height)
    rows: usize,
    /// Number of columns (width)
    cols: usize,
    /// Mean of all cell values, computed once at construction
    average: f64,
}

impl Grid {
    /// Wrap caller-supplied rows.
    ///
    /// The start and end cells are overwritten with 0.
    pub fn from_matrix(matrix: Vec<Vec<u32>>) -> Result<Self> {
        let rows = matrix.len();
        let cols = matrix.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimension {
                width: cols,
                height: rows,
            });
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, values) in matrix.into_iter().enumerate() {
            if values.len() != cols {
                return Err(Error::RaggedRows {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }

        Ok(Self::from_cells(cells, rows, cols))
    }

    /// Build from a flat row-major buffer whose length is `rows * cols`.
    pub(super) fn from_cells(mut cells: Vec<u32>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);

        cells[0] = 0;
        let last = cells.len() - 1;
        cells[last] = 0;

        let total: u64 = cells.iter().map(|&v| u64::from(v)).sum();
        let average = total as f64 / cells.len() as f64;

        Self {
            cells,
            rows,
            cols,
            average,
        }
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Mean cell value (start and end zeros included)
    #[inline]
    pub fn average(&self) -> f64 {
        self.average
    }

    /// Top-left cell
    #[inline]
    pub fn start(&self) -> Position {
        Position::ORIGIN
    }

    /// Bottom-right cell
    #[inline]
    pub fn end(&self) -> Position {
        Position::new(self.rows - 1, self.cols - 1)
    }

    /// Check if a position is within bounds
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Cell cost at a position
    #[inline]
    pub fn get(&self, pos: Position) -> Option<u32> {
        self.index_of(pos).map(|i| self.cells[i])
    }

    /// Iterate over rows
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks_exact(self.cols)
    }

    /// Raw row-major cell costs
    #[inline]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Convert a position to its flat array index
    #[inline]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.row * self.cols + pos.col)
        } else {
            None
        }
    }

    /// Convert a flat array index back to a position
    #[inline]
    pub fn position_of(&self, index: usize) -> Position {
        Position::new(index / self.cols, index % self.cols)
    }

    /// In-bounds neighbor one step away in `direction`
    #[inline]
    pub fn neighbor(&self, pos: Position, direction: Direction) -> Option<Position> {
        pos.step(direction).filter(|p| self.contains(*p))
    }

    /// In-bounds 4-connected neighbors, each with the move that reaches it.
    ///
    /// Order follows [`Direction::ALL`].
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = (Direction, Position)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.neighbor(pos, d).map(|n| (d, n)))
    }
}
