//! Cell position type.

use std::fmt;

use super::Direction;

/// Grid position (row, col), 0-indexed from the top-left cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    /// Row index (grows downward)
    pub row: usize,
    /// Column index (grows rightward)
    pub col: usize,
}

impl Position {
    /// Create a new position
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Top-left origin
    pub const ORIGIN: Position = Position { row: 0, col: 0 };

    /// Manhattan distance to another position
    #[inline]
    pub fn manhattan_distance(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Step one cell in `direction`.
    ///
    /// Returns `None` when the step would underflow past row or column 0.
    /// Upper bounds are the grid's concern.
    #[inline]
    pub fn step(&self, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.delta();
        Some(Position::new(
            self.row.checked_add_signed(dr)?,
            self.col.checked_add_signed(dc)?,
        ))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
