//! Path search types.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Direction, Position};
use crate::grid::Grid;

/// A queue entry in the best-first search
#[derive(Clone, Debug)]
pub(super) struct SearchNode {
    pub index: usize,
    pub cost: u64, // Accumulated cost from start
    pub priority: f64, // cost + heuristic
    pub sequence: u64, // Push order, breaks priority ties FIFO
}

impl Eq for SearchNode {}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A neighbor from which a cell's best cost is achieved
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Predecessor {
    /// Flat index of the predecessor cell
    pub index: usize,
    /// Move taken from the predecessor into the cell
    pub via: Direction,
}

/// Frontier ordering heuristic
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    /// Manhattan distance to the end, scaled by the grid's mean cell cost
    #[default]
    ManhattanAverage,
    /// No heuristic (uniform-cost order)
    None,
}

/// Path search configuration
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchConfig {
    /// Frontier ordering heuristic
    pub heuristic: HeuristicKind,
    /// Fail instead of enumerating more than this many solutions
    pub max_solutions: Option<usize>,
}

impl SearchConfig {
    /// Create with a solution cap
    pub fn with_max_solutions(limit: usize) -> Self {
        Self {
            max_solutions: Some(limit),
            ..Default::default()
        }
    }

    /// Use a different heuristic
    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }
}

/// Ordered move sequence from the start cell to the end cell
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path(Vec<Direction>);

impl Path {
    /// Wrap a move sequence
    pub fn new(moves: Vec<Direction>) -> Self {
        Self(moves)
    }

    /// Number of moves
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the zero-move path (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over moves
    pub fn iter(&self) -> impl Iterator<Item = &Direction> {
        self.0.iter()
    }

    /// Replay the moves from the grid's start cell.
    ///
    /// Returns every visited position, start included, or `None` if a move
    /// leaves the grid.
    pub fn replay(&self, grid: &Grid) -> Option<Vec<Position>> {
        let mut positions = Vec::with_capacity(self.0.len() + 1);
        let mut current = grid.start();
        positions.push(current);
        for &d in &self.0 {
            current = grid.neighbor(current, d)?;
            positions.push(current);
        }
        Some(positions)
    }
}

impl From<Vec<Direction>> for Path {
    fn from(moves: Vec<Direction>) -> Self {
        Self(moves)
    }
}

impl FromIterator<Direction> for Path {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            write!(f, "{}", d.glyph())?;
        }
        Ok(())
    }
}

/// One minimum-cost route
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Solution {
    /// Sum of intermediate cell costs (start and end excluded)
    pub cost: u64,
    /// Moves from start to end
    pub path: Path,
}

/// Search effort counters
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells expanded (non-stale pops)
    pub cells_expanded: usize,
    /// Queue entries discarded because a cheaper label superseded them
    pub stale_pops: usize,
    /// Tie admissions into predecessor sets
    pub ties_recorded: usize,
}

/// Every solution sharing the global minimum cost
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultSet {
    /// Solutions in discovery order
    pub solutions: Vec<Solution>,
    /// Search counters
    pub stats: SearchStats,
}

impl ResultSet {
    /// Minimum cost, or `None` if no path exists
    pub fn min_cost(&self) -> Option<u64> {
        self.solutions.first().map(|s| s.cost)
    }

    /// Number of solutions
    #[inline]
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// True if no path exists
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Solution by index
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Solution> {
        self.solutions.get(index)
    }

    /// Iterate over solutions
    pub fn iter(&self) -> impl Iterator<Item = &Solution> {
        self.solutions.iter()
    }
}
