//! Minimum-cost path enumeration.

use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::core::{Direction, Position};
use crate::error::{Error, Result};
use crate::grid::Grid;

use super::types::{
    HeuristicKind, Path, Predecessor, ResultSet, SearchConfig, SearchNode, SearchStats, Solution,
};

/// Per-cell cost labels produced by the forward search
struct CostLabels {
    /// Best known accumulated cost from start (None = unreached)
    best: Vec<Option<u64>>,
    /// Every neighbor achieving `best`, in discovery order
    predecessors: Vec<Vec<Predecessor>>,
}

/// One level of the backward enumeration stack
struct Frame {
    index: usize,
    /// Move from this cell toward the frame below it (None for the end cell)
    via: Option<Direction>,
    /// Next predecessor to try
    cursor: usize,
}

/// All-minimum-cost path search.
///
/// Runs a best-first search ordered by `cost + heuristic` until the frontier
/// is exhausted, keeping for every cell the set of neighbors that reach it at
/// its best cost. Every simple start->end path through those predecessor
/// sets is then a minimum-cost path, and all of them are enumerated.
///
/// The heuristic only orders expansion. Because the queue is always drained,
/// final labels are exact even though `manhattan * average` can overestimate.
pub struct PathSearch<'a> {
    grid: &'a Grid,
    config: SearchConfig,
}

impl<'a> PathSearch<'a> {
    /// Create a new search over `grid`
    pub fn new(grid: &'a Grid, config: SearchConfig) -> Self {
        Self { grid, config }
    }

    /// Create with default configuration
    pub fn with_defaults(grid: &'a Grid) -> Self {
        Self::new(grid, SearchConfig::default())
    }

    /// Enumerate every minimum-cost path from start to end
    pub fn solve(&self) -> Result<ResultSet> {
        let start = self.grid.start();
        let end = self.grid.end();
        trace!(
            "[PathSearch] solve: {}x{} grid, start={} end={} heuristic={:?}",
            self.grid.rows(),
            self.grid.cols(),
            start,
            end,
            self.config.heuristic
        );

        if start == end {
            return Ok(ResultSet {
                solutions: vec![Solution {
                    cost: 0,
                    path: Path::default(),
                }],
                stats: SearchStats::default(),
            });
        }

        let (labels, stats) = self.label_costs();
        let solutions = self.enumerate(&labels)?;

        trace!(
            "[PathSearch] SUCCESS: {} solution(s), cost={:?}, expanded={}, stale={}, ties={}",
            solutions.len(),
            solutions.first().map(|s| s.cost),
            stats.cells_expanded,
            stats.stale_pops,
            stats.ties_recorded
        );

        Ok(ResultSet { solutions, stats })
    }

    /// Heuristic estimate of remaining cost from `pos`
    fn heuristic(&self, pos: Position) -> f64 {
        match self.config.heuristic {
            HeuristicKind::ManhattanAverage => {
                pos.manhattan_distance(&self.grid.end()) as f64 * self.grid.average()
            }
            HeuristicKind::None => 0.0,
        }
    }

    /// Forward pass: exact best costs and predecessor sets for every cell
    fn label_costs(&self) -> (CostLabels, SearchStats) {
        let grid = self.grid;
        let cell_count = grid.cell_count();
        let start = grid.start();
        let start_index = 0;
        let end_index = cell_count - 1;

        let mut labels = CostLabels {
            best: vec![None; cell_count],
            predecessors: vec![Vec::new(); cell_count],
        };
        let mut stats = SearchStats::default();

        let mut open_set = BinaryHeap::new();
        let mut sequence = 0u64;

        labels.best[start_index] = Some(0);
        open_set.push(SearchNode {
            index: start_index,
            cost: 0,
            priority: self.heuristic(start),
            sequence,
        });

        while let Some(current) = open_set.pop() {
            if labels.best[current.index].is_some_and(|best| current.cost > best) {
                stats.stale_pops += 1;
                continue;
            }

            // Paths terminate at the end cell
            if current.index == end_index {
                continue;
            }
            stats.cells_expanded += 1;

            let position = grid.position_of(current.index);
            for (direction, neighbor) in grid.neighbors(position) {
                // Paths never return to the start cell
                if neighbor == start {
                    continue;
                }

                let (Some(neighbor_index), Some(value)) =
                    (grid.index_of(neighbor), grid.get(neighbor))
                else {
                    continue;
                };
                let tentative = current.cost + u64::from(value);
                let predecessor = Predecessor {
                    index: current.index,
                    via: direction,
                };

                match labels.best[neighbor_index] {
                    Some(known) if tentative > known => {}
                    Some(known) if tentative == known => {
                        let preds = &mut labels.predecessors[neighbor_index];
                        if !preds.contains(&predecessor) {
                            preds.push(predecessor);
                            stats.ties_recorded += 1;
                        }
                    }
                    _ => {
                        labels.best[neighbor_index] = Some(tentative);
                        let preds = &mut labels.predecessors[neighbor_index];
                        preds.clear();
                        preds.push(predecessor);

                        sequence += 1;
                        open_set.push(SearchNode {
                            index: neighbor_index,
                            cost: tentative,
                            priority: tentative as f64 + self.heuristic(neighbor),
                            sequence,
                        });
                    }
                }
            }
        }

        (labels, stats)
    }

    /// Backward pass: every simple path from end to start through the
    /// predecessor sets
    fn enumerate(&self, labels: &CostLabels) -> Result<Vec<Solution>> {
        let grid = self.grid;
        let cell_count = grid.cell_count();
        let start_index = 0;
        let end_index = cell_count - 1;

        if labels.best[end_index].is_none() {
            debug!("[PathSearch] FAILED: end cell unreachable");
            return Ok(Vec::new());
        }

        let mut solutions = Vec::new();
        let mut on_path = vec![false; cell_count];
        let mut trail = vec![Frame {
            index: end_index,
            via: None,
            cursor: 0,
        }];
        on_path[end_index] = true;

        while let Some(top) = trail.last_mut() {
            let index = top.index;

            if index == start_index {
                if let Some(limit) = self
                    .config
                    .max_solutions
                    .filter(|&limit| solutions.len() >= limit)
                {
                    debug!(
                        "[PathSearch] FAILED: SolutionLimitExceeded (limit={})",
                        limit
                    );
                    return Err(Error::SolutionLimitExceeded { limit });
                }
                solutions.push(self.solution_from_trail(&trail));

                on_path[index] = false;
                trail.pop();
                continue;
            }

            match labels.predecessors[index].get(top.cursor) {
                Some(pred) => {
                    top.cursor += 1;
                    if !on_path[pred.index] {
                        on_path[pred.index] = true;
                        trail.push(Frame {
                            index: pred.index,
                            via: Some(pred.via),
                            cursor: 0,
                        });
                    }
                }
                None => {
                    on_path[index] = false;
                    trail.pop();
                }
            }
        }

        Ok(solutions)
    }

    /// Build a solution from a trail running end -> start
    fn solution_from_trail(&self, trail: &[Frame]) -> Solution {
        let cells = self.grid.cells();

        // Intermediate cells lie strictly between the end (first) and start (last)
        let cost = trail[1..trail.len() - 1]
            .iter()
            .map(|f| u64::from(cells[f.index]))
            .sum();

        let path = trail.iter().rev().filter_map(|f| f.via).collect();

        Solution { cost, path }
    }
}
