//! Default value functions for serde deserialization.

use crate::search::HeuristicKind;

pub fn grid_size() -> usize {
    5
}

pub fn min_value() -> u32 {
    0
}

pub fn max_value() -> u32 {
    10
}

pub fn heuristic() -> HeuristicKind {
    HeuristicKind::ManhattanAverage
}
