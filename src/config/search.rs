//! Search configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::search::HeuristicKind;

/// Path search settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchSection {
    /// Frontier ordering heuristic
    #[serde(default = "defaults::heuristic")]
    pub heuristic: HeuristicKind,

    /// Maximum number of solutions before the search fails (null = no cap)
    #[serde(default)]
    pub max_solutions: Option<usize>,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            heuristic: HeuristicKind::ManhattanAverage,
            max_solutions: None,
        }
    }
}
