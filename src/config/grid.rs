//! Grid generation configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Random grid generation settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSection {
    /// Columns
    #[serde(default = "defaults::grid_size")]
    pub width: usize,

    /// Rows
    #[serde(default = "defaults::grid_size")]
    pub height: usize,

    /// Smallest cell value (inclusive)
    #[serde(default = "defaults::min_value")]
    pub min_value: u32,

    /// Largest cell value (exclusive)
    #[serde(default = "defaults::max_value")]
    pub max_value: u32,

    /// RNG seed; absent means OS entropy
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
            min_value: 0,
            max_value: 10,
            seed: None,
        }
    }
}
