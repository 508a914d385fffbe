//! Main MargaConfig and conversion methods.

use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::Grid;
use crate::search::SearchConfig;

use super::error::ConfigLoadError;
use super::grid::GridSection;
use super::search::SearchSection;

/// Full Marga configuration loaded from YAML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct MargaConfig {
    /// Random grid generation settings
    #[serde(default)]
    pub grid: GridSection,

    /// Search settings
    #[serde(default)]
    pub search: SearchSection,
}

impl MargaConfig {
    /// Default config path, relative to the working directory
    pub const DEFAULT_PATH: &str = "configs/config.yaml";

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> std::result::Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from the default config path, or fall back to defaults
    pub fn load_default() -> std::result::Result<Self, ConfigLoadError> {
        let path = Path::new(Self::DEFAULT_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> std::result::Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Check values that parse but cannot be used
    pub fn validate(&self) -> std::result::Result<(), ConfigLoadError> {
        if self.grid.width == 0 || self.grid.height == 0 {
            return Err(ConfigLoadError::Validation(format!(
                "grid dimensions must be positive, got {}x{}",
                self.grid.width, self.grid.height
            )));
        }
        if self.grid.min_value >= self.grid.max_value {
            return Err(ConfigLoadError::Validation(format!(
                "grid value range [{}, {}) is empty",
                self.grid.min_value, self.grid.max_value
            )));
        }
        if self.search.max_solutions == Some(0) {
            return Err(ConfigLoadError::Validation(
                "search.max_solutions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Convert to SearchConfig
    pub fn to_search_config(&self) -> SearchConfig {
        SearchConfig {
            heuristic: self.search.heuristic,
            max_solutions: self.search.max_solutions,
        }
    }

    /// Generator for grid building: seeded if a seed is configured
    pub fn rng(&self) -> StdRng {
        match self.grid.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Generate a random grid from the grid section
    pub fn build_grid(&self) -> Result<Grid> {
        let mut rng = self.rng();
        Grid::build(
            self.grid.width,
            self.grid.height,
            self.grid.min_value..self.grid.max_value,
            &mut rng,
        )
    }
}
