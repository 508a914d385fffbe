//! Plain-text matrix parsing.
//!
//! One row per line, values separated by whitespace. Blank lines and lines
//! starting with `#` are ignored.

use super::Grid;
use crate::error::{Error, Result};

impl Grid {
    /// Parse a whitespace-separated matrix
    pub fn from_text(text: &str) -> Result<Self> {
        let mut matrix = Vec::new();

        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let row = line
                .split_whitespace()
                .map(|token| {
                    token.parse::<u32>().map_err(|e| Error::ParseMatrix {
                        line: i + 1,
                        message: format!("'{}': {}", token, e),
                    })
                })
                .collect::<Result<Vec<u32>>>()?;
            matrix.push(row);
        }

        Self::from_matrix(matrix)
    }
}
