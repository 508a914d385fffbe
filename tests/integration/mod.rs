//! Integration tests for marga
//!
//! Cross-checks the search against an independent brute-force enumerator on
//! small seeded random grids, and covers the fixed scenarios and boundaries.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test integration -- --nocapture
//! ```

mod properties;
mod scenarios;
mod solver;

use brute_force::{BruteForce, random_grid};
