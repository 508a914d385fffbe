//! Error types for Marga

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Marga error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Grid width or height is zero
    #[error("Invalid grid dimension: {width}x{height} (both must be at least 1)")]
    InvalidDimension {
        /// Requested column count
        width: usize,
        /// Requested row count
        height: usize,
    },

    /// Empty value range for random generation
    #[error("Invalid value range: [{low}, {high}) is empty")]
    InvalidRange {
        /// Inclusive lower bound
        low: u32,
        /// Exclusive upper bound
        high: u32,
    },

    /// Matrix rows of unequal length
    #[error("Ragged matrix: row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        /// Offending row index
        row: usize,
        /// Column count of the first row
        expected: usize,
        /// Column count of the offending row
        found: usize,
    },

    /// Textual matrix could not be parsed
    #[error("Matrix parse error on line {line}: {message}")]
    ParseMatrix {
        /// 1-based line number
        line: usize,
        /// What went wrong
        message: String,
    },

    /// Caller contract violation (e.g. solution index out of range)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Enumeration produced more solutions than the configured cap
    #[error("Solution limit exceeded: more than {limit} minimum-cost paths")]
    SolutionLimitExceeded {
        /// Configured maximum
        limit: usize,
    },
}
