//! Configuration loading errors.

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLoadError {
    /// File I/O error
    Io(String),
    /// YAML parsing error
    Parse(String),
    /// Values parsed but are unusable
    Validation(String),
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigLoadError::Io(msg) => write!(f, "IO error: {}", msg),
            ConfigLoadError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ConfigLoadError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigLoadError {}
