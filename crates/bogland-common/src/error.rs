//! Error types for Bogland.

use thiserror::Error;

/// Top-level error type for Bogland operations.
#[derive(Debug, Error)]
pub enum BoglandError {
    /// Requested grid has a zero or negative side
    #[error("Invalid grid dimension: {width}x{height}")]
    InvalidDimension {
        /// Requested width
        width: i32,
        /// Requested height
        height: i32,
    },

    /// Generation settings failed validation
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Settings file could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Generation settings errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A bounded knob lies outside its range
    #[error("{field} = {value} is outside {min}..={max}")]
    OutOfRange {
        /// Setting name
        field: &'static str,
        /// Offending value
        value: i32,
        /// Lowest accepted value
        min: i32,
        /// Highest accepted value
        max: i32,
    },

    /// A size, distance, radius or load is negative
    #[error("{field} = {value} must not be negative")]
    Negative {
        /// Setting name
        field: &'static str,
        /// Offending value
        value: i32,
    },
}

/// Result type alias for Bogland operations.
pub type BoglandResult<T> = Result<T, BoglandError>;
