// error.rs - Error types for the simulation core

use thiserror::Error;

/// Programmer errors raised by grid construction and lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A grid needs at least one row and one column.
    #[error("invalid grid dimensions {columns}x{rows}: both must be positive")]
    InvalidDimensions { columns: usize, rows: usize },

    /// Coordinates outside `[0, rows) x [0, columns)`.
    #[error("cell ({row}, {column}) is outside the {rows}x{columns} grid")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    /// The pattern's bounding box does not fit at the requested origin.
    #[error("pattern {name} ({height}x{width}) does not fit at ({row}, {column})")]
    PatternDoesNotFit {
        name: &'static str,
        row: usize,
        column: usize,
        height: usize,
        width: usize,
    },
}

/// Failures loading or validating a [`crate::LifeConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    #[must_use]
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        Self::Invalid(msg.into())
    }
}

/// Result type alias for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
