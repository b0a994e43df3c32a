// error.rs - Error types for the life engine

use thiserror::Error;

/// Misuse errors raised by grid construction and cell addressing.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum GridError {
    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidDimension { rows: i64, cols: i64 },

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("alive probability {0} is not within [0, 1]")]
    InvalidProbability(f64),
}

/// Errors raised when validating a simulation configuration.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum ConfigError {
    #[error("tick interval must be greater than zero")]
    ZeroTick,

    #[error(transparent)]
    Grid(#[from] GridError),
}
