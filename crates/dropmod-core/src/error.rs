//! Error types for the drop-rule engine.

use thiserror::Error;

/// Errors raised by the core crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DropError {
    /// The block identifier was empty or malformed.
    #[error("Invalid block: {0:?}")]
    InvalidBlock(String),

    /// The drop chance was not a number.
    #[error("Drop chance must be a number: {0:?}")]
    InvalidChance(String),

    /// The drop chance was outside `[0, 1]` (or NaN).
    #[error("Drop chance must be between 0 and 1, got {0}")]
    ChanceOutOfRange(f64),

    /// The backing store failed to persist the table.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result alias for the core crate.
pub type Result<T> = std::result::Result<T, DropError>;
