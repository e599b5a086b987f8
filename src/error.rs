//! Error types for the trade_window crate

use thiserror::Error;

/// Custom error types for profit queries
///
/// Every failure is a synchronous validation or derivation failure detected
/// before or during index computation. None are retried or suppressed; each
/// is surfaced to the caller with a descriptive message and the adapter
/// layer decides how to present it.
#[derive(Debug, Error)]
pub enum ProfitError {
    /// The price list holds fewer than two entries
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// A price token did not parse as a whole number
    #[error("Invalid numeric data: {0}")]
    InvalidNumericData(String),

    /// The end timestamp maps to an earlier minute than the start timestamp
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// The start timestamp maps past the end of the price series
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// The window spans fewer than two minutes
    #[error("Window too small: {0}")]
    WindowTooSmall(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ProfitError>;
