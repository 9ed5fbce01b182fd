use thiserror::Error;

/// Errors raised by the valuation functions.
///
/// Only the interest rate is guarded. Every other argument is evaluated through
/// the closed forms as given, so out-of-range periods, frequencies or day counts
/// surface as ordinary (possibly infinite or NaN) floating-point results.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TvmError {
    /// The rate passed to `operation` was exactly zero.
    #[error("Invalid rate in {operation}: {reason}")]
    InvalidRate {
        operation: &'static str,
        reason: String,
    },
}

impl TvmError {
    /// Name of the function that rejected its input.
    pub fn operation(&self) -> &'static str {
        match self {
            TvmError::InvalidRate { operation, .. } => operation,
        }
    }
}
