use alloc::string::String;

use thiserror::Error;

/// Result type alias for rolling operations that may fail.
pub type Result<T> = core::result::Result<T, RollingError>;

/// Contract violations raised by rolling operations.
///
/// These abort the whole call. Windows where a statistic is merely undefined
/// (too few observations, `ddof` at or above the window size, zero variance)
/// are not errors; they show up as [`Value::Missing`](crate::Value::Missing)
/// in the output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RollingError {
    /// Window size must be at least one.
    #[error("invalid window size: {0} (must be > 0)")]
    InvalidWindow(usize),

    /// Two series taking part in the same operation differ in length.
    #[error("series length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Length of the series the operation is bound to.
        expected: usize,
        /// Length of the other series.
        actual: usize,
    },

    /// A numeric parameter is outside its domain.
    #[error("invalid parameter '{name}': {value} (expected {expected})")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// Provided value, formatted.
        value: String,
        /// Description of the accepted domain.
        expected: &'static str,
    },
}

impl RollingError {
    pub(crate) fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }
}
