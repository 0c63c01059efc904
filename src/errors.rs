// ============================================================================
// Money Errors
// Precondition violations raised by money construction and arithmetic
// ============================================================================

use thiserror::Error;

/// Errors that can occur while constructing or combining [`Money`](crate::Money) values.
///
/// Every variant is a precondition violation detected at the call site.
/// Nothing is retried or corrected internally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum MoneyError {
    /// A required operand was not supplied
    #[error("missing argument: {0}")]
    NullArgument(&'static str),

    /// A numeric precondition failed (minor range, decimal scale, divisor, collection shape)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Two money values in different currencies were combined
    #[error("currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// No currency with this code exists in the catalog
    #[error("unknown currency code: {0}")]
    UnknownCurrencyCode(String),

    /// Result does not fit in the i64 minor-unit range
    #[error("arithmetic overflow: result exceeded the minor-unit range")]
    Overflow,
}

impl MoneyError {
    /// Shorthand for [`MoneyError::InvalidArgument`].
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        MoneyError::InvalidArgument(message.into())
    }
}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;
