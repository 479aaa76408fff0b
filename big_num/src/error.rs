//! Error type for [`BigUnsigned`](crate::BigUnsigned) construction and arithmetic.

use std::fmt;

/// Errors raised by the big number core.
///
/// Both kinds are terminal for the operation that produced them; nothing is
/// retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BigNumError {
    /// Construction input is not a non-negative integer (empty string,
    /// non-digit character, or a negative native integer).
    InvalidValue(String),

    /// Subtraction would produce a negative number.
    NegativeResult,
}

impl fmt::Display for BigNumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BigNumError::InvalidValue(val) => {
                write!(
                    f,
                    "Invalid value `{}`: only non-negative integers are supported",
                    val
                )
            }
            BigNumError::NegativeResult => {
                write!(f, "Negative results are not supported")
            }
        }
    }
}

impl std::error::Error for BigNumError {}
