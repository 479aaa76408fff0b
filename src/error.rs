//! Error types for expression parsing and evaluation
//!
//! [`CalcError`] covers everything the calculator can report for one line of
//! input. Value errors raised by the big number core are wrapped, not
//! re-described.

use std::fmt;

use big_num::BigNumError;

/// Errors that can occur while parsing or evaluating one expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// The line does not have the shape `a op b` or `a !`
    InvalidInput(String),

    /// A token in operator position is not one of `+`, `-`, `*`
    UnknownOperator(String),

    /// A factorial operand with more digits than the runner allows
    OperandTooLarge { operand: String, max_digits: usize },

    /// An operand could not be built, or the arithmetic itself failed
    Value(BigNumError),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::InvalidInput(message) => write!(f, "Invalid input: {}", message),
            CalcError::UnknownOperator(op) => write!(f, "Unknown operator: {}", op),
            CalcError::OperandTooLarge { operand, max_digits } => write!(
                f,
                "Factorial operand `{}` is too large: at most {} digit{} accepted",
                operand,
                max_digits,
                if *max_digits == 1 { " is" } else { "s are" }
            ),
            CalcError::Value(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CalcError::Value(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BigNumError> for CalcError {
    fn from(err: BigNumError) -> Self {
        CalcError::Value(err)
    }
}
