//! # Introduction
//!
//! A calculator for arbitrary-precision unsigned integers. Each line holds a
//! single operator expression: `a + b`, `a - b`, `a * b` or `a !`.
//! The numbers themselves are [`BigUnsigned`] values from the `big_num` crate.
//!
//! ```text
//! line → tokenizer → parser → ASTNode → BigUnsigned arithmetic → "Result: …"
//! ```

pub mod cli;
pub mod error;
mod parser;
pub mod repl;
mod tokenizer;

pub use big_num::{BigNumError, BigUnsigned};

pub use crate::error::CalcError;
pub use crate::parser::ast::Operator;
pub use crate::parser::parser::{evaluate, Expression};
pub use crate::repl::{Repl, ReplConfig};
