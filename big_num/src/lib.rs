//! Big Num \
//! This crate provides:
//! - [`BigUnsigned`]: Immutable arbitrary-precision unsigned integers stored as decimal digits,
//!   with schoolbook addition, subtraction, multiplication and factorial.
//! - [`BigNumError`]: the two ways construction or arithmetic can fail.

mod big_unsigned;
mod big_num_cache;
mod big_num_constants;
mod error;


pub use big_unsigned::BigUnsigned;
pub use error::BigNumError;
