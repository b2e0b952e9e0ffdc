//! Error type for range construction.
//!
//! Every failure is reported before the first element is produced: a zero
//! step, a string literal outside the accepted grammar, or a float with no
//! exact rational value. Iteration itself cannot fail.

use thiserror::Error;

/// Error returned when a range cannot be built from its inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
  /// The step evaluates to exactly zero.
  #[error("step must not be zero")]
  ZeroStep,
  /// A string input that none of the accepted notations match.
  #[error("invalid numeric literal '{0}' (expected integer, decimal, exponent or numer/denom)")]
  InvalidNumber(String),
  /// A NaN or infinite float input.
  #[error("{0} has no exact rational value")]
  NonFinite(f64),
}
