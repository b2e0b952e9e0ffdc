//! Numeric inputs and their exact rational values.
//!
//! A range bound or step can be supplied as an integer, a float, or a string
//! in integer, fixed-point decimal, exponential, or `numer/denom` fraction
//! notation. [`Numeric`] holds the value exactly as the caller gave it and
//! converts it to a [`BigRational`] on demand, either directly or through its
//! canonical string form (see [`Numeric::to_rational`]).
//!
//! # Example
//!
//! ```rust
//! use frange::Numeric;
//!
//! let tenth = Numeric::from("0.1").to_rational(false)?;
//! assert_eq!(tenth, Numeric::from("1/10").to_rational(false)?);
//! assert_eq!(tenth, Numeric::from("1e-1").to_rational(false)?);
//! # Ok::<(), frange::RangeError>(())
//! ```

use crate::error::RangeError;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Pow, Zero};
use std::fmt;

/// A bound or step value as supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Numeric {
  /// An integer input.
  Int(i64),
  /// A floating-point input.
  Float(f64),
  /// A string input in integer, decimal, exponential or fraction notation.
  Str(String),
}

impl Numeric {
  /// Converts this value to its exact rational representation.
  ///
  /// With `stringify` set, the value is first rendered to its canonical
  /// string and that string is parsed instead. For floats this captures the
  /// decimal value the caller wrote rather than its binary approximation:
  ///
  /// ```rust
  /// use frange::Numeric;
  ///
  /// // The binary value of 0.1_f64 is not the decimal one-tenth.
  /// let binary = Numeric::from(0.1).to_rational(false)?;
  /// let decimal = Numeric::from(0.1).to_rational(true)?;
  /// assert_ne!(binary, decimal);
  /// assert_eq!(decimal, Numeric::from("1/10").to_rational(false)?);
  /// # Ok::<(), frange::RangeError>(())
  /// ```
  ///
  /// Integer and string inputs are unaffected by `stringify`. NaN and
  /// infinite floats fail with [`RangeError::NonFinite`]; strings outside
  /// the grammar fail with [`RangeError::InvalidNumber`].
  pub fn to_rational(&self, stringify: bool) -> Result<BigRational, RangeError> {
    match self {
      Numeric::Int(value) => Ok(BigRational::from_integer(BigInt::from(*value))),
      Numeric::Float(value) if stringify => parse_rational(&value.to_string()),
      Numeric::Float(value) => {
        BigRational::from_float(*value).ok_or(RangeError::NonFinite(*value))
      }
      Numeric::Str(text) => parse_rational(text),
    }
  }
}

impl fmt::Display for Numeric {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Numeric::Int(value) => write!(f, "{value}"),
      Numeric::Float(value) => write!(f, "{value}"),
      Numeric::Str(text) => f.write_str(text),
    }
  }
}

impl From<i32> for Numeric {
  fn from(value: i32) -> Self {
    Numeric::Int(value.into())
  }
}

impl From<i64> for Numeric {
  fn from(value: i64) -> Self {
    Numeric::Int(value)
  }
}

impl From<u32> for Numeric {
  fn from(value: u32) -> Self {
    Numeric::Int(value.into())
  }
}

impl From<f64> for Numeric {
  fn from(value: f64) -> Self {
    Numeric::Float(value)
  }
}

impl From<&str> for Numeric {
  fn from(value: &str) -> Self {
    Numeric::Str(value.to_string())
  }
}

impl From<String> for Numeric {
  fn from(value: String) -> Self {
    Numeric::Str(value)
  }
}

/// Parses a numeric literal: surrounding whitespace ignored, optional sign,
/// then either a `numer/denom` fraction or a decimal with optional exponent.
fn parse_rational(input: &str) -> Result<BigRational, RangeError> {
  let text = input.trim();
  let (negative, text) = match text.strip_prefix('-') {
    Some(rest) => (true, rest),
    None => (false, text.strip_prefix('+').unwrap_or(text)),
  };
  let magnitude = match text.split_once('/') {
    Some((numer, denom)) => parse_fraction(numer, denom),
    None => parse_decimal(text),
  }
  .ok_or_else(|| RangeError::InvalidNumber(input.trim().to_string()))?;
  Ok(if negative { -magnitude } else { magnitude })
}

/// Digit-only integer literal as a `BigInt`. Rejects empty and signed input.
fn parse_digits(text: &str) -> Option<BigInt> {
  if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
    return None;
  }
  BigInt::parse_bytes(text.as_bytes(), 10)
}

/// `numer/denom` with unsigned integer parts; the sign belongs to the whole
/// literal and a zero denominator is a parse failure, not a panic.
fn parse_fraction(numer: &str, denom: &str) -> Option<BigRational> {
  let numer = parse_digits(numer)?;
  let denom = parse_digits(denom)?;
  if denom.is_zero() {
    return None;
  }
  Some(BigRational::new(numer, denom))
}

/// `digits[.digits][(e|E)[+|-]digits]` with at least one mantissa digit, so
/// `.1` and `1.` are accepted while `.` and `1e` are not.
fn parse_decimal(text: &str) -> Option<BigRational> {
  let (mantissa, exponent) = match text.split_once(['e', 'E']) {
    Some((mantissa, exponent)) => (mantissa, Some(exponent)),
    None => (text, None),
  };
  let exponent: i64 = match exponent {
    Some(exponent) => {
      let (negative, digits) = match exponent.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, exponent.strip_prefix('+').unwrap_or(exponent)),
      };
      if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
      }
      let value: i64 = digits.parse().ok()?;
      if negative { -value } else { value }
    }
    None => 0,
  };
  let (int_part, frac_part) = match mantissa.split_once('.') {
    Some((int_part, frac_part)) => (int_part, frac_part),
    None => (mantissa, ""),
  };
  if int_part.is_empty() && frac_part.is_empty() {
    return None;
  }
  let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
  if !all_digits(int_part) || !all_digits(frac_part) {
    return None;
  }
  let mantissa = BigInt::parse_bytes(format!("{int_part}{frac_part}").as_bytes(), 10)?;
  let scale = exponent - frac_part.len() as i64;
  let ten = BigInt::from(10);
  Some(if scale >= 0 {
    BigRational::from_integer(mantissa * ten.pow(scale.unsigned_abs()))
  } else {
    BigRational::new(mantissa, ten.pow(scale.unsigned_abs()))
  })
}
