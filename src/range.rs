//! Range generator for exact decimal sequences.
//!
//! This module provides [`Frange`], a generator that produces a lazy sequence
//! of `f64` values from a start value to a stop value with a given step size,
//! computed in arbitrary-precision rational arithmetic so that accumulated
//! floating-point error can never change how many elements are produced or
//! whether the stop boundary is reached exactly.
//!
//! # Overview
//!
//! [`Frange`] holds the caller's start, stop and step inputs together with
//! two flags, and [`Frange::produce`] turns them into a [`FrangeIter`]. The
//! iterator keeps its cursor as an exact rational and converts to `f64` once
//! per yielded element, so the element count is decided by exact comparison
//! rather than by repeated binary floating-point addition.
//!
//! # Key Concepts
//!
//! - **Exact Stepping**: the cursor advances by exact rational addition
//! - **Inclusive Boundary**: with [`Frange::with_inclusive`], a cursor that
//!   lands exactly on the stop value is yielded once more
//! - **String Round-Trip**: with [`Frange::with_stringify`], inputs are
//!   rendered to their canonical strings before parsing, so a float step of
//!   `0.1` means the decimal one-tenth rather than its binary approximation
//! - **Descending Ranges**: a negative step mirrors the ascending case with
//!   every sign flipped
//!
//! # Quick Start
//!
//! ```rust
//! use frange::Frange;
//!
//! let values: Vec<f64> = Frange::new(1, 3, "1/2")
//!   .with_inclusive(true)
//!   .produce()?
//!   .collect();
//! assert_eq!(values, vec![1.0, 1.5, 2.0, 2.5, 3.0]);
//! # Ok::<(), frange::RangeError>(())
//! ```
//!
//! ## Drift-Free Boundaries
//!
//! ```rust
//! use frange::Frange;
//!
//! let exact: Vec<f64> = Frange::new(0, 1, 0.1)
//!   .with_inclusive(true)
//!   .with_stringify(true)
//!   .produce()?
//!   .collect();
//! assert_eq!(exact.last(), Some(&1.0));
//! assert_eq!(exact.len(), 11);
//! # Ok::<(), frange::RangeError>(())
//! ```
//!
//! # Design Decisions
//!
//! - **f64 Output**: values are converted once each at yield time; only the
//!   handed-out values are lossy, never the stepping arithmetic
//! - **Fallible Construction**: a zero step or an unparseable input fails in
//!   [`Frange::produce`] before any element exists, never mid-iteration
//! - **Reusable Recipe**: `produce()` borrows the configuration, so one
//!   [`Frange`] can produce any number of identical iterators

use crate::error::RangeError;
use crate::numeric::Numeric;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};
use tracing::{debug, warn};

/// A generator for exact decimal ranges.
///
/// Holds the range inputs in whatever form the caller supplied them (see
/// [`Numeric`]) plus the `inclusive` and `stringify` flags, both off by
/// default.
///
/// # Example
///
/// ```rust
/// use frange::Frange;
///
/// // Produces: 0.0, 0.25, 0.5, 0.75
/// let quarters = Frange::new(0, 1, "1/4");
///
/// // Produces: 10.0, 9.0, 8.0, 7.0, 6.0
/// let descending = Frange::new(10, 5, -1);
/// # let _ = (quarters, descending);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Frange {
  /// The starting value.
  pub start: Numeric,
  /// The stopping value (exclusive unless `inclusive` is set).
  pub stop: Numeric,
  /// The step size. Must not evaluate to zero.
  pub step: Numeric,
  /// Whether a cursor landing exactly on `stop` is yielded.
  pub inclusive: bool,
  /// Whether inputs go through their canonical string form before parsing.
  pub stringify: bool,
}

impl Frange {
  /// Creates a new `Frange` with the given range parameters.
  ///
  /// Each parameter accepts an integer, a float, or a string in integer,
  /// decimal, exponential or `numer/denom` notation; the forms mix freely.
  ///
  /// # Arguments
  ///
  /// * `start` - The starting value.
  /// * `stop` - The stopping value (exclusive by default).
  /// * `step` - The step size. Use negative values for descending ranges.
  pub fn new(
    start: impl Into<Numeric>,
    stop: impl Into<Numeric>,
    step: impl Into<Numeric>,
  ) -> Self {
    Self {
      start: start.into(),
      stop: stop.into(),
      step: step.into(),
      inclusive: false,
      stringify: false,
    }
  }

  /// Creates a `Frange` from zero up to `stop`, the one-bound shorthand.
  ///
  /// # Example
  ///
  /// ```rust
  /// use frange::Frange;
  ///
  /// let values: Vec<f64> = Frange::up_to(4, 1).produce()?.collect();
  /// assert_eq!(values, vec![0.0, 1.0, 2.0, 3.0]);
  /// # Ok::<(), frange::RangeError>(())
  /// ```
  pub fn up_to(stop: impl Into<Numeric>, step: impl Into<Numeric>) -> Self {
    Self::new(0, stop, step)
  }

  /// Sets whether the stop boundary is yielded when reached exactly.
  ///
  /// # Arguments
  ///
  /// * `inclusive` - Yield the boundary value on an exact landing.
  pub fn with_inclusive(mut self, inclusive: bool) -> Self {
    self.inclusive = inclusive;
    self
  }

  /// Sets whether inputs are parsed from their canonical string form.
  ///
  /// This is how a float input keeps its decimal meaning: `0.1_f64` renders
  /// as `"0.1"` and parses to exactly one-tenth, while the direct conversion
  /// would use its slightly larger binary value.
  ///
  /// # Arguments
  ///
  /// * `stringify` - Route all three inputs through their string form.
  pub fn with_stringify(mut self, stringify: bool) -> Self {
    self.stringify = stringify;
    self
  }

  /// Parses the inputs and produces the lazy sequence.
  ///
  /// Fails with [`RangeError::ZeroStep`] when the step's exact value is
  /// zero, or with the parse error of the offending input. Either way no
  /// element is ever produced. Producing twice from the same `Frange`
  /// yields identical sequences.
  pub fn produce(&self) -> Result<FrangeIter, RangeError> {
    let step = self.step.to_rational(self.stringify)?;
    if step.is_zero() {
      warn!(step = %self.step, "rejecting zero step");
      return Err(RangeError::ZeroStep);
    }
    let start = self.start.to_rational(self.stringify)?;
    let stop = self.stop.to_rational(self.stringify)?;

    // A negative step mirrors the ascending case: flip every sign, walk
    // upward, negate at yield time.
    let negate = step.is_negative();
    let (cursor, stop, step) = if negate {
      (-start, -stop, -step)
    } else {
      (start, stop, step)
    };
    debug!(
      start = %cursor,
      stop = %stop,
      step = %step,
      negate,
      inclusive = self.inclusive,
      "producing range"
    );
    Ok(FrangeIter {
      cursor,
      stop,
      step,
      inclusive: self.inclusive,
      negate,
      done: false,
    })
  }
}

/// Produces the range from `start` to `stop` by `step` with default flags.
///
/// Shorthand for `Frange::new(start, stop, step).produce()`.
///
/// # Example
///
/// ```rust
/// use frange::frange;
///
/// let values: Vec<f64> = frange(0, 1, "1/4")?.collect();
/// assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75]);
/// # Ok::<(), frange::RangeError>(())
/// ```
pub fn frange(
  start: impl Into<Numeric>,
  stop: impl Into<Numeric>,
  step: impl Into<Numeric>,
) -> Result<FrangeIter, RangeError> {
  Frange::new(start, stop, step).produce()
}

/// The lazy iterator over an exact decimal range.
///
/// The cursor, stop and step are exact rationals; `step` is always positive
/// here, with `negate` recording that the caller asked for a descending
/// range. `size_hint` is exact (saturating at `usize::MAX`).
#[derive(Debug, Clone)]
pub struct FrangeIter {
  cursor: BigRational,
  stop: BigRational,
  step: BigRational,
  inclusive: bool,
  negate: bool,
  done: bool,
}

impl FrangeIter {
  fn emit(&self, value: &BigRational) -> f64 {
    let float = value.to_f64().unwrap_or(f64::NAN);
    if self.negate { -float } else { float }
  }

  /// Exact remaining element count; `None` when it does not fit a `usize`.
  fn remaining(&self) -> Option<usize> {
    if self.done {
      return Some(0);
    }
    let span = &self.stop - &self.cursor;
    if span.is_negative() {
      return Some(0);
    }
    let quotient = span / &self.step;
    let mut count = quotient.ceil().to_integer();
    if self.inclusive && quotient.is_integer() {
      count += BigInt::from(1);
    }
    count.to_usize()
  }
}

impl Iterator for FrangeIter {
  type Item = f64;

  fn next(&mut self) -> Option<f64> {
    if self.done {
      return None;
    }
    if self.cursor < self.stop {
      let value = self.emit(&self.cursor);
      self.cursor += &self.step;
      Some(value)
    } else {
      self.done = true;
      if self.inclusive && self.cursor == self.stop {
        Some(self.emit(&self.cursor))
      } else {
        None
      }
    }
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    match self.remaining() {
      Some(count) => (count, Some(count)),
      None => (usize::MAX, None),
    }
  }
}

impl std::iter::FusedIterator for FrangeIter {}
