//! # frange
//!
//! Exact decimal ranges in pure Rust.
//!
//! `frange` generates lazy sequences of `f64` values between a start and a
//! stop bound, stepping by an exact rational amount. All stepping arithmetic
//! happens in arbitrary-precision rationals; values are converted to `f64`
//! once each at yield time, so accumulated floating-point drift can never
//! change how many elements are produced or whether the boundary is reached
//! exactly.
//!
//! ## Key Features
//!
//! - **Drift-Free**: element count and boundary landing are decided by exact
//!   rational comparison, never by repeated `f64` addition
//! - **Flexible Inputs**: bounds and step accept integers, floats, and
//!   strings in integer, decimal, exponential or `numer/denom` notation
//! - **Lazy**: a plain pull-based [`Iterator`], nothing is computed until
//!   the caller asks for the next element
//! - **Descending Ranges**: negative steps mirror the ascending case
//!
//! ## Quick Start
//!
//! ```rust
//! use frange::frange;
//!
//! let values: Vec<f64> = frange(0, 1, "1/4")?.collect();
//! assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75]);
//! # Ok::<(), frange::RangeError>(())
//! ```
//!
//! When a step comes from a float literal, pass it through the string
//! round-trip to keep its decimal meaning:
//!
//! ```rust
//! use frange::Frange;
//!
//! let exact: Vec<f64> = Frange::new(1, 100.0, 0.1)
//!   .with_inclusive(true)
//!   .with_stringify(true)
//!   .produce()?
//!   .collect();
//! assert_eq!(exact.last(), Some(&100.0));
//! # Ok::<(), frange::RangeError>(())
//! ```

// Documentation enforcement - treat missing docs as errors
#![deny(missing_docs)]

/// Error type for range construction.
pub mod error;
/// Numeric inputs and exact-rational conversion.
pub mod numeric;
/// The range generator and its iterator.
pub mod range;

pub use error::RangeError;
pub use numeric::Numeric;
pub use range::{Frange, FrangeIter, frange};

#[cfg(test)]
mod error_test;
