//! End-to-end scenarios for the public API: boundary landings across every
//! input notation, drift with and without the string round-trip, and the
//! exact-count and mirroring properties.

use frange::{Frange, frange};
use proptest::prelude::*;

fn last_of(range: Frange) -> f64 {
  range.produce().unwrap().last().unwrap()
}

#[test]
fn string_tenth_reaches_the_boundary_exactly() {
  let values: Vec<f64> = Frange::new(1, 100.0, "0.1")
    .with_inclusive(true)
    .produce()
    .unwrap()
    .collect();
  assert_eq!(values.len(), 991);
  assert_eq!(values.last(), Some(&100.0));
}

#[test]
fn every_notation_of_one_tenth_reaches_the_boundary() {
  assert_eq!(last_of(Frange::new(1.0, "100", "1/10").with_inclusive(true)), 100.0);
  assert_eq!(last_of(Frange::new("1", "100.0", ".1").with_inclusive(true)), 100.0);
  assert_eq!(last_of(Frange::new("1.0", 100, "1e-1").with_inclusive(true)), 100.0);
}

#[test]
fn binary_float_step_misses_the_boundary() {
  let drifting = Frange::new(1, 100.0, 0.1).with_inclusive(true);
  let values: Vec<f64> = drifting.produce().unwrap().collect();
  assert_eq!(values.len(), 990);
  assert_ne!(values.last(), Some(&100.0));
}

#[test]
fn stringify_repairs_a_binary_float_step() {
  let repaired = Frange::new(1, 100.0, 0.1).with_inclusive(true).with_stringify(true);
  let values: Vec<f64> = repaired.produce().unwrap().collect();
  assert_eq!(values.len(), 991);
  assert_eq!(values.last(), Some(&100.0));
}

#[test]
fn sixth_step_lands_on_three() {
  assert_eq!(last_of(Frange::new(2, 3, "1/6").with_inclusive(true)), 3.0);
}

#[test]
fn third_step_lands_on_one_hundred() {
  let values: Vec<f64> = Frange::new(0, 100, "1/3")
    .with_inclusive(true)
    .produce()
    .unwrap()
    .collect();
  assert_eq!(values.len(), 301);
  assert_eq!(values.last(), Some(&100.0));
}

#[test]
fn single_bound_form_counts_up_from_zero() {
  let values: Vec<f64> = Frange::up_to(4, 0.11).produce().unwrap().collect();
  assert_eq!(values.len(), 37);
  assert_eq!(values.first(), Some(&0.0));
  assert_eq!(values.last(), Some(&3.96));
}

#[test]
fn descending_range_stops_above_the_exclusive_bound() {
  let values: Vec<f64> = Frange::new(4, 0, -0.1)
    .with_stringify(true)
    .produce()
    .unwrap()
    .collect();
  assert_eq!(values.len(), 40);
  assert_eq!(values.first(), Some(&4.0));
  assert_eq!(values.last(), Some(&0.1));
}

#[test]
fn zero_step_fails_before_any_element() {
  assert!(frange(0, 10, "0.0").is_err());
  assert!(frange(0, 10, 0).is_err());
}

/// Expected element count in plain integer arithmetic: with step
/// `numer/denom`, the span divided by the step is `(stop - start) * denom /
/// numer` exactly.
fn expected_count(start: i64, stop: i64, numer: i64, denom: i64, inclusive: bool) -> usize {
  let span = (stop - start) * denom;
  let exclusive = if span <= 0 { 0 } else { (span + numer - 1) / numer };
  let lands = span >= 0 && span % numer == 0;
  (exclusive + if inclusive && lands { 1 } else { 0 }) as usize
}

proptest! {
  #[test]
  fn element_count_matches_the_exact_formula(
    start in -50i64..=50,
    stop in -50i64..=50,
    numer in 1i64..=20,
    denom in 1i64..=10,
    inclusive in any::<bool>(),
  ) {
    let range = Frange::new(start, stop, format!("{numer}/{denom}")).with_inclusive(inclusive);
    let expected = expected_count(start, stop, numer, denom, inclusive);
    let iter = range.produce().unwrap();
    prop_assert_eq!(iter.size_hint(), (expected, Some(expected)));
    prop_assert_eq!(iter.count(), expected);
  }

  #[test]
  fn negative_step_mirrors_the_positive_sequence(
    start in -30i64..=30,
    stop in -30i64..=30,
    numer in 1i64..=15,
    denom in 1i64..=8,
    inclusive in any::<bool>(),
  ) {
    let forward: Vec<f64> = Frange::new(start, stop, format!("{numer}/{denom}"))
      .with_inclusive(inclusive)
      .produce()
      .unwrap()
      .collect();
    let backward: Vec<f64> = Frange::new(-start, -stop, format!("-{numer}/{denom}"))
      .with_inclusive(inclusive)
      .produce()
      .unwrap()
      .collect();
    let mirrored: Vec<f64> = forward.iter().map(|value| -value).collect();
    prop_assert_eq!(backward, mirrored);
  }

  #[test]
  fn producing_twice_yields_identical_sequences(
    start in -30i64..=30,
    stop in -30i64..=30,
    numer in (-15i64..=15).prop_filter("step must be non-zero", |numer| *numer != 0),
    denom in 1i64..=8,
    inclusive in any::<bool>(),
  ) {
    let range = Frange::new(start, stop, format!("{numer}/{denom}")).with_inclusive(inclusive);
    let first: Vec<f64> = range.produce().unwrap().collect();
    let second: Vec<f64> = range.produce().unwrap().collect();
    prop_assert_eq!(first, second);
  }
}
