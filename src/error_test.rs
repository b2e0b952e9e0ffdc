use crate::error::RangeError;

#[test]
fn test_zero_step_message() {
  assert_eq!(RangeError::ZeroStep.to_string(), "step must not be zero");
}

#[test]
fn test_invalid_number_message_carries_input() {
  let message = RangeError::InvalidNumber("1.2.3".to_string()).to_string();
  assert!(message.contains("'1.2.3'"), "message was: {message}");
}

#[test]
fn test_non_finite_message_carries_value() {
  let message = RangeError::NonFinite(f64::INFINITY).to_string();
  assert!(message.contains("inf"), "message was: {message}");
}

#[test]
fn test_errors_are_comparable() {
  assert_eq!(RangeError::ZeroStep.clone(), RangeError::ZeroStep);
  assert_ne!(
    RangeError::InvalidNumber("a".to_string()),
    RangeError::InvalidNumber("b".to_string())
  );
}
