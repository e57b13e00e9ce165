//! Repetition rules - detects repeated digits and low digit diversity.

use super::RuleResult;
use crate::pin::Digits;

const MIN_DISTINCT_DIGITS: usize = 3;

/// Returns `true` if `pin` is four or more copies of the same ASCII digit.
pub(crate) fn is_repeated_run(pin: &str) -> bool {
    let bytes = pin.as_bytes();
    bytes.len() >= 4 && bytes[0].is_ascii_digit() && bytes.iter().all(|&b| b == bytes[0])
}

/// Rejects PINs made of a single repeated digit, e.g. `0000`.
pub fn repeated_rule(digits: &Digits) -> RuleResult {
    if digits.distinct_count() == 1 {
        return Some("Repeated digits are not allowed");
    }
    None
}

/// Rejects PINs with fewer than three different digits.
pub fn low_diversity_rule(digits: &Digits) -> RuleResult {
    if digits.distinct_count() < MIN_DISTINCT_DIGITS {
        return Some("PIN must contain at least 3 different digits");
    }
    None
}
