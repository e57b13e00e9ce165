//! Shape rules - detects mirrored PINs and calendar years.

use super::RuleResult;
use crate::pin::Digits;

/// Rejects the mirrored `ABBA` shape, e.g. `1221` or `6996`.
///
/// Only this exact shape matches: `1231` is not a palindrome here.
pub fn palindrome_rule(digits: &Digits) -> RuleResult {
    let [a, b, c, d] = *digits.as_bytes();
    if a == d && b == c {
        return Some("Palindrome patterns are not allowed");
    }
    None
}

/// Rejects anything that reads as a year `19xx` or `20xx`.
pub fn year_rule(digits: &Digits) -> RuleResult {
    if digits.as_bytes().starts_with(b"19") || digits.as_bytes().starts_with(b"20") {
        return Some("Year patterns are not allowed");
    }
    None
}
