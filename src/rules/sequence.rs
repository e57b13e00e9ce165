//! Sequence rules - detects ascending/descending runs and constant steps.

use super::RuleResult;
use crate::pin::Digits;

/// Runs of four consecutive digits, ascending then descending. No wrap-around.
static SEQUENTIAL_RUNS: [&[u8; 4]; 14] = [
    b"0123", b"1234", b"2345", b"3456", b"4567", b"5678", b"6789",
    b"9876", b"8765", b"7654", b"6543", b"5432", b"4321", b"3210",
];

/// Returns `true` if `pin` is exactly one of the sequential runs.
pub(crate) fn is_sequential(pin: &str) -> bool {
    SEQUENTIAL_RUNS
        .iter()
        .any(|run| run.as_slice() == pin.as_bytes())
}

/// Rejects ascending or descending runs such as `1234` or `8765`.
pub fn sequential_rule(digits: &Digits) -> RuleResult {
    if SEQUENTIAL_RUNS.contains(&digits.as_bytes()) {
        return Some("Sequential patterns are not allowed");
    }
    None
}

/// Rejects PINs whose consecutive digit differences are all equal, e.g. `2468`.
pub fn arithmetic_rule(digits: &Digits) -> RuleResult {
    let values = digits.values();
    let step = values[1] - values[0];
    if values.windows(2).all(|w| w[1] - w[0] == step) {
        return Some("Arithmetic sequences are not allowed");
    }
    None
}
