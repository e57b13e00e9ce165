//! Strength scorer - heuristic point tally over a PIN string.
//!
//! The scorer does not check the PIN shape and does not consult the
//! validator, so a rejected PIN such as `1234` can still rate `Strong`.

use std::collections::HashSet;

use secrecy::{ExposeSecret, SecretString};

use crate::rules::{is_repeated_run, is_sequential};
use crate::types::PinStrength;

const PATTERN_PENALTY: i64 = 2;

/// Computes the raw strength score of `pin`.
///
/// `length + distinct characters`, minus 2 for a sequential run and
/// minus 2 for a repeated digit run. Works on any string.
pub fn strength_score(pin: &SecretString) -> i64 {
    let pin = pin.expose_secret();
    let length = pin.chars().count() as i64;
    let distinct = pin.chars().collect::<HashSet<char>>().len() as i64;

    let mut score = length + distinct;
    if is_sequential(pin) {
        score -= PATTERN_PENALTY;
    }
    if is_repeated_run(pin) {
        score -= PATTERN_PENALTY;
    }
    score
}

/// Rates `pin` as [`PinStrength::Strong`], [`PinStrength::Medium`] or [`PinStrength::Weak`].
pub fn calculate_strength(pin: &SecretString) -> PinStrength {
    PinStrength::from_score(strength_score(pin))
}
