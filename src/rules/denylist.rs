//! Denylist rule - checks if the PIN is in the common PIN list.

use super::RuleResult;
use crate::denylist::is_denylisted;
use crate::pin::Digits;

/// Rejects PINs found in the loaded denylist. Never matches when none is loaded.
pub fn denylist_rule(digits: &Digits) -> RuleResult {
    if is_denylisted(digits.as_str()) {
        return Some("PIN is too common");
    }
    None
}
