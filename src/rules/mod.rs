//! PIN rejection rules
//!
//! Each rule detects one weakness pattern in a well-formed PIN.

mod denylist;
mod repetition;
mod sequence;
mod shape;

pub use denylist::denylist_rule;
pub use repetition::{low_diversity_rule, repeated_rule};
pub use sequence::{arithmetic_rule, sequential_rule};
pub use shape::{palindrome_rule, year_rule};

pub(crate) use repetition::is_repeated_run;
pub(crate) use sequence::is_sequential;

use crate::pin::Digits;

/// Result type for rule functions.
/// - `Some(reason)` - Rule matched, PIN is rejected with reason
/// - `None` - Rule did not match
pub type RuleResult = Option<&'static str>;

/// A named rejection rule.
pub type Rule = (&'static str, fn(&Digits) -> RuleResult);

/// Rejection rules in evaluation order. The first match wins.
pub static RULES: [Rule; 7] = [
    ("sequential", sequential_rule),
    ("repeated", repeated_rule),
    ("palindrome", palindrome_rule),
    ("year", year_rule),
    ("low_diversity", low_diversity_rule),
    ("arithmetic", arithmetic_rule),
    ("denylist", denylist_rule),
];
