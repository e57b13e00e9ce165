//! Result types shared by the validator and the strength scorer.

use std::fmt;

/// Reason reported for a PIN that passes every rule.
pub const ACCEPTED_REASON: &str = "PIN meets security requirements";

/// Outcome of [`validate_pin`](crate::validate_pin).
///
/// `reason` is always populated, including on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub is_valid: bool,
    pub reason: String,
}

impl Verdict {
    pub fn accepted() -> Self {
        Self {
            is_valid: true,
            reason: ACCEPTED_REASON.to_string(),
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_valid { "Valid" } else { "Invalid" };
        write!(f, "{} - {}", status, self.reason)
    }
}

/// Coarse strength rating of a PIN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PinStrength {
    Weak,
    Medium,
    Strong,
}

impl PinStrength {
    /// Buckets a raw score: `>= 5` is strong, `>= 3` is medium.
    pub fn from_score(score: i64) -> Self {
        match score {
            s if s >= 5 => PinStrength::Strong,
            s if s >= 3 => PinStrength::Medium,
            _ => PinStrength::Weak,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PinStrength::Weak => "Weak",
            PinStrength::Medium => "Medium",
            PinStrength::Strong => "Strong",
        }
    }
}

impl fmt::Display for PinStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict and strength of the same PIN, computed independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinEvaluation {
    pub verdict: Verdict,
    pub strength: PinStrength,
}

impl fmt::Display for PinEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - Strength: {}", self.verdict, self.strength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_buckets() {
        assert_eq!(PinStrength::from_score(8), PinStrength::Strong);
        assert_eq!(PinStrength::from_score(5), PinStrength::Strong);
        assert_eq!(PinStrength::from_score(4), PinStrength::Medium);
        assert_eq!(PinStrength::from_score(3), PinStrength::Medium);
        assert_eq!(PinStrength::from_score(2), PinStrength::Weak);
        assert_eq!(PinStrength::from_score(-4), PinStrength::Weak);
    }

    #[test]
    fn test_strength_labels() {
        assert_eq!(PinStrength::Strong.to_string(), "Strong");
        assert_eq!(PinStrength::Medium.to_string(), "Medium");
        assert_eq!(PinStrength::Weak.to_string(), "Weak");
        assert!(PinStrength::Weak < PinStrength::Strong);
    }

    #[test]
    fn test_verdict_constructors() {
        let ok = Verdict::accepted();
        assert!(ok.is_valid);
        assert_eq!(ok.reason, "PIN meets security requirements");

        let rejected = Verdict::rejected("Year patterns are not allowed");
        assert!(!rejected.is_valid);
        assert_eq!(rejected.to_string(), "Invalid - Year patterns are not allowed");
    }

    #[test]
    fn test_evaluation_display() {
        let evaluation = PinEvaluation {
            verdict: Verdict::accepted(),
            strength: PinStrength::Strong,
        };
        assert_eq!(
            evaluation.to_string(),
            "Valid - PIN meets security requirements - Strength: Strong"
        );
    }
}
