//! Sub-decisions, group votes and the final recommendation

use serde::{Deserialize, Serialize};

/// Binary outcome of one assessment group
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SubDecision {
    Favorable,
    Unfavorable,
}

impl SubDecision {
    /// `Favorable` when the group's rule holds
    pub fn from_condition(holds: bool) -> Self {
        if holds {
            SubDecision::Favorable
        } else {
            SubDecision::Unfavorable
        }
    }

    pub fn is_favorable(self) -> bool {
        self == SubDecision::Favorable
    }
}

impl std::fmt::Display for SubDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubDecision::Favorable => write!(f, "Favorable"),
            SubDecision::Unfavorable => write!(f, "Unfavorable"),
        }
    }
}

/// Which input group a vote was produced from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentGroup {
    Production,
    Economic,
    Environmental,
}

impl std::fmt::Display for AssessmentGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssessmentGroup::Production => write!(f, "production"),
            AssessmentGroup::Economic => write!(f, "economic"),
            AssessmentGroup::Environmental => write!(f, "environmental"),
        }
    }
}

/// One evaluator's vote, kept for display and audit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupVote {
    /// Group the vote was derived from
    pub group: AssessmentGroup,
    /// Favorable / Unfavorable
    pub decision: SubDecision,
    /// Human-readable explanation of the rule outcome
    pub reasoning: String,
}

/// Final screening verdict
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Verdict {
    Install,
    DoNotInstall,
    /// No strict majority could be formed. Never coerced into a verdict.
    Inconclusive,
}

impl Verdict {
    /// Operator-facing message
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Install => "Gas lift the well!",
            Verdict::DoNotInstall => "Do not Gas lift the well!",
            Verdict::Inconclusive => "Check information entered!",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Install => write!(f, "Install"),
            Verdict::DoNotInstall => write!(f, "DoNotInstall"),
            Verdict::Inconclusive => write!(f, "Inconclusive"),
        }
    }
}

/// Why the verdict was reached
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rationale {
    /// Economic sub-decision was unfavorable
    EconomicVeto,
    /// A strict majority decided
    Majority { favorable: u32, unfavorable: u32 },
    /// Votes were tied or incomplete
    NoMajority { favorable: u32, unfavorable: u32 },
}

impl std::fmt::Display for Rationale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rationale::EconomicVeto => write!(f, "economic veto"),
            Rationale::Majority { favorable, unfavorable } => {
                write!(f, "majority {favorable}-{unfavorable}")
            }
            Rationale::NoMajority { favorable, unfavorable } => {
                write!(f, "no majority {favorable}-{unfavorable}")
            }
        }
    }
}

/// Verdict plus its rationale tag
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    pub verdict: Verdict,
    pub rationale: Rationale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_condition() {
        assert_eq!(SubDecision::from_condition(true), SubDecision::Favorable);
        assert_eq!(SubDecision::from_condition(false), SubDecision::Unfavorable);
        assert!(SubDecision::Favorable.is_favorable());
        assert!(!SubDecision::Unfavorable.is_favorable());
    }

    #[test]
    fn test_verdict_messages_are_distinct() {
        assert_eq!(Verdict::Install.message(), "Gas lift the well!");
        assert_eq!(Verdict::DoNotInstall.message(), "Do not Gas lift the well!");
        assert_eq!(Verdict::Inconclusive.message(), "Check information entered!");
    }

    #[test]
    fn test_rationale_serializes_with_kind_tag() {
        let v = serde_json::to_value(Rationale::Majority {
            favorable: 2,
            unfavorable: 1,
        })
        .unwrap();
        assert_eq!(v["kind"], "majority");
        assert_eq!(v["favorable"], 2);
        assert_eq!(v["unfavorable"], 1);

        let veto = serde_json::to_value(Rationale::EconomicVeto).unwrap();
        assert_eq!(veto["kind"], "economic_veto");
    }

    #[test]
    fn test_group_display_is_lowercase() {
        assert_eq!(AssessmentGroup::Environmental.to_string(), "environmental");
        assert_eq!(
            serde_json::to_string(&AssessmentGroup::Economic).unwrap(),
            "\"economic\""
        );
    }
}
