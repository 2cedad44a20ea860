//! Environmental Evaluator

use super::Evaluator;
use crate::types::{AssessmentGroup, EnvironmentalImpact, GroupVote, SubDecision, WellAssessment};

/// Favorable iff the impact is Positive
pub fn evaluate_environmental(impact: EnvironmentalImpact) -> SubDecision {
    SubDecision::from_condition(impact == EnvironmentalImpact::Positive)
}

pub struct EnvironmentalEvaluator;

impl Evaluator for EnvironmentalEvaluator {
    fn name(&self) -> &str {
        "Environmental"
    }

    fn group(&self) -> AssessmentGroup {
        AssessmentGroup::Environmental
    }

    fn evaluate(&self, assessment: &WellAssessment) -> GroupVote {
        let impact = assessment.environmental.impact;
        let decision = evaluate_environmental(impact);
        let reasoning = match impact {
            EnvironmentalImpact::Positive => "Environmental impact positive".to_string(),
            EnvironmentalImpact::Negative => "Environmental impact negative".to_string(),
        };

        GroupVote {
            group: AssessmentGroup::Environmental,
            decision,
            reasoning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_is_favorable() {
        assert_eq!(
            evaluate_environmental(EnvironmentalImpact::Positive),
            SubDecision::Favorable
        );
        assert_eq!(
            evaluate_environmental(EnvironmentalImpact::Negative),
            SubDecision::Unfavorable
        );
    }
}
