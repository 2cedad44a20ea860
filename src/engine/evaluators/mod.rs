//! Evaluator trait and the three group evaluators
//!
//! Each evaluator reads exactly one assessment group and returns a binary
//! vote with its reasoning. No evaluator looks at another group.
//!
//! ## Evaluators
//!
//! 1. **Production** - GLR must be High, PI and BHP must be recognized categories
//! 2. **Economic** - gas available and compression budget available (veto holder)
//! 3. **Environmental** - impact must be Positive

pub mod economic;
pub mod environmental;
pub mod production;

pub use economic::{evaluate_economics, EconomicEvaluator};
pub use environmental::{evaluate_environmental, EnvironmentalEvaluator};
pub use production::{evaluate_production, ProductionEvaluator};

use crate::types::{AssessmentGroup, GroupVote, WellAssessment};

/// Trait for group evaluators
///
/// Implementations must be pure: the same assessment always yields the same vote.
pub trait Evaluator: Send + Sync {
    /// Evaluator name (e.g., "Production")
    fn name(&self) -> &str;

    /// The single group this evaluator reads
    fn group(&self) -> AssessmentGroup;

    /// Evaluate the evaluator's group of the assessment
    fn evaluate(&self, assessment: &WellAssessment) -> GroupVote;
}

/// Create the default set of 3 evaluators in production/economic/environmental order
pub fn default_evaluators() -> Vec<Box<dyn Evaluator>> {
    vec![
        Box::new(ProductionEvaluator),
        Box::new(EconomicEvaluator),
        Box::new(EnvironmentalEvaluator),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_evaluators_cover_each_group_once() {
        let evaluators = default_evaluators();
        let groups: Vec<AssessmentGroup> = evaluators.iter().map(|e| e.group()).collect();
        assert_eq!(
            groups,
            vec![
                AssessmentGroup::Production,
                AssessmentGroup::Economic,
                AssessmentGroup::Environmental,
            ]
        );
    }
}
