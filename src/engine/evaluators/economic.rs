//! Economic Evaluator - VETO HOLDER
//!
//! Without lift gas or the budget to compress it there is nothing to inject,
//! so an unfavorable economic vote blocks installation on its own.

use super::Evaluator;
use crate::types::{
    AssessmentGroup, CompressionCost, GasAvailability, GroupVote, SubDecision, WellAssessment,
};

/// Favorable iff gas is available and compression cost is covered
pub fn evaluate_economics(
    gas_availability: GasAvailability,
    compression_cost: CompressionCost,
) -> SubDecision {
    SubDecision::from_condition(
        gas_availability == GasAvailability::Yes && compression_cost == CompressionCost::Available,
    )
}

/// Economic Evaluator reads only the economic group
pub struct EconomicEvaluator;

impl Evaluator for EconomicEvaluator {
    fn name(&self) -> &str {
        "Economic"
    }

    fn group(&self) -> AssessmentGroup {
        AssessmentGroup::Economic
    }

    fn evaluate(&self, assessment: &WellAssessment) -> GroupVote {
        let e = &assessment.economic;
        let decision = evaluate_economics(e.gas_availability, e.compression_cost);

        let reasoning = match (e.gas_availability, e.compression_cost) {
            (GasAvailability::Yes, CompressionCost::Available) => {
                "Lift gas available and compression budgeted".to_string()
            }
            (GasAvailability::No, CompressionCost::NotAvailable) => {
                "VETO: no lift gas and no compression budget".to_string()
            }
            (GasAvailability::No, _) => "VETO: no lift gas available".to_string(),
            (_, CompressionCost::NotAvailable) => {
                "VETO: compression cost not covered".to_string()
            }
        };

        GroupVote {
            group: AssessmentGroup::Economic,
            decision,
            reasoning,
        }
    }
}
