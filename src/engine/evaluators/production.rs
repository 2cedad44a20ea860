//! Production Evaluator - gas-liquid ratio gate
//!
//! Gas lift pays off when the well already produces enough gas relative to
//! liquid. Productivity index and bottomhole pressure only need to be known.

use super::Evaluator;
use crate::types::{AssessmentGroup, GroupVote, Rating, SubDecision, WellAssessment};

/// Favorable iff GLR is High and both PI and BHP are High or Low.
///
/// An `Unknown` in any field fails closed.
pub fn evaluate_production(
    productivity_index: Rating,
    bottomhole_pressure: Rating,
    gas_liquid_ratio: Rating,
) -> SubDecision {
    SubDecision::from_condition(
        gas_liquid_ratio == Rating::High
            && productivity_index.is_recognized()
            && bottomhole_pressure.is_recognized(),
    )
}

/// Production Evaluator reads only the production group
pub struct ProductionEvaluator;

impl Evaluator for ProductionEvaluator {
    fn name(&self) -> &str {
        "Production"
    }

    fn group(&self) -> AssessmentGroup {
        AssessmentGroup::Production
    }

    fn evaluate(&self, assessment: &WellAssessment) -> GroupVote {
        let p = &assessment.production;
        let decision =
            evaluate_production(p.productivity_index, p.bottomhole_pressure, p.gas_liquid_ratio);

        let reasoning = if decision.is_favorable() {
            format!(
                "GLR High with PI {} and BHP {} - well suited to gas lift",
                p.productivity_index, p.bottomhole_pressure
            )
        } else if !p.productivity_index.is_recognized() || !p.bottomhole_pressure.is_recognized() {
            format!(
                "PI {} / BHP {} not fully characterized - cannot qualify",
                p.productivity_index, p.bottomhole_pressure
            )
        } else {
            format!("GLR {} - insufficient gas for lift", p.gas_liquid_ratio)
        };

        GroupVote {
            group: AssessmentGroup::Production,
            decision,
            reasoning,
        }
    }
}
