//! Orchestrator - veto-then-majority aggregation of group votes
//!
//! ## Voting Rules
//!
//! - **Economic Unfavorable** vetoes installation regardless of the other two votes
//! - Otherwise: strict majority of the three equally weighted votes
//! - No strict majority (only possible with a tied or incomplete vote set) is
//!   reported as `Inconclusive`, never mapped onto a verdict
//!
//! | Production | Economic    | Environmental | Verdict      | Rationale    |
//! |------------|-------------|---------------|--------------|--------------|
//! | any        | Unfavorable | any           | DoNotInstall | economic veto|
//! | Favorable  | Favorable   | any           | Install      | majority     |
//! | any        | Favorable   | Favorable     | Install      | majority     |
//! | Unfavorable| Favorable   | Unfavorable   | DoNotInstall | majority 1-2 |

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info, warn};

use super::evaluators::{self, Evaluator};
use super::report::Evaluation;
use crate::error::DecisionError;
use crate::types::{
    AssessmentGroup, GroupVote, RawAssessment, Rationale, Recommendation, SubDecision, Verdict,
    WellAssessment,
};

// ============================================================================
// Tally
// ============================================================================

/// Vote counts over a set of sub-decisions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub favorable: u32,
    pub unfavorable: u32,
}

impl Tally {
    /// Counts saturate at `u32::MAX`.
    pub fn of(decisions: &[SubDecision]) -> Self {
        decisions.iter().fold(Self::default(), |mut t, d| {
            match d {
                SubDecision::Favorable => t.favorable = t.favorable.saturating_add(1),
                SubDecision::Unfavorable => t.unfavorable = t.unfavorable.saturating_add(1),
            }
            t
        })
    }

    /// The value with the strictly greater count, or `None` on a tie.
    pub fn majority(&self) -> Option<SubDecision> {
        match self.favorable.cmp(&self.unfavorable) {
            std::cmp::Ordering::Greater => Some(SubDecision::Favorable),
            std::cmp::Ordering::Less => Some(SubDecision::Unfavorable),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl Recommendation {
    /// Economic veto: always `DoNotInstall`
    pub fn vetoed() -> Self {
        Self {
            verdict: Verdict::DoNotInstall,
            rationale: Rationale::EconomicVeto,
        }
    }

    /// Majority decision from a tally; `Inconclusive` when there is no strict winner
    pub fn from_tally(tally: Tally) -> Self {
        match tally.majority() {
            Some(SubDecision::Favorable) => Self {
                verdict: Verdict::Install,
                rationale: Rationale::Majority {
                    favorable: tally.favorable,
                    unfavorable: tally.unfavorable,
                },
            },
            Some(SubDecision::Unfavorable) => Self {
                verdict: Verdict::DoNotInstall,
                rationale: Rationale::Majority {
                    favorable: tally.favorable,
                    unfavorable: tally.unfavorable,
                },
            },
            None => Self::inconclusive(tally),
        }
    }

    pub fn inconclusive(tally: Tally) -> Self {
        Self {
            verdict: Verdict::Inconclusive,
            rationale: Rationale::NoMajority {
                favorable: tally.favorable,
                unfavorable: tally.unfavorable,
            },
        }
    }
}

/// Combine the three sub-decisions: economic veto first, then strict majority.
pub fn recommend(
    production: SubDecision,
    economic: SubDecision,
    environmental: SubDecision,
) -> Recommendation {
    if economic == SubDecision::Unfavorable {
        return Recommendation::vetoed();
    }
    Recommendation::from_tally(Tally::of(&[production, economic, environmental]))
}

// ============================================================================
// Decision Engine
// ============================================================================

/// Runs the evaluators over an assessment and aggregates their votes
pub struct DecisionEngine {
    evaluators: Vec<Box<dyn Evaluator>>,
    /// Total evaluations performed
    evaluations: AtomicU64,
}

impl DecisionEngine {
    /// Create an engine with the default 3 group evaluators
    pub fn new() -> Self {
        Self::with_evaluators(evaluators::default_evaluators())
    }

    /// Create an engine with a custom evaluator set.
    ///
    /// A set that does not cover every group exactly once yields `Inconclusive`.
    pub fn with_evaluators(evaluators: Vec<Box<dyn Evaluator>>) -> Self {
        Self {
            evaluators,
            evaluations: AtomicU64::new(0),
        }
    }

    /// Collect all group votes and produce the recommendation.
    pub fn evaluate(&self, assessment: &WellAssessment) -> Evaluation {
        self.evaluations.fetch_add(1, Ordering::Relaxed);

        let votes: Vec<GroupVote> = self
            .evaluators
            .iter()
            .map(|e| {
                let vote = e.evaluate(assessment);
                debug!(
                    evaluator = e.name(),
                    decision = %vote.decision,
                    reasoning = %vote.reasoning,
                    "Group vote"
                );
                vote
            })
            .collect();

        let recommendation = aggregate(&votes);

        info!(
            verdict = %recommendation.verdict,
            rationale = %recommendation.rationale,
            votes = votes.len(),
            "Gas lift screening complete"
        );

        Evaluation::new(recommendation, votes)
    }

    /// Validate raw input at the boundary, then evaluate.
    pub fn evaluate_raw(&self, raw: &RawAssessment) -> Result<Evaluation, DecisionError> {
        let assessment = raw.validate().map_err(|e| {
            debug!(field = e.field(), error = %e, "Rejected assessment input");
            e
        })?;
        Ok(self.evaluate(&assessment))
    }

    /// Number of evaluations performed so far
    pub fn stats(&self) -> u64 {
        self.evaluations.load(Ordering::Relaxed)
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the single vote for `group`; `None` when absent or duplicated.
fn sole_vote(votes: &[GroupVote], group: AssessmentGroup) -> Option<SubDecision> {
    let mut matching = votes.iter().filter(|v| v.group == group);
    match (matching.next(), matching.next()) {
        (Some(v), None) => Some(v.decision),
        _ => None,
    }
}

fn aggregate(votes: &[GroupVote]) -> Recommendation {
    let production = sole_vote(votes, AssessmentGroup::Production);
    let economic = sole_vote(votes, AssessmentGroup::Economic);
    let environmental = sole_vote(votes, AssessmentGroup::Environmental);

    match (production, economic, environmental) {
        (Some(p), Some(e), Some(env)) if votes.len() == 3 => recommend(p, e, env),
        _ => {
            let decisions: Vec<SubDecision> = votes.iter().map(|v| v.decision).collect();
            warn!(
                votes = votes.len(),
                "Vote set does not cover each group exactly once - result inconclusive"
            );
            Recommendation::inconclusive(Tally::of(&decisions))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
