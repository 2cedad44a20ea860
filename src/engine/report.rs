//! Evaluation report - recommendation plus the auditable vote trail

use serde::{Deserialize, Serialize};

use crate::types::{GroupVote, Rationale, Recommendation};

/// Full outcome of one screening
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Evaluation {
    /// Final verdict and rationale tag
    pub recommendation: Recommendation,
    /// Operator-facing message for the verdict
    pub message: String,
    /// Individual group votes in evaluator order
    pub votes: Vec<GroupVote>,
    /// One-line summary of how the verdict was reached
    pub reasoning: String,
}

impl Evaluation {
    pub fn new(recommendation: Recommendation, votes: Vec<GroupVote>) -> Self {
        let reasoning = build_reasoning(&recommendation, &votes);
        Self {
            message: recommendation.verdict.message().to_string(),
            recommendation,
            votes,
            reasoning,
        }
    }

    /// Multi-line plain-text rendering for terminals
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.message);
        out.push('\n');
        out.push_str(&format!(
            "  verdict: {} ({})\n",
            self.recommendation.verdict, self.recommendation.rationale
        ));
        for vote in &self.votes {
            out.push_str(&format!(
                "  {:<14} {:<12} {}\n",
                vote.group.to_string(),
                vote.decision.to_string(),
                vote.reasoning
            ));
        }
        out
    }
}

/// Build reasoning string from the verdict and all votes
fn build_reasoning(recommendation: &Recommendation, votes: &[GroupVote]) -> String {
    let vote_summaries: Vec<String> = votes
        .iter()
        .map(|v| format!("{}={}", v.group, v.decision))
        .collect();

    let how = match recommendation.rationale {
        Rationale::EconomicVeto => "by economic veto".to_string(),
        Rationale::Majority {
            favorable,
            unfavorable,
        } => format!("by majority {favorable}-{unfavorable}"),
        Rationale::NoMajority {
            favorable,
            unfavorable,
        } => format!("without majority {favorable}-{unfavorable}"),
    };

    format!(
        "{} {}: {}",
        recommendation.verdict,
        how,
        vote_summaries.join(", ")
    )
}
