//! Decision engine for gas lift screening
//!
//! - **Evaluators**: one pure rule per assessment group (production, economic, environmental)
//! - **Orchestrator**: economic veto, then strict majority over the three votes
//! - **Report**: verdict, rationale, votes and reasoning for display or audit

pub mod evaluators;
pub mod orchestrator;
pub mod report;

pub use evaluators::{
    default_evaluators, evaluate_economics, evaluate_environmental, evaluate_production, Evaluator,
};
pub use orchestrator::{recommend, DecisionEngine, Tally};
pub use report::Evaluation;
