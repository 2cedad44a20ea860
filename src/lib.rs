//! GLID: Gas Lift Installation Decision
//!
//! Rule-based screening of a well for gas lift from three categorical
//! assessment groups.
//!
//! ## Architecture
//!
//! - **Evaluators**: one binary rule per group (production, economic, environmental)
//! - **Orchestrator**: economic veto, then strict majority of the three votes
//! - **Form**: schema of the inputs for any presentation layer
//! - **API**: HTTP surface over the engine (`glid serve`)
//!
//! ```
//! use glid::{recommend, evaluate_economics, evaluate_environmental, evaluate_production};
//! use glid::{CompressionCost, EnvironmentalImpact, GasAvailability, Rating, Verdict};
//!
//! let production = evaluate_production(Rating::High, Rating::Low, Rating::High);
//! let economic = evaluate_economics(GasAvailability::Yes, CompressionCost::Available);
//! let environmental = evaluate_environmental(EnvironmentalImpact::Negative);
//!
//! assert_eq!(recommend(production, economic, environmental).verdict, Verdict::Install);
//! ```

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod form;
pub mod types;

// Re-export configuration
pub use config::GlidConfig;

// Re-export the decision engine
pub use engine::{
    evaluate_economics, evaluate_environmental, evaluate_production, recommend, DecisionEngine,
    Evaluation, Evaluator, Tally,
};

pub use error::DecisionError;
pub use form::FormSchema;

// Re-export commonly used types
pub use types::{
    AssessmentGroup, CompressionCost, EconomicAssessment, EnvironmentalAssessment,
    EnvironmentalImpact, GasAvailability, GroupVote, Label, ProductionAssessment, Rating,
    RawAssessment, Rationale, Recommendation, SubDecision, Verdict, WellAssessment,
};
