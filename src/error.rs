//! Boundary errors for assessment input
//!
//! Every evaluation path inside the engine is total over the declared label
//! domains. The only failure is input that never makes it into those domains.

use thiserror::Error;

/// Error raised while turning raw labels into a typed assessment
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    /// A field carried a label outside its declared domain
    #[error("invalid input for {field}: '{value}' (expected one of: {expected})")]
    InvalidInput {
        field: String,
        value: String,
        expected: String,
    },

    /// A required field was absent
    #[error("missing input for {field} (expected one of: {expected})")]
    MissingField { field: String, expected: String },
}

impl DecisionError {
    /// Dotted path of the offending field, e.g. `production.gas_liquid_ratio`
    pub fn field(&self) -> &str {
        match self {
            DecisionError::InvalidInput { field, .. } | DecisionError::MissingField { field, .. } => {
                field
            }
        }
    }

    /// Stable machine-readable code used by the HTTP surface
    pub fn code(&self) -> &'static str {
        "INVALID_INPUT"
    }
}
