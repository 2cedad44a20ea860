//! Assessment groups and their categorical label domains
//!
//! Labels are serialized verbatim (`High`, `NotAvailable`, ...). Parsing is
//! case-insensitive and also accepts the spellings shown on the paper
//! screening form (`None` for an unselected rating, `Not Available`).

use serde::{Deserialize, Serialize};

use crate::error::DecisionError;

// ============================================================================
// Label domains
// ============================================================================

/// A closed categorical domain with a fixed set of textual labels.
pub trait Label: Sized + Copy + PartialEq + 'static {
    /// Every member of the domain, in display order
    const DOMAIN: &'static [Self];

    /// Canonical label
    fn label(self) -> &'static str;

    /// Additional accepted spellings
    fn aliases(self) -> &'static [&'static str] {
        &[]
    }

    /// Comma-separated canonical labels, used in error messages
    fn expected() -> String {
        Self::DOMAIN
            .iter()
            .map(|m| m.label())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Parse a raw label for `field`, failing with `InvalidInput` outside the domain.
    fn parse_label(field: &str, raw: &str) -> Result<Self, DecisionError> {
        let wanted = raw.trim();
        Self::DOMAIN
            .iter()
            .copied()
            .find(|m| {
                m.label().eq_ignore_ascii_case(wanted)
                    || m.aliases().iter().any(|a| a.eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| DecisionError::InvalidInput {
                field: field.to_string(),
                value: raw.to_string(),
                expected: Self::expected(),
            })
    }
}

/// Categorical rating used by all three production fields.
///
/// `Unknown` stands for an unselected value. It never satisfies a rule
/// that requires a recognized category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rating {
    High,
    Low,
    Unknown,
}

impl Rating {
    /// True for `High` and `Low`
    pub fn is_recognized(self) -> bool {
        matches!(self, Rating::High | Rating::Low)
    }
}

impl Label for Rating {
    const DOMAIN: &'static [Self] = &[Rating::High, Rating::Low, Rating::Unknown];

    fn label(self) -> &'static str {
        match self {
            Rating::High => "High",
            Rating::Low => "Low",
            Rating::Unknown => "Unknown",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Rating::Unknown => &["None", "Unspecified"],
            _ => &[],
        }
    }
}

/// Whether lift gas is available at the well
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GasAvailability {
    Yes,
    No,
}

impl Label for GasAvailability {
    const DOMAIN: &'static [Self] = &[GasAvailability::Yes, GasAvailability::No];

    fn label(self) -> &'static str {
        match self {
            GasAvailability::Yes => "Yes",
            GasAvailability::No => "No",
        }
    }
}

/// Whether budget for gas compression is available
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CompressionCost {
    Available,
    NotAvailable,
}

impl Label for CompressionCost {
    const DOMAIN: &'static [Self] = &[CompressionCost::Available, CompressionCost::NotAvailable];

    fn label(self) -> &'static str {
        match self {
            CompressionCost::Available => "Available",
            CompressionCost::NotAvailable => "NotAvailable",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            CompressionCost::NotAvailable => &["Not Available", "Not_Available"],
            CompressionCost::Available => &[],
        }
    }
}

/// Expected environmental impact of the installation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EnvironmentalImpact {
    Positive,
    Negative,
}

impl Label for EnvironmentalImpact {
    const DOMAIN: &'static [Self] = &[EnvironmentalImpact::Positive, EnvironmentalImpact::Negative];

    fn label(self) -> &'static str {
        match self {
            EnvironmentalImpact::Positive => "Positive",
            EnvironmentalImpact::Negative => "Negative",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for GasAvailability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for CompressionCost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for EnvironmentalImpact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Assessment groups
// ============================================================================

/// Production characteristics of the well
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductionAssessment {
    pub productivity_index: Rating,
    pub bottomhole_pressure: Rating,
    pub gas_liquid_ratio: Rating,
}

/// Economic feasibility of supplying lift gas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EconomicAssessment {
    pub gas_availability: GasAvailability,
    pub compression_cost: CompressionCost,
}

/// Environmental impact of the project
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnvironmentalAssessment {
    pub impact: EnvironmentalImpact,
}

/// The complete input for one screening: all three groups
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WellAssessment {
    pub production: ProductionAssessment,
    pub economic: EconomicAssessment,
    pub environmental: EnvironmentalAssessment,
}
