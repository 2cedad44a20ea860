//! Unvalidated, string-typed assessment input
//!
//! CLI flags and HTTP bodies arrive as free text. They are only turned into a
//! [`WellAssessment`] through [`RawAssessment::validate`], which rejects any
//! missing field or label outside its domain.

use serde::{Deserialize, Serialize};

use super::assessment::{
    CompressionCost, EconomicAssessment, EnvironmentalAssessment, EnvironmentalImpact,
    GasAvailability, Label, ProductionAssessment, Rating, WellAssessment,
};
use crate::error::DecisionError;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RawProduction {
    pub productivity_index: Option<String>,
    pub bottomhole_pressure: Option<String>,
    pub gas_liquid_ratio: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RawEconomic {
    pub gas_availability: Option<String>,
    pub compression_cost: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RawEnvironmental {
    pub impact: Option<String>,
}

/// Assessment as received at the boundary
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RawAssessment {
    pub production: RawProduction,
    pub economic: RawEconomic,
    pub environmental: RawEnvironmental,
}

fn required<T: Label>(field: &str, value: Option<&str>) -> Result<T, DecisionError> {
    match value {
        Some(raw) => T::parse_label(field, raw),
        None => Err(DecisionError::MissingField {
            field: field.to_string(),
            expected: T::expected(),
        }),
    }
}

impl RawAssessment {
    /// Validate every field and build the typed assessment.
    ///
    /// Fields are checked in group order; the first failure is returned.
    pub fn validate(&self) -> Result<WellAssessment, DecisionError> {
        let p = &self.production;
        let production = ProductionAssessment {
            productivity_index: required::<Rating>(
                "production.productivity_index",
                p.productivity_index.as_deref(),
            )?,
            bottomhole_pressure: required::<Rating>(
                "production.bottomhole_pressure",
                p.bottomhole_pressure.as_deref(),
            )?,
            gas_liquid_ratio: required::<Rating>(
                "production.gas_liquid_ratio",
                p.gas_liquid_ratio.as_deref(),
            )?,
        };

        let e = &self.economic;
        let economic = EconomicAssessment {
            gas_availability: required::<GasAvailability>(
                "economic.gas_availability",
                e.gas_availability.as_deref(),
            )?,
            compression_cost: required::<CompressionCost>(
                "economic.compression_cost",
                e.compression_cost.as_deref(),
            )?,
        };

        let environmental = EnvironmentalAssessment {
            impact: required::<EnvironmentalImpact>(
                "environmental.impact",
                self.environmental.impact.as_deref(),
            )?,
        };

        Ok(WellAssessment {
            production,
            economic,
            environmental,
        })
    }
}

impl From<&WellAssessment> for RawAssessment {
    fn from(a: &WellAssessment) -> Self {
        Self {
            production: RawProduction {
                productivity_index: Some(a.production.productivity_index.to_string()),
                bottomhole_pressure: Some(a.production.bottomhole_pressure.to_string()),
                gas_liquid_ratio: Some(a.production.gas_liquid_ratio.to_string()),
            },
            economic: RawEconomic {
                gas_availability: Some(a.economic.gas_availability.to_string()),
                compression_cost: Some(a.economic.compression_cost.to_string()),
            },
            environmental: RawEnvironmental {
                impact: Some(a.environmental.impact.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> RawAssessment {
        RawAssessment {
            production: RawProduction {
                productivity_index: Some("High".to_string()),
                bottomhole_pressure: Some("Low".to_string()),
                gas_liquid_ratio: Some("High".to_string()),
            },
            economic: RawEconomic {
                gas_availability: Some("Yes".to_string()),
                compression_cost: Some("Available".to_string()),
            },
            environmental: RawEnvironmental {
                impact: Some("Positive".to_string()),
            },
        }
    }

    #[test]
    fn test_complete_input_validates() {
        let a = complete().validate().unwrap();
        assert_eq!(a.production.productivity_index, Rating::High);
        assert_eq!(a.production.bottomhole_pressure, Rating::Low);
        assert_eq!(a.economic.compression_cost, CompressionCost::Available);
        assert_eq!(a.environmental.impact, EnvironmentalImpact::Positive);
    }

    #[test]
    fn test_missing_field_is_reported_with_path() {
        let mut raw = complete();
        raw.economic.compression_cost = None;
        let err = raw.validate().unwrap_err();
        assert!(matches!(err, DecisionError::MissingField { .. }));
        assert_eq!(err.field(), "economic.compression_cost");
    }

    #[test]
    fn test_bad_label_is_reported_with_path() {
        let mut raw = complete();
        raw.environmental.impact = Some("Neutral".to_string());
        let err = raw.validate().unwrap_err();
        assert!(matches!(err, DecisionError::InvalidInput { .. }));
        assert_eq!(err.field(), "environmental.impact");
    }

    #[test]
    fn test_unknown_json_field_is_rejected() {
        let json = r#"{"production": {"gas_liquid_raito": "High"}}"#;
        assert!(serde_json::from_str::<RawAssessment>(json).is_err());
    }

    #[test]
    fn test_typed_assessment_converts_back() {
        let a = complete().validate().unwrap();
        let raw = RawAssessment::from(&a);
        assert_eq!(raw.validate().unwrap(), a);
    }
}
