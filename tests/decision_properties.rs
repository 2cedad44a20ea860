//! Decision Property Tests
//!
//! Exhaustive checks of the screening rules over every label combination,
//! plus the four reference scenarios. The domains are small enough that
//! enumerating them beats sampling.

use glid::{
    evaluate_economics, evaluate_environmental, evaluate_production, recommend, CompressionCost,
    DecisionEngine, EconomicAssessment, EnvironmentalAssessment, EnvironmentalImpact,
    GasAvailability, Label, ProductionAssessment, Rating, RawAssessment, Rationale, SubDecision,
    Verdict, WellAssessment,
};

const BOTH: [SubDecision; 2] = [SubDecision::Favorable, SubDecision::Unfavorable];

fn assessment(
    production: (Rating, Rating, Rating),
    economic: (GasAvailability, CompressionCost),
    impact: EnvironmentalImpact,
) -> WellAssessment {
    WellAssessment {
        production: ProductionAssessment {
            productivity_index: production.0,
            bottomhole_pressure: production.1,
            gas_liquid_ratio: production.2,
        },
        economic: EconomicAssessment {
            gas_availability: economic.0,
            compression_cost: economic.1,
        },
        environmental: EnvironmentalAssessment { impact },
    }
}

// ============================================================================
// Sub-decision rules
// ============================================================================

#[test]
fn production_over_known_ratings_depends_only_on_glr() {
    let known = [Rating::High, Rating::Low];
    for pi in known {
        for bhp in known {
            for glr in known {
                let expected = if glr == Rating::High {
                    SubDecision::Favorable
                } else {
                    SubDecision::Unfavorable
                };
                assert_eq!(
                    evaluate_production(pi, bhp, glr),
                    expected,
                    "PI={pi} BHP={bhp} GLR={glr}"
                );
            }
        }
    }
}

#[test]
fn unknown_pi_or_bhp_never_qualifies() {
    for other in Rating::DOMAIN.iter().copied() {
        for glr in Rating::DOMAIN.iter().copied() {
            assert_eq!(
                evaluate_production(Rating::Unknown, other, glr),
                SubDecision::Unfavorable
            );
            assert_eq!(
                evaluate_production(other, Rating::Unknown, glr),
                SubDecision::Unfavorable
            );
        }
    }
}

#[test]
fn economics_has_exactly_one_favorable_combination() {
    let mut favorable = Vec::new();
    for gas in GasAvailability::DOMAIN.iter().copied() {
        for cost in CompressionCost::DOMAIN.iter().copied() {
            if evaluate_economics(gas, cost).is_favorable() {
                favorable.push((gas, cost));
            }
        }
    }
    assert_eq!(
        favorable,
        vec![(GasAvailability::Yes, CompressionCost::Available)]
    );
}

#[test]
fn environmental_follows_impact() {
    assert_eq!(
        evaluate_environmental(EnvironmentalImpact::Positive),
        SubDecision::Favorable
    );
    assert_eq!(
        evaluate_environmental(EnvironmentalImpact::Negative),
        SubDecision::Unfavorable
    );
}

// ============================================================================
// Aggregation
// ============================================================================

#[test]
fn unfavorable_economics_vetoes_everything() {
    for production in BOTH {
        for environmental in BOTH {
            let rec = recommend(production, SubDecision::Unfavorable, environmental);
            assert_eq!(rec.verdict, Verdict::DoNotInstall);
            assert_eq!(rec.rationale, Rationale::EconomicVeto);
        }
    }
}

#[test]
fn favorable_economics_installs_iff_two_of_three_favorable() {
    for production in BOTH {
        for environmental in BOTH {
            let votes = [production, SubDecision::Favorable, environmental];
            let favorable = votes.iter().filter(|d| d.is_favorable()).count();
            let rec = recommend(production, SubDecision::Favorable, environmental);

            if favorable >= 2 {
                assert_eq!(rec.verdict, Verdict::Install, "votes {votes:?}");
            } else {
                assert_eq!(rec.verdict, Verdict::DoNotInstall, "votes {votes:?}");
            }
            assert!(matches!(rec.rationale, Rationale::Majority { .. }));
        }
    }
}

#[test]
fn typed_inputs_never_reach_inconclusive() {
    let engine = DecisionEngine::new();
    for pi in Rating::DOMAIN.iter().copied() {
        for bhp in Rating::DOMAIN.iter().copied() {
            for glr in Rating::DOMAIN.iter().copied() {
                for gas in GasAvailability::DOMAIN.iter().copied() {
                    for cost in CompressionCost::DOMAIN.iter().copied() {
                        for impact in EnvironmentalImpact::DOMAIN.iter().copied() {
                            let a = assessment((pi, bhp, glr), (gas, cost), impact);
                            let result = engine.evaluate(&a);
                            assert_ne!(result.recommendation.verdict, Verdict::Inconclusive);
                        }
                    }
                }
            }
        }
    }
    assert_eq!(engine.stats(), 27 * 4 * 2);
}

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn scenario_all_favorable_installs() {
    let a = assessment(
        (Rating::High, Rating::Low, Rating::High),
        (GasAvailability::Yes, CompressionCost::Available),
        EnvironmentalImpact::Positive,
    );
    let result = DecisionEngine::new().evaluate(&a);
    assert_eq!(result.recommendation.verdict, Verdict::Install);
    assert_eq!(
        result.recommendation.rationale,
        Rationale::Majority {
            favorable: 3,
            unfavorable: 0
        }
    );
}

#[test]
fn scenario_no_gas_vetoes() {
    let engine = DecisionEngine::new();
    for impact in EnvironmentalImpact::DOMAIN.iter().copied() {
        let a = assessment(
            (Rating::High, Rating::High, Rating::High),
            (GasAvailability::No, CompressionCost::Available),
            impact,
        );
        let result = engine.evaluate(&a);
        assert_eq!(result.recommendation.verdict, Verdict::DoNotInstall);
        assert_eq!(result.recommendation.rationale, Rationale::EconomicVeto);
    }
}

#[test]
fn scenario_low_glr_and_negative_impact_loses_majority() {
    let a = assessment(
        (Rating::Low, Rating::Low, Rating::Low),
        (GasAvailability::Yes, CompressionCost::Available),
        EnvironmentalImpact::Negative,
    );
    let result = DecisionEngine::new().evaluate(&a);
    assert_eq!(result.recommendation.verdict, Verdict::DoNotInstall);
    assert_eq!(
        result.recommendation.rationale,
        Rationale::Majority {
            favorable: 1,
            unfavorable: 2
        }
    );
    assert_eq!(result.message, "Do not Gas lift the well!");
}

#[test]
fn scenario_negative_impact_outvoted_two_to_one() {
    let a = assessment(
        (Rating::High, Rating::High, Rating::High),
        (GasAvailability::Yes, CompressionCost::Available),
        EnvironmentalImpact::Negative,
    );
    let result = DecisionEngine::new().evaluate(&a);
    assert_eq!(result.recommendation.verdict, Verdict::Install);
    assert_eq!(
        result.recommendation.rationale,
        Rationale::Majority {
            favorable: 2,
            unfavorable: 1
        }
    );
    assert_eq!(
        result.reasoning,
        "Install by majority 2-1: production=Favorable, economic=Favorable, environmental=Unfavorable"
    );
}

// ============================================================================
// Boundary
// ============================================================================

#[test]
fn json_input_with_form_spellings_evaluates() {
    let raw: RawAssessment = serde_json::from_str(
        r#"{
            "production": {"productivity_index": "None", "bottomhole_pressure": "high", "gas_liquid_ratio": "High"},
            "economic": {"gas_availability": "Yes", "compression_cost": "Not Available"},
            "environmental": {"impact": "Positive"}
        }"#,
    )
    .unwrap();

    let result = DecisionEngine::new().evaluate_raw(&raw).unwrap();
    assert_eq!(result.recommendation.verdict, Verdict::DoNotInstall);
    assert_eq!(result.recommendation.rationale, Rationale::EconomicVeto);
    assert_eq!(result.votes[0].decision, SubDecision::Unfavorable);
}

#[test]
fn json_input_missing_group_is_rejected() {
    let raw: RawAssessment = serde_json::from_str(
        r#"{
            "production": {"productivity_index": "High", "bottomhole_pressure": "High", "gas_liquid_ratio": "High"},
            "economic": {"gas_availability": "Yes", "compression_cost": "Available"}
        }"#,
    )
    .unwrap();

    let err = DecisionEngine::new().evaluate_raw(&raw).unwrap_err();
    assert_eq!(err.field(), "environmental.impact");
}
