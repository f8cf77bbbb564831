use super::common::*;
use crate::workflows::loans::decision::{
    ConfidenceLevel, DecisionConfig, DecisionConfigError, DecisionEngine, DecisionFactor,
    RULE_BASED_METHOD,
};
use crate::workflows::loans::domain::{LoanPurpose, LoanRequestStatus};
use crate::workflows::loans::risk::RiskFactorKind;

#[test]
fn engine_approves_strong_application_with_capped_probability() {
    let engine = decision_engine();

    let decision = engine.decide(&home_purchase());

    // 35 credit + 25 income + 17 employment + 15 dti + 5 purpose
    assert_eq!(decision.total_score, 97);
    assert_eq!(decision.status, LoanRequestStatus::Approved);
    assert!((decision.approval_probability - 0.95).abs() < 1e-9);
    assert_eq!(decision.confidence, ConfidenceLevel::High);
    assert_eq!(decision.method, RULE_BASED_METHOD);
    assert_eq!(decision.recommendations.len(), 3);
    assert_eq!(decision.components.len(), 5);
}

#[test]
fn engine_rejects_weak_application_with_targeted_recommendations() {
    let engine = decision_engine();

    let decision = engine.decide(&modest_personal_loan());

    assert_eq!(decision.total_score, 44);
    assert_eq!(decision.status, LoanRequestStatus::Rejected);
    assert_eq!(decision.confidence, ConfidenceLevel::Low);
    assert!(decision.recommendations[0].contains("significant improvement"));
    assert!(decision
        .recommendations
        .iter()
        .any(|note| note.contains("rebuild credit")));
    assert!(decision
        .recommendations
        .iter()
        .any(|note| note.contains("two years")));
    assert_eq!(decision.recommendations.len(), 7);
}

#[test]
fn engine_flags_near_misses() {
    let engine = decision_engine();
    let application = input(660, 55_000.0, 2.5, 20_000.0, LoanPurpose::PersonalLoan);

    let decision = engine.decide(&application);

    assert_eq!(decision.total_score, 63);
    assert_eq!(decision.status, LoanRequestStatus::Rejected);
    assert_eq!(
        decision.recommendations.first().map(String::as_str),
        Some("Your application is close to approval.")
    );
    assert_eq!(decision.recommendations.len(), 4);
}

#[test]
fn approvals_below_eighty_percent_suggest_rate_improvement() {
    let engine = decision_engine();
    let application = input(700, 60_000.0, 3.0, 100_000.0, LoanPurpose::Education);

    let decision = engine.decide(&application);

    assert_eq!(decision.total_score, 78);
    assert_eq!(decision.status, LoanRequestStatus::Approved);
    assert_eq!(decision.confidence, ConfidenceLevel::Medium);
    assert_eq!(decision.recommendations.len(), 4);
    assert!(decision.summary().starts_with("approved with 78%"));
}

#[test]
fn missing_income_is_treated_as_unaffordable() {
    let engine = decision_engine();
    let application = input(720, 0.0, 4.0, 10_000.0, LoanPurpose::AutoLoan);

    let decision = engine.decide(&application);

    let dti = decision
        .components
        .iter()
        .find(|component| component.factor == DecisionFactor::Risk(RiskFactorKind::DebtToIncome))
        .expect("dti component present");
    assert_eq!(dti.points, -5);
    assert!(decision
        .recommendations
        .iter()
        .any(|note| note.contains("debt-to-income")));
}

#[test]
fn approval_threshold_is_configurable() {
    let engine = DecisionEngine::new(DecisionConfig {
        approval_threshold: 80,
        ..DecisionConfig::default()
    });
    let application = input(700, 60_000.0, 3.0, 100_000.0, LoanPurpose::Education);

    let decision = engine.decide(&application);

    assert_eq!(decision.status, LoanRequestStatus::Rejected);
    assert_eq!(engine.config().approval_threshold, 80);
}

#[test]
fn low_totals_map_directly_to_probability() {
    let engine = decision_engine();
    let application = input(300, 1.0, 0.0, 900_000.0, LoanPurpose::PersonalOther);

    let decision = engine.decide(&application);

    // 5 credit + 6 income + 2 employment - 5 dti - 1 purpose
    assert_eq!(decision.total_score, 7);
    assert!((decision.approval_probability - 0.07).abs() < 1e-9);
    assert_eq!(decision.confidence, ConfidenceLevel::High);
}

#[test]
fn inverted_probability_bounds_are_rejected_up_front() {
    let config = DecisionConfig {
        probability_floor: 0.9,
        probability_ceiling: 0.1,
        ..DecisionConfig::default()
    };

    let err = DecisionEngine::try_new(config.clone()).expect_err("floor above ceiling");
    assert_eq!(
        err,
        DecisionConfigError::InvertedProbabilityBounds {
            floor: 0.9,
            ceiling: 0.1,
        }
    );

    // an unchecked engine still decides; the ceiling wins
    let decision = DecisionEngine::new(config).decide(&home_purchase());
    assert!((decision.approval_probability - 0.1).abs() < 1e-9);
}

#[test]
fn non_finite_probability_bounds_are_rejected() {
    let config = DecisionConfig {
        probability_floor: f64::NAN,
        ..DecisionConfig::default()
    };

    assert!(matches!(
        DecisionEngine::try_new(config.clone()),
        Err(DecisionConfigError::ProbabilityOutOfRange { .. })
    ));

    let decision = DecisionEngine::new(config).decide(&home_purchase());
    assert!((decision.approval_probability - 0.95).abs() < 1e-9);
}

#[test]
fn default_rubric_settings_validate() {
    assert!(DecisionEngine::try_new(decision_config()).is_ok());
    assert!(DecisionConfig::default()
        .with_approval_threshold(40)
        .validate()
        .is_ok());
}

#[test]
fn near_miss_band_follows_raised_approval_threshold() {
    let config = DecisionConfig::default().with_approval_threshold(90);
    assert_eq!(config.near_miss_threshold, 80);
    let engine = DecisionEngine::try_new(config).expect("valid rubric");
    let application = input(720, 60_000.0, 4.0, 10_000.0, LoanPurpose::AutoLoan);

    let decision = engine.decide(&application);

    // 28 credit + 18 income + 14 employment + 15 dti + 2 purpose
    assert_eq!(decision.total_score, 77);
    assert_eq!(decision.status, LoanRequestStatus::Rejected);
    assert_eq!(
        decision.recommendations.first().map(String::as_str),
        Some("Your application needs significant improvement.")
    );
}
