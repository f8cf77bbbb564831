use super::common::*;
use crate::workflows::loans::domain::LoanPurpose;
use crate::workflows::loans::intake::{IntakeGuard, IntakeViolation};

#[test]
fn complete_application_passes() {
    assert_eq!(IntakeGuard.validate(&home_purchase()), Ok(()));
}

#[test]
fn rejects_missing_amount_and_income() {
    let guard = IntakeGuard;

    let mut application = home_purchase();
    application.amount = 0.0;
    assert_eq!(
        guard.validate(&application),
        Err(IntakeViolation::NonPositiveAmount)
    );

    let mut application = home_purchase();
    application.income = -1.0;
    assert_eq!(
        guard.validate(&application),
        Err(IntakeViolation::NonPositiveIncome)
    );
}

#[test]
fn rejects_credit_scores_outside_reporting_range() {
    let guard = IntakeGuard;

    for score in [0, 299, 851] {
        let mut application = home_purchase();
        application.credit_score = score;
        assert_eq!(
            guard.validate(&application),
            Err(IntakeViolation::CreditScoreOutOfRange { found: score })
        );
    }

    let mut application = home_purchase();
    application.credit_score = 850;
    assert!(guard.validate(&application).is_ok());
}

#[test]
fn rejects_negative_employment_and_missing_purpose() {
    let guard = IntakeGuard;

    let mut application = home_purchase();
    application.employment_years = -0.5;
    assert_eq!(
        guard.validate(&application),
        Err(IntakeViolation::NegativeEmployment)
    );

    let mut application = home_purchase();
    application.purpose = LoanPurpose::Unspecified;
    assert_eq!(
        guard.validate(&application),
        Err(IntakeViolation::MissingPurpose)
    );
}

#[test]
fn unlisted_purposes_are_accepted() {
    let mut application = home_purchase();
    application.purpose = LoanPurpose::from("Wedding");
    assert!(IntakeGuard.validate(&application).is_ok());
}
