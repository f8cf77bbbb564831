use super::super::domain::LoanApplicationInput;
use super::{
    debt_to_income_ratio, FactorImpact, FactorRating, RiskAssessment, RiskFactor, RiskFactorKind,
    ASSESSMENT_ANNUAL_RATE,
};

pub fn compute_risk_assessment(input: &LoanApplicationInput) -> RiskAssessment {
    RiskAssessment {
        credit_score: credit_score_factor(input.credit_score),
        income: income_factor(input.income),
        employment: employment_factor(input.employment_years),
        debt_to_income: debt_to_income_factor(input.income, input.amount),
    }
}

fn credit_score_factor(score: u16) -> RiskFactor {
    let rating = match score {
        750.. => FactorRating::Excellent,
        700..=749 => FactorRating::Good,
        650..=699 => FactorRating::Fair,
        _ => FactorRating::Poor,
    };
    let impact = match score {
        700.. => FactorImpact::Positive,
        650..=699 => FactorImpact::Neutral,
        _ => FactorImpact::Negative,
    };

    RiskFactor::new(RiskFactorKind::CreditScore, f64::from(score), rating, impact)
}

fn income_factor(income: f64) -> RiskFactor {
    let rating = if income >= 75_000.0 {
        FactorRating::High
    } else if income >= 50_000.0 {
        FactorRating::Medium
    } else {
        FactorRating::Low
    };
    let impact = if income >= 50_000.0 {
        FactorImpact::Positive
    } else if income >= 30_000.0 {
        FactorImpact::Neutral
    } else {
        FactorImpact::Negative
    };

    RiskFactor::new(RiskFactorKind::Income, income, rating, impact)
}

fn employment_factor(years: f64) -> RiskFactor {
    let rating = if years >= 5.0 {
        FactorRating::Excellent
    } else if years >= 2.0 {
        FactorRating::Good
    } else if years >= 1.0 {
        FactorRating::Fair
    } else {
        FactorRating::Poor
    };
    let impact = if years >= 2.0 {
        FactorImpact::Positive
    } else if years >= 1.0 {
        FactorImpact::Neutral
    } else {
        FactorImpact::Negative
    };

    RiskFactor::new(RiskFactorKind::Employment, years, rating, impact)
}

fn debt_to_income_factor(income: f64, amount: f64) -> RiskFactor {
    let ratio = debt_to_income_ratio(income, amount, ASSESSMENT_ANNUAL_RATE);
    let rating = if ratio <= 0.28 {
        FactorRating::Low
    } else if ratio <= 0.36 {
        FactorRating::Moderate
    } else if ratio <= 0.43 {
        FactorRating::High
    } else {
        FactorRating::VeryHigh
    };
    let impact = if ratio <= 0.36 {
        FactorImpact::Positive
    } else if ratio <= 0.43 {
        FactorImpact::Neutral
    } else {
        FactorImpact::Negative
    };

    RiskFactor::new(RiskFactorKind::DebtToIncome, ratio, rating, impact)
}
