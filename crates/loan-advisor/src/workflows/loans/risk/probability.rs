use super::super::domain::{LoanApplicationInput, LoanPurpose};
use super::{
    debt_to_income_ratio, ApprovalEstimate, ApprovalOutlook, MAX_APPROVAL_PROBABILITY,
    MIN_APPROVAL_PROBABILITY, PROBABILITY_ANNUAL_RATE,
};

/// Additive point model estimating approval likelihood as a whole percentage.
///
/// Returns 0 until both a credit score and an income are known; otherwise the sum of
/// the band points is clamped to [`MIN_APPROVAL_PROBABILITY`]..=[`MAX_APPROVAL_PROBABILITY`].
pub fn compute_approval_probability(input: &LoanApplicationInput) -> u8 {
    if input.credit_score == 0 || input.income == 0.0 || input.income.is_nan() {
        return 0;
    }

    let points = credit_points(input.credit_score)
        + income_to_loan_points(input.income, input.amount)
        + employment_points(input.employment_years)
        + debt_to_income_points(input.income, input.amount)
        + amount_penalty(input.amount)
        + purpose_points(&input.purpose);

    points.clamp(
        i32::from(MIN_APPROVAL_PROBABILITY),
        i32::from(MAX_APPROVAL_PROBABILITY),
    ) as u8
}

pub fn estimate_approval(input: &LoanApplicationInput) -> ApprovalEstimate {
    let probability = compute_approval_probability(input);
    ApprovalEstimate {
        probability,
        outlook: ApprovalOutlook::from_probability(probability),
    }
}

fn credit_points(score: u16) -> i32 {
    match score {
        750.. => 25,
        700..=749 => 20,
        650..=699 => 15,
        600..=649 => 10,
        _ => 5,
    }
}

fn income_to_loan_points(income: f64, amount: f64) -> i32 {
    if !amount.is_finite() {
        return 0;
    }
    // amounts below one currency unit divide by 1
    let ratio = income / amount.max(1.0);
    if ratio >= 3.0 {
        20
    } else if ratio >= 2.0 {
        15
    } else if ratio >= 1.5 {
        10
    } else if ratio >= 1.0 {
        5
    } else {
        0
    }
}

fn employment_points(years: f64) -> i32 {
    if years >= 5.0 {
        15
    } else if years >= 3.0 {
        10
    } else if years >= 2.0 {
        7
    } else if years >= 1.0 {
        3
    } else {
        0
    }
}

fn debt_to_income_points(income: f64, amount: f64) -> i32 {
    let ratio = debt_to_income_ratio(income, amount, PROBABILITY_ANNUAL_RATE);
    if ratio <= 0.28 {
        10
    } else if ratio <= 0.36 {
        5
    } else if ratio <= 0.43 {
        -5
    } else {
        -15
    }
}

fn amount_penalty(amount: f64) -> i32 {
    if amount > 100_000.0 {
        -10
    } else if amount > 50_000.0 {
        -5
    } else {
        0
    }
}

fn purpose_points(purpose: &LoanPurpose) -> i32 {
    match purpose {
        LoanPurpose::HomePurchase | LoanPurpose::HomeRefinance => 5,
        LoanPurpose::Education => 3,
        LoanPurpose::PersonalOther => -5,
        _ => 0,
    }
}
