use super::super::domain::{LoanApplicationInput, LoanPurpose};
use super::super::risk::RiskFactorKind;
use super::config::DecisionConfig;
use super::{DecisionFactor, ScoreComponent};

pub(crate) struct ScoredApplication {
    pub components: Vec<ScoreComponent>,
    pub total_score: i16,
    pub debt_to_income: f64,
}

pub(crate) fn score_application(
    input: &LoanApplicationInput,
    config: &DecisionConfig,
) -> ScoredApplication {
    let mut components = Vec::with_capacity(5);

    let credit_score = input.credit_score;
    let credit_points = match credit_score {
        750.. => 35,
        700..=749 => 28,
        650..=699 => 20,
        600..=649 => 12,
        _ => 5,
    };
    components.push(ScoreComponent {
        factor: DecisionFactor::Risk(RiskFactorKind::CreditScore),
        points: credit_points,
        notes: format!("credit score {credit_score}"),
    });

    let income = input.income;
    let income_points = if income >= 100_000.0 {
        25
    } else if income >= 75_000.0 {
        22
    } else if income >= 50_000.0 {
        18
    } else if income >= 30_000.0 {
        12
    } else {
        6
    };
    components.push(ScoreComponent {
        factor: DecisionFactor::Risk(RiskFactorKind::Income),
        points: income_points,
        notes: format!("annual income {income:.0}"),
    });

    let years = input.employment_years;
    let employment_points = if years >= 10.0 {
        20
    } else if years >= 5.0 {
        17
    } else if years >= 3.0 {
        14
    } else if years >= 2.0 {
        10
    } else if years >= 1.0 {
        6
    } else {
        2
    };
    components.push(ScoreComponent {
        factor: DecisionFactor::Risk(RiskFactorKind::Employment),
        points: employment_points,
        notes: format!("{years:.1} year(s) of employment"),
    });

    // no income means the payment cannot be covered at all
    let monthly_income = income / 12.0;
    let estimated_payment = input.amount * config.assumed_annual_rate / 12.0;
    let debt_to_income = if monthly_income > 0.0 {
        estimated_payment / monthly_income
    } else {
        1.0
    };
    let dti_points = if debt_to_income <= 0.20 {
        15
    } else if debt_to_income <= 0.28 {
        12
    } else if debt_to_income <= 0.36 {
        8
    } else if debt_to_income <= 0.43 {
        4
    } else {
        -5
    };
    components.push(ScoreComponent {
        factor: DecisionFactor::Risk(RiskFactorKind::DebtToIncome),
        points: dti_points,
        notes: format!(
            "estimated debt-to-income {:.2} at {:.1}% annual rate",
            debt_to_income,
            config.assumed_annual_rate * 100.0
        ),
    });

    let purpose_points = match &input.purpose {
        LoanPurpose::HomePurchase => 5,
        LoanPurpose::HomeRefinance => 4,
        LoanPurpose::Education => 3,
        LoanPurpose::AutoLoan => 2,
        LoanPurpose::BusinessLoan | LoanPurpose::DebtConsolidation => 1,
        LoanPurpose::PersonalOther => -1,
        LoanPurpose::PersonalLoan | LoanPurpose::Other(_) | LoanPurpose::Unspecified => 0,
    };
    components.push(ScoreComponent {
        factor: DecisionFactor::Purpose,
        points: purpose_points,
        notes: format!("purpose '{}'", input.purpose),
    });

    let total_score = components.iter().map(|component| component.points).sum();

    ScoredApplication {
        components,
        total_score,
        debt_to_income,
    }
}
