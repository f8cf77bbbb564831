//! Advisory risk scoring shown to applicants while they fill in the loan form.
//!
//! Everything here is a pure function of [`LoanApplicationInput`]: no state, no I/O, and
//! no error paths. The authoritative decision is made by the decision engine once a
//! request is submitted.

mod assessment;
mod probability;

pub use assessment::compute_risk_assessment;
pub use probability::{compute_approval_probability, estimate_approval};

use serde::{Deserialize, Serialize};

use super::domain::LoanApplicationInput;

/// Annual rate assumed by the risk breakdown's debt-to-income estimate.
pub const ASSESSMENT_ANNUAL_RATE: f64 = 0.05;
/// Annual rate assumed by the approval probability's debt-to-income estimate.
///
/// Differs from [`ASSESSMENT_ANNUAL_RATE`]; both values are kept as published.
pub const PROBABILITY_ANNUAL_RATE: f64 = 0.06;

pub const MIN_APPROVAL_PROBABILITY: u8 = 5;
pub const MAX_APPROVAL_PROBABILITY: u8 = 85;

/// Estimated monthly payment divided by monthly income, or 0 without income.
pub fn debt_to_income_ratio(income: f64, amount: f64, annual_rate: f64) -> f64 {
    let monthly_income = income / 12.0;
    let estimated_monthly_payment = amount * annual_rate / 12.0;
    if monthly_income > 0.0 {
        estimated_monthly_payment / monthly_income
    } else {
        0.0
    }
}

/// Dimension of the advisory breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskFactorKind {
    CreditScore,
    Income,
    Employment,
    DebtToIncome,
}

impl RiskFactorKind {
    /// Display weight. Informational only; the probability model does not use it.
    pub const fn weight(self) -> u8 {
        match self {
            RiskFactorKind::CreditScore => 40,
            RiskFactorKind::Income => 30,
            RiskFactorKind::Employment => 20,
            RiskFactorKind::DebtToIncome => 10,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskFactorKind::CreditScore => "Credit Score",
            RiskFactorKind::Income => "Income",
            RiskFactorKind::Employment => "Employment",
            RiskFactorKind::DebtToIncome => "Debt-to-Income",
        }
    }
}

/// Categorical rating attached to a factor.
///
/// Credit score and employment use Excellent..Poor, income uses High..Low, and
/// debt-to-income uses Low..VeryHigh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FactorRating {
    Excellent,
    Good,
    Fair,
    Poor,
    High,
    Medium,
    Low,
    Moderate,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl FactorRating {
    pub const fn label(self) -> &'static str {
        match self {
            FactorRating::Excellent => "Excellent",
            FactorRating::Good => "Good",
            FactorRating::Fair => "Fair",
            FactorRating::Poor => "Poor",
            FactorRating::High => "High",
            FactorRating::Medium => "Medium",
            FactorRating::Low => "Low",
            FactorRating::Moderate => "Moderate",
            FactorRating::VeryHigh => "Very High",
        }
    }
}

/// Direction a factor pushes the outlook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FactorImpact {
    Negative,
    Neutral,
    Positive,
}

impl FactorImpact {
    pub const fn label(self) -> &'static str {
        match self {
            FactorImpact::Positive => "Positive",
            FactorImpact::Neutral => "Neutral",
            FactorImpact::Negative => "Negative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub kind: RiskFactorKind,
    pub value: f64,
    pub rating: FactorRating,
    pub impact: FactorImpact,
    pub weight: u8,
}

impl RiskFactor {
    pub(crate) fn new(
        kind: RiskFactorKind,
        value: f64,
        rating: FactorRating,
        impact: FactorImpact,
    ) -> Self {
        Self {
            kind,
            value,
            rating,
            impact,
            weight: kind.weight(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub credit_score: RiskFactor,
    pub income: RiskFactor,
    pub employment: RiskFactor,
    pub debt_to_income: RiskFactor,
}

impl RiskAssessment {
    pub fn factors(&self) -> [&RiskFactor; 4] {
        [
            &self.credit_score,
            &self.income,
            &self.employment,
            &self.debt_to_income,
        ]
    }

    /// Factors whose inputs have been filled in, matching how the form reveals them.
    pub fn reported_factors(&self, input: &LoanApplicationInput) -> Vec<&RiskFactor> {
        self.factors()
            .into_iter()
            .filter(|factor| match factor.kind {
                RiskFactorKind::CreditScore => input.credit_score > 0,
                RiskFactorKind::Income => input.income > 0.0,
                RiskFactorKind::Employment => input.employment_years > 0.0,
                RiskFactorKind::DebtToIncome => input.income > 0.0 && input.amount > 0.0,
            })
            .collect()
    }
}

/// Coarse label attached to the approval percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalOutlook {
    Strong,
    Moderate,
    Weak,
    Unknown,
}

impl ApprovalOutlook {
    pub const fn from_probability(probability: u8) -> Self {
        match probability {
            0 => ApprovalOutlook::Unknown,
            1..=49 => ApprovalOutlook::Weak,
            50..=69 => ApprovalOutlook::Moderate,
            _ => ApprovalOutlook::Strong,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ApprovalOutlook::Strong => "Strong",
            ApprovalOutlook::Moderate => "Moderate",
            ApprovalOutlook::Weak => "Weak",
            ApprovalOutlook::Unknown => "Not enough information",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalEstimate {
    pub probability: u8,
    pub outlook: ApprovalOutlook,
}

/// Breakdown and estimate returned together for a form snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskPreview {
    pub assessment: RiskAssessment,
    pub estimate: ApprovalEstimate,
}

/// Stateless entry point bundling the scoring functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScorer;

impl RiskScorer {
    pub fn assess(&self, input: &LoanApplicationInput) -> RiskAssessment {
        compute_risk_assessment(input)
    }

    pub fn approval_probability(&self, input: &LoanApplicationInput) -> u8 {
        compute_approval_probability(input)
    }

    pub fn preview(&self, input: &LoanApplicationInput) -> RiskPreview {
        RiskPreview {
            assessment: compute_risk_assessment(input),
            estimate: estimate_approval(input),
        }
    }
}
