use serde::{Deserialize, Serialize};

use super::super::domain::{LoanApplicationInput, LoanRequestStatus};
use super::config::DecisionConfig;

/// How far the decision probability sits from a coin flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub const fn label(self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::Low => "Low",
        }
    }
}

pub(crate) fn confidence_for(probability: f64) -> ConfidenceLevel {
    let distance = (probability - 0.5).abs();
    if distance > 0.3 {
        ConfidenceLevel::High
    } else if distance > 0.15 {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

pub(crate) fn recommendations_for(
    input: &LoanApplicationInput,
    config: &DecisionConfig,
    status: LoanRequestStatus,
    total_score: i16,
    approval_probability: f64,
    debt_to_income: f64,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if status == LoanRequestStatus::Approved {
        recommendations.push("Your application meets the approval criteria.".to_string());
        recommendations
            .push("Gather pay stubs, tax returns, and recent bank statements.".to_string());
        recommendations.push("Compare loan terms and interest rates before signing.".to_string());
        if approval_probability < 0.8 {
            recommendations
                .push("A higher credit score could qualify you for better rates.".to_string());
        }
        return recommendations;
    }

    if total_score >= config.near_miss_threshold {
        recommendations.push("Your application is close to approval.".to_string());
        recommendations.push(format!(
            "Raise your credit score toward 700 (currently {}).",
            input.credit_score
        ));
        recommendations.push("Adding a co-applicant would strengthen the request.".to_string());
        recommendations.push("Requesting a smaller amount improves the outlook.".to_string());
    } else {
        recommendations.push("Your application needs significant improvement.".to_string());
        recommendations.push(format!(
            "Substantially improve your credit score (currently {}).",
            input.credit_score
        ));
        recommendations.push("Increase income or reduce existing debt.".to_string());
        recommendations.push("Build a longer employment history.".to_string());
    }

    if input.credit_score < 650 {
        recommendations.push(
            "Pay bills on time and lower credit utilization to rebuild credit.".to_string(),
        );
    }
    if input.income < 50_000.0 {
        recommendations.push("Additional income sources would help qualification.".to_string());
    }
    if input.employment_years < 2.0 {
        recommendations.push("Lenders prefer at least two years with an employer.".to_string());
    }
    if debt_to_income > 0.36 {
        recommendations.push(
            "Lower the requested amount or raise income to reduce debt-to-income.".to_string(),
        );
    }

    recommendations
}
