use std::ops::RangeInclusive;

use super::domain::LoanApplicationInput;

pub const CREDIT_SCORE_RANGE: RangeInclusive<u16> = 300..=850;

/// Validation errors raised before a request is decided.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("loan amount must be greater than 0")]
    NonPositiveAmount,
    #[error("income must be greater than 0")]
    NonPositiveIncome,
    #[error("credit score must be between 300 and 850 (found {found})")]
    CreditScoreOutOfRange { found: u16 },
    #[error("employment years cannot be negative")]
    NegativeEmployment,
    #[error("loan purpose is required")]
    MissingPurpose,
}

/// Guard applied to submissions; previews skip it because scoring is total.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn validate(&self, input: &LoanApplicationInput) -> Result<(), IntakeViolation> {
        if !input.amount.is_finite() || input.amount <= 0.0 {
            return Err(IntakeViolation::NonPositiveAmount);
        }

        if !input.income.is_finite() || input.income <= 0.0 {
            return Err(IntakeViolation::NonPositiveIncome);
        }

        if !CREDIT_SCORE_RANGE.contains(&input.credit_score) {
            return Err(IntakeViolation::CreditScoreOutOfRange {
                found: input.credit_score,
            });
        }

        if !input.employment_years.is_finite() || input.employment_years < 0.0 {
            return Err(IntakeViolation::NegativeEmployment);
        }

        if !input.purpose.is_specified() || input.purpose.label().trim().is_empty() {
            return Err(IntakeViolation::MissingPurpose);
        }

        Ok(())
    }
}
