use std::fmt;

use serde::{Deserialize, Serialize};

/// Applicant-entered loan form values.
///
/// Every field falls back to zero (or [`LoanPurpose::Unspecified`]) when it is
/// missing from a payload, so partially filled forms can still be scored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanApplicationInput {
    pub credit_score: u16,
    /// Annual income in currency units.
    pub income: f64,
    pub employment_years: f64,
    /// Requested principal.
    pub amount: f64,
    pub purpose: LoanPurpose,
}

/// Loan purpose categories offered on the application form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LoanPurpose {
    HomePurchase,
    HomeRefinance,
    Education,
    AutoLoan,
    BusinessLoan,
    DebtConsolidation,
    PersonalLoan,
    PersonalOther,
    Other(String),
    #[default]
    Unspecified,
}

impl LoanPurpose {
    pub fn label(&self) -> &str {
        match self {
            LoanPurpose::HomePurchase => "Home Purchase",
            LoanPurpose::HomeRefinance => "Home Refinance",
            LoanPurpose::Education => "Education",
            LoanPurpose::AutoLoan => "Auto Loan",
            LoanPurpose::BusinessLoan => "Business Loan",
            LoanPurpose::DebtConsolidation => "Debt Consolidation",
            LoanPurpose::PersonalLoan => "Personal Loan",
            LoanPurpose::PersonalOther => "Personal/Other",
            LoanPurpose::Other(label) => label,
            LoanPurpose::Unspecified => "",
        }
    }

    pub fn is_specified(&self) -> bool {
        !matches!(self, LoanPurpose::Unspecified)
    }
}

impl From<&str> for LoanPurpose {
    fn from(value: &str) -> Self {
        match value.trim() {
            "" => LoanPurpose::Unspecified,
            "Home Purchase" => LoanPurpose::HomePurchase,
            "Home Refinance" => LoanPurpose::HomeRefinance,
            "Education" => LoanPurpose::Education,
            "Auto Loan" => LoanPurpose::AutoLoan,
            "Business Loan" => LoanPurpose::BusinessLoan,
            "Debt Consolidation" => LoanPurpose::DebtConsolidation,
            "Personal Loan" => LoanPurpose::PersonalLoan,
            "Personal/Other" => LoanPurpose::PersonalOther,
            other => LoanPurpose::Other(other.to_string()),
        }
    }
}

impl From<String> for LoanPurpose {
    fn from(value: String) -> Self {
        LoanPurpose::from(value.as_str())
    }
}

impl From<LoanPurpose> for String {
    fn from(value: LoanPurpose) -> Self {
        match value {
            LoanPurpose::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for LoanPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Server-assigned identifier for a submitted loan request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LoanRequestId(pub String);

impl LoanRequestId {
    /// Numeric part of a server-assigned `loan-NNNNNN` id.
    pub fn sequence(&self) -> Option<u64> {
        self.0.strip_prefix("loan-")?.parse().ok()
    }
}

impl fmt::Display for LoanRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of the authoritative decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanRequestStatus {
    Approved,
    Rejected,
}

impl LoanRequestStatus {
    pub const fn label(self) -> &'static str {
        match self {
            LoanRequestStatus::Approved => "approved",
            LoanRequestStatus::Rejected => "rejected",
        }
    }
}
