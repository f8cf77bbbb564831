//! Loan application scoring and request handling.
//!
//! `risk` is the advisory scorer recomputed for every form snapshot. Submitted requests
//! pass the intake guard, receive an authoritative decision from the rubric in
//! `decision`, and are stored through a [`LoanRequestRepository`].

pub mod decision;
pub mod domain;
pub mod intake;
pub mod repository;
pub mod risk;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use decision::{
    ConfidenceLevel, DecisionConfig, DecisionConfigError, DecisionEngine, DecisionFactor,
    LoanDecision, ScoreComponent,
};
pub use domain::{LoanApplicationInput, LoanPurpose, LoanRequestId, LoanRequestStatus};
pub use intake::{IntakeGuard, IntakeViolation};
pub use repository::{LoanRequestRecord, LoanRequestRepository, LoanRequestView, RepositoryError};
pub use risk::{
    compute_approval_probability, compute_risk_assessment, estimate_approval, ApprovalEstimate,
    ApprovalOutlook, FactorImpact, FactorRating, RiskAssessment, RiskFactor, RiskFactorKind,
    RiskPreview, RiskScorer,
};
pub use router::loan_router;
pub use service::{LoanRequestService, LoanServiceError};
