use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::decision::LoanDecision;
use super::domain::{LoanApplicationInput, LoanRequestId};
use super::risk::ApprovalEstimate;

/// Stored loan request: the submitted form, the advisory estimate shown at submit time,
/// and the authoritative decision that supersedes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequestRecord {
    pub id: LoanRequestId,
    pub submitted_at: DateTime<Utc>,
    pub input: LoanApplicationInput,
    pub advisory: ApprovalEstimate,
    pub decision: LoanDecision,
}

impl LoanRequestRecord {
    pub fn view(&self) -> LoanRequestView {
        LoanRequestView {
            request_id: self.id.clone(),
            submitted_at: self.submitted_at,
            status: self.decision.status.label(),
            approval_probability: (self.decision.approval_probability * 1000.0).round() / 1000.0,
            confidence_level: self.decision.confidence.label(),
            recommendations: self.decision.recommendations.clone(),
            prediction_method: self.decision.method.clone(),
            advisory_probability: self.advisory.probability,
            input: self.input.clone(),
        }
    }
}

/// Storage abstraction so the service can be exercised in isolation.
pub trait LoanRequestRepository: Send + Sync {
    fn insert(&self, record: LoanRequestRecord) -> Result<LoanRequestRecord, RepositoryError>;
    fn fetch(&self, id: &LoanRequestId) -> Result<Option<LoanRequestRecord>, RepositoryError>;
    /// Most recent submissions first.
    fn list(&self, limit: usize) -> Result<Vec<LoanRequestRecord>, RepositoryError>;
    fn remove(&self, id: &LoanRequestId) -> Result<LoanRequestRecord, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Public representation returned by the loan request endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct LoanRequestView {
    pub request_id: LoanRequestId,
    pub submitted_at: DateTime<Utc>,
    pub status: &'static str,
    pub approval_probability: f64,
    pub confidence_level: &'static str,
    pub recommendations: Vec<String>,
    pub prediction_method: String,
    pub advisory_probability: u8,
    pub input: LoanApplicationInput,
}
