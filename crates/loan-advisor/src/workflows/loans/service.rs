use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::decision::{DecisionConfig, DecisionEngine};
use super::domain::{LoanApplicationInput, LoanRequestId};
use super::intake::{IntakeGuard, IntakeViolation};
use super::repository::{LoanRequestRecord, LoanRequestRepository, RepositoryError};
use super::risk::{RiskPreview, RiskScorer};

/// Service composing intake validation, the decision rubric, and storage.
pub struct LoanRequestService<R> {
    guard: IntakeGuard,
    scorer: RiskScorer,
    engine: Arc<DecisionEngine>,
    repository: Arc<R>,
}

static REQUEST_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_request_id() -> LoanRequestId {
    let id = REQUEST_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    LoanRequestId(format!("loan-{id:06}"))
}

impl<R> LoanRequestService<R>
where
    R: LoanRequestRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: DecisionConfig) -> Self {
        Self {
            guard: IntakeGuard,
            scorer: RiskScorer,
            engine: Arc::new(DecisionEngine::new(config)),
            repository,
        }
    }

    /// Advisory breakdown for an in-progress form. Never fails.
    pub fn preview(&self, input: &LoanApplicationInput) -> RiskPreview {
        let preview = self.scorer.preview(input);
        debug!(
            probability = preview.estimate.probability,
            outlook = ?preview.estimate.outlook,
            "computed risk preview"
        );
        preview
    }

    /// Validate, decide, and store a loan request.
    pub fn submit(
        &self,
        input: LoanApplicationInput,
    ) -> Result<LoanRequestRecord, LoanServiceError> {
        if let Err(violation) = self.guard.validate(&input) {
            warn!(%violation, "loan request rejected at intake");
            return Err(violation.into());
        }

        let advisory = self.scorer.preview(&input).estimate;
        let decision = self.engine.decide(&input);

        let record = LoanRequestRecord {
            id: next_request_id(),
            submitted_at: Utc::now(),
            input,
            advisory,
            decision,
        };

        let stored = self.repository.insert(record)?;
        info!(
            request_id = %stored.id,
            status = stored.decision.status.label(),
            total_score = stored.decision.total_score,
            advisory_probability = stored.advisory.probability,
            method = %stored.decision.method,
            "loan request processed"
        );
        Ok(stored)
    }

    pub fn get(&self, id: &LoanRequestId) -> Result<LoanRequestRecord, LoanServiceError> {
        let record = self.repository.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn list(&self, limit: usize) -> Result<Vec<LoanRequestRecord>, LoanServiceError> {
        Ok(self.repository.list(limit)?)
    }

    pub fn delete(&self, id: &LoanRequestId) -> Result<LoanRequestRecord, LoanServiceError> {
        let removed = self.repository.remove(id)?;
        info!(request_id = %removed.id, "loan request deleted");
        Ok(removed)
    }
}

/// Error raised by the loan request service.
#[derive(Debug, thiserror::Error)]
pub enum LoanServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
