use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::loans::domain::{LoanApplicationInput, LoanPurpose, LoanRequestId};
use crate::workflows::loans::repository::{
    LoanRequestRecord, LoanRequestRepository, RepositoryError,
};
use crate::workflows::loans::{loan_router, DecisionConfig, DecisionEngine, LoanRequestService};

pub(super) fn input(
    credit_score: u16,
    income: f64,
    employment_years: f64,
    amount: f64,
    purpose: LoanPurpose,
) -> LoanApplicationInput {
    LoanApplicationInput {
        credit_score,
        income,
        employment_years,
        amount,
        purpose,
    }
}

pub(super) fn home_purchase() -> LoanApplicationInput {
    input(780, 120_000.0, 6.0, 200_000.0, LoanPurpose::HomePurchase)
}

pub(super) fn modest_personal_loan() -> LoanApplicationInput {
    input(640, 42_000.0, 1.5, 15_000.0, LoanPurpose::PersonalOther)
}

pub(super) fn decision_config() -> DecisionConfig {
    DecisionConfig::default()
}

pub(super) fn decision_engine() -> DecisionEngine {
    DecisionEngine::new(decision_config())
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<BTreeMap<LoanRequestId, LoanRequestRecord>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl LoanRequestRepository for MemoryRepository {
    fn insert(&self, record: LoanRequestRecord) -> Result<LoanRequestRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &LoanRequestId) -> Result<Option<LoanRequestRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self, limit: usize) -> Result<Vec<LoanRequestRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<LoanRequestRecord> = guard.values().cloned().collect();
        records.sort_by(|a, b| {
            b.submitted_at
                .cmp(&a.submitted_at)
                .then_with(|| b.id.sequence().cmp(&a.id.sequence()))
        });
        records.truncate(limit);
        Ok(records)
    }

    fn remove(&self, id: &LoanRequestId) -> Result<LoanRequestRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.remove(id).ok_or(RepositoryError::NotFound)
    }
}

pub(super) struct ConflictRepository;

impl LoanRequestRepository for ConflictRepository {
    fn insert(&self, _record: LoanRequestRecord) -> Result<LoanRequestRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &LoanRequestId) -> Result<Option<LoanRequestRecord>, RepositoryError> {
        Ok(None)
    }

    fn list(&self, _limit: usize) -> Result<Vec<LoanRequestRecord>, RepositoryError> {
        Ok(Vec::new())
    }

    fn remove(&self, _id: &LoanRequestId) -> Result<LoanRequestRecord, RepositoryError> {
        Err(RepositoryError::NotFound)
    }
}

pub(super) struct UnavailableRepository;

impl LoanRequestRepository for UnavailableRepository {
    fn insert(&self, _record: LoanRequestRecord) -> Result<LoanRequestRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &LoanRequestId) -> Result<Option<LoanRequestRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self, _limit: usize) -> Result<Vec<LoanRequestRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn remove(&self, _id: &LoanRequestId) -> Result<LoanRequestRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (LoanRequestService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = LoanRequestService::new(repository.clone(), decision_config());
    (service, repository)
}

pub(super) fn router_with_service(service: LoanRequestService<MemoryRepository>) -> axum::Router {
    loan_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
