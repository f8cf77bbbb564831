use loan_advisor::workflows::loans::{
    LoanRequestId, LoanRequestRecord, LoanRequestRepository, RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local store for submitted loan requests.
#[derive(Default, Clone)]
pub(crate) struct InMemoryLoanRequestRepository {
    records: Arc<Mutex<HashMap<LoanRequestId, LoanRequestRecord>>>,
}

impl InMemoryLoanRequestRepository {
    fn records(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<LoanRequestId, LoanRequestRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
    }
}

impl LoanRequestRepository for InMemoryLoanRequestRepository {
    fn insert(&self, record: LoanRequestRecord) -> Result<LoanRequestRecord, RepositoryError> {
        let mut guard = self.records()?;
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &LoanRequestId) -> Result<Option<LoanRequestRecord>, RepositoryError> {
        Ok(self.records()?.get(id).cloned())
    }

    fn list(&self, limit: usize) -> Result<Vec<LoanRequestRecord>, RepositoryError> {
        let guard = self.records()?;
        let mut records: Vec<LoanRequestRecord> = guard.values().cloned().collect();
        records.sort_by(|a, b| {
            b.submitted_at
                .cmp(&a.submitted_at)
                .then_with(|| b.id.sequence().cmp(&a.id.sequence()))
                .then_with(|| b.id.cmp(&a.id))
        });
        records.truncate(limit);
        Ok(records)
    }

    fn remove(&self, id: &LoanRequestId) -> Result<LoanRequestRecord, RepositoryError> {
        self.records()?.remove(id).ok_or(RepositoryError::NotFound)
    }
}
