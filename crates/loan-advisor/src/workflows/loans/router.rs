use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{LoanApplicationInput, LoanRequestId};
use super::repository::{LoanRequestRepository, LoanRequestView, RepositoryError};
use super::service::{LoanRequestService, LoanServiceError};

const DEFAULT_LIST_LIMIT: usize = 50;

/// Router builder exposing the preview scorer and loan request endpoints.
pub fn loan_router<R>(service: Arc<LoanRequestService<R>>) -> Router
where
    R: LoanRequestRepository + 'static,
{
    Router::new()
        .route("/api/v1/loans/risk-preview", post(preview_handler::<R>))
        .route(
            "/api/v1/loans/requests",
            post(submit_handler::<R>).get(list_handler::<R>),
        )
        .route(
            "/api/v1/loans/requests/:request_id",
            get(detail_handler::<R>).delete(delete_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListParams {
    pub(crate) limit: Option<usize>,
}

pub(crate) async fn preview_handler<R>(
    State(service): State<Arc<LoanRequestService<R>>>,
    Json(input): Json<LoanApplicationInput>,
) -> Response
where
    R: LoanRequestRepository + 'static,
{
    let preview = service.preview(&input);
    (StatusCode::OK, Json(preview)).into_response()
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<LoanRequestService<R>>>,
    Json(input): Json<LoanApplicationInput>,
) -> Response
where
    R: LoanRequestRepository + 'static,
{
    match service.submit(input) {
        Ok(record) => (StatusCode::CREATED, Json(record.view())).into_response(),
        Err(LoanServiceError::Intake(violation)) => {
            let payload = json!({ "error": violation.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(LoanServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({ "error": "loan request already exists" });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<LoanRequestService<R>>>,
    Query(params): Query<ListParams>,
) -> Response
where
    R: LoanRequestRepository + 'static,
{
    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    match service.list(limit) {
        Ok(records) => {
            let views: Vec<LoanRequestView> = records.iter().map(|record| record.view()).collect();
            (StatusCode::OK, Json(views)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn detail_handler<R>(
    State(service): State<Arc<LoanRequestService<R>>>,
    Path(request_id): Path<String>,
) -> Response
where
    R: LoanRequestRepository + 'static,
{
    let id = LoanRequestId(request_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, Json(record.view())).into_response(),
        Err(LoanServiceError::Repository(RepositoryError::NotFound)) => not_found(&id),
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn delete_handler<R>(
    State(service): State<Arc<LoanRequestService<R>>>,
    Path(request_id): Path<String>,
) -> Response
where
    R: LoanRequestRepository + 'static,
{
    let id = LoanRequestId(request_id);
    match service.delete(&id) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(LoanServiceError::Repository(RepositoryError::NotFound)) => not_found(&id),
        Err(other) => internal_error(other),
    }
}

fn not_found(id: &LoanRequestId) -> Response {
    let payload = json!({
        "request_id": id.0,
        "error": "loan request not found",
    });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}

fn internal_error(error: LoanServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}
