use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use super::contract::ContractDrafter;
use super::domain::{CandidateProfile, RawJobDescription, DATE_FORMAT};
use super::extraction::CandidateExtractor;
use super::repository::{DocumentRepository, RepositoryError};
use super::service::{OnboardingService, OnboardingServiceError};

/// Optional evaluation-date override for the compliance endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct EvaluationParams {
    #[serde(default)]
    pub today: Option<String>,
}

/// Router builder exposing onboarding generation, compliance checks and document retrieval.
pub fn onboarding_router<E, D, R>(service: Arc<OnboardingService<E, D, R>>) -> Router
where
    E: CandidateExtractor + 'static,
    D: ContractDrafter + 'static,
    R: DocumentRepository + 'static,
{
    Router::new()
        .route("/", get(root_handler))
        .route("/generate-onboarding", post(generate_handler::<E, D, R>))
        .route(
            "/api/v1/compliance/evaluate",
            post(evaluate_handler::<E, D, R>),
        )
        .route("/documents/:file_name", get(document_handler::<E, D, R>))
        .with_state(service)
}

pub(crate) async fn root_handler() -> Json<serde_json::Value> {
    Json(json!({ "message": "Onboarding compliance engine is online" }))
}

pub(crate) async fn generate_handler<E, D, R>(
    State(service): State<Arc<OnboardingService<E, D, R>>>,
    Json(request): Json<RawJobDescription>,
) -> Response
where
    E: CandidateExtractor + 'static,
    D: ContractDrafter + 'static,
    R: DocumentRepository + 'static,
{
    let today = Local::now().date_naive();
    match service.generate(request, today) {
        Ok(package) => (StatusCode::OK, Json(package)).into_response(),
        Err(OnboardingServiceError::EmptyInput) => {
            let payload = json!({
                "error": OnboardingServiceError::EmptyInput.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(OnboardingServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "document already exists",
            });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn evaluate_handler<E, D, R>(
    State(service): State<Arc<OnboardingService<E, D, R>>>,
    Query(params): Query<EvaluationParams>,
    Json(candidate): Json<CandidateProfile>,
) -> Response
where
    E: CandidateExtractor + 'static,
    D: ContractDrafter + 'static,
    R: DocumentRepository + 'static,
{
    let today = match params.today.as_deref() {
        Some(raw) => match NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT) {
            Ok(date) => date,
            Err(err) => {
                let payload = json!({
                    "error": format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"),
                });
                return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
            }
        },
        None => Local::now().date_naive(),
    };

    let report = service.evaluate(&candidate, today);
    (StatusCode::OK, Json(report)).into_response()
}

pub(crate) async fn document_handler<E, D, R>(
    State(service): State<Arc<OnboardingService<E, D, R>>>,
    Path(file_name): Path<String>,
) -> Response
where
    E: CandidateExtractor + 'static,
    D: ContractDrafter + 'static,
    R: DocumentRepository + 'static,
{
    match service.document(&file_name) {
        Ok(draft) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            draft.body,
        )
            .into_response(),
        Err(OnboardingServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "file_name": file_name,
                "error": "document not found",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
