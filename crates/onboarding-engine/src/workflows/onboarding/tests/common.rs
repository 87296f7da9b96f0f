use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{Days, NaiveDate};
use serde_json::Value;

use crate::workflows::onboarding::contract::{ContractDraft, TemplateContractDrafter};
use crate::workflows::onboarding::domain::CandidateProfile;
use crate::workflows::onboarding::extraction::{
    CandidateExtractor, ExtractionError, JsonCandidateExtractor,
};
use crate::workflows::onboarding::repository::{DocumentRepository, RepositoryError};
use crate::workflows::onboarding::{
    onboarding_router, ComplianceEngine, ComplianceRules, OnboardingService,
};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date")
}

pub(super) fn days_from_today(days: i64) -> String {
    let date = if days >= 0 {
        today().checked_add_days(Days::new(days as u64))
    } else {
        today().checked_sub_days(Days::new(days.unsigned_abs()))
    };
    date.expect("date in range").format("%Y-%m-%d").to_string()
}

pub(super) fn engine() -> ComplianceEngine {
    ComplianceEngine::new(ComplianceRules::standard())
}

pub(super) fn candidate(citizenship: &str, location: &str) -> CandidateProfile {
    CandidateProfile {
        name: "Jordan Reyes".to_string(),
        role: "Platform Engineer".to_string(),
        citizenship: Some(citizenship.to_string()),
        location_country: location.to_string(),
        ..CandidateProfile::default()
    }
}

pub(super) fn uk_to_uae_candidate() -> CandidateProfile {
    CandidateProfile {
        salary: 4_000.0,
        currency: "AED".to_string(),
        start_date: Some(days_from_today(10)),
        ..candidate("United Kingdom", "United Arab Emirates")
    }
}

pub(super) fn candidate_json(profile: &CandidateProfile) -> String {
    serde_json::to_string(profile).expect("candidate encodes")
}

#[derive(Default, Clone)]
pub(super) struct MemoryDocuments {
    drafts: Arc<Mutex<HashMap<String, ContractDraft>>>,
}

impl MemoryDocuments {
    pub(super) fn len(&self) -> usize {
        self.drafts.lock().expect("documents mutex poisoned").len()
    }
}

impl DocumentRepository for MemoryDocuments {
    fn insert(&self, draft: ContractDraft) -> Result<ContractDraft, RepositoryError> {
        let mut guard = self.drafts.lock().expect("documents mutex poisoned");
        if guard.contains_key(&draft.file_name) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(draft.file_name.clone(), draft.clone());
        Ok(draft)
    }

    fn fetch(&self, file_name: &str) -> Result<Option<ContractDraft>, RepositoryError> {
        let guard = self.drafts.lock().expect("documents mutex poisoned");
        Ok(guard.get(file_name).cloned())
    }
}

pub(super) struct ConflictDocuments;

impl DocumentRepository for ConflictDocuments {
    fn insert(&self, _draft: ContractDraft) -> Result<ContractDraft, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _file_name: &str) -> Result<Option<ContractDraft>, RepositoryError> {
        Ok(None)
    }
}

pub(super) struct UnavailableDocuments;

impl DocumentRepository for UnavailableDocuments {
    fn insert(&self, _draft: ContractDraft) -> Result<ContractDraft, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn fetch(&self, _file_name: &str) -> Result<Option<ContractDraft>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }
}

pub(super) struct OfflineExtractor;

impl CandidateExtractor for OfflineExtractor {
    fn extract(&self, _raw_text: &str) -> Result<CandidateProfile, ExtractionError> {
        Err(ExtractionError::Unavailable("model quota exhausted".to_string()))
    }
}

pub(super) type TestService =
    OnboardingService<JsonCandidateExtractor, TemplateContractDrafter, MemoryDocuments>;

pub(super) fn build_service() -> (TestService, Arc<MemoryDocuments>) {
    let documents = Arc::new(MemoryDocuments::default());
    let service = OnboardingService::new(
        Arc::new(JsonCandidateExtractor),
        Arc::new(TemplateContractDrafter),
        documents.clone(),
        ComplianceRules::standard(),
    );
    (service, documents)
}

pub(super) fn router_with_service(service: TestService) -> axum::Router {
    onboarding_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 payload")
}
