use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use onboarding_engine::workflows::onboarding::{ContractDraft, DocumentRepository, RepositoryError};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryDocumentRepository {
    drafts: Arc<Mutex<HashMap<String, ContractDraft>>>,
}

impl DocumentRepository for InMemoryDocumentRepository {
    fn insert(&self, draft: ContractDraft) -> Result<ContractDraft, RepositoryError> {
        let mut guard = self
            .drafts
            .lock()
            .map_err(|_| RepositoryError::Unavailable("document store poisoned".to_string()))?;
        if guard.contains_key(&draft.file_name) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(draft.file_name.clone(), draft.clone());
        Ok(draft)
    }

    fn fetch(&self, file_name: &str) -> Result<Option<ContractDraft>, RepositoryError> {
        let guard = self
            .drafts
            .lock()
            .map_err(|_| RepositoryError::Unavailable("document store poisoned".to_string()))?;
        Ok(guard.get(file_name).cloned())
    }
}

impl InMemoryDocumentRepository {
    pub(crate) fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .drafts
            .lock()
            .map(|guard| guard.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
