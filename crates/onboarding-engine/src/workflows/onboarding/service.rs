use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use super::compliance::{ComplianceEngine, ComplianceReport, ComplianceRules};
use super::contract::{
    contract_file_name, ContractDraft, ContractDrafter, ContractError, DraftRequest,
    LegalFramework,
};
use super::domain::{CandidateProfile, OnboardingPackage, RawJobDescription};
use super::extraction::{sample_candidate, CandidateExtractor};
use super::repository::{DocumentRepository, RepositoryError};

/// Service composing extraction, contract drafting, storage and compliance checks.
pub struct OnboardingService<E, D, R> {
    extractor: Arc<E>,
    drafter: Arc<D>,
    documents: Arc<R>,
    engine: Arc<ComplianceEngine>,
    fallback: CandidateProfile,
}

static DOCUMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_document_sequence() -> u64 {
    DOCUMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed)
}

impl<E, D, R> OnboardingService<E, D, R>
where
    E: CandidateExtractor + 'static,
    D: ContractDrafter + 'static,
    R: DocumentRepository + 'static,
{
    pub fn new(extractor: Arc<E>, drafter: Arc<D>, documents: Arc<R>, rules: ComplianceRules) -> Self {
        Self::with_engine(extractor, drafter, documents, ComplianceEngine::new(rules))
    }

    pub fn with_engine(
        extractor: Arc<E>,
        drafter: Arc<D>,
        documents: Arc<R>,
        engine: ComplianceEngine,
    ) -> Self {
        Self {
            extractor,
            drafter,
            documents,
            engine: Arc::new(engine),
            fallback: sample_candidate(),
        }
    }

    /// Replace the profile used when extraction fails.
    pub fn with_fallback(mut self, fallback: CandidateProfile) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn engine(&self) -> &ComplianceEngine {
        &self.engine
    }

    /// Extract, draft, store and evaluate a single hiring request.
    pub fn generate(
        &self,
        request: RawJobDescription,
        today: NaiveDate,
    ) -> Result<OnboardingPackage, OnboardingServiceError> {
        let raw_text = request.raw_text.trim();
        if raw_text.is_empty() {
            return Err(OnboardingServiceError::EmptyInput);
        }

        let preview: String = raw_text.chars().take(50).collect();
        info!(%preview, "received onboarding request");

        let candidate = match self.extractor.extract(raw_text) {
            Ok(candidate) => candidate,
            Err(err) => {
                warn!(error = %err, "candidate extraction failed, using fallback profile");
                self.fallback.clone()
            }
        };
        info!(
            candidate = %candidate.name,
            location = %candidate.location_country,
            "candidate extracted"
        );

        let jurisdiction = self
            .engine
            .jurisdiction_for(Some(candidate.location_country.as_str()));
        let framework = LegalFramework::for_jurisdiction(&jurisdiction);

        let file_name = contract_file_name(&candidate.name, today, next_document_sequence());
        let draft = self.drafter.draft(DraftRequest {
            file_name,
            candidate: &candidate,
            framework,
            issued_on: today,
        })?;
        let stored = self.documents.insert(draft)?;

        let report = self.engine.evaluate_on(&candidate, today);
        info!(
            alerts = report.alerts.len(),
            framework = framework.label(),
            "compliance checks complete"
        );

        Ok(OnboardingPackage {
            compliance_alerts: report.messages(),
            alerts: report.alerts,
            projected_dates: report.projected_dates,
            generated_files: vec![stored.file_name],
            jurisdiction_detected: framework.label().to_string(),
            candidate,
        })
    }

    /// Run compliance checks on an already structured candidate.
    pub fn evaluate(&self, candidate: &CandidateProfile, today: NaiveDate) -> ComplianceReport {
        self.engine.evaluate_on(candidate, today)
    }

    /// Fetch a previously generated draft.
    pub fn document(&self, file_name: &str) -> Result<ContractDraft, OnboardingServiceError> {
        let draft = self
            .documents
            .fetch(file_name)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(draft)
    }
}

/// Error raised by the onboarding service.
#[derive(Debug, thiserror::Error)]
pub enum OnboardingServiceError {
    #[error("raw_text must not be empty")]
    EmptyInput,
    #[error(transparent)]
    Contract(#[from] ContractError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
