//! Onboarding intake: candidate extraction, contract drafting and compliance alerts.

pub mod compliance;
pub mod contract;
pub mod domain;
pub mod extraction;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use compliance::{
    Alert, AlertKind, AlertSeverity, ComplianceEngine, ComplianceReport, ComplianceRules,
    CountryNormalizer, Jurisdiction, ProjectedDates, WageRule,
};
pub use contract::{
    ContractDraft, ContractDrafter, ContractError, DraftRequest, LegalFramework,
    TemplateContractDrafter,
};
pub use domain::{CandidateProfile, JobFamily, OnboardingPackage, RawJobDescription};
pub use extraction::{
    sample_candidate, CandidateExtractor, ExtractionError, JsonCandidateExtractor,
    StaticCandidateExtractor,
};
pub use repository::{DocumentRepository, RepositoryError};
pub use router::onboarding_router;
pub use service::{OnboardingService, OnboardingServiceError};
