use super::common::*;
use std::sync::Arc;

use crate::workflows::onboarding::compliance::{AlertKind, ComplianceRules};
use crate::workflows::onboarding::contract::{LegalFramework, TemplateContractDrafter};
use crate::workflows::onboarding::domain::{CandidateProfile, RawJobDescription};
use crate::workflows::onboarding::extraction::{sample_candidate, StaticCandidateExtractor};
use crate::workflows::onboarding::repository::RepositoryError;
use crate::workflows::onboarding::{OnboardingService, OnboardingServiceError};

fn request_for(profile: &CandidateProfile) -> RawJobDescription {
    RawJobDescription {
        raw_text: candidate_json(profile),
    }
}

#[test]
fn generate_builds_package_with_alerts_and_contract() {
    let (service, documents) = build_service();

    let package = service
        .generate(request_for(&uk_to_uae_candidate()), today())
        .expect("package builds");

    assert_eq!(package.candidate.name, "Jordan Reyes");
    assert_eq!(package.jurisdiction_detected, "DIFC Employment Law (UAE)");
    assert_eq!(package.alerts.len(), 3);
    assert_eq!(package.compliance_alerts.len(), 3);
    assert_eq!(package.compliance_alerts[0], package.alerts[0].message);
    assert_eq!(package.generated_files.len(), 1);
    assert!(package.generated_files[0].starts_with("Contract_Jordan_Reyes_20261018_"));
    assert_eq!(documents.len(), 1);
    assert!(package.projected_dates.probation_end.is_some());
}

#[test]
fn generate_stores_retrievable_draft() {
    let (service, _) = build_service();

    let package = service
        .generate(request_for(&candidate("Germany", "Berlin")), today())
        .expect("package builds");

    let draft = service
        .document(&package.generated_files[0])
        .expect("draft stored");
    assert_eq!(draft.framework, LegalFramework::GermanCivilCode);
    assert!(draft.body.contains("Jordan Reyes"));
}

#[test]
fn generate_rejects_blank_notes() {
    let (service, documents) = build_service();

    let result = service.generate(
        RawJobDescription {
            raw_text: "   \n".to_string(),
        },
        today(),
    );

    assert!(matches!(result, Err(OnboardingServiceError::EmptyInput)));
    assert_eq!(documents.len(), 0);
}

#[test]
fn mistyped_start_date_keeps_the_extracted_candidate() {
    let (service, _) = build_service();
    let raw_text = serde_json::json!({
        "name": "Priya Natarajan",
        "location_country": "Berlin",
        "citizenship": "India",
        "start_date": 20261201,
        "salary": 30000,
    })
    .to_string();

    let package = service
        .generate(RawJobDescription { raw_text }, today())
        .expect("package builds");

    assert_eq!(package.candidate.name, "Priya Natarajan");
    assert!(package.candidate.start_date.is_none());
    assert_eq!(package.jurisdiction_detected, "German Civil Code (BGB)");
    let kinds: Vec<_> = package.alerts.iter().map(|alert| alert.kind).collect();
    assert_eq!(kinds, vec![AlertKind::WorkflowTrigger, AlertKind::ComplianceRisk]);
    assert!(package.compliance_alerts[0].contains("India citizen hiring in Berlin"));
    assert!(package.projected_dates.is_empty());
}

#[test]
fn engine_exposes_injected_rules() {
    let mut rules = ComplianceRules::standard();
    rules.default_visa_processing_days = 14;
    let service = OnboardingService::new(
        Arc::new(StaticCandidateExtractor::default()),
        Arc::new(TemplateContractDrafter),
        Arc::new(MemoryDocuments::default()),
        rules.clone(),
    );

    assert_eq!(service.engine().rules(), &rules);
}

#[test]
fn generate_falls_back_to_sample_candidate_when_extraction_fails() {
    let documents = Arc::new(MemoryDocuments::default());
    let service = OnboardingService::new(
        Arc::new(OfflineExtractor),
        Arc::new(TemplateContractDrafter),
        documents,
        ComplianceRules::standard(),
    );

    let package = service
        .generate(
            RawJobDescription {
                raw_text: "Hire Alex for DevOps in Dubai".to_string(),
            },
            today(),
        )
        .expect("fallback package builds");

    assert_eq!(package.candidate, sample_candidate());
    assert_eq!(package.jurisdiction_detected, "DIFC Employment Law (UAE)");
    // Sample start date is long past: sponsorship plus a data error.
    assert_eq!(package.alerts.len(), 2);
    assert_eq!(package.alerts[1].kind, AlertKind::DataError);
}

#[test]
fn generate_uses_configured_fallback_for_prose_input() {
    let (service, _) = build_service();
    let service = service.with_fallback(candidate("Germany", "Germany"));

    let package = service
        .generate(
            RawJobDescription {
                raw_text: "Offer for a Berlin engineer".to_string(),
            },
            today(),
        )
        .expect("package builds");

    assert_eq!(package.candidate.location_country, "Germany");
    assert!(package.alerts.is_empty());
    assert_eq!(package.jurisdiction_detected, "German Civil Code (BGB)");
}

#[test]
fn unsupported_location_gets_contractor_agreement() {
    let (service, _) = build_service();

    let package = service
        .generate(request_for(&candidate("Brazil", "Brazil")), today())
        .expect("package builds");

    assert_eq!(
        package.jurisdiction_detected,
        "General International Contractor Agreement"
    );
}

#[test]
fn generate_surfaces_storage_failures() {
    let service = OnboardingService::new(
        Arc::new(StaticCandidateExtractor::default()),
        Arc::new(TemplateContractDrafter),
        Arc::new(UnavailableDocuments),
        ComplianceRules::standard(),
    );

    let result = service.generate(
        RawJobDescription {
            raw_text: "anything".to_string(),
        },
        today(),
    );

    match result {
        Err(OnboardingServiceError::Repository(RepositoryError::Unavailable(reason))) => {
            assert_eq!(reason, "storage offline")
        }
        other => panic!("expected repository failure, got {other:?}"),
    }
}

#[test]
fn missing_document_is_not_found() {
    let (service, _) = build_service();

    match service.document("Contract_Nobody.txt") {
        Err(OnboardingServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn evaluate_delegates_to_engine() {
    let (service, _) = build_service();
    let report = service.evaluate(&uk_to_uae_candidate(), today());
    assert_eq!(report, engine().evaluate_on(&uk_to_uae_candidate(), today()));
}
