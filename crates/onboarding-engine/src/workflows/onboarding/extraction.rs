use super::domain::{CandidateProfile, JobFamily};

/// Turns raw hiring notes into a structured candidate profile.
pub trait CandidateExtractor: Send + Sync {
    fn extract(&self, raw_text: &str) -> Result<CandidateProfile, ExtractionError>;
}

/// Extraction failure. The service recovers by using the sample candidate.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("extraction backend unavailable: {0}")]
    Unavailable(String),
    #[error("extraction returned malformed candidate data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Candidate used when no extraction backend is wired up or extraction fails.
pub fn sample_candidate() -> CandidateProfile {
    CandidateProfile {
        name: "Alex Smith".to_string(),
        role: "Senior DevOps Engineer".to_string(),
        job_family: JobFamily::Engineering,
        email: Some("alex.smith@example.com".to_string()),
        salary: 25_000.0,
        currency: "AED".to_string(),
        start_date: Some("2023-11-01".to_string()),
        location_country: "UAE".to_string(),
        citizenship: Some("UK".to_string()),
        equity_grant: true,
    }
}

/// Returns the same profile for every input. Stands in for a model-backed extractor.
#[derive(Debug, Clone)]
pub struct StaticCandidateExtractor {
    profile: CandidateProfile,
}

impl StaticCandidateExtractor {
    pub fn new(profile: CandidateProfile) -> Self {
        Self { profile }
    }
}

impl Default for StaticCandidateExtractor {
    fn default() -> Self {
        Self::new(sample_candidate())
    }
}

impl CandidateExtractor for StaticCandidateExtractor {
    fn extract(&self, _raw_text: &str) -> Result<CandidateProfile, ExtractionError> {
        Ok(self.profile.clone())
    }
}

/// Parses the input as the JSON object a structured-output model returns.
///
/// Code fences around the object are tolerated.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCandidateExtractor;

impl CandidateExtractor for JsonCandidateExtractor {
    fn extract(&self, raw_text: &str) -> Result<CandidateProfile, ExtractionError> {
        let trimmed = raw_text.trim();
        let body = trimmed
            .strip_prefix("```json")
            .or_else(|| trimmed.strip_prefix("```"))
            .and_then(|inner| inner.strip_suffix("```"))
            .unwrap_or(trimmed);

        Ok(serde_json::from_str(body.trim())?)
    }
}
