//! Country normalization, wage floors and visa lead-time checks.
//!
//! The engine is advisory: it never rejects a candidate. Missing or malformed
//! fields only suppress the checks that depend on them.

mod alerts;
mod checks;
mod config;
mod jurisdiction;

pub use alerts::{Alert, AlertKind, AlertSeverity};
pub use config::{
    ComplianceRules, WageRule, DEFAULT_VISA_PROCESSING_DAYS, PROBATION_DAYS,
    START_DATE_BUFFER_DAYS,
};
pub use jurisdiction::{CountryNormalizer, Jurisdiction};

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::domain::CandidateProfile;

/// Stateless evaluator applying a shared rule set to one candidate at a time.
#[derive(Debug, Clone)]
pub struct ComplianceEngine {
    rules: Arc<ComplianceRules>,
}

impl ComplianceEngine {
    pub fn new(rules: ComplianceRules) -> Self {
        Self::with_shared_rules(Arc::new(rules))
    }

    pub fn with_shared_rules(rules: Arc<ComplianceRules>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ComplianceRules {
        &self.rules
    }

    pub fn jurisdiction_for(&self, raw: Option<&str>) -> Jurisdiction {
        self.rules.normalize(raw)
    }

    /// Evaluate against the local calendar date.
    pub fn evaluate(&self, candidate: &CandidateProfile) -> ComplianceReport {
        self.evaluate_on(candidate, Local::now().date_naive())
    }

    /// Visa alerts first, then the wage alert.
    pub fn evaluate_on(&self, candidate: &CandidateProfile, today: NaiveDate) -> ComplianceReport {
        let mut alerts = checks::visa_alerts(candidate, &self.rules, today);
        alerts.extend(checks::wage_alert(candidate, &self.rules));

        ComplianceReport {
            alerts,
            projected_dates: ProjectedDates {
                probation_end: checks::probation_end(candidate, &self.rules),
            },
        }
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::new(ComplianceRules::standard())
    }
}

/// Key dates derived from the candidate's start date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedDates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probation_end: Option<NaiveDate>,
}

impl ProjectedDates {
    pub fn is_empty(&self) -> bool {
        self.probation_end.is_none()
    }
}

/// Output of a single evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub alerts: Vec<Alert>,
    pub projected_dates: ProjectedDates,
}

impl ComplianceReport {
    pub fn messages(&self) -> Vec<String> {
        self.alerts.iter().map(|alert| alert.message.clone()).collect()
    }

    pub fn is_clear(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn count_of(&self, kind: AlertKind) -> usize {
        self.alerts.iter().filter(|alert| alert.kind == kind).count()
    }
}
