use chrono::{Days, NaiveDate};

use super::super::domain::{CandidateProfile, DATE_FORMAT};
use super::alerts::{Alert, AlertKind, AlertSeverity};
use super::config::ComplianceRules;

pub(crate) fn visa_alerts(
    candidate: &CandidateProfile,
    rules: &ComplianceRules,
    today: NaiveDate,
) -> Vec<Alert> {
    let citizenship = rules.normalize(candidate.citizenship.as_deref());
    let location = rules.normalize(Some(candidate.location_country.as_str()));

    if citizenship.is_unknown() || location.is_unknown() {
        return Vec::new();
    }

    // Local hire wins over every date check.
    if citizenship == location {
        return Vec::new();
    }

    let raw_citizenship = candidate.citizenship.as_deref().unwrap_or_default();
    let mut alerts = vec![Alert::new(
        AlertKind::WorkflowTrigger,
        AlertSeverity::High,
        format!(
            "Visa sponsorship required: {} citizen hiring in {}.",
            raw_citizenship, candidate.location_country
        ),
    )];

    let Some(start_date) = candidate.parsed_start_date() else {
        return alerts;
    };

    let days_until_start = start_date.signed_duration_since(today).num_days();
    let lead_days = rules.visa_lead_days(&location);

    if days_until_start < 0 {
        alerts.push(Alert::new(
            AlertKind::DataError,
            AlertSeverity::High,
            format!(
                "Invalid start date: {} is in the past. Please check the year.",
                start_date.format(DATE_FORMAT)
            ),
        ));
    } else if days_until_start < i64::from(lead_days) {
        let suggested = suggested_start_date(rules, lead_days, today)
            .map(|date| date.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| "unavailable".to_string());
        alerts.push(Alert::new(
            AlertKind::ComplianceRisk,
            AlertSeverity::Critical,
            format!(
                "Start date risk: {} days is too short for {} visa processing (avg {} days). Suggested start: {}",
                days_until_start, candidate.location_country, lead_days, suggested
            ),
        ));
    }

    alerts
}

pub(crate) fn suggested_start_date(
    rules: &ComplianceRules,
    lead_days: u32,
    today: NaiveDate,
) -> Option<NaiveDate> {
    let offset = u64::from(lead_days) + u64::from(rules.start_date_buffer_days);
    today.checked_add_days(Days::new(offset))
}

pub(crate) fn wage_alert(candidate: &CandidateProfile, rules: &ComplianceRules) -> Option<Alert> {
    if !candidate.has_salary() {
        return None;
    }

    let location = rules.normalize(Some(candidate.location_country.as_str()));
    let rule = rules.wage_rule(&location)?;

    if rule.currency != candidate.currency.trim().to_ascii_uppercase() {
        tracing::debug!(
            jurisdiction = %location,
            rule_currency = %rule.currency,
            candidate_currency = %candidate.currency,
            "comparing salary across currencies without conversion"
        );
    }

    if candidate.salary < rule.minimum_annual_salary {
        return Some(Alert::new(
            AlertKind::ComplianceRisk,
            AlertSeverity::High,
            format!(
                "Low salary warning: {:.2} is below the {} minimum of {:.2}.",
                candidate.salary,
                location.display_name(),
                rule.minimum_annual_salary
            ),
        ));
    }

    None
}

pub(crate) fn probation_end(candidate: &CandidateProfile, rules: &ComplianceRules) -> Option<NaiveDate> {
    candidate
        .parsed_start_date()?
        .checked_add_days(Days::new(u64::from(rules.probation_days)))
}
