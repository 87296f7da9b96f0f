use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::jurisdiction::{CountryNormalizer, Jurisdiction};

pub const DEFAULT_VISA_PROCESSING_DAYS: u32 = 30;
pub const START_DATE_BUFFER_DAYS: u32 = 7;
pub const PROBATION_DAYS: u32 = 180;

/// Statutory salary floor for a jurisdiction.
///
/// The currency is informational only. Candidate salaries are compared to
/// `minimum_annual_salary` as plain numbers without conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WageRule {
    pub minimum_annual_salary: f64,
    pub currency: String,
}

impl WageRule {
    pub fn new(minimum_annual_salary: f64, currency: impl Into<String>) -> Self {
        Self {
            minimum_annual_salary,
            currency: currency.into(),
        }
    }
}

/// Immutable rule set backing the compliance engine.
///
/// Built once at startup and shared read-only. Missing fields in a JSON rule
/// file fall back to the standard tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceRules {
    pub aliases: CountryNormalizer,
    pub minimum_wages: BTreeMap<Jurisdiction, WageRule>,
    pub visa_processing_days: BTreeMap<Jurisdiction, u32>,
    pub default_visa_processing_days: u32,
    pub start_date_buffer_days: u32,
    pub probation_days: u32,
}

impl ComplianceRules {
    pub fn standard() -> Self {
        let minimum_wages = BTreeMap::from([
            (Jurisdiction::Germany, WageRule::new(40_000.0, "EUR")),
            (Jurisdiction::UnitedKingdom, WageRule::new(25_000.0, "GBP")),
            (Jurisdiction::UnitedArabEmirates, WageRule::new(5_000.0, "AED")),
        ]);

        let visa_processing_days = BTreeMap::from([
            (Jurisdiction::Germany, 60),
            (Jurisdiction::UnitedKingdom, 45),
            (Jurisdiction::UnitedArabEmirates, 21),
        ]);

        Self {
            aliases: CountryNormalizer::standard(),
            minimum_wages,
            visa_processing_days,
            default_visa_processing_days: DEFAULT_VISA_PROCESSING_DAYS,
            start_date_buffer_days: START_DATE_BUFFER_DAYS,
            probation_days: PROBATION_DAYS,
        }
    }

    pub fn normalize(&self, raw: Option<&str>) -> Jurisdiction {
        self.aliases.normalize(raw)
    }

    pub fn wage_rule(&self, jurisdiction: &Jurisdiction) -> Option<&WageRule> {
        self.minimum_wages.get(jurisdiction)
    }

    pub fn visa_lead_days(&self, jurisdiction: &Jurisdiction) -> u32 {
        self.visa_processing_days
            .get(jurisdiction)
            .copied()
            .unwrap_or(self.default_visa_processing_days)
    }
}

impl Default for ComplianceRules {
    fn default() -> Self {
        Self::standard()
    }
}
