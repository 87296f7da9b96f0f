use chrono::NaiveDate;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use super::compliance::{Alert, ProjectedDates};

pub const DEFAULT_CANDIDATE_NAME: &str = "Unknown Candidate";
pub const DEFAULT_ROLE: &str = "TBD";
pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_LOCATION: &str = "Unknown";

/// Format shared by candidate start dates and every projected date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw hiring notes pasted by a recruiter or hiring manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawJobDescription {
    pub raw_text: String,
}

/// Broad role grouping used to pick contract clauses and reporting buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobFamily {
    Sales,
    Engineering,
    Executive,
    #[default]
    General,
}

impl JobFamily {
    /// Lenient parse; anything unrecognized lands in `General`.
    pub fn from_label(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "sales" => Self::Sales,
            "engineering" => Self::Engineering,
            "executive" => Self::Executive,
            _ => Self::General,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            JobFamily::Sales => "Sales",
            JobFamily::Engineering => "Engineering",
            JobFamily::Executive => "Executive",
            JobFamily::General => "General",
        }
    }
}

/// Candidate snapshot produced by upstream extraction.
///
/// Every field is optional on the wire. Extraction output is unreliable, so
/// nulls, blanks and malformed amounts fall back to safe defaults instead of
/// rejecting the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    #[serde(deserialize_with = "deserialize_name")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_role")]
    pub role: String,
    #[serde(deserialize_with = "deserialize_job_family")]
    pub job_family: JobFamily,
    #[serde(deserialize_with = "deserialize_optional_text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "deserialize_amount")]
    pub salary: f64,
    #[serde(deserialize_with = "deserialize_currency")]
    pub currency: String,
    #[serde(deserialize_with = "deserialize_optional_text")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "deserialize_location")]
    pub location_country: String,
    #[serde(deserialize_with = "deserialize_optional_text")]
    pub citizenship: Option<String>,
    #[serde(deserialize_with = "deserialize_flag")]
    pub equity_grant: bool,
}

impl Default for CandidateProfile {
    fn default() -> Self {
        Self {
            name: DEFAULT_CANDIDATE_NAME.to_string(),
            role: DEFAULT_ROLE.to_string(),
            job_family: JobFamily::General,
            email: None,
            salary: 0.0,
            currency: DEFAULT_CURRENCY.to_string(),
            start_date: None,
            location_country: DEFAULT_LOCATION.to_string(),
            citizenship: None,
            equity_grant: false,
        }
    }
}

impl CandidateProfile {
    /// Start date as a calendar date. Unparseable values read as absent.
    pub fn parsed_start_date(&self) -> Option<NaiveDate> {
        self.start_date
            .as_deref()
            .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok())
    }

    /// Zero doubles as "not provided".
    pub fn has_salary(&self) -> bool {
        self.salary > 0.0
    }
}

/// Everything handed back to the caller after a single onboarding request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingPackage {
    pub candidate: CandidateProfile,
    pub generated_files: Vec<String>,
    pub compliance_alerts: Vec<String>,
    pub alerts: Vec<Alert>,
    pub projected_dates: ProjectedDates,
    pub jurisdiction_detected: String,
}

/// Any JSON value where text is expected. Non-strings are dropped.
#[derive(Deserialize)]
#[serde(untagged)]
enum TextInput {
    Text(String),
    Other(IgnoredAny),
}

fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TextInput::deserialize(deserializer)? {
        TextInput::Text(text) if !text.trim().is_empty() => Some(text),
        _ => None,
    })
}

fn text_or_default<'de, D>(deserializer: D, fallback: &str) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_optional_text(deserializer)?.unwrap_or_else(|| fallback.to_string()))
}

fn deserialize_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    text_or_default(deserializer, DEFAULT_CANDIDATE_NAME)
}

fn deserialize_role<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    text_or_default(deserializer, DEFAULT_ROLE)
}

fn deserialize_currency<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    text_or_default(deserializer, DEFAULT_CURRENCY)
}

fn deserialize_location<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    text_or_default(deserializer, DEFAULT_LOCATION)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagInput {
    Flag(bool),
    Text(String),
    Other(IgnoredAny),
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match FlagInput::deserialize(deserializer)? {
        FlagInput::Flag(flag) => flag,
        FlagInput::Text(text) => matches!(
            text.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "y"
        ),
        FlagInput::Other(_) => false,
    })
}

fn deserialize_job_family<'de, D>(deserializer: D) -> Result<JobFamily, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_optional_text(deserializer)?
        .as_deref()
        .map(JobFamily::from_label)
        .unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AmountInput {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match AmountInput::deserialize(deserializer)? {
        AmountInput::Number(value) => value,
        AmountInput::Text(text) => text
            .trim()
            .replace([',', '_', ' '], "")
            .parse::<f64>()
            .unwrap_or(0.0),
        AmountInput::Other(_) => 0.0,
    };

    Ok(if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    })
}
