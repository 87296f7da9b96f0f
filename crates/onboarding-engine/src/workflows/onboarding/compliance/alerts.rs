use serde::{Deserialize, Serialize};

/// Category of an advisory alert. None of them block processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    /// Informational: a follow-up workflow (e.g. sponsorship) must start.
    WorkflowTrigger,
    /// Malformed but recoverable input.
    DataError,
    /// Substantive policy concern.
    ComplianceRisk,
}

impl AlertKind {
    pub const fn label(self) -> &'static str {
        match self {
            AlertKind::WorkflowTrigger => "WORKFLOW_TRIGGER",
            AlertKind::DataError => "DATA_ERROR",
            AlertKind::ComplianceRisk => "COMPLIANCE_RISK",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertSeverity {
    High,
    Critical,
}

impl AlertSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            AlertSeverity::High => "HIGH",
            AlertSeverity::Critical => "CRITICAL",
        }
    }
}

/// Advisory alert produced by a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub message: String,
}

impl Alert {
    pub fn new(kind: AlertKind, severity: AlertSeverity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
        }
    }
}
