//! Normalization of raw upstream records into canonical shapes
//!
//! The console historically shipped two record schemas: string ids with
//! English labels, and numeric ids with French labels. The string-id /
//! English-label shape is canonical; this module folds the legacy labels
//! into it. Unknown labels are validation errors, never silently accepted
//! strings, since guessing a status or severity would corrupt downstream
//! counts.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::config::ConsoleConfig;
use crate::error::{AppError, Result};
use crate::models::{Agent, AgentStatus, Alert, Severity};

/// Raw agent record as received from upstream
#[derive(Debug, Clone, Deserialize)]
pub struct RawAgent {
    pub id: String,
    pub name: String,
    #[serde(alias = "ip")]
    pub ip_address: String,
    /// Space-joined group list, as the upstream table renders it
    #[serde(default)]
    pub groups: String,
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub node: String,
    #[serde(default)]
    pub version: String,
    pub status: String,
}

/// Raw alert record as received from upstream
#[derive(Debug, Clone, Deserialize)]
pub struct RawAlert {
    pub id: u64,
    #[serde(alias = "type")]
    pub alert_type: String,
    pub severity: String,
    #[serde(alias = "date")]
    pub detected_at: String,
    #[serde(default)]
    pub agent_id: Option<String>,
    #[serde(default)]
    pub source_ip: Option<String>,
}

/// Folds raw upstream records into validated canonical records
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    accept_legacy_labels: bool,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            accept_legacy_labels: true,
        }
    }
}

impl Normalizer {
    /// Reject legacy French labels instead of folding them
    pub fn strict() -> Self {
        Self {
            accept_legacy_labels: false,
        }
    }

    /// Build from configuration
    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self {
            accept_legacy_labels: config.display.legacy_labels,
        }
    }

    /// Normalize a single agent record
    pub fn agent(&self, raw: RawAgent) -> Result<Agent> {
        let status = self.status(&raw.status)?;

        let agent = Agent {
            id: raw.id,
            name: raw.name,
            ip_address: raw.ip_address,
            groups: raw
                .groups
                .split_whitespace()
                .map(|g| g.to_string())
                .collect(),
            os: raw.os,
            node: raw.node,
            version: raw.version,
            status,
        };
        agent.validate()?;

        tracing::trace!(agent_id = %agent.id, status = %agent.status, "normalized agent record");
        Ok(agent)
    }

    /// Normalize a single alert record
    pub fn alert(&self, raw: RawAlert) -> Result<Alert> {
        let severity = self.severity(&raw.severity)?;
        let detected_at: NaiveDate = raw.detected_at.parse().map_err(|_| {
            AppError::Validation(format!(
                "alert {}: invalid detection date '{}'",
                raw.id, raw.detected_at
            ))
        })?;

        let alert = Alert {
            id: raw.id,
            alert_type: raw.alert_type,
            severity,
            detected_at,
            agent_id: raw.agent_id,
            source_ip: raw.source_ip,
        };
        alert.validate()?;

        tracing::trace!(alert_id = alert.id, severity = %alert.severity, "normalized alert record");
        Ok(alert)
    }

    /// Normalize an ordered batch of agent records
    pub fn agents(&self, raw: Vec<RawAgent>) -> Result<Vec<Agent>> {
        raw.into_iter().map(|r| self.agent(r)).collect()
    }

    /// Normalize an ordered batch of alert records
    pub fn alerts(&self, raw: Vec<RawAlert>) -> Result<Vec<Alert>> {
        raw.into_iter().map(|r| self.alert(r)).collect()
    }

    fn status(&self, label: &str) -> Result<AgentStatus> {
        let folded = label.trim().to_lowercase();
        let status = match folded.as_str() {
            "active" => AgentStatus::Active,
            "inactive" => AgentStatus::Inactive,
            "disconnected" => AgentStatus::Disconnected,
            "actif" | "actifs" if self.accept_legacy_labels => AgentStatus::Active,
            "inactif" | "inactifs" if self.accept_legacy_labels => AgentStatus::Inactive,
            "déconnecté" | "déconnectés" if self.accept_legacy_labels => {
                AgentStatus::Disconnected
            }
            _ => {
                return Err(AppError::Validation(format!(
                    "unknown agent status label '{}'",
                    label
                )))
            }
        };
        Ok(status)
    }

    fn severity(&self, label: &str) -> Result<Severity> {
        let folded = label.trim().to_lowercase();
        let severity = match folded.as_str() {
            "low" => Severity::Low,
            "medium" => Severity::Medium,
            "high" => Severity::High,
            "critical" => Severity::Critical,
            "faible" if self.accept_legacy_labels => Severity::Low,
            "moyen" | "moyenne" if self.accept_legacy_labels => Severity::Medium,
            "élevé" | "élevée" if self.accept_legacy_labels => Severity::High,
            "critique" if self.accept_legacy_labels => Severity::Critical,
            _ => {
                return Err(AppError::Validation(format!(
                    "unknown severity label '{}'",
                    label
                )))
            }
        };
        Ok(severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_agent(status: &str) -> RawAgent {
        RawAgent {
            id: "004".to_string(),
            name: "asterix-premises-production-sen".to_string(),
            ip_address: "10.10.50.13".to_string(),
            groups: "linux-agents default".to_string(),
            os: "Ubuntu 22.04.5 LTS".to_string(),
            node: "manager-master-0".to_string(),
            version: "v4.14.1".to_string(),
            status: status.to_string(),
        }
    }

    fn raw_alert(severity: &str, date: &str) -> RawAlert {
        RawAlert {
            id: 2,
            alert_type: "SYN Flood".to_string(),
            severity: severity.to_string(),
            detected_at: date.to_string(),
            agent_id: Some("003".to_string()),
            source_ip: None,
        }
    }

    #[test]
    fn test_canonical_labels_normalize() {
        let normalizer = Normalizer::default();

        let agent = normalizer.agent(raw_agent("Active")).unwrap();
        assert_eq!(agent.status, AgentStatus::Active);
        assert_eq!(agent.groups, vec!["linux-agents", "default"]);

        let alert = normalizer.alert(raw_alert("Critical", "2026-01-11")).unwrap();
        assert_eq!(alert.severity, Severity::Critical);
    }

    #[test]
    fn test_legacy_labels_fold_into_canonical() {
        let normalizer = Normalizer::default();

        assert_eq!(
            normalizer.agent(raw_agent("Déconnecté")).unwrap().status,
            AgentStatus::Disconnected
        );
        assert_eq!(
            normalizer.alert(raw_alert("Élevée", "2026-01-10")).unwrap().severity,
            Severity::High
        );
        assert_eq!(
            normalizer.alert(raw_alert("Critique", "2026-01-11")).unwrap().severity,
            Severity::Critical
        );
    }

    #[test]
    fn test_upstream_case_variants_accepted() {
        // The detector pipeline reports severities in uppercase.
        let normalizer = Normalizer::default();
        assert_eq!(
            normalizer.alert(raw_alert("HIGH", "2026-01-10")).unwrap().severity,
            Severity::High
        );
    }

    #[test]
    fn test_strict_normalizer_rejects_legacy_labels() {
        let normalizer = Normalizer::strict();

        let err = normalizer.agent(raw_agent("Actif")).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");

        assert!(normalizer.alert(raw_alert("Critique", "2026-01-11")).is_err());
        assert!(normalizer.alert(raw_alert("Critical", "2026-01-11")).is_ok());
    }

    #[test]
    fn test_unknown_labels_rejected() {
        let normalizer = Normalizer::default();

        assert!(normalizer.agent(raw_agent("Error")).is_err());
        assert!(normalizer.alert(raw_alert("Severe", "2026-01-11")).is_err());
    }

    #[test]
    fn test_invalid_date_rejected() {
        let normalizer = Normalizer::default();
        let err = normalizer.alert(raw_alert("High", "11/01/2026")).unwrap_err();
        assert!(err.to_string().contains("invalid detection date"));
    }

    #[test]
    fn test_batch_normalization_preserves_order() {
        let normalizer = Normalizer::default();
        let mut first = raw_agent("Active");
        first.id = "003".to_string();
        let second = raw_agent("Inactif");

        let agents = normalizer.agents(vec![first, second]).unwrap();
        assert_eq!(agents[0].id, "003");
        assert_eq!(agents[1].id, "004");
        assert_eq!(agents[1].status, AgentStatus::Inactive);
    }
}
