use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use validator::Validate;

/// Severity of a detected security event
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, EnumString, Display,
)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Canonical display order for severity breakdowns (most severe first)
    pub const CANONICAL_ORDER: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    /// Get numeric priority (lower is more urgent)
    pub fn priority(&self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::High => 1,
            Severity::Medium => 2,
            Severity::Low => 3,
        }
    }

    /// Check if severity requires immediate attention
    pub fn is_urgent(&self) -> bool {
        matches!(self, Severity::Critical | Severity::High)
    }
}

/// A detected security event, associated with zero or one agent
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Alert {
    /// Unique alert identifier (never reused after removal)
    pub id: u64,

    /// Detection type label (e.g., "Port Scan", "SYN Flood")
    #[validate(length(min = 1, max = 100))]
    pub alert_type: String,

    /// Severity level
    pub severity: Severity,

    /// Date the event was detected
    pub detected_at: NaiveDate,

    /// Identifier of the originating agent, if any
    pub agent_id: Option<String>,

    /// Source IP the detector flagged, if any
    pub source_ip: Option<String>,
}

impl Alert {
    /// Create a new alert record
    pub fn new(
        id: u64,
        alert_type: impl Into<String>,
        severity: Severity,
        detected_at: NaiveDate,
    ) -> Self {
        Self {
            id,
            alert_type: alert_type.into(),
            severity,
            detected_at,
            agent_id: None,
            source_ip: None,
        }
    }

    /// Attach the originating agent
    pub fn with_agent(mut self, agent_id: impl Into<String>) -> Self {
        self.agent_id = Some(agent_id.into());
        self
    }

    /// Attach the flagged source IP
    pub fn with_source_ip(mut self, source_ip: impl Into<String>) -> Self {
        self.source_ip = Some(source_ip.into());
        self
    }

    /// Check if alert is urgent
    pub fn is_urgent(&self) -> bool {
        self.severity.is_urgent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_alert_creation() {
        let alert = Alert::new(1, "Port Scan", Severity::High, date("2026-01-10"))
            .with_agent("004")
            .with_source_ip("203.0.113.42");

        assert_eq!(alert.id, 1);
        assert_eq!(alert.agent_id.as_deref(), Some("004"));
        assert!(alert.is_urgent());
    }

    #[test]
    fn test_severity_priority() {
        assert_eq!(Severity::Critical.priority(), 0);
        assert_eq!(Severity::Low.priority(), 3);
        assert!(Severity::High.is_urgent());
        assert!(!Severity::Medium.is_urgent());
    }

    #[test]
    fn test_severity_labels() {
        assert_eq!(Severity::Critical.to_string(), "Critical");
        assert_eq!("Medium".parse::<Severity>().unwrap(), Severity::Medium);
        assert!("Severe".parse::<Severity>().is_err());
    }

    #[test]
    fn test_canonical_order_is_most_severe_first() {
        let priorities: Vec<u8> = Severity::CANONICAL_ORDER.iter().map(|s| s.priority()).collect();
        assert_eq!(priorities, vec![0, 1, 2, 3]);
    }
}
