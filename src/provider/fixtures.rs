//! Static fixture snapshots standing in for the future API client
//!
//! The fixture data mirrors what the console tables currently display,
//! including two alerts still carrying legacy French severity labels, so the
//! provider's normalization path is exercised the same way a real import
//! would exercise it.

use once_cell::sync::Lazy;

use crate::config::ConsoleConfig;
use crate::error::Result;
use crate::models::{Agent, Alert};
use crate::provider::raw::{Normalizer, RawAgent, RawAlert};
use crate::provider::RecordProvider;

static RAW_AGENTS: Lazy<Vec<RawAgent>> = Lazy::new(|| {
    vec![
        RawAgent {
            id: "003".to_string(),
            name: "wazuh-premises-production-civ".to_string(),
            ip_address: "192.168.3.21".to_string(),
            groups: "linux-agents default".to_string(),
            os: "Ubuntu 24.04.3 LTS".to_string(),
            node: "manager-master-0".to_string(),
            version: "v4.12.0".to_string(),
            status: "Active".to_string(),
        },
        RawAgent {
            id: "004".to_string(),
            name: "asterix-premises-production-sen".to_string(),
            ip_address: "10.10.50.13".to_string(),
            groups: "linux-agents".to_string(),
            os: "Ubuntu 22.04.5 LTS".to_string(),
            node: "manager-master-0".to_string(),
            version: "v4.14.1".to_string(),
            status: "Active".to_string(),
        },
        RawAgent {
            id: "008".to_string(),
            name: "bastion-premises-production-sen".to_string(),
            ip_address: "10.10.60.13".to_string(),
            groups: "windows-agents".to_string(),
            os: "Microsoft Windows 11 Pro".to_string(),
            node: "manager-master-0".to_string(),
            version: "v4.14.1".to_string(),
            status: "Active".to_string(),
        },
    ]
});

static RAW_ALERTS: Lazy<Vec<RawAlert>> = Lazy::new(|| {
    vec![
        RawAlert {
            id: 1,
            alert_type: "Port Scan".to_string(),
            severity: "Élevée".to_string(), // legacy import
            detected_at: "2026-01-10".to_string(),
            agent_id: Some("004".to_string()),
            source_ip: Some("203.0.113.42".to_string()),
        },
        RawAlert {
            id: 2,
            alert_type: "SYN Flood".to_string(),
            severity: "Critique".to_string(), // legacy import
            detected_at: "2026-01-11".to_string(),
            agent_id: Some("003".to_string()),
            source_ip: Some("198.51.100.7".to_string()),
        },
        RawAlert {
            id: 3,
            alert_type: "ICMP Flood".to_string(),
            severity: "Medium".to_string(),
            detected_at: "2026-01-12".to_string(),
            agent_id: Some("008".to_string()),
            source_ip: Some("203.0.113.88".to_string()),
        },
        RawAlert {
            id: 4,
            alert_type: "Network Scan".to_string(),
            severity: "Low".to_string(),
            detected_at: "2026-01-12".to_string(),
            agent_id: None,
            source_ip: None,
        },
        RawAlert {
            id: 5,
            alert_type: "Suspicious Connection".to_string(),
            severity: "Medium".to_string(),
            detected_at: "2026-01-13".to_string(),
            agent_id: Some("008".to_string()),
            source_ip: Some("192.0.2.15".to_string()),
        },
    ]
});

/// Provider backed by the hardcoded console fixtures
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureProvider {
    normalizer: Normalizer,
}

impl FixtureProvider {
    /// Create a provider with the given normalizer
    pub fn new(normalizer: Normalizer) -> Self {
        Self { normalizer }
    }

    /// Create a provider honoring the configured label policy
    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self::new(Normalizer::from_config(config))
    }
}

impl RecordProvider for FixtureProvider {
    fn agents(&self) -> Result<Vec<Agent>> {
        self.normalizer.agents(RAW_AGENTS.clone())
    }

    fn alerts(&self) -> Result<Vec<Alert>> {
        self.normalizer.alerts(RAW_ALERTS.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgentStatus, Severity};

    #[test]
    fn test_fixture_agents_normalize() {
        let provider = FixtureProvider::default();
        let agents = provider.agents().unwrap();

        assert_eq!(agents.len(), 3);
        assert_eq!(agents[0].id, "003");
        assert!(agents.iter().all(|a| a.status == AgentStatus::Active));
    }

    #[test]
    fn test_fixture_alerts_fold_legacy_severities() {
        let provider = FixtureProvider::default();
        let alerts = provider.alerts().unwrap();

        assert_eq!(alerts.len(), 5);
        assert_eq!(alerts[0].severity, Severity::High);
        assert_eq!(alerts[1].severity, Severity::Critical);
        assert!(alerts[3].agent_id.is_none());
    }

    #[test]
    fn test_fixture_ids_unique() {
        let provider = FixtureProvider::default();

        let agents = provider.agents().unwrap();
        let mut agent_ids: Vec<&str> = agents.iter().map(|a| a.id.as_str()).collect();
        agent_ids.sort_unstable();
        agent_ids.dedup();
        assert_eq!(agent_ids.len(), agents.len());

        let alerts = provider.alerts().unwrap();
        let mut alert_ids: Vec<u64> = alerts.iter().map(|a| a.id).collect();
        alert_ids.sort_unstable();
        alert_ids.dedup();
        assert_eq!(alert_ids.len(), alerts.len());
    }

    #[test]
    fn test_strict_provider_rejects_legacy_fixture_rows() {
        let provider = FixtureProvider::new(Normalizer::strict());

        assert!(provider.agents().is_ok());
        assert!(provider.alerts().is_err());
    }
}
