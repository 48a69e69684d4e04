//! Derived dashboard summary: KPI tiles, status and severity breakdowns

use serde::Serialize;

use crate::aggregation::{AggregationEngine, CategoryCount};
use crate::error::Result;
use crate::models::{Agent, AgentStatus, Alert, Severity};

/// Overall console health derived from urgent alert volume
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ConsoleHealth {
    Stable,
    Degraded,
    Critical,
}

/// One proportional severity bar
#[derive(Debug, Clone, Serialize)]
pub struct SeverityBar {
    pub severity: Severity,
    pub count: u64,
    /// Share of all alerts in `[0, 1]`; 0 when the alert snapshot is empty
    pub ratio: f64,
}

/// KPI tiles and distributions for a pair of record snapshots
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    /// Total monitored agents
    pub total_agents: u64,

    /// Agents currently reporting
    pub active_agents: u64,

    /// Total detected alerts
    pub total_alerts: u64,

    /// High and Critical alerts
    pub urgent_alerts: u64,

    /// Agents per status, canonical order
    pub status_distribution: Vec<CategoryCount<AgentStatus>>,

    /// Alerts per severity, canonical order
    pub severity_distribution: Vec<CategoryCount<Severity>>,

    /// Proportional bars backing the severity panel
    pub severity_bars: Vec<SeverityBar>,

    /// Overall health indicator
    pub health: ConsoleHealth,
}

impl DashboardSummary {
    /// Derive the summary from a pair of immutable snapshots.
    ///
    /// Pure and synchronous; neither snapshot is mutated or retained.
    pub fn generate(agents: &[Agent], alerts: &[Alert]) -> Result<Self> {
        let status_distribution = AggregationEngine::count_by(agents, |a| a.status)?;
        let severity_distribution = AggregationEngine::count_by(alerts, |a| a.severity)?;

        let active_agents = status_distribution
            .iter()
            .find(|c| c.category == AgentStatus::Active)
            .map(|c| c.count)
            .unwrap_or(0);

        let urgent_alerts = severity_distribution
            .iter()
            .filter(|c| c.category.is_urgent())
            .map(|c| c.count)
            .sum();

        let total_alerts = alerts.len() as u64;
        let severity_bars = severity_distribution
            .iter()
            .map(|c| SeverityBar {
                severity: c.category,
                count: c.count,
                ratio: if total_alerts == 0 {
                    0.0
                } else {
                    c.count as f64 / total_alerts as f64
                },
            })
            .collect();

        let health = Self::health_of(&severity_distribution);

        tracing::debug!(
            agents = agents.len(),
            alerts = alerts.len(),
            urgent = urgent_alerts,
            health = ?health,
            "generated dashboard summary"
        );

        Ok(Self {
            total_agents: agents.len() as u64,
            active_agents,
            total_alerts,
            urgent_alerts,
            status_distribution,
            severity_distribution,
            severity_bars,
            health,
        })
    }

    fn health_of(severity_distribution: &[CategoryCount<Severity>]) -> ConsoleHealth {
        let count_of = |severity: Severity| {
            severity_distribution
                .iter()
                .find(|c| c.category == severity)
                .map(|c| c.count)
                .unwrap_or(0)
        };

        if count_of(Severity::Critical) > 0 {
            ConsoleHealth::Critical
        } else if count_of(Severity::High) > 0 {
            ConsoleHealth::Degraded
        } else {
            ConsoleHealth::Stable
        }
    }
}
