use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use validator::Validate;

/// Connection status of a monitored endpoint
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, EnumString, Display,
)]
pub enum AgentStatus {
    Active,
    Inactive,
    Disconnected,
}

impl AgentStatus {
    /// Canonical display order for status breakdowns, independent of data
    /// arrival order
    pub const CANONICAL_ORDER: [AgentStatus; 3] = [
        AgentStatus::Active,
        AgentStatus::Inactive,
        AgentStatus::Disconnected,
    ];

    /// Check if the agent is currently reporting
    pub fn is_online(&self) -> bool {
        matches!(self, AgentStatus::Active)
    }
}

/// A monitored endpoint tracked by the console
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Agent {
    /// Unique agent identifier (never reused after removal)
    pub id: String,

    /// Display name (hostname)
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// IP address
    #[validate(length(min = 7, max = 45))]
    pub ip_address: String,

    /// Group memberships
    pub groups: Vec<String>,

    /// Operating system label
    pub os: String,

    /// Cluster node the agent reports to
    pub node: String,

    /// Installed agent version
    pub version: String,

    /// Current status
    pub status: AgentStatus,
}

impl Agent {
    /// Create a new agent record
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        ip_address: impl Into<String>,
        status: AgentStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ip_address: ip_address.into(),
            groups: Vec::new(),
            os: String::new(),
            node: String::new(),
            version: String::new(),
            status,
        }
    }

    /// Set group memberships
    pub fn with_groups(mut self, groups: Vec<impl Into<String>>) -> Self {
        self.groups = groups.into_iter().map(|g| g.into()).collect();
        self
    }

    /// Set the operating system label
    pub fn with_os(mut self, os: impl Into<String>) -> Self {
        self.os = os.into();
        self
    }

    /// Set the cluster node
    pub fn with_node(mut self, node: impl Into<String>) -> Self {
        self.node = node.into();
        self
    }

    /// Set the agent version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}
