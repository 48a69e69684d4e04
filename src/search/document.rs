//! Flattening records into searchable haystacks

use crate::models::{Agent, Alert};

/// Trait for records the free-text filter can match against
pub trait SearchDocument {
    /// Field values in display order. Enum fields contribute their label,
    /// set-typed fields are space-joined, missing optional fields contribute
    /// an empty string.
    fn field_values(&self) -> Vec<String>;

    /// Lower-cased concatenation of every field value
    fn haystack(&self) -> String {
        self.field_values().join(" ").to_lowercase()
    }
}

impl SearchDocument for Agent {
    fn field_values(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.ip_address.clone(),
            self.groups.join(" "),
            self.os.clone(),
            self.node.clone(),
            self.version.clone(),
            self.status.to_string(),
        ]
    }
}

impl SearchDocument for Alert {
    fn field_values(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.alert_type.clone(),
            self.severity.to_string(),
            self.detected_at.to_string(),
            self.agent_id.clone().unwrap_or_default(),
            self.source_ip.clone().unwrap_or_default(),
        ]
    }
}
