//! Rendering filtered views for the table export actions

use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::{Agent, Alert};

/// Export format for table views
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// Get file extension for this format
    pub fn extension(&self) -> &str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    /// Get MIME type for this format
    pub fn mime_type(&self) -> &str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }
}

/// Records that can be rendered as a CSV row
pub trait CsvRecord {
    /// Column headers, matching the console table
    fn headers() -> &'static [&'static str];

    /// Field values for one row
    fn row(&self) -> Vec<String>;
}

impl CsvRecord for Agent {
    fn headers() -> &'static [&'static str] {
        &["id", "name", "ip_address", "groups", "os", "node", "version", "status"]
    }

    fn row(&self) -> Vec<String> {
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

impl CsvRecord for Alert {
    fn headers() -> &'static [&'static str] {
        &["id", "alert_type", "severity", "detected_at", "agent_id", "source_ip"]
    }

    fn row(&self) -> Vec<String> {
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

/// Renders filtered table views to an export format
pub struct ViewExporter;

impl ViewExporter {
    /// Render a view (e.g., the output of a search filter) to `format`
    pub fn export<R>(records: &[&R], format: ExportFormat) -> Result<String>
    where
        R: Serialize + CsvRecord,
    {
        match format {
            ExportFormat::Json => Self::export_json(records),
            ExportFormat::Csv => Self::export_csv(records),
        }
    }

    fn export_json<R: Serialize>(records: &[&R]) -> Result<String> {
        serde_json::to_string_pretty(records)
            .map_err(|e| AppError::Serialization(format!("JSON export failed: {}", e)))
    }

    fn export_csv<R: CsvRecord>(records: &[&R]) -> Result<String> {
        let mut out = String::new();

        out.push_str(&R::headers().join(","));
        out.push('\n');

        for record in records {
            let row: Vec<String> = record
                .row()
                .iter()
                .map(|field| Self::escape_csv(field))
                .collect();
            out.push_str(&row.join(","));
            out.push('\n');
        }

        Ok(out)
    }

    /// Quote a field when it contains separators, quotes, or newlines
    fn escape_csv(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }
}
