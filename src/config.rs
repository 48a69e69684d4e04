use serde::{Deserialize, Serialize};

/// Console core configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Display configuration
    #[serde(default)]
    pub display: DisplayConfig,
}

impl ConsoleConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config/default.toml".to_string());

        config::Config::builder()
            // Start with default values
            .add_source(config::File::from_str(
                include_str!("../config/default.toml"),
                config::FileFormat::Toml,
            ))
            // Override with config file if it exists
            .add_source(config::File::with_name(&config_path).required(false))
            // Override with environment variables (prefix: NETGUARD)
            .add_source(
                config::Environment::with_prefix("NETGUARD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            observability: ObservabilityConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Rows per page shown in the table footer (decorative; the core does
    /// not compute pages)
    #[serde(default = "default_rows_per_page")]
    pub rows_per_page: usize,

    /// Accept legacy French status/severity labels at the provider boundary
    #[serde(default = "default_true")]
    pub legacy_labels: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            rows_per_page: default_rows_per_page(),
            legacy_labels: true,
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_rows_per_page() -> usize {
    10
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = ConsoleConfig::default();
        assert_eq!(config.observability.log_level, "info");
        assert!(!config.observability.json_logs);
        assert_eq!(config.display.rows_per_page, 10);
        assert!(config.display.legacy_labels);
    }

    #[test]
    fn test_bundled_defaults_deserialize() {
        let config: ConsoleConfig = config::Config::builder()
            .add_source(config::File::from_str(
                include_str!("../config/default.toml"),
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.display.rows_per_page, 10);
    }
}
