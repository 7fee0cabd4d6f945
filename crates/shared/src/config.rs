//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Report classification configuration.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

/// Balance sheet classification configuration.
///
/// The balance sheet splits assets into current/fixed and liabilities into
/// current/long-term. An asset whose name appears in `fixed_asset_labels`
/// is always fixed; otherwise classification falls back to the numeric
/// account-code thresholds below. Supplied as configuration so the rule
/// stays data-driven.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Account names always classified as fixed assets.
    #[serde(default = "default_fixed_asset_labels")]
    pub fixed_asset_labels: Vec<String>,
    /// Asset accounts with a numeric code below this are current assets.
    #[serde(default = "default_current_asset_code_limit")]
    pub current_asset_code_limit: u32,
    /// Liability accounts with a numeric code below this are current
    /// liabilities; the rest are long-term.
    #[serde(default = "default_current_liability_code_limit")]
    pub current_liability_code_limit: u32,
}

fn default_fixed_asset_labels() -> Vec<String> {
    vec![
        "Peralatan Outbond".to_string(),
        "Akumulasi Penyusutan".to_string(),
    ]
}

fn default_current_asset_code_limit() -> u32 {
    1500
}

fn default_current_liability_code_limit() -> u32 {
    2500
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            fixed_asset_labels: default_fixed_asset_labels(),
            current_asset_code_limit: default_current_asset_code_limit(),
            current_liability_code_limit: default_current_liability_code_limit(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SALDO").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_config_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.current_asset_code_limit, 1500);
        assert_eq!(config.current_liability_code_limit, 2500);
        assert_eq!(config.fixed_asset_labels.len(), 2);
        assert!(
            config
                .fixed_asset_labels
                .contains(&"Akumulasi Penyusutan".to_string())
        );
    }
}
