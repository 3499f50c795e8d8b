use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Default subscription file, looked up in the current directory
pub const DEFAULT_SUBSCRIPTION_FILE: &str = "subscription_base64.txt";

/// Default number of nodes shown in the report preview
pub const DEFAULT_PREVIEW_LIMIT: usize = 5;

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    pub subscription_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub preview_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            paths: PathsConfig {
                subscription_file: PathBuf::from(DEFAULT_SUBSCRIPTION_FILE),
            },
            report: ReportConfig {
                preview_limit: DEFAULT_PREVIEW_LIMIT,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration using `config_name` as the (optional) TOML file stem
    ///
    /// Only `<config_name>.toml` is read; other formats with the same stem are ignored.
    pub fn load_from(config_name: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("paths.subscription_file", DEFAULT_SUBSCRIPTION_FILE)?
            .set_default("report.preview_limit", DEFAULT_PREVIEW_LIMIT as i64)?
            .add_source(File::new(config_name, FileFormat::Toml).required(false))
            // CENSUS_PATHS__SUBSCRIPTION_FILE, CENSUS_REPORT__PREVIEW_LIMIT
            .add_source(
                config::Environment::with_prefix("CENSUS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // Short-form overrides
        if let Ok(path) = env::var("CENSUS_SUBSCRIPTION_FILE") {
            app_config.paths.subscription_file = PathBuf::from(path);
        }

        if let Ok(limit) = env::var("CENSUS_PREVIEW_LIMIT") {
            app_config.report.preview_limit = limit.trim().parse().map_err(|_| {
                ConfigError::Message(format!(
                    "CENSUS_PREVIEW_LIMIT must be a non-negative integer, got '{}'",
                    limit
                ))
            })?;
        }

        Ok(app_config)
    }
}
