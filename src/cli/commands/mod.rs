use crate::config::AppConfig;
use crate::errors::AppResult;
use std::path::PathBuf;

pub mod decode;
pub mod summarise;

/// Load configuration; failures surface as `AppError::Config`
fn load_config() -> AppResult<AppConfig> {
    Ok(AppConfig::load()?)
}

/// Subscription path from CLI argument or config file
fn resolve_path(cli_path: &Option<PathBuf>, config: &AppConfig) -> PathBuf {
    cli_path
        .clone()
        .unwrap_or_else(|| config.paths.subscription_file.clone())
}
