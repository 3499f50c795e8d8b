use super::{load_config, resolve_path};
use crate::analysis::{analyse_subscription, OutputFormat, ReportFormatter};
use crate::config::AppConfig;
use crate::errors::AppResult;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Summarise a base64 subscription file
#[derive(Args)]
pub struct SummariseCommand {
    /// Subscription file (overrides config.toml, default subscription_base64.txt)
    pub path: Option<PathBuf>,

    /// Number of nodes to preview (overrides config.toml, default 5)
    #[arg(long)]
    pub preview: Option<usize>,

    /// Output format (console or json)
    #[arg(long, default_value = "console", value_parser = ["console", "json"])]
    pub format: String,

    /// Count by raw scheme prefix or by protocol family
    #[arg(long, default_value = "scheme", value_parser = ["scheme", "family"])]
    pub group_by: String,
}

impl Default for SummariseCommand {
    fn default() -> Self {
        Self {
            path: None,
            preview: None,
            format: "console".to_string(),
            group_by: "scheme".to_string(),
        }
    }
}

impl SummariseCommand {
    pub fn run(&self) -> AppResult<()> {
        let config = load_config()?;
        // Rendered in full before printing so failures leave stdout empty
        let output = self.render(&config)?;
        print!("{}", output);
        Ok(())
    }

    /// Run the census and format the report without printing it
    pub fn render(&self, config: &AppConfig) -> AppResult<String> {
        let path = resolve_path(&self.path, config);
        let preview_limit = self.preview.unwrap_or(config.report.preview_limit);
        info!(
            "Summarising {} (preview {}, group by {})",
            path.display(),
            preview_limit,
            self.group_by
        );

        let mut summary = analyse_subscription(&path, preview_limit)?;
        if self.group_by == "family" {
            summary = summary.grouped_by_family();
        }

        ReportFormatter::format_summary(&summary, &OutputFormat::parse(&self.format))
    }
}
