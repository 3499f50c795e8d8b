use super::{load_config, resolve_path};
use crate::analysis::{CensusEngine, OutputFormat, ReportFormatter};
use crate::errors::AppResult;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Decode a base64 subscription file and print every node line
#[derive(Args)]
pub struct DecodeCommand {
    /// Subscription file (overrides config.toml, default subscription_base64.txt)
    pub path: Option<PathBuf>,

    /// Output format (console or json)
    #[arg(long, default_value = "console", value_parser = ["console", "json"])]
    pub format: String,
}

impl DecodeCommand {
    pub fn run(&self) -> AppResult<()> {
        let config = load_config()?;
        let path = resolve_path(&self.path, &config);
        info!("Decoding node list from {}", path.display());

        let engine = CensusEngine::new(&path)?;
        let output =
            ReportFormatter::format_node_list(engine.nodes(), &OutputFormat::parse(&self.format))?;
        print!("{}", output);
        Ok(())
    }
}
