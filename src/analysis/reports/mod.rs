//! Report formatting and output generation
//!
//! Provides formatting for census results via the [`ReportFormatter`] facade.
//! Supports Console and JSON output formats.

pub mod summary;
pub mod utils;

use crate::errors::AppResult;
use crate::types::{NodeList, SubscriptionSummary};

/// Output format options for census reports
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
}

impl OutputFormat {
    /// Parse output format string, falling back to console
    pub fn parse(format_str: &str) -> Self {
        match format_str.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Console,
        }
    }
}

/// Facade for all report formatting operations
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn format_summary(s: &SubscriptionSummary, f: &OutputFormat) -> AppResult<String> {
        summary::format_summary(s, f)
    }
    pub fn format_node_list(n: &NodeList, f: &OutputFormat) -> AppResult<String> {
        summary::format_node_list(n, f)
    }
}
